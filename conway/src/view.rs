// view.rs - What a renderer needs to draw the grid and map clicks back to cells

use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};

use crate::grid::{CellState, Grid, GridConfig};

pub const CELL_WIDTH: f32 = 15.0;
pub const CELL_HEIGHT: f32 = 15.0;
pub const MARGIN: f32 = 3.0;

/// Two-tone cell colors plus the background that shows through the margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub live: Color32,
    pub dead: Color32,
    pub background: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            live: Color32::GREEN,
            dead: Color32::WHITE,
            background: Color32::BLUE,
        }
    }
}

impl Palette {
    pub fn color(&self, cell: CellState) -> Color32 {
        match cell {
            CellState::Alive => self.live,
            CellState::Dead => self.dead,
        }
    }
}

/// Screen geometry of the grid. Row 0 is drawn at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    pub config: GridConfig,
    pub cell_size: Vec2,
    pub margin: f32,
}

impl CellLayout {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            cell_size: vec2(CELL_WIDTH, CELL_HEIGHT),
            margin: MARGIN,
        }
    }

    fn pitch(&self) -> Vec2 {
        self.cell_size + Vec2::splat(self.margin)
    }

    /// Size of the whole playing area including the outer margin.
    pub fn screen_size(&self) -> Vec2 {
        let pitch = self.pitch();
        vec2(
            pitch.x * self.config.cols as f32 + self.margin,
            pitch.y * self.config.rows as f32 + self.margin,
        )
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let pitch = self.pitch();
        let min = pos2(
            col as f32 * pitch.x + self.margin,
            row as f32 * pitch.y + self.margin,
        );
        Rect::from_min_size(min, self.cell_size)
    }

    /// Maps a pointer position (relative to the top-left of the playing area)
    /// to a cell. A click in the margin belongs to the cell after it, as with
    /// integer division by the pitch. Positions off the grid give `None`.
    pub fn cell_at(&self, pos: Pos2) -> Option<(usize, usize)> {
        if !(pos.x >= 0.0 && pos.y >= 0.0) {
            return None;
        }
        let pitch = self.pitch();
        let col = (pos.x / pitch.x).floor() as usize;
        let row = (pos.y / pitch.y).floor() as usize;
        self.config.contains(row, col).then_some((row, col))
    }
}

/// Fill for the whole playing area, painted before the cells so the margins
/// show the background color.
pub fn backdrop(layout: &CellLayout, palette: &Palette) -> (Rect, Color32) {
    (
        Rect::from_min_size(Pos2::ZERO, layout.screen_size()),
        palette.background,
    )
}

/// Per-frame snapshot for a painter: one rectangle and color per cell.
pub fn frame<'a>(
    grid: &'a Grid,
    layout: &'a CellLayout,
    palette: &'a Palette,
) -> impl Iterator<Item = (Rect, Color32)> + 'a {
    grid.iter_rows().enumerate().flat_map(move |(row, cells)| {
        cells
            .iter()
            .enumerate()
            .map(move |(col, &cell)| (layout.cell_rect(row, col), palette.color(cell)))
    })
}
