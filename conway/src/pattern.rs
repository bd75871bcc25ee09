// pattern.rs - Pattern files: a rectangular block of `X` (alive) and `.` (dead)

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::grid::{CellState, Grid, GridConfig};

pub const ALIVE: char = 'X';
pub const DEAD: char = '.';

/// Character matrix read from a pattern file.
///
/// Characters other than [`ALIVE`] count as dead, but only rows and columns
/// made entirely of [`DEAD`] are trimmed. Anything else is kept verbatim and
/// written back as it was read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    rows: Vec<Vec<char>>,
}

impl Pattern {
    /// Parses pattern text. Whitespace around the whole text is ignored;
    /// every remaining line must have the same length.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::default());
        }

        let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        let expected = rows[0].len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != expected) {
            return Err(Error::MalformedPattern {
                line: i + 1,
                expected,
                found: row.len(),
            });
        }
        Ok(Self { rows })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    fn row_is_blank(&self, row: usize) -> bool {
        self.rows[row].iter().all(|&c| c == DEAD)
    }

    fn col_is_blank(&self, col: usize) -> bool {
        self.rows.iter().all(|row| row[col] == DEAD)
    }

    /// Returns `true` if no border row or column is made entirely of [`DEAD`].
    pub fn is_normalized(&self) -> bool {
        if self.rows.is_empty() {
            return true;
        }
        let (last_row, last_col) = (self.height() - 1, self.width().saturating_sub(1));
        self.width() > 0
            && !self.row_is_blank(0)
            && !self.row_is_blank(last_row)
            && !self.col_is_blank(0)
            && !self.col_is_blank(last_col)
    }

    /// Trims all-`.` rows from the top and bottom, then all-`.` columns from
    /// the left and right. A pattern made only of `.` becomes empty.
    pub fn normalize(&mut self) {
        let (height, width) = (self.height(), self.width());

        let first_row = (0..self.height()).find(|&r| !self.row_is_blank(r));
        let last_row = (0..self.height()).rev().find(|&r| !self.row_is_blank(r));
        let (Some(first_row), Some(last_row)) = (first_row, last_row) else {
            self.rows.clear();
            debug!("pattern {}x{} is entirely blank", height, width);
            return;
        };
        self.rows.truncate(last_row + 1);
        self.rows.drain(..first_row);

        // The remaining rows each hold a non-blank cell, so some column does too.
        let first_col = (0..self.width()).find(|&c| !self.col_is_blank(c)).unwrap_or(0);
        let last_col = (0..self.width()).rev().find(|&c| !self.col_is_blank(c)).unwrap_or(0);
        for row in &mut self.rows {
            row.truncate(last_col + 1);
            row.drain(..first_col);
        }

        debug!(
            "normalized pattern {}x{} -> {}x{}",
            height,
            width,
            self.height(),
            self.width()
        );
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn cell(&self, row: usize, col: usize) -> CellState {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or(CellState::Dead, |&c| (c == ALIVE).into())
    }

    /// Coordinates of alive cells, relative to the pattern's top-left corner.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c == ALIVE)
                .map(move |(c, _)| (r, c))
        })
    }

    /// Places the pattern at the top-left corner of an otherwise dead grid.
    pub fn place(&self, config: GridConfig) -> Result<Grid> {
        if self.height() > config.rows || self.width() > config.cols {
            return Err(Error::PatternTooLarge {
                rows: self.height(),
                cols: self.width(),
                max_rows: config.rows,
                max_cols: config.cols,
            });
        }
        Grid::with_alive(config, self.alive_cells())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
