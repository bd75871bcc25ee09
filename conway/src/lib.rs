// lib.rs - Conway's Game of Life on a fixed-size toroidal grid
//
// A `PatternLoader` builds the starting generation from an `X`/`.` pattern
// file (or at random when the file is missing), and a `Simulation` owns the
// resulting `Grid`, applying queued input `Intent`s and advancing one
// generation per tick. The `view` module holds the geometry and colors a
// renderer uses to draw the grid and map clicks back to cells.

pub mod error;
pub mod grid;
pub mod loader;
pub mod pattern;
pub mod presets;
pub mod simulation;
pub mod view;

pub use error::{Error, Result};
pub use grid::{COLUMN_COUNT, CellState, Grid, GridConfig, ROW_COUNT};
pub use loader::PatternLoader;
pub use pattern::Pattern;
pub use simulation::{Controller, Intent, Simulation};
