// loader.rs - Builds the starting generation from a pattern file

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::grid::{Grid, GridConfig};
use crate::pattern::Pattern;

/// Builds the initial grid from a pattern file, or at random when the file
/// does not exist.
///
/// Loading normalizes the pattern and writes the trimmed version back to the
/// same file.
pub struct PatternLoader<R> {
    config: GridConfig,
    rng: R,
}

impl PatternLoader<StdRng> {
    pub fn from_entropy(config: GridConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> PatternLoader<R> {
    pub fn new(config: GridConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Grid> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("no pattern at {:?}, starting from a random grid", path);
                return Ok(Grid::random(self.config, &mut self.rng));
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_owned(),
                    source,
                });
            }
        };

        let pattern = Pattern::parse(&text)?.normalized();
        fs::write(path, pattern.to_string()).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        debug!(
            "rewrote {:?} with {}x{} normalized pattern",
            path,
            pattern.height(),
            pattern.width()
        );

        let grid = pattern.place(self.config)?;
        info!("loaded {:?}, population {}", path, grid.population());
        Ok(grid)
    }
}
