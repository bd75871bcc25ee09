// simulation.rs - Owns the grid and applies queued input between generations

use log::{debug, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::{Error, Result};
use crate::grid::{Grid, GridConfig};

const HISTORY_LEN: usize = 10;

/// A request from an input collaborator, applied on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Toggle { row: usize, col: usize },
    SetPaused(bool),
    TogglePause,
    Clear,
}

/// Sending half handed to input handlers. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Controller {
    config: GridConfig,
    tx: UnboundedSender<Intent>,
}

impl Controller {
    pub fn send(&self, intent: Intent) -> Result<()> {
        if let Intent::Toggle { row, col } = intent {
            self.config.check(row, col)?;
        }
        self.tx.send(intent).map_err(|_| Error::SimulationClosed)
    }

    pub fn toggle(&self, row: usize, col: usize) -> Result<()> {
        self.send(Intent::Toggle { row, col })
    }

    pub fn set_paused(&self, paused: bool) -> Result<()> {
        self.send(Intent::SetPaused(paused))
    }

    pub fn toggle_pause(&self) -> Result<()> {
        self.send(Intent::TogglePause)
    }

    pub fn clear(&self) -> Result<()> {
        self.send(Intent::Clear)
    }
}

/// The only mutator of grid state once the grid has been loaded.
///
/// The render loop calls [`Simulation::tick`] once per frame. Input handlers
/// never touch the grid; they queue [`Intent`]s through a [`Controller`] and
/// the next tick applies them before computing a generation.
pub struct Simulation {
    grid: Grid,
    tx: UnboundedSender<Intent>,
    rx: UnboundedReceiver<Intent>,
    paused: bool,
    generation: u64,
    pause_on_cycle: bool,
    cycle_detected: bool,

    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            grid,
            tx,
            rx,
            paused: false,
            generation: 0,
            pause_on_cycle: false,
            cycle_detected: false,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
        }
    }

    /// Pause automatically when a generation repeats one of the last few.
    pub fn pause_on_cycle(mut self, enabled: bool) -> Self {
        self.pause_on_cycle = enabled;
        self
    }

    pub fn controller(&self) -> Controller {
        Controller {
            config: self.grid.config(),
            tx: self.tx.clone(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn is_paused(&self) -> bool {
        self.paused
    }
    pub fn generation(&self) -> u64 {
        self.generation
    }
    pub fn cycle_detected(&self) -> bool {
        self.cycle_detected
    }

    /// Applies queued intents, then advances one generation unless paused.
    /// Returns whether a generation was computed.
    pub fn tick(&mut self) -> bool {
        while let Ok(intent) = self.rx.try_recv() {
            self.apply(intent);
        }
        if self.paused {
            return false;
        }

        self.grid.step();
        self.generation += 1;

        if self.check_for_cycle() {
            self.cycle_detected = true;
            if self.pause_on_cycle {
                info!("generation {} repeats an earlier state, pausing", self.generation);
                self.paused = true;
            }
        }
        true
    }

    fn apply(&mut self, intent: Intent) {
        debug!("applying {:?}", intent);
        match intent {
            Intent::Toggle { row, col } => {
                if let Err(err) = self.grid.toggle(row, col) {
                    warn!("dropping toggle: {}", err);
                    return;
                }
                self.reset_history();
            }
            Intent::SetPaused(paused) => self.paused = paused,
            Intent::TogglePause => self.paused = !self.paused,
            Intent::Clear => {
                self.grid.clear();
                self.generation = 0;
                self.reset_history();
            }
        }
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.grid.state_hash();
        let filled = self.history_count.min(HISTORY_LEN);
        if self.grid_history[..filled].contains(&current_hash) {
            return true;
        }
        self.grid_history[self.history_count % HISTORY_LEN] = current_hash;
        self.history_count += 1;
        false
    }

    fn reset_history(&mut self) {
        self.grid_history = [0; HISTORY_LEN];
        self.history_count = 0;
        self.cycle_detected = false;
    }
}
