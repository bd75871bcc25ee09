// presets.rs - Classic starter patterns in pattern file format

use crate::error::Result;
use crate::pattern::Pattern;

pub struct Preset {
    pub name: &'static str,
    pub text: &'static str,
}

impl Preset {
    pub fn pattern(&self) -> Result<Pattern> {
        Pattern::parse(self.text)
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Glider",
        text: "\
.X.
..X
XXX",
    },
    Preset {
        name: "Blinker",
        text: "XXX",
    },
    Preset {
        name: "Toad",
        text: "\
.XXX
XXX.",
    },
    Preset {
        name: "Beacon",
        text: "\
XX..
XX..
..XX
..XX",
    },
    Preset {
        name: "Pulsar",
        text: "\
..XXX...XXX..
.............
X....X.X....X
X....X.X....X
X....X.X....X
..XXX...XXX..
.............
..XXX...XXX..
X....X.X....X
X....X.X....X
X....X.X....X
.............
..XXX...XXX..",
    },
    Preset {
        name: "R-pentomino",
        text: "\
.XX
XX.
.X.",
    },
    Preset {
        name: "Gosper Glider Gun",
        text: "\
........................X...........
......................X.X...........
............XX......XX............XX
...........X...X....XX............XX
XX........X.....X...XX..............
XX........X...X.XX....X.X...........
..........X.....X.......X...........
...........X...X....................
............XX......................",
    },
];

/// Looks up a preset by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name.eq_ignore_ascii_case(name))
}
