use core::fmt;
use serde::{Deserialize, Serialize};

/// One of the four card colors. The declaration order fixes the 2-bit
/// packed encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Spade = 0,
    Heart = 1,
    Diamond = 2,
    Club = 3,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Spade, Color::Heart, Color::Diamond, Color::Club];
    pub const COUNT: usize = 4;

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Color::Spade),
            1 => Some(Color::Heart),
            2 => Some(Color::Diamond),
            3 => Some(Color::Club),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Color::Spade => "S",
            Color::Heart => "H",
            Color::Diamond => "D",
            Color::Club => "C",
        };
        f.write_str(symbol)
    }
}
