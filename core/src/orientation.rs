use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction in which an answer extends from its first cell.
///
/// Variant order matters: it is the primary sort key of clues, so every
/// across clue comes before every down clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "A")]
    Across,
    #[serde(rename = "D")]
    Down,
}

impl Orientation {
    /// Row and column step between consecutive cells of a span.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Orientation::Across => (0, 1),
            Orientation::Down => (1, 0),
        }
    }

    /// Parse the single-letter form used in puzzle files and shell commands.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Orientation::Across),
            "D" => Some(Orientation::Down),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Orientation::Across => 'A',
            Orientation::Down => 'D',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Across => write!(f, "Across"),
            Orientation::Down => write!(f, "Down"),
        }
    }
}
