pub mod clue;
pub mod crossword;
pub mod error;
pub mod grid;
pub mod orientation;
pub mod record;

pub use clue::{ClueEntry, ClueKey};
pub use crossword::Crossword;
pub use error::{GuessError, LoadError};
pub use grid::{BLANK_MARKER, Cell, Grid};
pub use orientation::Orientation;
pub use record::ClueRecord;

/// Side length of every puzzle grid.
pub const CROSSWORD_DIMENSION: usize = 5;
