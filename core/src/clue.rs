use crate::{CROSSWORD_DIMENSION, LoadError, Orientation, grid::is_guess_char};
use std::{cmp::Ordering, fmt, hash::Hash};

/// Identity of a clue within a puzzle: where it starts and which way it runs.
///
/// Field order gives the clue ordering: orientation first, then row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClueKey {
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl ClueKey {
    pub fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            orientation,
            row,
            col,
        }
    }
}

/// A single clue with its answer.
///
/// Equality, hashing and ordering only look at the [`ClueKey`], so two entries
/// at the same position and orientation compare equal even if their answers differ.
#[derive(Debug, Clone)]
pub struct ClueEntry {
    key: ClueKey,
    answer: String,
    text: String,
}

impl ClueEntry {
    /// Build a clue, checking that its whole answer fits on a
    /// [`CROSSWORD_DIMENSION`]-sized grid. The answer is upper-cased.
    pub fn new(
        row: usize,
        col: usize,
        orientation: Orientation,
        answer: &str,
        text: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let size = CROSSWORD_DIMENSION;
        if row >= size || col >= size {
            return Err(LoadError::PositionOutOfRange { row, col, size });
        }

        let answer = answer.trim().to_uppercase();
        if answer.is_empty() {
            return Err(LoadError::EmptyAnswer { row, col });
        }
        if let Some(invalid) = answer.chars().find(|&c| !is_guess_char(c)) {
            return Err(LoadError::InvalidAnswer { answer, invalid });
        }

        let start = match orientation {
            Orientation::Across => col,
            Orientation::Down => row,
        };
        if start + answer.len() > size {
            return Err(LoadError::SpanOutOfRange {
                row,
                col,
                orientation,
            });
        }

        Ok(Self {
            key: ClueKey::new(row, col, orientation),
            answer,
            text: text.into(),
        })
    }

    pub fn key(&self) -> ClueKey {
        self.key
    }

    pub fn row(&self) -> usize {
        self.key.row
    }

    pub fn col(&self) -> usize {
        self.key.col
    }

    pub fn orientation(&self) -> Orientation {
        self.key.orientation
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of cells in the answer. Answers are ASCII, so this is also the byte length.
    pub fn length(&self) -> usize {
        self.answer.len()
    }

    /// Cells covered by the answer, from the first letter to the last.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dr, dc) = self.key.orientation.delta();
        (0..self.length()).map(move |i| (self.key.row + dr * i, self.key.col + dc * i))
    }
}

impl PartialEq for ClueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ClueEntry {}

impl Hash for ClueEntry {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for ClueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for ClueEntry {
    /// `(0, 3) Across: Sea creature`, or with the answer appended when
    /// formatted with `{:#}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}: {}",
            self.key.row, self.key.col, self.key.orientation, self.text
        )?;
        if f.alternate() {
            write!(f, " --- {}", self.answer)?;
        }
        Ok(())
    }
}
