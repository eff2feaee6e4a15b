use crate::{
    CROSSWORD_DIMENSION, Cell, ClueEntry, ClueKey, ClueRecord, GuessError, LoadError,
    Orientation, grid::Grid, grid::is_guess_char,
};
use std::{collections::BTreeMap, fmt};

/// The puzzle model: the clue table and the board the player fills in.
///
/// Built once from clue records; afterwards only [`Crossword::change_guess`] and
/// [`Crossword::reveal_answer`] modify the board. Solving the puzzle does not
/// lock it, further guesses are still accepted.
#[derive(Debug, Clone)]
pub struct Crossword {
    grid: Grid,
    clues: BTreeMap<ClueKey, ClueEntry>,
}

impl Crossword {
    /// Build a puzzle from clue records, in order.
    ///
    /// When two records share a position and orientation the later one
    /// replaces the earlier. Cells are activated from the final clue table, so
    /// a replaced clue leaves no trace on the board.
    pub fn from_records<I>(records: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = ClueRecord>,
    {
        let mut clues = BTreeMap::new();
        for record in records {
            let clue = ClueEntry::try_from(record)?;
            if let Some(replaced) = clues.insert(clue.key(), clue) {
                tracing::warn!("Duplicate clue {}, keeping the last one", replaced);
            }
        }

        if clues.is_empty() {
            return Err(LoadError::NoClues);
        }

        let mut grid = Grid::new(CROSSWORD_DIMENSION);
        for clue in clues.values() {
            for (row, col) in clue.positions() {
                grid.activate(row, col);
            }
        }

        tracing::debug!("Loaded crossword with {} clues", clues.len());
        Ok(Self { grid, clues })
    }

    pub fn dimension(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get_cell(row, col).copied()
    }

    /// Look up the clue starting at `(row, col)` in the given orientation.
    pub fn clue(&self, row: usize, col: usize, orientation: Orientation) -> Option<&ClueEntry> {
        self.clues.get(&ClueKey::new(row, col, orientation))
    }

    /// All clues, across before down, each group by row then column.
    pub fn clues(&self) -> impl Iterator<Item = &ClueEntry> {
        self.clues.values()
    }

    pub fn clues_by_orientation(&self, orientation: Orientation) -> Vec<&ClueEntry> {
        self.clues
            .values()
            .filter(|clue| clue.orientation() == orientation)
            .collect()
    }

    /// Put a guess for `clue` on the board.
    ///
    /// The guess must be exactly as long as the answer and only use `A`-`Z` and
    /// `_`. Nothing is written unless both checks pass.
    pub fn change_guess(&mut self, clue: &ClueEntry, guess: &str) -> Result<(), GuessError> {
        let actual = guess.chars().count();
        if actual != clue.length() {
            return Err(GuessError::LengthMismatch {
                expected: clue.length(),
                actual,
            });
        }
        if let Some(invalid) = guess.chars().find(|&c| !is_guess_char(c)) {
            return Err(GuessError::InvalidCharacter(invalid));
        }

        for ((row, col), c) in clue.positions().zip(guess.chars()) {
            self.grid.write(row, col, c);
        }
        Ok(())
    }

    /// Fill the clue's cells with its answer.
    pub fn reveal_answer(&mut self, clue: &ClueEntry) {
        for ((row, col), c) in clue.positions().zip(clue.answer().chars()) {
            self.grid.write(row, col, c);
        }
    }

    /// Offset of the first cell of `clue` that does not hold the right letter,
    /// or `None` if the whole answer is in place. Blank cells count as wrong.
    pub fn find_wrong_letter(&self, clue: &ClueEntry) -> Option<usize> {
        clue.positions()
            .zip(clue.answer().chars())
            .position(|((row, col), c)| {
                !self
                    .grid
                    .get_cell(row, col)
                    .is_some_and(|cell| cell.matches(c))
            })
    }

    pub fn is_solved(&self) -> bool {
        self.clues
            .values()
            .all(|clue| self.find_wrong_letter(clue).is_none())
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
