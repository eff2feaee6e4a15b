use std::fmt;

/// The character a player types for a cell they want to leave empty.
pub const BLANK_MARKER: char = '_';

/// Glyph used when rendering [`Cell::Block`].
pub const BLOCK_GLYPH: char = '■';

/// Whether `c` may appear in a guess (and therefore in an answer).
pub fn is_guess_char(c: char) -> bool {
    c.is_ascii_uppercase() || c == BLANK_MARKER
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Not part of any clue.
    #[default]
    Block,
    /// Part of a clue, nothing guessed yet.
    Blank,
    Letter(char),
}

impl Cell {
    /// The cell a guess character turns into; the blank marker clears the cell.
    pub fn from_guess(c: char) -> Self {
        if c == BLANK_MARKER {
            Cell::Blank
        } else {
            Cell::Letter(c)
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Cell::Block)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }

    /// Whether this cell holds exactly the given answer character.
    ///
    /// A block never matches; a blank only matches a blank marker in the answer.
    pub fn matches(&self, answer: char) -> bool {
        !self.is_block() && *self == Cell::from_guess(answer)
    }

    pub fn get_display_char(&self) -> char {
        match self {
            Cell::Block => BLOCK_GLYPH,
            Cell::Blank => BLANK_MARKER,
            Cell::Letter(c) => *c,
        }
    }
}

/// Square board of cells, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// A grid where every cell is a block.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::Block; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    /// Turn a cell into a blank, making it part of the playable area.
    pub(crate) fn activate(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = Cell::Blank;
        }
    }

    /// Write a guess character into an active cell.
    ///
    /// Blocks stay blocks: only cells activated at load time can change.
    pub(crate) fn write(&mut self, row: usize, col: usize, c: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            if !cell.is_block() {
                *cell = Cell::from_guess(c);
            }
        }
    }
}

impl fmt::Display for Grid {
    /// Renders the board with column indices on top and row indices on the left:
    ///
    /// ```txt
    ///      0    1    2
    ///   |------------
    /// 0 |  C    R    A
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (0..self.size).map(|i| i.to_string()).collect();
        writeln!(f, "     {}", header.join("    "))?;
        writeln!(f, "  |{}", "-".repeat((6 * self.size).saturating_sub(3)))?;
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{} |", i)?;
            for cell in row {
                write!(f, "  {}  ", cell.get_display_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
