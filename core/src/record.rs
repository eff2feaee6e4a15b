use crate::{ClueEntry, LoadError, Orientation};
use serde::{Deserialize, Serialize};

/// One row of a puzzle definition, as stored in puzzle files.
///
/// Field names follow the column headers of the CSV puzzle format; the short
/// aliases are accepted for hand-written JSON puzzles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(rename = "Row Index", alias = "row")]
    pub row: usize,
    #[serde(rename = "Column Index", alias = "column")]
    pub column: usize,
    #[serde(rename = "Down/Across", alias = "orientation")]
    pub orientation: Orientation,
    #[serde(rename = "Answer", alias = "answer")]
    pub answer: String,
    #[serde(rename = "Clue", alias = "clue")]
    pub clue: String,
}

impl ClueRecord {
    pub fn new(
        row: usize,
        column: usize,
        orientation: Orientation,
        answer: impl Into<String>,
        clue: impl Into<String>,
    ) -> Self {
        Self {
            row,
            column,
            orientation,
            answer: answer.into(),
            clue: clue.into(),
        }
    }
}

impl TryFrom<ClueRecord> for ClueEntry {
    type Error = LoadError;

    fn try_from(record: ClueRecord) -> Result<Self, Self::Error> {
        ClueEntry::new(
            record.row,
            record.column,
            record.orientation,
            &record.answer,
            record.clue,
        )
    }
}
