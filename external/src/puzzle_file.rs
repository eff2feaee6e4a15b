use crate::error::PuzzleFileError;
use cruciverbal_core::{ClueRecord, Crossword};
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PuzzleFileFormat {
    /// Header row `Row Index,Column Index,Down/Across,Answer,Clue`, one clue per line.
    #[default]
    Csv,
    /// An array of clue objects with the same field names.
    Json,
}

impl PuzzleFileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(PuzzleFileFormat::Csv),
            "json" => Some(PuzzleFileFormat::Json),
            _ => None,
        }
    }

    /// Pick the format from the file extension, falling back to CSV.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
            .unwrap_or_default()
    }

    pub fn extension(self) -> &'static str {
        match self {
            PuzzleFileFormat::Csv => "csv",
            PuzzleFileFormat::Json => "json",
        }
    }
}

/// Reads puzzle definitions from disk.
pub struct PuzzleFile;

impl PuzzleFile {
    /// Load a puzzle, choosing the format from the file extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Crossword, PuzzleFileError> {
        let path = path.as_ref();
        let records = Self::read_records(path)?;
        let crossword = Crossword::from_records(records)?;
        tracing::info!("Loaded puzzle from {}", path.display());
        Ok(crossword)
    }

    /// Read the clue records of a puzzle file without building the puzzle.
    pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<ClueRecord>, PuzzleFileError> {
        let path = path.as_ref();
        let format = PuzzleFileFormat::from_path(path);
        tracing::debug!("Reading {} as {:?}", path.display(), format);

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PuzzleFileError::NotFound(path.to_path_buf()),
            _ => PuzzleFileError::Io(e),
        })?;

        Self::parse_records(file, format)
    }

    /// Parse clue records from any reader.
    pub fn parse_records<R: Read>(
        reader: R,
        format: PuzzleFileFormat,
    ) -> Result<Vec<ClueRecord>, PuzzleFileError> {
        match format {
            PuzzleFileFormat::Csv => Self::parse_csv(reader),
            PuzzleFileFormat::Json => Ok(serde_json::from_reader(reader)?),
        }
    }

    fn parse_csv<R: Read>(reader: R) -> Result<Vec<ClueRecord>, PuzzleFileError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in reader.deserialize() {
            let record: ClueRecord = result?;
            records.push(record);
        }

        Ok(records)
    }
}
