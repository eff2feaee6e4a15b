use cruciverbal_core::LoadError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid puzzle: {0}")]
    Load(#[from] LoadError),
}
