mod error;
pub use error::PuzzleFileError;

mod puzzle_file;
pub use puzzle_file::{PuzzleFile, PuzzleFileFormat};
