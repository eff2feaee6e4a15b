use crate::preferences::Preferences;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "cruciverbal", version, about = "Play 5x5 crossword puzzles in the terminal")]
pub struct Args {
    /// Puzzle file to open first; prompted for when missing or unreadable.
    pub puzzle: Option<PathBuf>,

    /// Clues of each orientation to list when a puzzle is opened (0 lists all).
    #[arg(short, long)]
    pub clues: Option<usize>,

    /// Echo every input line back to the output.
    #[arg(short, long)]
    pub echo: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective shell settings: command-line flags layered over saved preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub clue_preview: usize,
    pub echo_input: bool,
    pub puzzle_dir: Option<PathBuf>,
}

impl Settings {
    pub fn new(args: &Args, prefs: Preferences) -> Self {
        Self {
            clue_preview: args.clues.unwrap_or(prefs.clue_preview),
            echo_input: args.echo || prefs.echo_input,
            puzzle_dir: prefs.puzzle_dir,
        }
    }

    /// Where to look for a puzzle the player named.
    ///
    /// Relative names that do not exist in the working directory are looked up
    /// in the puzzle directory, if one is configured.
    pub fn resolve_puzzle_path(&self, name: &Path) -> PathBuf {
        if name.is_relative() && !name.exists() {
            if let Some(dir) = &self.puzzle_dir {
                let candidate = dir.join(name);
                if candidate.exists() {
                    return candidate;
                }
            }
        }
        name.to_path_buf()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(&Args::default(), Preferences::default())
    }
}
