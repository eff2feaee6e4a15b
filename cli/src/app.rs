use crate::{command::Command, config::Settings};
use color_eyre::eyre::Result;
use cruciverbal_core::{BLANK_MARKER, ClueEntry, ClueKey, Crossword, Orientation};
use cruciverbal_external::{PuzzleFile, PuzzleFileError};
use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

pub const HELP_MENU: &str = "\nCrossword Puzzler -- Press H at any time to bring up this menu\
    \nC n - Display n of the current puzzle's down and across clues\
    \nG i j A/D - Make a guess for the clue starting at row i, column j\
    \nR i j A/D - Reveal the answer for the clue starting at row i, column j\
    \nT i j A/D - Gives a hint (first wrong letter) for the clue starting at row i, column j\
    \nH - Display the menu\
    \nS - Restart the game\
    \nQ - Quit the program";

const OPTION_PROMPT: &str = "\nEnter option: ";
const PUZZLE_PROMPT: &str = "Enter the filename of the puzzle you want to play: ";
const GUESS_PROMPT: &str = "Enter your guess (use _ for blanks): ";
const PUZZLE_FILE_ERROR: &str = "No puzzle found with that filename. Try Again.\n";
const INVALID_COMMAND: &str = "Invalid option/arguments. Type 'H' for help.";
const SOLVED: &str = "\nPuzzle solved! Congratulations!";

/// The interactive shell.
///
/// Reads commands line by line from `input` and writes everything the player
/// sees to `output`, so a whole session can be driven from memory in tests.
pub struct App<R, W> {
    input: R,
    output: W,
    settings: Settings,
    /// Puzzle being played, once one has been opened.
    crossword: Option<Crossword>,
    /// Is the shell running?
    is_running: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Construct a new instance of [`App`].
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
            crossword: None,
            is_running: false,
        }
    }

    pub fn crossword(&self) -> Option<&Crossword> {
        self.crossword.as_ref()
    }

    /// Everything written so far, for sinks that keep it (e.g. `Vec<u8>`).
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run the shell until the puzzle is solved, the player quits, or input ends.
    ///
    /// `puzzle` is tried before prompting for a filename.
    pub fn run(&mut self, puzzle: Option<PathBuf>) -> Result<()> {
        self.is_running = true;
        self.open_puzzle(puzzle)?;

        while self.is_running && !self.is_solved() {
            let Some(line) = self.read_line(OPTION_PROMPT)? else {
                break;
            };
            let Some(crossword) = self.crossword.as_ref() else {
                break;
            };

            match Command::parse(&line, crossword) {
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    tracing::debug!("Rejected {:?}: {}", line, e);
                    writeln!(self.output, "{}", INVALID_COMMAND)?;
                }
            }
        }

        if self.is_solved() {
            writeln!(self.output, "{}", SOLVED)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.is_running = false;
    }

    pub fn is_solved(&self) -> bool {
        self.crossword.as_ref().is_some_and(Crossword::is_solved)
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        tracing::debug!("Executing {:?}", command);
        match command {
            Command::Clues(count) => self.display_clues(count)?,
            Command::Guess(key) => self.guess(key)?,
            Command::Reveal(key) => self.reveal(key)?,
            Command::Hint(key) => self.hint(key)?,
            Command::Help => writeln!(self.output, "{}", HELP_MENU)?,
            Command::Restart => {
                tracing::info!("Restarting with a new puzzle");
                self.open_puzzle(None)?;
            }
            Command::Quit => self.quit(),
        }
        Ok(())
    }

    /// Keep asking for a puzzle file until one loads or input runs out.
    fn open_puzzle(&mut self, mut pending: Option<PathBuf>) -> Result<()> {
        loop {
            let name = match pending.take() {
                Some(path) => path,
                None => match self.read_line(PUZZLE_PROMPT)? {
                    Some(line) => PathBuf::from(line.trim()),
                    None => {
                        self.quit();
                        return Ok(());
                    }
                },
            };

            let path = self.settings.resolve_puzzle_path(&name);
            match PuzzleFile::load(&path) {
                Ok(crossword) => {
                    self.crossword = Some(crossword);
                    self.display_clues(self.settings.clue_preview)?;
                    self.print_board()?;
                    writeln!(self.output, "{}", HELP_MENU)?;
                    return Ok(());
                }
                Err(PuzzleFileError::NotFound(_)) => {
                    writeln!(self.output, "{}", PUZZLE_FILE_ERROR)?;
                }
                Err(e) => {
                    tracing::warn!("Could not load {}: {}", path.display(), e);
                    writeln!(self.output, "Could not load that puzzle: {}. Try Again.\n", e)?;
                }
            }
        }
    }

    /// List up to `count` clues of each orientation in clue order; 0 lists all.
    fn display_clues(&mut self, count: usize) -> Result<()> {
        let Some(crossword) = self.crossword.as_ref() else {
            return Ok(());
        };
        let limit = if count == 0 { usize::MAX } else { count };

        for orientation in [Orientation::Across, Orientation::Down] {
            writeln!(self.output, "\n{}", orientation)?;
            for clue in crossword
                .clues_by_orientation(orientation)
                .into_iter()
                .take(limit)
            {
                writeln!(self.output, "{}", clue)?;
            }
        }
        Ok(())
    }

    fn guess(&mut self, key: ClueKey) -> Result<()> {
        let Some(clue) = self.clue(key) else {
            return Ok(());
        };

        loop {
            let Some(line) = self.read_line(GUESS_PROMPT)? else {
                self.quit();
                return Ok(());
            };
            let guess = line.to_uppercase();
            let Some(crossword) = self.crossword.as_mut() else {
                return Ok(());
            };

            match crossword.change_guess(&clue, &guess) {
                Ok(()) => return self.print_board(),
                Err(e) => {
                    tracing::debug!("Guess {:?} for {} rejected: {:?}", guess, clue, e);
                    writeln!(self.output, "{}\n", e)?;
                }
            }
        }
    }

    fn reveal(&mut self, key: ClueKey) -> Result<()> {
        let Some(clue) = self.clue(key) else {
            return Ok(());
        };
        if let Some(crossword) = self.crossword.as_mut() {
            crossword.reveal_answer(&clue);
        }
        self.print_board()
    }

    fn hint(&mut self, key: ClueKey) -> Result<()> {
        let Some(crossword) = self.crossword.as_ref() else {
            return Ok(());
        };
        let Some(clue) = crossword.clue(key.row, key.col, key.orientation) else {
            return Ok(());
        };

        match crossword.find_wrong_letter(clue) {
            Some(i) => {
                let letter = clue.answer().chars().nth(i).unwrap_or(BLANK_MARKER);
                writeln!(
                    self.output,
                    "Letter {} is wrong, it should be {}",
                    i + 1,
                    letter
                )?;
            }
            None => writeln!(self.output, "This clue is already correct!")?,
        }
        Ok(())
    }

    fn clue(&self, key: ClueKey) -> Option<ClueEntry> {
        self.crossword
            .as_ref()?
            .clue(key.row, key.col, key.orientation)
            .cloned()
    }

    fn print_board(&mut self) -> Result<()> {
        if let Some(crossword) = self.crossword.as_ref() {
            writeln!(self.output, "{}", crossword)?;
        }
        Ok(())
    }

    /// Prompt and read one line without its line ending. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let line = line.trim_end_matches(['\n', '\r']).to_string();
        if self.settings.echo_input {
            writeln!(self.output, "{}", line)?;
        }
        Ok(Some(line))
    }
}
