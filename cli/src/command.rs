use cruciverbal_core::{ClueKey, Crossword, Orientation};
use thiserror::Error;

/// A validated shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `C n`: list up to `n` clues of each orientation, all of them for 0.
    Clues(usize),
    /// `G i j A|D`
    Guess(ClueKey),
    /// `R i j A|D`
    Reveal(ClueKey),
    /// `T i j A|D`: point at the first wrong letter.
    Hint(ClueKey),
    Help,
    Restart,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("bad arguments for {0:?}")]
    Arguments(String),
    #[error("no clue at ({}, {}) {}", .0.row, .0.col, .0.orientation)]
    NoSuchClue(ClueKey),
}

impl Command {
    /// Parse a line of input, checking clue references against `crossword`.
    pub fn parse(line: &str, crossword: &Crossword) -> Result<Self, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            return Err(CommandError::Empty);
        };
        let bad_args = || CommandError::Arguments(keyword.to_string());

        match keyword {
            "C" => match args {
                [n] => parse_index(n).map(Command::Clues).ok_or_else(bad_args),
                _ => Err(bad_args()),
            },
            "H" | "S" | "Q" if !args.is_empty() => Err(bad_args()),
            "H" => Ok(Command::Help),
            "S" => Ok(Command::Restart),
            "Q" => Ok(Command::Quit),
            "G" | "R" | "T" => {
                let key = parse_clue_key(args, crossword.dimension()).ok_or_else(bad_args)?;
                if crossword.clue(key.row, key.col, key.orientation).is_none() {
                    return Err(CommandError::NoSuchClue(key));
                }
                Ok(match keyword {
                    "G" => Command::Guess(key),
                    "R" => Command::Reveal(key),
                    _ => Command::Hint(key),
                })
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Plain decimal digits only: no sign, no whitespace.
fn parse_index(s: &str) -> Option<usize> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_clue_key(args: &[&str], dimension: usize) -> Option<ClueKey> {
    let [row, col, orientation] = args else {
        return None;
    };
    let row = parse_index(row).filter(|&r| r < dimension)?;
    let col = parse_index(col).filter(|&c| c < dimension)?;
    let orientation = Orientation::from_code(orientation)?;
    Some(ClueKey::new(row, col, orientation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cruciverbal_core::ClueRecord;

    fn crossword() -> Crossword {
        Crossword::from_records([
            ClueRecord::new(0, 0, Orientation::Across, "CRAB", "Sideways walker"),
            ClueRecord::new(0, 0, Orientation::Down, "CAT", "Feline pet"),
        ])
        .unwrap()
    }

    #[test]
    fn test_simple_commands() {
        let c = crossword();
        assert_eq!(Command::parse("H", &c), Ok(Command::Help));
        assert_eq!(Command::parse("  S ", &c), Ok(Command::Restart));
        assert_eq!(Command::parse("Q", &c), Ok(Command::Quit));
        assert_eq!(Command::parse("C 3", &c), Ok(Command::Clues(3)));
        assert_eq!(Command::parse("C 0", &c), Ok(Command::Clues(0)));
    }

    #[test]
    fn test_clue_commands() {
        let c = crossword();
        let across = ClueKey::new(0, 0, Orientation::Across);
        let down = ClueKey::new(0, 0, Orientation::Down);
        assert_eq!(Command::parse("G 0 0 A", &c), Ok(Command::Guess(across)));
        assert_eq!(Command::parse("R 0 0 D", &c), Ok(Command::Reveal(down)));
        assert_eq!(Command::parse("T 0 0 A", &c), Ok(Command::Hint(across)));
    }

    #[test]
    fn test_rejected_commands() {
        let c = crossword();
        assert_eq!(Command::parse("", &c), Err(CommandError::Empty));
        assert_eq!(Command::parse("   ", &c), Err(CommandError::Empty));
        assert_eq!(Command::parse("X", &c), Err(CommandError::Unknown("X".into())));
        assert_eq!(Command::parse("h", &c), Err(CommandError::Unknown("h".into())));
        assert_eq!(Command::parse("H now", &c), Err(CommandError::Arguments("H".into())));
        assert_eq!(Command::parse("C", &c), Err(CommandError::Arguments("C".into())));
        assert_eq!(Command::parse("C -1", &c), Err(CommandError::Arguments("C".into())));
        assert_eq!(Command::parse("C two", &c), Err(CommandError::Arguments("C".into())));
        assert_eq!(Command::parse("G 0 0", &c), Err(CommandError::Arguments("G".into())));
        assert_eq!(Command::parse("G 0 0 X", &c), Err(CommandError::Arguments("G".into())));
        assert_eq!(Command::parse("G 5 0 A", &c), Err(CommandError::Arguments("G".into())));
        assert_eq!(Command::parse("R 0 +1 A", &c), Err(CommandError::Arguments("R".into())));
        assert_eq!(
            Command::parse("T 1 0 A", &c),
            Err(CommandError::NoSuchClue(ClueKey::new(1, 0, Orientation::Across)))
        );
    }
}
