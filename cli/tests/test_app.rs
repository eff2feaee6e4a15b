use cruciverbal_cli::{App, HELP_MENU, Settings};
use cruciverbal_core::{Cell, Orientation};
use std::{fs, io::Cursor, path::PathBuf};
use tempfile::TempDir;

const CRAB_CAT: &str = "\
Row Index,Column Index,Down/Across,Answer,Clue
0,0,A,CRAB,Sideways walker
0,0,D,CAT,Feline pet
";

const FIVE_ACROSS: &str = "\
Row Index,Column Index,Down/Across,Answer,Clue
4,0,A,ABCDE,Fifth
0,0,A,ABCDE,First
2,0,A,ABCDE,Third
1,0,A,ABCDE,Second
3,0,A,ABCDE,Fourth
0,4,D,EEEEE,Right edge
";

type TestApp = App<Cursor<Vec<u8>>, Vec<u8>>;

struct Puzzles {
    dir: TempDir,
}

impl Puzzles {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("crab_cat.csv"), CRAB_CAT).unwrap();
        fs::write(dir.path().join("five_across.csv"), FIVE_ACROSS).unwrap();
        fs::write(dir.path().join("broken.csv"), "Row Index,Answer\n0,CRAB\n").unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).display().to_string()
    }
}

/// Run a scripted session and return the app with everything it printed.
fn play(settings: Settings, puzzle: Option<PathBuf>, lines: &[&str]) -> (TestApp, String) {
    let mut script = lines.join("\n");
    script.push('\n');
    let mut app = App::new(Cursor::new(script.into_bytes()), Vec::new(), settings);
    app.run(puzzle).unwrap();
    let output = String::from_utf8(app.output().clone()).unwrap();
    (app, output)
}

#[test]
fn test_full_session_until_solved() {
    let puzzles = Puzzles::new();
    let missing = puzzles.path("missing.csv");
    let crab_cat = puzzles.path("crab_cat.csv");

    let (app, output) = play(
        Settings::default(),
        None,
        &[
            missing.as_str(), crab_cat.as_str(), "X", "G 0 0 A", "cr", "cr4b", "crab", "T 0 0 D", "T 0 0 A",
            "R 0 0 D",
        ],
    );

    assert!(output.contains("No puzzle found with that filename. Try Again."));
    assert!(output.contains("(0, 0) Across: Sideways walker"));
    assert!(output.contains("(0, 0) Down: Feline pet"));
    assert!(output.contains(HELP_MENU));
    assert!(output.contains("Invalid option/arguments. Type 'H' for help."));
    assert!(output.contains("Guess length does not match the length of the clue."));
    assert!(output.contains("Guess contains invalid characters."));
    assert!(output.contains("0 |  C    R    A    B    ■  "));
    assert!(output.contains("Letter 2 is wrong, it should be A"));
    assert!(output.contains("This clue is already correct!"));
    assert!(output.ends_with("\nPuzzle solved! Congratulations!\n"));

    assert!(app.is_solved());
}

#[test]
fn test_quit_leaves_puzzle_unsolved() {
    let puzzles = Puzzles::new();
    let crab_cat = puzzles.path("crab_cat.csv");

    let (app, output) = play(Settings::default(), None, &[crab_cat.as_str(), "G 0 0 A", "CRAB", "Q"]);

    assert!(!app.is_solved());
    assert!(!output.contains("Congratulations"));
    let crossword = app.crossword().unwrap();
    assert_eq!(crossword.cell(0, 3), Some(Cell::Letter('B')));
    assert_eq!(crossword.cell(1, 0), Some(Cell::Blank));
}

#[test]
fn test_end_of_input_stops_cleanly() {
    let (app, output) = play(Settings::default(), None, &[]);
    assert!(app.crossword().is_none());
    assert!(output.starts_with("Enter the filename of the puzzle you want to play: "));

    let puzzles = Puzzles::new();
    let crab_cat = puzzles.path("crab_cat.csv");
    // input runs out while waiting for a guess
    let (app, _) = play(Settings::default(), None, &[crab_cat.as_str(), "G 0 0 A"]);
    assert!(!app.is_solved());
}

#[test]
fn test_puzzle_from_command_line() {
    let puzzles = Puzzles::new();
    let path = PathBuf::from(puzzles.path("crab_cat.csv"));

    let (app, output) = play(Settings::default(), Some(path), &["R 0 0 A", "R 0 0 D"]);

    assert!(!output.contains("Enter the filename"));
    assert!(app.is_solved());
}

#[test]
fn test_malformed_file_is_reprompted() {
    let puzzles = Puzzles::new();
    let broken = puzzles.path("broken.csv");
    let crab_cat = puzzles.path("crab_cat.csv");

    let (app, output) = play(Settings::default(), None, &[broken.as_str(), crab_cat.as_str(), "Q"]);

    assert!(output.contains("Could not load that puzzle"));
    assert!(app.crossword().is_some());
}

#[test]
fn test_clue_listing_limits() {
    let puzzles = Puzzles::new();
    let five = puzzles.path("five_across.csv");

    let settings = Settings {
        clue_preview: 2,
        ..Settings::default()
    };
    let (_, output) = play(settings.clone(), None, &[five.as_str(), "Q"]);
    assert!(output.contains("(0, 0) Across: First\n(1, 0) Across: Second\n\nDown\n"));
    assert!(!output.contains("Third"));

    let (_, output) = play(settings.clone(), None, &[five.as_str(), "C 0", "Q"]);
    assert!(output.contains(
        "(0, 0) Across: First\n(1, 0) Across: Second\n(2, 0) Across: Third\n\
         (3, 0) Across: Fourth\n(4, 0) Across: Fifth\n\nDown\n(0, 4) Down: Right edge\n"
    ));

    let (_, output) = play(settings, None, &[five.as_str(), "C 9", "Q"]);
    assert!(output.contains("(4, 0) Across: Fifth"));
}

#[test]
fn test_restart_loads_new_puzzle() {
    let puzzles = Puzzles::new();
    let crab_cat = puzzles.path("crab_cat.csv");
    let five = puzzles.path("five_across.csv");

    let (app, _) = play(
        Settings::default(),
        None,
        &[crab_cat.as_str(), "G 0 0 A", "CRAB", "S", five.as_str(), "Q"],
    );

    let crossword = app.crossword().unwrap();
    assert!(crossword.clue(4, 0, Orientation::Across).is_some());
    assert_eq!(crossword.cell(0, 0), Some(Cell::Blank));
}

#[test]
fn test_echo_writes_input_back() {
    let puzzles = Puzzles::new();
    let crab_cat = puzzles.path("crab_cat.csv");

    let settings = Settings {
        echo_input: true,
        ..Settings::default()
    };
    let (_, output) = play(settings, None, &[crab_cat.as_str(), "H", "Q"]);

    assert!(output.contains(&format!(
        "Enter the filename of the puzzle you want to play: {}\n",
        crab_cat
    )));
    assert!(output.contains("Enter option: H\n"));
    assert!(output.contains("Enter option: Q\n"));
}

#[test]
fn test_puzzle_dir_lookup() {
    let puzzles = Puzzles::new();
    let settings = Settings {
        puzzle_dir: Some(puzzles.dir.path().to_path_buf()),
        ..Settings::default()
    };

    let (app, _) = play(settings, None, &["crab_cat.csv", "Q"]);
    assert!(app.crossword().is_some());
}
