use boggle_solver::solver::{SearchBudget, SearchOutcome};
use boggle_solver::utils::read_board_file;
use clap::Parser;
use env_logger::Builder;
use log::{error, info, LevelFilter};
use std::io::Write;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Check words against a Boggle board", long_about = None)]
struct Args {
    /// Path to the board file (one row per line, e.g. `ILAW` or `I L A W`)
    board_file: PathBuf,

    /// Words to look for on the board
    #[clap(required = true)]
    words: Vec<String>,

    /// Give up on a word after creating this many candidate paths
    #[clap(long)]
    max_paths: Option<u64>,

    /// Print the cells used by each word that is found
    #[clap(long)]
    show_path: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[clap(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// The one-line verdict printed for each word.
fn outcome_line(word: &str, outcome: &SearchOutcome) -> String {
    let verdict = match outcome {
        SearchOutcome::Found(_) => "true",
        SearchOutcome::NotFound => "false",
        SearchOutcome::BudgetExhausted { .. } => "budget exhausted",
    };
    format!("{}: {}", word, verdict)
}

fn main() {
    let args = Args::parse();

    Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let board = match read_board_file(&args.board_file) {
        Ok(board) => board,
        Err(e) => {
            error!("Failed to read board from {}: {}", args.board_file.display(), e);
            process::exit(1);
        }
    };
    info!(
        "Loaded {}x{} board from {}",
        board.width(),
        board.height(),
        args.board_file.display()
    );

    let budget = args
        .max_paths
        .map_or_else(SearchBudget::unlimited, SearchBudget::max_paths);

    for word in &args.words {
        let outcome = board.search(word, budget);
        println!("{}", outcome_line(word, &outcome));
        match outcome {
            SearchOutcome::Found(path) if args.show_path => {
                println!("{}\n", board.to_string_with_path(&path));
            }
            SearchOutcome::BudgetExhausted { expanded } => {
                info!("Gave up on '{}' after {} candidate paths", word, expanded);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boggle_solver::utils::board_from_str_array;

    #[test]
    fn test_outcome_lines() {
        let board = board_from_str_array(&["ILAW", "BNGE", "IUAO", "ASRL"]).unwrap();
        let unlimited = SearchBudget::unlimited();
        assert_eq!(
            outcome_line("BINGO", &board.search("BINGO", unlimited)),
            "BINGO: true"
        );
        assert_eq!(
            outcome_line("BINS", &board.search("BINS", unlimited)),
            "BINS: false"
        );
        assert_eq!(
            outcome_line("LINGO", &board.search("LINGO", SearchBudget::max_paths(0))),
            "LINGO: budget exhausted"
        );
    }

    #[test]
    fn test_args_log_level() {
        let args = Args::parse_from(["word_checker", "board.txt", "BINGO"]);
        assert_eq!(args.log_level(), LevelFilter::Warn);
        assert!(args.max_paths.is_none());

        let args = Args::parse_from(["word_checker", "-vv", "--max-paths", "10", "b.txt", "A"]);
        assert_eq!(args.log_level(), LevelFilter::Debug);
        assert_eq!(args.max_paths, Some(10));

        let args = Args::parse_from(["word_checker", "-q", "-v", "b.txt", "A"]);
        assert_eq!(args.log_level(), LevelFilter::Error);
    }
}
