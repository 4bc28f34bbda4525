use boggle_solver::engine::Board;
use boggle_solver::utils::{board_to_text, check_file_alphabet};
use clap::Parser;
use env_logger::Builder;
use log::{debug, error, LevelFilter};
use std::io::Write;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Print a seeded random Boggle board", long_about = None)]
struct Args {
    /// Number of columns
    #[clap(long, default_value_t = 4)]
    width: usize,

    /// Number of rows
    #[clap(long, default_value_t = 4)]
    height: usize,

    /// Seed for the random generator; the same seed always yields the same board
    #[clap(short, long, default_value_t = 514514)]
    seed: u64,

    /// Letters to draw cells from (no whitespace or `#`)
    #[clap(short, long, default_value = "ABCDEFGHIJKLMNOPQRSTUVWXYZ")]
    alphabet: String,

    /// Log generation details
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let alphabet: Vec<char> = args.alphabet.chars().collect();
    // The printed board must read back through `word_checker` unchanged.
    if let Err(e) = check_file_alphabet(&alphabet) {
        error!("Cannot generate board: {}", e);
        process::exit(1);
    }
    let board = match Board::new_random_with_seed(args.width, args.height, &alphabet, args.seed) {
        Ok(board) => board,
        Err(e) => {
            error!("Cannot generate board: {}", e);
            process::exit(1);
        }
    };
    debug!(
        "Generated {}x{} board with seed {} from {} letters",
        board.width(),
        board.height(),
        args.seed,
        alphabet.len()
    );

    print!("{}", board_to_text(&board));
}
