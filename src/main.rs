use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::*;
use hachi::{
    board::{Board, DEFAULT_START},
    logger::DevLogger,
    shuffle::{Shuffler, DEFAULT_SHUFFLE_MOVES},
    solver::{Silent, Solution, Solver},
};
use std::{fs, path::{Path, PathBuf}, thread, time::{Duration, Instant}};

#[derive(Parser, Debug)]
#[command(name = "hachi", version, about = "Optimal 8-puzzle solver (A* with misplaced-tiles heuristic)")]
struct Cli {
    /// Start board as 9 digits in row-major order, 0 or . for the blank (e.g. 125403687).
    #[arg(short, long, conflicts_with_all = ["input", "shuffle"])]
    board: Option<String>,

    /// Path to a file holding the start board. Use - to read from stdin.
    #[arg(short, long, conflicts_with = "shuffle")]
    input: Option<PathBuf>,

    /// Start from a random walk of this many moves away from the goal (50 if no value given).
    #[arg(short, long)]
    shuffle: Option<Option<usize>>,

    /// Seed for --shuffle.
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Reject unsolvable boards by permutation parity instead of exhausting the search.
    #[arg(long)]
    precheck: bool,

    /// Write step-by-step devlogs into this directory.
    #[arg(long)]
    devlog: Option<PathBuf>,

    /// Maximum devlogs to write (0 = unlimited). An unsolvable start without
    /// --precheck expands all 181440 boards of its parity class, one devlog each.
    #[arg(long, default_value_t = DEFAULT_MAX_LOGS)]
    max_logs: usize,

    /// Step-by-step mode (pauses after each devlog). Press Enter to continue.
    #[arg(long, requires = "devlog")]
    step: bool,

    /// Colored console output
    #[arg(long)]
    color: bool,

    /// Pause between boards when printing the solution path.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Print the solution as JSON instead of boards.
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

const DEFAULT_MAX_LOGS: usize = 1000;

fn read_board(input: &Path) -> Result<Board> {
    let s = if input.as_os_str() == "-" {
        use std::io::{self, Read};
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?
    };
    Board::from_compact(&s).context("parse board")
}

fn start_board(cli: &Cli) -> Result<Board> {
    if let Some(s) = &cli.board { return Board::from_compact(s).context("parse --board"); }
    if let Some(p) = &cli.input { return read_board(p); }
    if let Some(n) = cli.shuffle {
        return Ok(Shuffler::new(cli.seed).random_walk(n.unwrap_or(DEFAULT_SHUFFLE_MOVES)));
    }
    Ok(DEFAULT_START)
}

fn print_solution(cli: &Cli, solution: &Solution) {
    let moves = solution.moves();
    for (i, board) in solution.path.iter().enumerate() {
        let header = match i.checked_sub(1).and_then(|m| moves.get(m)) {
            None => "Start".to_string(),
            Some(dir) => format!("Step {}: blank {}", i, dir),
        };
        if cli.color { println!("{}", header.cyan().bold()); } else { println!("{}", header); }
        print!("{}", board.to_pretty_string());
        if cli.delay_ms > 0 && i + 1 < solution.path.len() {
            thread::sleep(Duration::from_millis(cli.delay_ms));
        }
    }
}

/// Timing is left out when devlogs ran, since their file I/O and --step
/// pauses would be counted as search time.
fn summary(solution: &Solution, elapsed: Option<Duration>) -> String {
    match elapsed {
        Some(t) => format!(
            "Puzzle solved in {} steps! ({:.3} ms, {} nodes expanded)",
            solution.steps,
            t.as_secs_f64() * 1000.0,
            solution.stats.expanded,
        ),
        None => format!("Puzzle solved in {} steps! ({} nodes expanded)", solution.steps, solution.stats.expanded),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = start_board(&cli)?;
    log::info!("start board {}", start.to_compact());

    let solver = Solver::new().with_parity_check(cli.precheck);
    let (result, elapsed) = match &cli.devlog {
        Some(dir) => {
            let mut logger = DevLogger::new(dir, cli.color, cli.step, cli.max_logs)?;
            (solver.solve_with(start, &mut logger)?, None)
        }
        None => {
            let began = Instant::now();
            let result = solver.solve_with(start, &mut Silent)?;
            (result, Some(began.elapsed()))
        }
    };

    let Some(solution) = result else {
        bail!("no solution found for {}", start.to_compact());
    };

    #[cfg(feature = "serde")]
    {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&solution)?);
            return Ok(());
        }
    }

    print_solution(&cli, &solution);
    let summary = summary(&solution, elapsed);
    if cli.color { println!("\n{}", summary.green().bold()); } else { println!("\n{}", summary); }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("hachi").chain(args.iter().copied()))
    }

    #[test]
    fn bare_shuffle_uses_default_walk() {
        let cli = parse(&["--shuffle", "--seed", "9"]).unwrap();
        assert_eq!(cli.shuffle, Some(None));
        assert_eq!(start_board(&cli).unwrap(), Shuffler::new(Some(9)).random_walk(DEFAULT_SHUFFLE_MOVES));
        let cli = parse(&["--shuffle", "3", "--seed", "9"]).unwrap();
        assert_eq!(start_board(&cli).unwrap(), Shuffler::new(Some(9)).random_walk(3));
    }

    #[test]
    fn seed_needs_shuffle() {
        assert!(parse(&["--seed", "4"]).is_err());
        assert_eq!(start_board(&parse(&[]).unwrap()).unwrap(), DEFAULT_START);
    }

    #[test]
    fn devlogs_capped_by_default() {
        assert_eq!(parse(&["--devlog", "logs"]).unwrap().max_logs, DEFAULT_MAX_LOGS);
        assert_eq!(parse(&["--devlog", "logs", "--max-logs", "0"]).unwrap().max_logs, 0);
    }

    #[test]
    fn summary_omits_time_after_devlogs() {
        let solution = Solver::new().solve(Board::from_compact("123450786").unwrap()).unwrap();
        let timed = summary(&solution, Some(Duration::from_millis(2)));
        assert!(timed.contains("2.000 ms"), "{timed}");
        let untimed = summary(&solution, None);
        assert_eq!(untimed, "Puzzle solved in 1 steps! (1 nodes expanded)");
    }
}
