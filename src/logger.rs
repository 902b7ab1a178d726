use anyhow::{Context, Result};
use chrono::Local;
use itertools::Itertools;
use colored::*;
use std::{fs::{self, File}, io::Write, path::PathBuf};

use crate::{board::Board, frontier::SearchNode, solver::{SearchObserver, Solution}};

/// Writes numbered `devlog(N).txt` files describing the search, echoing each
/// entry to the console.
pub struct DevLogger {
    dir: PathBuf,
    color: bool,
    step: bool,
    max_logs: usize,
    counter: usize,
}

impl DevLogger {
    pub fn new(dir: impl Into<PathBuf>, color: bool, step: bool, max_logs: usize) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
        Ok(Self { dir, color, step, max_logs, counter: 0 })
    }

    /// Number of entries written so far.
    pub fn written(&self) -> usize { self.counter }

    pub fn log(&mut self, title: &str, details: &str) -> Result<()> {
        if self.max_logs != 0 && self.counter >= self.max_logs { return Ok(()); }
        self.counter += 1;
        let path = self.dir.join(format!("devlog({}).txt", self.counter));

        let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut f = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        writeln!(f, "[{}] {}\n\n{}", ts, title, details)?;

        if self.color {
            println!("{} {}\n{}", "➤".blue().bold(), title.bold(), details);
        } else {
            println!("➤ {}\n{}", title, details);
        }

        if self.step {
            print!("-- press Enter to continue --");
            std::io::stdout().flush().ok();
            let mut s = String::new();
            std::io::stdin().read_line(&mut s).ok();
        }
        Ok(())
    }
}

impl SearchObserver for DevLogger {
    fn on_start(&mut self, start: &Board, h: u32) -> Result<()> {
        self.log("Initialization", &format!("Start board (h={}):\n{}", h, start.to_pretty_string()))
    }

    fn on_expand(&mut self, node: &SearchNode, frontier_len: usize) -> Result<()> {
        self.log(
            &format!("Expand f={} g={}", node.f, node.g),
            &format!("{}{} pending in frontier", node.board.to_pretty_string(), frontier_len),
        )
    }

    fn on_finish(&mut self, solution: Option<&Solution>) -> Result<()> {
        match solution {
            Some(s) => self.log(
                &format!("Solved in {} steps", s.steps),
                &format!(
                    "Moves: {}\nExpanded {} nodes, generated {} boards, frontier peak {}",
                    s.moves().iter().join(" "),
                    s.stats.expanded, s.stats.generated, s.stats.max_frontier,
                ),
            ),
            None => self.log("No solution", "Frontier exhausted or start rejected by parity check"),
        }
    }
}
