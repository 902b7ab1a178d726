use crate::{
    board::Board,
    frontier::{Frontier, SearchNode},
    heuristic::misplaced,
    moves::{neighbors, Direction},
    path::{moves_of, reconstruct},
};
use anyhow::Result;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped and expanded (the goal pop is not counted).
    pub expanded: usize,
    /// Distinct boards ever enqueued, start included.
    pub generated: usize,
    pub max_frontier: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub steps: usize,
    /// Start to goal inclusive; `len() == steps + 1`.
    pub path: Vec<Board>,
    pub stats: SearchStats,
}

impl Solution {
    pub fn moves(&self) -> Vec<Direction> { moves_of(&self.path) }
}

/// Hooks into the search loop. Returning an error aborts the search.
pub trait SearchObserver {
    fn on_start(&mut self, _start: &Board, _h: u32) -> Result<()> { Ok(()) }
    fn on_expand(&mut self, _node: &SearchNode, _frontier_len: usize) -> Result<()> { Ok(()) }
    fn on_finish(&mut self, _solution: Option<&Solution>) -> Result<()> { Ok(()) }
}

/// Observer that ignores every event.
pub struct Silent;

impl SearchObserver for Silent {}

#[derive(Clone, Copy, Debug, Default)]
pub struct Solver { parity_check: bool }

impl Solver {
    pub fn new() -> Self { Self::default() }

    /// Reject boards of the wrong permutation parity before searching
    /// instead of exhausting their half of the state space.
    pub fn with_parity_check(mut self, on: bool) -> Self { self.parity_check = on; self }

    /// `None` means the goal is unreachable from `start`.
    pub fn solve(&self, start: Board) -> Option<Solution> {
        // Silent never errors
        self.solve_with(start, &mut Silent).ok().flatten()
    }

    pub fn solve_with(&self, start: Board, observer: &mut impl SearchObserver) -> Result<Option<Solution>> {
        let h0 = misplaced(&start);
        debug!("search start {} h={}", start.to_compact(), h0);
        observer.on_start(&start, h0)?;

        if self.parity_check && !start.is_solvable() {
            debug!("parity check rejected {}", start.to_compact());
            observer.on_finish(None)?;
            return Ok(None);
        }

        let mut frontier = Frontier::new();
        let mut visited: HashSet<Board> = HashSet::new();
        let mut parents: HashMap<Board, Board> = HashMap::new();
        let mut expanded = 0usize;

        frontier.push(SearchNode { f: h0, g: 0, board: start });
        visited.insert(start);

        while let Some(node) = frontier.pop() {
            if node.board.is_goal() {
                let path = reconstruct(node.board, &parents, start);
                let solution = Solution {
                    steps: node.g as usize,
                    path,
                    stats: SearchStats { expanded, generated: visited.len(), max_frontier: frontier.high_water() },
                };
                debug!("solved in {} steps ({} expanded, {} generated)", solution.steps, expanded, visited.len());
                observer.on_finish(Some(&solution))?;
                return Ok(Some(solution));
            }

            expanded += 1;
            trace!("expand f={} g={} {}", node.f, node.g, node.board.to_compact());
            observer.on_expand(&node, frontier.len())?;

            let g = node.g + 1;
            for child in neighbors(&node.board) {
                if !visited.insert(child) { continue; }
                parents.insert(child, node.board);
                frontier.push(SearchNode { f: g + misplaced(&child), g, board: child });
            }
        }

        debug!("frontier exhausted after {} expansions; no solution", expanded);
        observer.on_finish(None)?;
        Ok(None)
    }
}
