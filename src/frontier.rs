//! Min-ordered frontier of pending search nodes.
//!
//! `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop the
//! lowest `(f, g, board)` first.

use crate::board::Board;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One frontier entry: estimated total cost `f`, path cost `g`, and the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub f: u32,
    pub g: u32,
    pub board: Board,
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.cmp(&other.f)
            .then(self.g.cmp(&other.g))
            .then_with(|| self.board.cmp(&other.board))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<SearchNode>>,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, node: SearchNode) {
        self.heap.push(Reverse(node));
        self.high_water = self.high_water.max(self.heap.len());
    }

    pub fn pop(&mut self) -> Option<SearchNode> { self.heap.pop().map(|Reverse(n)| n) }

    pub fn len(&self) -> usize { self.heap.len() }
    pub fn is_empty(&self) -> bool { self.heap.is_empty() }

    /// Largest size the frontier reached.
    pub fn high_water(&self) -> usize { self.high_water }
}
