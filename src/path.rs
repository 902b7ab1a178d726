use crate::{board::Board, moves::Direction};
use itertools::Itertools;
use std::collections::HashMap;

/// Walks `parents` back from `goal` until a board with no parent, which must
/// be `start`, and returns the boards in start-to-goal order.
pub fn reconstruct(goal: Board, parents: &HashMap<Board, Board>, start: Board) -> Vec<Board> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    debug_assert_eq!(current, start, "parent chain must end at the start board");
    path.reverse();
    path
}

/// True when every consecutive pair differs by exactly one legal slide.
pub fn is_valid_path(path: &[Board]) -> bool {
    path.iter().tuple_windows().all(|(a, b)| Direction::between(a, b).is_some())
}

pub fn moves_of(path: &[Board]) -> Vec<Direction> {
    path.iter().tuple_windows().filter_map(|(a, b)| Direction::between(a, b)).collect()
}
