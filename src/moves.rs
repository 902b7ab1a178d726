use crate::board::{Board, Pos, SIZE};
use std::fmt;

/// Direction the blank travels in one slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction { Up, Down, Left, Right }

impl Direction {
    /// Fixed enumeration order; search traces depend on it.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The slide that turns `from` into `to`, if they are one slide apart.
    pub fn between(from: &Board, to: &Board) -> Option<Self> {
        successors(from).find(|(_, b)| b == to).map(|(d, _)| d)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        f.write_str(s)
    }
}

fn step(p: Pos, dir: Direction) -> Option<Pos> {
    let (dr, dc) = dir.offset();
    let r = p.r.checked_add_signed(dr)?;
    let c = p.c.checked_add_signed(dc)?;
    (r < SIZE && c < SIZE).then_some(Pos { r, c })
}

pub fn apply(board: &Board, dir: Direction) -> Option<Board> {
    let blank = board.blank()?;
    let target = step(blank, dir)?;
    Some(board.swapped(blank, target))
}

/// Every legal slide from `board`, in [`Direction::ALL`] order.
pub fn successors(board: &Board) -> impl Iterator<Item = (Direction, Board)> + '_ {
    Direction::ALL.into_iter().filter_map(move |d| apply(board, d).map(|b| (d, b)))
}

pub fn neighbors(board: &Board) -> Vec<Board> {
    let mut v = Vec::with_capacity(4);
    v.extend(successors(board).map(|(_, b)| b));
    v
}
