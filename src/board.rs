use anyhow::{bail, Result};
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

pub type Tile = u8; // 0 = blank, 1..=8 tiles

pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos { pub r: usize, pub c: usize }

/// One arrangement of the 3x3 puzzle. Always a permutation of 0..=8 when
/// built through [`Board::new`] or [`Board::from_compact`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[[Tile; SIZE]; SIZE]", into = "[[Tile; SIZE]; SIZE]"))]
pub struct Board {
    cells: [[Tile; SIZE]; SIZE],
}

pub const GOAL: Board = Board { cells: [[1, 2, 3], [4, 5, 6], [7, 8, 0]] };

pub const DEFAULT_START: Board = Board { cells: [[1, 2, 5], [4, 0, 3], [6, 8, 7]] };

impl Board {
    pub fn new(rows: [[Tile; SIZE]; SIZE]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for &t in rows.iter().flatten() {
            if t as usize >= CELLS { bail!("tile {t} out of range 0..={}", CELLS - 1) }
            if seen[t as usize] { bail!("tile {t} appears more than once") }
            seen[t as usize] = true;
        }
        Ok(Self { cells: rows })
    }

    /// Parses nine tiles in row-major order. Separators (whitespace, commas,
    /// pipes, brackets) are ignored and `.` or `_` may stand for the blank.
    pub fn from_compact(s: &str) -> Result<Self> {
        let mut tiles = Vec::with_capacity(CELLS);
        for ch in s.chars() {
            match ch {
                '0'..='9' => tiles.push(ch as u8 - b'0'),
                '.' | '_' => tiles.push(0),
                c if c.is_whitespace() => {}
                ',' | '|' | '[' | ']' => {}
                _ => bail!("invalid char {ch:?} in board"),
            }
        }
        if tiles.len() != CELLS { bail!("board must have {CELLS} tiles (have {})", tiles.len()) }
        let mut rows = [[0; SIZE]; SIZE];
        for (i, t) in tiles.into_iter().enumerate() { rows[i / SIZE][i % SIZE] = t; }
        Self::new(rows)
    }

    pub fn to_compact(&self) -> String {
        self.tiles().map(|t| (b'0' + t) as char).collect()
    }

    pub fn to_pretty_string(&self) -> String {
        let mut s = String::from("+-------+\n");
        for row in &self.cells {
            s.push('|');
            for &t in row {
                s.push(' ');
                s.push(if t == 0 { '·' } else { (b'0' + t) as char });
            }
            s.push_str(" |\n");
        }
        s.push_str("+-------+\n");
        s
    }

    pub fn get(&self, p: Pos) -> Tile { self.cells[p.r][p.c] }
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ { self.cells.iter().flatten().copied() }
    pub fn is_goal(&self) -> bool { *self == GOAL }

    /// Location of the blank. `None` only for a malformed board.
    pub fn blank(&self) -> Option<Pos> {
        Self::iterate_cells().find(|&p| self.get(p) == 0)
    }

    pub fn swapped(&self, a: Pos, b: Pos) -> Self {
        let mut cells = self.cells;
        cells[a.r][a.c] = self.cells[b.r][b.c];
        cells[b.r][b.c] = self.cells[a.r][a.c];
        Self { cells }
    }

    /// Pairs of non-blank tiles that appear in reverse order, row-major.
    pub fn inversions(&self) -> usize {
        self.cells.iter().flatten().copied()
            .filter(|&t| t != 0)
            .tuple_combinations()
            .filter(|&(a, b)| a > b)
            .count()
    }

    /// On an odd-width board a slide never changes inversion parity, so only
    /// boards sharing the goal's parity can reach it.
    pub fn is_solvable(&self) -> bool { self.inversions() % 2 == GOAL.inversions() % 2 }

    pub fn iterate_cells() -> impl Iterator<Item = Pos> { (0..CELLS).map(|i| Pos { r: i / SIZE, c: i % SIZE }) }
}

impl Ord for Board {
    fn cmp(&self, other: &Self) -> Ordering { self.tiles().cmp(other.tiles()) }
}

impl PartialOrd for Board {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl TryFrom<[[Tile; SIZE]; SIZE]> for Board {
    type Error = anyhow::Error;
    fn try_from(rows: [[Tile; SIZE]; SIZE]) -> Result<Self> { Self::new(rows) }
}

impl From<Board> for [[Tile; SIZE]; SIZE] {
    fn from(b: Board) -> Self { b.cells }
}

impl Default for Board {
    fn default() -> Self { GOAL }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            writeln!(f, "{}", row.iter().map(|&t| if t == 0 { '.' } else { (b'0' + t) as char }).join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_accepts_separators() {
        let b = Board::from_compact("[1,2,3] | [4,5,6] | [7,8,_]").unwrap();
        assert_eq!(b, GOAL);
        assert_eq!(b.to_compact(), "123456780");
    }

    #[test]
    fn rejects_malformed() {
        assert!(Board::from_compact("12345678").is_err());
        assert!(Board::from_compact("1234567800").is_err());
        assert!(Board::from_compact("123456788").is_err());
        assert!(Board::from_compact("12345678x").is_err());
        assert!(Board::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).is_err());
    }

    #[test]
    fn ordering_is_row_major() {
        let a = Board::from_compact("012345678").unwrap();
        let b = Board::from_compact("102345678").unwrap();
        assert!(a < b);
        assert!(GOAL > a);
        assert_eq!(GOAL.cmp(&GOAL), Ordering::Equal);
    }

    #[test]
    fn blank_and_swap() {
        assert_eq!(GOAL.blank(), Some(Pos { r: 2, c: 2 }));
        assert_eq!(DEFAULT_START.blank(), Some(Pos { r: 1, c: 1 }));
        let s = GOAL.swapped(Pos { r: 2, c: 2 }, Pos { r: 1, c: 2 });
        assert_eq!(s.to_compact(), "123450786");
        assert_eq!(GOAL.to_compact(), "123456780");
    }

    #[test]
    fn parity() {
        assert_eq!(GOAL.inversions(), 0);
        assert!(DEFAULT_START.is_solvable());
        let swapped = GOAL.swapped(Pos { r: 0, c: 0 }, Pos { r: 0, c: 1 });
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn pretty_marks_blank() {
        let s = GOAL.to_pretty_string();
        assert!(s.contains("| 7 8 · |"));
        assert_eq!(GOAL.to_string(), "1 2 3\n4 5 6\n7 8 .\n");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_rows_and_validates() {
        let json = serde_json::to_string(&DEFAULT_START).unwrap();
        assert_eq!(json, "[[1,2,5],[4,0,3],[6,8,7]]");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DEFAULT_START);
        assert!(serde_json::from_str::<Board>("[[1,2,3],[4,5,6],[7,8,250]]").is_err());
        assert!(serde_json::from_str::<Board>("[[1,2,3],[4,5,6],[7,8,8]]").is_err());
    }

    #[test]
    fn try_from_rows_validates() {
        assert_eq!(Board::try_from([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap(), GOAL);
        assert!(Board::try_from([[1, 2, 3], [4, 5, 6], [7, 8, 250]]).is_err());
        assert_eq!(<[[Tile; SIZE]; SIZE]>::from(GOAL), [[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    }
}
