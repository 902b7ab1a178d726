use crate::board::{Board, GOAL};

/// Misplaced-tiles estimate: non-blank tiles not on their goal cell.
/// Admissible and consistent, since one slide moves exactly one tile.
pub fn misplaced(board: &Board) -> u32 {
    board.tiles().zip(GOAL.tiles()).filter(|&(t, g)| t != 0 && t != g).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::DEFAULT_START;

    #[test]
    fn goal_is_zero() { assert_eq!(misplaced(&GOAL), 0); }

    #[test]
    fn blank_is_not_counted() {
        // only 6 is misplaced; the blank sits on 6's cell
        assert_eq!(misplaced(&Board::from_compact("123450786").unwrap()), 1);
        assert_eq!(misplaced(&DEFAULT_START), 4);
    }
}
