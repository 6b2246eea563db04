//! Clear module - bottom-row examination after a lock
//!
//! Only the bottom row is ever examined and only once per lock. Clearing it
//! shifts every surviving row down by one; if that completes the bottom row
//! again, the new row stays put until another tile locks. There is no
//! cascade.

use arrayvec::ArrayVec;

use sumfall_types::{ClearKind, Tile};

use crate::board::{Board, ROW_CELLS};
use crate::scoring::classify_sum;

/// A resolved bottom-row clear
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clear {
    /// Bonus or plain, decided by the row's face-value sum
    pub kind: ClearKind,
    /// Sum of the removed face values
    pub sum: u32,
    /// The removed tiles in left-to-right order
    pub tiles: ArrayVec<Tile, ROW_CELLS>,
}

/// Clear the bottom row if it is completely filled
///
/// Returns None (board untouched) while the row still has gaps. On a clear,
/// the row's sum is captured before removal so the caller can score it.
pub fn clear_bottom_row(board: &mut Board) -> Option<Clear> {
    if !board.is_row_full(0) {
        return None;
    }

    let sum = board.row_sum(0);
    let kind = classify_sum(sum);
    let tiles = board.take_bottom_row();

    Some(Clear { kind, sum, tiles })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_bottom_row(values: [u8; 7]) -> Board {
        let mut board = Board::new();
        for (x, value) in values.into_iter().enumerate() {
            board.set(x as i8, 0, Some(value));
        }
        board
    }

    #[test]
    fn test_partial_row_does_not_clear() {
        let mut board = Board::new();
        board.set(0, 0, Some(7));
        board.set(6, 0, Some(7));

        let before = board.clone();
        assert_eq!(clear_bottom_row(&mut board), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_bonus_sum_classifies_as_bonus() {
        // 5+2+4+3+1+7+1 = 23
        let mut board = board_with_bottom_row([5, 2, 4, 3, 1, 7, 1]);

        let clear = clear_bottom_row(&mut board).unwrap();
        assert_eq!(clear.kind, ClearKind::Bonus);
        assert_eq!(clear.sum, 23);
        assert_eq!(clear.tiles.len(), 7);
        assert_eq!(clear.tiles[0], Tile::new(0, 0, 5));
    }

    #[test]
    fn test_other_sum_classifies_as_plain() {
        // 7*4 = 28
        let mut board = board_with_bottom_row([4, 4, 4, 4, 4, 4, 4]);

        let clear = clear_bottom_row(&mut board).unwrap();
        assert_eq!(clear.kind, ClearKind::Plain);
        assert_eq!(clear.sum, 28);
    }

    #[test]
    fn test_clear_shifts_rows_down_without_cascading() {
        let mut board = board_with_bottom_row([0, 1, 2, 3, 4, 5, 6]);
        // A second full row above the bottom one
        for x in 0..7 {
            board.set(x, 1, Some(3));
        }
        board.set(2, 2, Some(7));

        let clear = clear_bottom_row(&mut board).unwrap();
        assert_eq!(clear.sum, 21);

        // The full row above dropped into the bottom row and stayed there
        assert!(board.is_row_full(0));
        assert_eq!(board.row_sum(0), 21);
        assert_eq!(board.get(2, 1), Some(Some(7)));
        assert_eq!(board.get(2, 2), Some(None));
    }
}
