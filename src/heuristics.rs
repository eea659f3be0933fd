//! Direct-computation heuristics: Hamming, Manhattan, and Manhattan with
//! linear conflicts.
//!
//! Each is a pure function of a [`PuzzleState`] with no shared state, so the
//! implementations are zero-sized types behind the [`Heuristic`] trait.

use crate::state::PuzzleState;
use crate::{Error, Heuristic};

/// Counts tiles that are not on their goal cell.
pub struct Hamming;

impl Heuristic for Hamming {
    fn name(&self) -> &'static str {
        "Hamming Distance"
    }

    fn abbreviation(&self) -> &'static str {
        "hd"
    }

    fn description(&self) -> &'static str {
        "Number of tiles not in their goal position"
    }

    fn calculate(&self, state: &PuzzleState) -> Result<u32, Error> {
        let misplaced = state
            .cells()
            .iter()
            .enumerate()
            .filter(|&(i, &v)| v != 0 && v as usize != i + 1)
            .count();
        Ok(misplaced as u32)
    }
}

/// Sums each tile's row and column offset from its goal cell.
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn name(&self) -> &'static str {
        "Manhattan Distance"
    }

    fn abbreviation(&self) -> &'static str {
        "md"
    }

    fn description(&self) -> &'static str {
        "Sum of tile distances to their goal positions"
    }

    fn calculate(&self, state: &PuzzleState) -> Result<u32, Error> {
        let total = state
            .cells()
            .iter()
            .enumerate()
            .map(|(i, &v)| state.manhattan_distance(i, v))
            .sum();
        Ok(total)
    }
}

/// Manhattan distance plus a penalty of 2 per linear conflict.
///
/// Two tiles are in linear conflict when both already occupy their goal row
/// (or column) but appear in reversed relative order, which forces one of
/// them to temporarily leave the line. The penalty keeps the estimate
/// admissible: each conflict costs at least two extra moves.
pub struct LinearConflicts;

impl LinearConflicts {
    /// Counts conflicts in one row among tiles whose goal row is that row.
    fn row_conflicts(state: &PuzzleState, row: usize) -> u32 {
        let width = state.width();
        let mut tiles_in_row: Vec<u16> = Vec::with_capacity(width);

        for col in 0..width {
            let value = state.cells()[row * width + col];
            if value != 0 && (value as usize - 1) / width == row {
                tiles_in_row.push(value);
            }
        }

        count_inversions(&tiles_in_row)
    }

    /// Counts conflicts in one column among tiles whose goal column is that
    /// column.
    fn col_conflicts(state: &PuzzleState, col: usize) -> u32 {
        let width = state.width();
        let mut tiles_in_col: Vec<u16> = Vec::with_capacity(state.height());

        for row in 0..state.height() {
            let value = state.cells()[row * width + col];
            if value != 0 && (value as usize - 1) % width == col {
                tiles_in_col.push(value);
            }
        }

        count_inversions(&tiles_in_col)
    }
}

/// Pairs appearing in decreasing value order.
fn count_inversions(values: &[u16]) -> u32 {
    let mut inversions = 0;
    for (i, &a) in values.iter().enumerate() {
        for &b in &values[i + 1..] {
            if a > b {
                inversions += 1;
            }
        }
    }
    inversions
}

impl Heuristic for LinearConflicts {
    fn name(&self) -> &'static str {
        "Manhattan Distance with Linear Conflicts"
    }

    fn abbreviation(&self) -> &'static str {
        "mc"
    }

    fn description(&self) -> &'static str {
        "Manhattan distance plus 2 for each pair of conflicting tiles"
    }

    fn calculate(&self, state: &PuzzleState) -> Result<u32, Error> {
        let manhattan = Manhattan.calculate(state)?;

        let mut conflicts = 0;
        for row in 0..state.height() {
            conflicts += Self::row_conflicts(state, row);
        }
        for col in 0..state.width() {
            conflicts += Self::col_conflicts(state, col);
        }

        Ok(manhattan + 2 * conflicts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(width: usize, height: usize, cells: &[u16]) -> PuzzleState {
        PuzzleState::new(width, height, cells.to_vec()).unwrap()
    }

    #[test]
    fn test_all_zero_on_goal() {
        for (w, h) in [(2, 2), (3, 3), (4, 4)] {
            let goal = PuzzleState::goal(w, h).unwrap();
            assert_eq!(Hamming.calculate(&goal).unwrap(), 0);
            assert_eq!(Manhattan.calculate(&goal).unwrap(), 0);
            assert_eq!(LinearConflicts.calculate(&goal).unwrap(), 0);
        }
    }

    #[test]
    fn test_one_move_from_goal() {
        let s = state(3, 3, &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(Hamming.calculate(&s).unwrap(), 1);
        assert_eq!(Manhattan.calculate(&s).unwrap(), 1);
        assert_eq!(LinearConflicts.calculate(&s).unwrap(), 1);
    }

    #[test]
    fn test_adjacent_tile_swap() {
        let s = state(3, 3, &[2, 1, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(Hamming.calculate(&s).unwrap(), 2);
        assert_eq!(Manhattan.calculate(&s).unwrap(), 2);
        // tiles 1 and 2 are both in goal row 0 and reversed: one conflict
        assert_eq!(LinearConflicts.calculate(&s).unwrap(), 4);
    }

    #[test]
    fn test_full_reversal() {
        let s = state(3, 3, &[8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(Hamming.calculate(&s).unwrap(), 8);
        assert_eq!(Manhattan.calculate(&s).unwrap(), 16);
        // conflicts: (5,4) in row 1 and (6,3) in column 2
        assert_eq!(LinearConflicts.calculate(&s).unwrap(), 20);
    }

    #[test]
    fn test_2x2_swap() {
        let s = state(2, 2, &[2, 1, 3, 0]);
        assert_eq!(Hamming.calculate(&s).unwrap(), 2);
        assert_eq!(Manhattan.calculate(&s).unwrap(), 2);
        assert_eq!(LinearConflicts.calculate(&s).unwrap(), 4);
    }

    #[test]
    fn test_admissibility_ordering() {
        let boards: [&[u16]; 5] = [
            &[1, 2, 3, 4, 5, 6, 7, 8, 0],
            &[1, 2, 3, 4, 5, 6, 7, 0, 8],
            &[2, 1, 3, 4, 5, 6, 7, 8, 0],
            &[8, 7, 6, 5, 4, 3, 2, 1, 0],
            &[8, 1, 3, 4, 0, 2, 7, 6, 5],
        ];

        for cells in boards {
            let s = state(3, 3, cells);
            let hd = Hamming.calculate(&s).unwrap();
            let md = Manhattan.calculate(&s).unwrap();
            let mc = LinearConflicts.calculate(&s).unwrap();
            assert!(hd <= md, "hamming {} exceeds manhattan {}", hd, md);
            assert!(md <= mc, "manhattan {} exceeds linear conflicts {}", md, mc);
        }
    }

    #[test]
    fn test_conflict_requires_goal_row_membership() {
        // 8 and 7 are reversed in row 0 but belong in row 2: no conflict
        let s = state(3, 3, &[8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(LinearConflicts::row_conflicts(&s, 0), 0);
        assert_eq!(LinearConflicts::row_conflicts(&s, 1), 1);
    }

    #[test]
    fn test_metadata() {
        assert_eq!(Hamming.abbreviation(), "hd");
        assert_eq!(Manhattan.abbreviation(), "md");
        assert_eq!(LinearConflicts.abbreviation(), "mc");
    }
}
