//! Puzzle state representation and validation.
//!
//! A board is a flat, row-major permutation of `0..width*height` where 0 is
//! the blank. States are validated once at construction and never mutated,
//! so every heuristic can assume a well-formed board.

use crate::Error;

/// An immutable sliding-tile puzzle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    width: usize,
    height: usize,
    cells: Vec<u16>,
    empty_position: usize,
}

impl PuzzleState {
    /// Creates a state from a flat, row-major cell array.
    ///
    /// Validates that the dimensions are positive, the array has exactly
    /// `width * height` entries, and the entries form a permutation of
    /// `0..width*height` (so exactly one blank exists). Violations are
    /// reported as [`Error::MalformedBoard`].
    pub fn new(width: usize, height: usize, cells: Vec<u16>) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::MalformedBoard {
                reason: format!("dimensions must be positive, got {}x{}", width, height),
            });
        }

        let cell_count = width * height;
        if cells.len() != cell_count {
            return Err(Error::MalformedBoard {
                reason: format!(
                    "expected {} cells for a {}x{} board, got {}",
                    cell_count,
                    width,
                    height,
                    cells.len()
                ),
            });
        }

        let mut seen = vec![false; cell_count];
        for &value in &cells {
            if value as usize >= cell_count {
                return Err(Error::MalformedBoard {
                    reason: format!("cell value {} out of range 0..{}", value, cell_count),
                });
            }
            if seen[value as usize] {
                return Err(Error::MalformedBoard {
                    reason: format!("duplicate cell value {}", value),
                });
            }
            seen[value as usize] = true;
        }

        // a permutation of 0..n contains 0 exactly once
        let empty_position = cells
            .iter()
            .position(|&v| v == 0)
            .ok_or_else(|| Error::MalformedBoard {
                reason: "board has no blank cell".to_string(),
            })?;

        Ok(Self {
            width,
            height,
            cells,
            empty_position,
        })
    }

    /// Creates the goal configuration: tiles 1..n in order, blank last.
    pub fn goal(width: usize, height: usize) -> Result<Self, Error> {
        let cell_count = width * height;
        let cells = (0..cell_count)
            .map(|i| if i + 1 == cell_count { 0 } else { (i + 1) as u16 })
            .collect();
        Self::new(width, height, cells)
    }

    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat row-major cell array; 0 is the blank.
    pub fn cells(&self) -> &[u16] {
        &self.cells
    }

    /// Linear index of the blank cell.
    pub fn empty_position(&self) -> usize {
        self.empty_position
    }

    /// Row of a linear cell index.
    #[inline]
    pub fn row(&self, position: usize) -> usize {
        position / self.width
    }

    /// Column of a linear cell index.
    #[inline]
    pub fn col(&self, position: usize) -> usize {
        position % self.width
    }

    /// Returns true if every tile sits on its goal cell and the blank is last.
    pub fn is_goal(&self) -> bool {
        let last = self.cells.len() - 1;
        self.cells[last] == 0
            && self.cells[..last]
                .iter()
                .enumerate()
                .all(|(i, &v)| v as usize == i + 1)
    }

    /// Decides solvability via the standard inversion-parity rule.
    ///
    /// Odd widths and width 2 are solvable iff the inversion count over
    /// non-blank tiles is even; even widths >= 4 additionally fold in the
    /// blank's row counted from the bottom.
    pub fn is_solvable(&self) -> bool {
        let mut inversions = 0usize;
        for (i, &a) in self.cells.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for &b in &self.cells[i + 1..] {
                if b != 0 && a > b {
                    inversions += 1;
                }
            }
        }

        if self.width == 2 || self.width % 2 == 1 {
            inversions % 2 == 0
        } else {
            let empty_row_from_bottom = self.height - 1 - self.row(self.empty_position);
            (inversions + empty_row_from_bottom) % 2 == 0
        }
    }

    /// Manhattan distance between a tile's current cell and its goal cell.
    ///
    /// The blank contributes nothing.
    pub fn manhattan_distance(&self, position: usize, value: u16) -> u32 {
        if value == 0 {
            return 0;
        }

        let target = value as usize - 1;
        let target_row = target / self.width;
        let target_col = target % self.width;
        let current_row = self.row(position);
        let current_col = self.col(position);

        (target_row.abs_diff(current_row) + target_col.abs_diff(current_col)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_state_is_goal() {
        let state = PuzzleState::goal(3, 3).unwrap();
        assert_eq!(state.cells(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(state.empty_position(), 8);
        assert!(state.is_goal());
    }

    #[test]
    fn test_non_goal_state_is_not_goal() {
        let state = PuzzleState::new(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert!(!state.is_goal());
    }

    #[test]
    fn test_empty_position_is_derived() {
        let state = PuzzleState::new(3, 3, vec![1, 2, 3, 4, 0, 6, 7, 8, 5]).unwrap();
        assert_eq!(state.empty_position(), 4);
    }

    #[test]
    fn test_rejects_wrong_cell_count() {
        let result = PuzzleState::new(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 0]);
        assert!(matches!(result, Err(Error::MalformedBoard { .. })));
    }

    #[test]
    fn test_rejects_duplicate_values() {
        let result = PuzzleState::new(2, 2, vec![1, 1, 2, 0]);
        assert!(matches!(result, Err(Error::MalformedBoard { .. })));
    }

    #[test]
    fn test_rejects_out_of_range_value() {
        let result = PuzzleState::new(2, 2, vec![1, 2, 4, 0]);
        assert!(matches!(result, Err(Error::MalformedBoard { .. })));
    }

    #[test]
    fn test_rejects_missing_blank() {
        // 0 replaced by a duplicate, caught as duplicate before blank check
        let result = PuzzleState::new(2, 2, vec![1, 2, 3, 3]);
        assert!(matches!(result, Err(Error::MalformedBoard { .. })));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let result = PuzzleState::new(0, 3, vec![]);
        assert!(matches!(result, Err(Error::MalformedBoard { .. })));
    }

    #[test]
    fn test_solvability_odd_width() {
        let solvable = PuzzleState::new(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert!(solvable.is_solvable());

        // single swap of tiles 1 and 2 flips parity
        let unsolvable = PuzzleState::new(3, 3, vec![2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert!(!unsolvable.is_solvable());
    }

    #[test]
    fn test_solvability_even_width() {
        let one_move = PuzzleState::new(
            4,
            4,
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15],
        )
        .unwrap();
        assert!(one_move.is_solvable());

        // the classic 14-15 swap is unsolvable
        let swapped = PuzzleState::new(
            4,
            4,
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0],
        )
        .unwrap();
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn test_solvability_width_two() {
        let goal = PuzzleState::goal(2, 2).unwrap();
        assert!(goal.is_solvable());

        let swapped = PuzzleState::new(2, 2, vec![2, 1, 3, 0]).unwrap();
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn test_manhattan_distance_helper() {
        let state = PuzzleState::new(3, 3, vec![8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        // tile 8 at (0,0), goal (2,1)
        assert_eq!(state.manhattan_distance(0, 8), 3);
        // tile 6 at (0,2), goal (1,2)
        assert_eq!(state.manhattan_distance(2, 6), 1);
        // blank contributes nothing
        assert_eq!(state.manhattan_distance(8, 0), 0);
    }

    #[test]
    fn test_row_col_helpers() {
        let state = PuzzleState::goal(4, 4).unwrap();
        assert_eq!(state.row(0), 0);
        assert_eq!(state.col(0), 0);
        assert_eq!(state.row(7), 1);
        assert_eq!(state.col(7), 3);
        assert_eq!(state.row(15), 3);
        assert_eq!(state.col(15), 3);
    }
}
