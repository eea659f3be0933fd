//! Walking Distance heuristic and its pattern database.
//!
//! The database abstracts a board into a `width x width` matrix counting,
//! for each current row, how many tiles want to end up in each goal row
//! (the blank is never counted). Boards that induce the same matrix are
//! interchangeable for distance purposes, which shrinks the state space
//! enough to enumerate exhaustively: a breadth-first search from the goal
//! matrix assigns every reachable matrix its exact minimum move count.
//! Evaluation performs one row-wise and one column-wise lookup and sums
//! them, which stays admissible because vertical and horizontal blank moves
//! are independent lower bounds.

use std::collections::VecDeque;
use std::fmt::Write as _;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::state::PuzzleState;
use crate::{Error, Heuristic};

/// Largest supported board width for the pattern database.
///
/// The abstract state space grows combinatorially with width; widths 5 and 6
/// already take noticeable time and memory to enumerate, so anything larger
/// is rejected at construction instead of exhausting memory.
pub const MAX_WIDTH: usize = 6;

/// Flattened count matrix used as the database key.
///
/// Cell `(r, g)` lives at index `r * width + g`; the tail beyond
/// `width * width` stays zero. Using the raw counts as the key is
/// collision-free for every supported width, unlike a concatenated decimal
/// digit string, which is only unambiguous while each count fits one digit.
type WdKey = [u8; MAX_WIDTH * MAX_WIDTH];

/// Which board axis an abstract matrix summarizes.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Row,
    Column,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
        }
    }
}

/// A walking distance abstract state.
///
/// Plain `Copy` value so BFS expansion can clone-per-successor without heap
/// traffic; each successor is an independent immutable snapshot.
#[derive(Clone, Copy, PartialEq, Eq)]
struct WdMatrix {
    counts: WdKey,
    width: usize,
}

impl WdMatrix {
    fn zero(width: usize) -> Self {
        Self {
            counts: [0; MAX_WIDTH * MAX_WIDTH],
            width,
        }
    }

    /// The goal matrix: `width` tiles on each diagonal cell, minus the blank
    /// in the last row.
    fn goal(width: usize) -> Self {
        let mut matrix = Self::zero(width);
        for i in 0..width {
            matrix.counts[i * width + i] = width as u8;
        }
        matrix.counts[(width - 1) * width + (width - 1)] -= 1;
        matrix
    }

    #[inline]
    fn get(&self, row: usize, goal: usize) -> u8 {
        self.counts[row * self.width + goal]
    }

    #[inline]
    fn add(&mut self, row: usize, goal: usize, delta: i8) {
        let cell = &mut self.counts[row * self.width + goal];
        *cell = cell.wrapping_add_signed(delta);
    }

    fn key(&self) -> WdKey {
        self.counts
    }

    /// Count digits for error messages, e.g. "300/030/021".
    fn describe(&self) -> String {
        let mut out = String::new();
        for row in 0..self.width {
            if row > 0 {
                out.push('/');
            }
            for goal in 0..self.width {
                let _ = write!(out, "{}", self.get(row, goal));
            }
        }
        out
    }
}

/// Immutable table mapping abstract states to their minimum distance from
/// the goal abstract state.
///
/// Built once per width by [`WdDatabase::build`], then only read; lookups
/// need no locking and the table is safely shared behind an [`Arc`].
pub struct WdDatabase {
    width: usize,
    distances: FxHashMap<WdKey, u32>,
    max_distance: u32,
    build_time: Duration,
}

impl WdDatabase {
    /// Enumerates the full abstract state space for one board width.
    ///
    /// Breadth-first search outward from the goal matrix: the blank row
    /// moves to an adjacent row, pulling one tile of some goal column the
    /// other way. First discovery is the minimum distance, so an existing
    /// entry is never overwritten.
    pub fn build(width: usize) -> Result<Self, Error> {
        if width == 0 || width > MAX_WIDTH {
            return Err(Error::UnsupportedWidth {
                width,
                max: MAX_WIDTH,
            });
        }

        let start = Instant::now();
        let mut distances: FxHashMap<WdKey, u32> = FxHashMap::default();
        let mut max_distance = 0;

        let goal = WdMatrix::goal(width);
        distances.insert(goal.key(), 0);

        let mut queue = VecDeque::new();
        queue.push_back((goal, 0u32, width - 1));

        while let Some((matrix, distance, blank_row)) = queue.pop_front() {
            let mut adjacent_rows = [0usize; 2];
            let mut adjacent_count = 0;
            if blank_row + 1 < width {
                adjacent_rows[adjacent_count] = blank_row + 1;
                adjacent_count += 1;
            }
            if blank_row > 0 {
                adjacent_rows[adjacent_count] = blank_row - 1;
                adjacent_count += 1;
            }

            for &adjacent in &adjacent_rows[..adjacent_count] {
                for goal_col in 0..width {
                    if matrix.get(adjacent, goal_col) == 0 {
                        continue;
                    }

                    // one tile slides from the adjacent row into the vacated
                    // row; the adjacent row becomes the new blank row
                    let mut successor = matrix;
                    successor.add(blank_row, goal_col, 1);
                    successor.add(adjacent, goal_col, -1);

                    let key = successor.key();
                    if distances.contains_key(&key) {
                        continue;
                    }
                    distances.insert(key, distance + 1);
                    max_distance = max_distance.max(distance + 1);
                    queue.push_back((successor, distance + 1, adjacent));
                }
            }
        }

        Ok(Self {
            width,
            distances,
            max_distance,
            build_time: start.elapsed(),
        })
    }

    /// Board width this database was built for.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of reachable abstract states.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// The database always contains at least the goal state.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Largest distance stored in the table.
    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    /// Wall-clock time the BFS enumeration took.
    pub fn build_time(&self) -> Duration {
        self.build_time
    }

    fn lookup(&self, matrix: &WdMatrix, direction: Direction) -> Result<u32, Error> {
        self.distances
            .get(&matrix.key())
            .copied()
            .ok_or_else(|| Error::LookupMiss {
                direction: direction.label(),
                key: matrix.describe(),
            })
    }
}

/// Walking Distance heuristic for square boards.
pub struct WalkingDistance {
    width: usize,
    height: usize,
    database: Arc<WdDatabase>,
}

impl WalkingDistance {
    /// Builds the heuristic along with a fresh database for `width`.
    ///
    /// Rectangular dimensions and unsupported widths are rejected here,
    /// never at evaluation time.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width != height {
            return Err(Error::NonSquare { width, height });
        }
        let database = Arc::new(WdDatabase::build(width)?);
        Self::with_database(width, height, database)
    }

    /// Builds the heuristic around an existing shared database.
    pub fn with_database(
        width: usize,
        height: usize,
        database: Arc<WdDatabase>,
    ) -> Result<Self, Error> {
        if width != height {
            return Err(Error::NonSquare { width, height });
        }
        if database.width() != width {
            return Err(Error::UnsupportedWidth {
                width,
                max: database.width(),
            });
        }
        Ok(Self {
            width,
            height,
            database,
        })
    }

    /// Read-only access to the underlying database and its build statistics.
    pub fn database(&self) -> &WdDatabase {
        &self.database
    }

    /// Projects a concrete board onto one axis's count matrix.
    fn abstract_matrix(&self, state: &PuzzleState, direction: Direction) -> WdMatrix {
        let mut matrix = WdMatrix::zero(self.width);

        for (position, &value) in state.cells().iter().enumerate() {
            if value == 0 {
                continue;
            }
            let goal_position = value as usize - 1;
            match direction {
                Direction::Row => {
                    matrix.add(state.row(position), goal_position / self.width, 1);
                }
                Direction::Column => {
                    matrix.add(state.col(position), goal_position % self.width, 1);
                }
            }
        }

        matrix
    }
}

impl Heuristic for WalkingDistance {
    fn name(&self) -> &'static str {
        "Walking Distance"
    }

    fn abbreviation(&self) -> &'static str {
        "wd"
    }

    fn description(&self) -> &'static str {
        "Sum of row and column walking distances from a precomputed database"
    }

    fn calculate(&self, state: &PuzzleState) -> Result<u32, Error> {
        if state.width() != self.width || state.height() != self.height {
            return Err(Error::MalformedBoard {
                reason: format!(
                    "state is {}x{} but heuristic was built for {}x{}",
                    state.width(),
                    state.height(),
                    self.width,
                    self.height
                ),
            });
        }

        let row_matrix = self.abstract_matrix(state, Direction::Row);
        let row_distance = self.database.lookup(&row_matrix, Direction::Row)?;

        let col_matrix = self.abstract_matrix(state, Direction::Column);
        let col_distance = self.database.lookup(&col_matrix, Direction::Column)?;

        Ok(row_distance + col_distance)
    }
}
