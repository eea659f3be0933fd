//! N-Puzzle Heuristic Library
//!
//! Provides admissible distance estimates for sliding-tile puzzle states,
//! for use by informed search algorithms such as A*. Four heuristics are
//! available: Hamming distance, Manhattan distance, Manhattan distance with
//! linear conflicts, and Walking Distance backed by a precomputed pattern
//! database.

use std::fmt;

pub mod heuristics;
pub mod registry;
pub mod state;
pub mod walking;

pub use state::PuzzleState;

/// Common contract for every heuristic implementation.
///
/// The set of implementations is closed: the three direct heuristics in
/// [`heuristics`] and the database-backed [`walking::WalkingDistance`].
/// All of them are deterministic and side-effect free.
pub trait Heuristic {
    /// Full human-readable name, e.g. "Manhattan Distance".
    fn name(&self) -> &'static str;

    /// Short code used by the registry and the CLI, e.g. "md".
    fn abbreviation(&self) -> &'static str;

    /// One-line description of what the heuristic measures.
    fn description(&self) -> &'static str;

    /// Computes the distance estimate for a well-formed state.
    ///
    /// Direct heuristics never fail. The Walking Distance heuristic fails
    /// with [`Error::LookupMiss`] if a board maps to an abstract state
    /// absent from its database, which indicates a malformed board or an
    /// incomplete database rather than a recoverable condition.
    fn calculate(&self, state: &PuzzleState) -> Result<u32, Error>;
}

/// Errors surfaced by state construction, heuristic construction, the
/// registry, and Walking Distance evaluation.
///
/// None of these are retryable: the computations are deterministic, so a
/// failed call fails identically on every retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The Walking Distance heuristic was requested for a rectangular board.
    NonSquare { width: usize, height: usize },
    /// The requested width exceeds the supported pattern-database ceiling.
    UnsupportedWidth { width: usize, max: usize },
    /// A board produced an abstract state absent from the database.
    LookupMiss { direction: &'static str, key: String },
    /// The supplied cell array is not a valid puzzle configuration.
    MalformedBoard { reason: String },
    /// No heuristic is registered under the given abbreviation.
    UnknownHeuristic { code: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonSquare { width, height } => write!(
                f,
                "walking distance requires a square board, got {}x{}",
                width, height
            ),
            Error::UnsupportedWidth { width, max } => write!(
                f,
                "walking distance database supports widths up to {}, got {}",
                max, width
            ),
            Error::LookupMiss { direction, key } => write!(
                f,
                "{} abstract state {} missing from walking distance database",
                direction, key
            ),
            Error::MalformedBoard { reason } => write!(f, "malformed board: {}", reason),
            Error::UnknownHeuristic { code } => {
                write!(f, "unknown heuristic abbreviation: {}", code)
            }
        }
    }
}

impl std::error::Error for Error {}
