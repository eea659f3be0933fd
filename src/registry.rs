//! Heuristic registry: resolves short codes to heuristic instances and
//! caches one walking distance database per board width.
//!
//! The cache replaces the globally-mutable lazily-initialized table a naive
//! implementation would reach for: the registry owns each database, builds
//! it on first request, and hands out shared read-only references.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::heuristics::{Hamming, LinearConflicts, Manhattan};
use crate::walking::{WalkingDistance, WdDatabase};
use crate::{Error, Heuristic};

/// Static metadata describing one registered heuristic.
pub struct HeuristicInfo {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub description: &'static str,
}

/// Metadata for every registered heuristic, in listing order.
pub fn available() -> [HeuristicInfo; 4] {
    [
        HeuristicInfo {
            name: "Hamming Distance",
            abbreviation: "hd",
            description: "Number of tiles not in their goal position",
        },
        HeuristicInfo {
            name: "Manhattan Distance",
            abbreviation: "md",
            description: "Sum of tile distances to their goal positions",
        },
        HeuristicInfo {
            name: "Manhattan Distance with Linear Conflicts",
            abbreviation: "mc",
            description: "Manhattan distance plus 2 for each pair of conflicting tiles",
        },
        HeuristicInfo {
            name: "Walking Distance",
            abbreviation: "wd",
            description: "Sum of row and column walking distances from a precomputed database",
        },
    ]
}

/// Resolves heuristic codes and owns the per-width database cache.
#[derive(Default)]
pub struct Registry {
    databases: FxHashMap<usize, Arc<WdDatabase>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a short code (case-insensitive) to a heuristic instance.
    ///
    /// The board dimensions only matter for `wd`, which requires a square
    /// board and triggers a database build on the first request for a given
    /// width.
    pub fn heuristic(
        &mut self,
        code: &str,
        width: usize,
        height: usize,
    ) -> Result<Box<dyn Heuristic>, Error> {
        match code.to_ascii_lowercase().as_str() {
            "hd" => Ok(Box::new(Hamming)),
            "md" => Ok(Box::new(Manhattan)),
            "mc" => Ok(Box::new(LinearConflicts)),
            "wd" => {
                if width != height {
                    return Err(Error::NonSquare { width, height });
                }
                let database = self.database(width)?;
                Ok(Box::new(WalkingDistance::with_database(
                    width, height, database,
                )?))
            }
            other => Err(Error::UnknownHeuristic {
                code: other.to_string(),
            }),
        }
    }

    /// Returns the walking distance database for `width`, building it on
    /// first use.
    pub fn database(&mut self, width: usize) -> Result<Arc<WdDatabase>, Error> {
        if let Some(database) = self.databases.get(&width) {
            return Ok(Arc::clone(database));
        }
        let database = Arc::new(WdDatabase::build(width)?);
        self.databases.insert(width, Arc::clone(&database));
        Ok(database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PuzzleState;

    #[test]
    fn test_resolves_all_codes() {
        let mut registry = Registry::new();
        for code in ["hd", "md", "mc", "wd"] {
            let heuristic = registry.heuristic(code, 3, 3).unwrap();
            assert_eq!(heuristic.abbreviation(), code);
        }
    }

    #[test]
    fn test_codes_are_case_insensitive() {
        let mut registry = Registry::new();
        let heuristic = registry.heuristic("WD", 3, 3).unwrap();
        assert_eq!(heuristic.abbreviation(), "wd");
    }

    #[test]
    fn test_unknown_code() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.heuristic("xx", 3, 3),
            Err(Error::UnknownHeuristic { .. })
        ));
    }

    #[test]
    fn test_rejects_non_square_walking_distance() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.heuristic("wd", 3, 4),
            Err(Error::NonSquare { .. })
        ));
        // direct heuristics accept rectangular boards
        assert!(registry.heuristic("md", 3, 4).is_ok());
    }

    #[test]
    fn test_database_is_built_once_per_width() {
        let mut registry = Registry::new();
        let first = registry.database(3).unwrap();
        let second = registry.database(3).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let other_width = registry.database(2).unwrap();
        assert!(!Arc::ptr_eq(&first, &other_width));
    }

    #[test]
    fn test_resolved_heuristics_agree_with_direct_use() {
        let mut registry = Registry::new();
        let state = PuzzleState::new(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();

        let md = registry.heuristic("md", 3, 3).unwrap();
        assert_eq!(md.calculate(&state).unwrap(), 1);

        let wd = registry.heuristic("wd", 3, 3).unwrap();
        assert_eq!(wd.calculate(&state).unwrap(), 1);
    }

    #[test]
    fn test_available_matches_registry() {
        let mut registry = Registry::new();
        for info in available() {
            let heuristic = registry.heuristic(info.abbreviation, 3, 3).unwrap();
            assert_eq!(heuristic.name(), info.name);
            assert_eq!(heuristic.description(), info.description);
        }
    }
}
