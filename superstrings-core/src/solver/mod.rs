//! Pluggable superstring solvers

pub mod brute_force;
pub mod greedy;

pub use brute_force::BruteForceSolver;
pub use greedy::GreedyMerger;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy that turns a word set into a single superstring
///
/// Implementations receive their own copy of the words and may consume it.
/// The result must contain every input word as a contiguous substring when
/// the input is substring free.
pub trait Solver {
    /// Build a superstring from `words`
    fn solve(&self, words: Vec<String>) -> String;

    /// Get the solver kind
    fn kind(&self) -> SolverKind;
}

/// Solver selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverKind {
    /// Greedy maximal-overlap merging (approximate, polynomial)
    #[default]
    Greedy,
    /// Exhaustive search over all orderings (exact, factorial)
    BruteForce,
}

impl SolverKind {
    /// All selectable solvers
    pub const ALL: [SolverKind; 2] = [SolverKind::Greedy, SolverKind::BruteForce];

    /// Stable name used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SolverKind::Greedy => "greedy",
            SolverKind::BruteForce => "brute-force",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            SolverKind::Greedy => "merge the most-overlapping pair until one string remains",
            SolverKind::BruteForce => "try every ordering and keep the shortest (small inputs only)",
        }
    }

    /// Instantiate the solver
    pub fn solver(&self) -> Box<dyn Solver> {
        match self {
            SolverKind::Greedy => Box::new(GreedyMerger),
            SolverKind::BruteForce => Box::new(BruteForceSolver),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(SolverKind::Greedy),
            "brute-force" => Ok(SolverKind::BruteForce),
            other => Err(format!("unknown solver '{other}'")),
        }
    }
}
