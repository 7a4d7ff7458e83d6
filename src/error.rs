use std::fmt;

/// Why the exhaustive search gave up before trying `k` colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhaustion {
    /// Trying `k` colours would mean checking `checks` candidate assignments.
    TooManyChecks { checks: u64 },
    /// More colours than vertices would be needed.
    NoColouring,
}

/// The error type of the colouring algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColouringError {
    /// The naive colourer hit one of its cutoffs when about to try `colours` colours.
    Exhausted { colours: u32, vertices: usize, reason: Exhaustion },
    /// Tree number `tree` (counting from zero) stalled at `edges` edges because
    /// the graph is not connected.
    Disconnected { tree: usize, edges: usize },
}

impl fmt::Display for Exhaustion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exhaustion::TooManyChecks { checks } => write!(f, "Exceeded maximum check count ({})", checks),
            Exhaustion::NoColouring => f.write_str("No colouring exists"),
        }
    }
}

impl fmt::Display for ColouringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColouringError::Exhausted { reason, .. } => {
                write!(f, "Could not find a colouring in the given graph ({})", reason)
            }
            ColouringError::Disconnected { .. } => {
                f.write_str("The given graph has more than one component")
            }
        }
    }
}

impl std::error::Error for ColouringError {}
