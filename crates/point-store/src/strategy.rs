//! Range-query execution strategies.

use serde::{Deserialize, Serialize};

/// How a range query scans the point collection.
///
/// `Serial` is the default. `Parallel` splits the collection into
/// contiguous slices across worker threads and merges the partial results;
/// it exists for comparison and benchmarking and is not assumed faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QueryStrategy {
    /// Single linear scan.
    #[default]
    Serial,
    /// Partitioned scan across the available parallelism.
    Parallel,
}

impl QueryStrategy {
    /// Parse from a string, falling back to `Serial` for unknown values.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "parallel" => Self::Parallel,
            _ => Self::Serial,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }
}

impl std::fmt::Display for QueryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
