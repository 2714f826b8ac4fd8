//! High-spend pool selection.

use serde::{Deserialize, Serialize};

use crate::categorizer::contains_any;
use crate::rank::RankedList;

/// Top-ranked labels eligible for sampling
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    labels: Vec<String>,
}

impl Pool {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Take up to `pool_size` labels in rank order, skipping any label that
/// contains one of `exclusions`.
///
/// Returns fewer than `pool_size` labels when the ranked list runs out.
pub fn select_pool(ranked: &RankedList, pool_size: usize, exclusions: &[String]) -> Pool {
    let labels = ranked
        .labels()
        .filter(|label| !contains_any(label, exclusions))
        .take(pool_size)
        .map(str::to_string)
        .collect();
    Pool { labels }
}
