//! Ranking categories by cumulative spend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::CategoryTotals;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCategory {
    pub label: String,
    pub total: Decimal,
}

/// Categories ordered by total, highest first. Order among equal totals is
/// unspecified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedList {
    entries: Vec<RankedCategory>,
}

impl RankedList {
    pub fn entries(&self) -> &[RankedCategory] {
        &self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Snapshot `totals` into a list sorted by total descending.
pub fn rank(totals: &CategoryTotals) -> RankedList {
    let mut entries: Vec<RankedCategory> = totals
        .iter()
        .map(|(label, total)| RankedCategory {
            label: label.to_string(),
            total,
        })
        .collect();

    entries.sort_by(|a, b| b.total.cmp(&a.total));
    RankedList { entries }
}
