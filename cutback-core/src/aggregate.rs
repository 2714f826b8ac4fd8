//! Folding categorized transactions into per-category totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::categorizer::categorize;
use crate::time::DateSpan;
use crate::transaction::{Dictionary, Transaction};

/// Cumulative spend per category label.
///
/// Iteration order is unspecified; anything order-dependent goes through
/// [`crate::rank::rank`] first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    totals: HashMap<String, Decimal>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `label`, inserting the category if new
    pub fn add(&mut self, label: &str, amount: Decimal) {
        match self.totals.get_mut(label) {
            Some(total) => *total += amount,
            None => {
                self.totals.insert(label.to_string(), amount);
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<Decimal> {
        self.totals.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.totals.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum of every category total
    pub fn sum(&self) -> Decimal {
        self.totals.values().copied().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Output of one aggregation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub totals: CategoryTotals,
    /// None when no transactions were folded
    pub span: Option<DateSpan>,
    pub total_spend: Decimal,
    pub transaction_count: usize,
}

/// Incremental aggregator over a borrowed dictionary
#[derive(Debug)]
pub struct Aggregator<'d> {
    dictionary: &'d Dictionary,
    acc: Aggregation,
}

impl<'d> Aggregator<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            acc: Aggregation::default(),
        }
    }

    /// Fold one transaction
    pub fn push(&mut self, txn: &Transaction) {
        let label = categorize(txn.description(), self.dictionary);
        self.acc.totals.add(label, txn.amount());

        match self.acc.span.as_mut() {
            Some(span) => span.include(txn.date()),
            None => self.acc.span = Some(DateSpan::at(txn.date())),
        }

        self.acc.total_spend += txn.amount();
        self.acc.transaction_count += 1;
    }

    pub fn finish(self) -> Aggregation {
        self.acc
    }
}

/// Categorize and fold every transaction.
pub fn aggregate<'t, I>(transactions: I, dictionary: &Dictionary) -> Aggregation
where
    I: IntoIterator<Item = &'t Transaction>,
{
    let mut aggregator = Aggregator::new(dictionary);
    for txn in transactions {
        aggregator.push(txn);
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn txn(y: i32, m: u32, d: u32, desc: &str, amount: Decimal) -> Transaction {
        Transaction::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), desc, amount)
    }

    #[test]
    fn test_aggregate_scenario() {
        let dict = Dictionary::new(["WALMART", "SHELL"]);
        let txns = vec![
            txn(2023, 1, 5, "WALMART STORE", dec!(50.00)),
            txn(2023, 2, 5, "WALMART STORE", dec!(70.00)),
            txn(2023, 3, 5, "SHELL GAS", dec!(40.00)),
        ];
        let agg = aggregate(&txns, &dict);

        assert_eq!(agg.totals.len(), 2);
        assert_eq!(agg.totals.get("WALMART"), Some(dec!(120.00)));
        assert_eq!(agg.totals.get("SHELL"), Some(dec!(40.00)));
        assert_eq!(agg.total_spend, dec!(160.00));
        assert_eq!(agg.transaction_count, 3);
        assert_eq!(agg.span.unwrap().months(), 2);
    }

    #[test]
    fn test_no_amount_lost_or_double_counted() {
        let dict = Dictionary::new(["COSTCO", "COST", "UBER"]);
        let txns = vec![
            txn(2023, 1, 2, "COSTCO WHSE 0112", dec!(210.44)),
            txn(2023, 1, 9, "UBER TRIP", dec!(18.20)),
            txn(2023, 1, 12, "UBER EATS", dec!(31.05)),
            txn(2023, 2, 1, "COST PLUS WORLD", dec!(12.99)),
            txn(2023, 2, 3, "LOCAL BAKERY", dec!(7.50)),
            txn(2023, 2, 14, "COSTCO RETURN", dec!(-45.00)),
        ];
        let agg = aggregate(&txns, &dict);

        let input_sum: Decimal = txns.iter().map(|t| t.amount()).sum();
        assert_eq!(agg.totals.sum(), input_sum);
        assert_eq!(agg.total_spend, input_sum);
        assert_eq!(agg.totals.get("COSTCO"), Some(dec!(165.44)));
        assert_eq!(agg.totals.get("COST"), Some(dec!(12.99)));
        assert_eq!(agg.totals.get("UBER"), Some(dec!(49.25)));
        assert_eq!(agg.totals.get("LOCAL BAKERY"), Some(dec!(7.50)));
    }

    #[test]
    fn test_credits_sum_algebraically() {
        let dict = Dictionary::new(["AMAZON"]);
        let txns = vec![
            txn(2023, 5, 1, "AMAZON MKTP", dec!(80.00)),
            txn(2023, 5, 9, "AMAZON REFUND", dec!(-80.00)),
        ];
        let agg = aggregate(&txns, &dict);
        assert_eq!(agg.totals.get("AMAZON"), Some(dec!(0.00)));
        assert_eq!(agg.total_spend, Decimal::ZERO);
    }

    #[test]
    fn test_empty_input() {
        let agg = aggregate(&[], &Dictionary::new(["WALMART"]));
        assert!(agg.totals.is_empty());
        assert!(agg.span.is_none());
        assert_eq!(agg.total_spend, Decimal::ZERO);
        assert_eq!(agg.transaction_count, 0);
    }

    #[test]
    fn test_incremental_matches_batch() {
        let dict = Dictionary::new(["SHELL"]);
        let txns = vec![
            txn(2023, 4, 1, "SHELL OIL", dec!(30.00)),
            txn(2023, 2, 1, "TARGET", dec!(12.00)),
        ];
        let mut agg = Aggregator::new(&dict);
        for t in &txns {
            agg.push(t);
        }
        assert_eq!(agg.finish(), aggregate(&txns, &dict));
    }
}
