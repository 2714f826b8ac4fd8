//! Advice built from a sampled recommendation: per-month averages for the
//! sampled categories, a projected saving over a short horizon, and the
//! monthly cost of the essentials that were left out of the sample.

use cutback_core::{CoreResult, Recommendation};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::fmt::cents;

pub const DEFAULT_HORIZON_MONTHS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdviceLine {
    pub label: String,
    /// Rounded to cents
    pub monthly_average: Decimal,
}

/// An excluded category present in the data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EssentialLine {
    pub label: String,
    pub monthly_average: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub transaction_count: usize,
    pub months: i32,
    pub total_spend: Decimal,
    pub lines: Vec<AdviceLine>,
    pub monthly_total: Decimal,
    pub horizon_months: u32,
    /// Whole currency units
    pub projected_savings: Decimal,
    pub essentials: Vec<EssentialLine>,
}

impl Advice {
    /// Build advice for every sampled category.
    ///
    /// `essentials` are the exclusion keywords; those that occur as a
    /// category label are reported with their monthly cost. Fails with
    /// `DegenerateSpan` rather than dividing by a zero-month span.
    pub fn build(rec: &Recommendation, essentials: &[String], horizon_months: u32) -> CoreResult<Self> {
        let mut lines = Vec::with_capacity(rec.reservoir.len());
        let mut monthly_total = Decimal::ZERO;

        for label in &rec.reservoir {
            let avg = rec.monthly_average(label)?;
            monthly_total += avg;
            lines.push(AdviceLine {
                label: label.clone(),
                monthly_average: cents(avg),
            });
        }

        let essentials = essentials
            .iter()
            .filter(|label| rec.totals.contains(label))
            .map(|label| -> CoreResult<EssentialLine> {
                Ok(EssentialLine {
                    label: label.clone(),
                    monthly_average: cents(rec.monthly_average(label)?),
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let projected_savings = (monthly_total * Decimal::from(horizon_months))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        Ok(Self {
            transaction_count: rec.transaction_count,
            months: rec.months,
            total_spend: rec.total_spend,
            lines,
            monthly_total: cents(monthly_total),
            horizon_months,
            projected_savings,
            essentials,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cutback_core::{Dictionary, RecommendConfig, Recommender, Transaction};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    fn txn(m: u32, desc: &str, amount: Decimal) -> Transaction {
        Transaction::new(NaiveDate::from_ymd_opt(2023, m, 5).unwrap(), desc, amount)
    }

    fn run(txns: &[Transaction], config: RecommendConfig) -> Recommendation {
        Recommender::new(config, Dictionary::new(["WALMART", "SHELL", "RESIDENT"]))
            .unwrap()
            .recommend(txns, &mut StdRng::seed_from_u64(5))
            .unwrap()
    }

    #[test]
    fn test_monthly_averages_and_projection() {
        let txns = vec![
            txn(1, "WALMART STORE", dec!(50.00)),
            txn(2, "WALMART STORE", dec!(70.00)),
            txn(3, "SHELL GAS", dec!(40.00)),
        ];
        let config = RecommendConfig {
            pool_size: 5,
            reservoir_size: 2,
            exclusions: vec![],
        };
        let advice = Advice::build(&run(&txns, config), &[], 3).unwrap();

        assert_eq!(advice.months, 2);
        assert_eq!(advice.lines.len(), 2);
        let walmart = advice.lines.iter().find(|l| l.label == "WALMART").unwrap();
        assert_eq!(walmart.monthly_average, dec!(60.00));
        assert_eq!(advice.monthly_total, dec!(80.00));
        assert_eq!(advice.projected_savings, dec!(240));
    }

    #[test]
    fn test_essentials_reported_not_recommended() {
        let txns = vec![
            txn(1, "RESIDENT PAYMENT", dec!(1200.00)),
            txn(2, "RESIDENT PAYMENT", dec!(1200.00)),
            txn(3, "SHELL GAS", dec!(30.00)),
        ];
        let config = RecommendConfig::default();
        let rec = run(&txns, config.clone());
        let advice = Advice::build(&rec, &config.exclusions, 3).unwrap();

        assert_eq!(advice.lines.len(), 1);
        assert_eq!(advice.lines[0].label, "SHELL");
        assert_eq!(advice.essentials.len(), 1);
        assert_eq!(advice.essentials[0].label, "RESIDENT");
        assert_eq!(advice.essentials[0].monthly_average, dec!(1200.00));
    }

    #[test]
    fn test_projection_rounds_half_away_from_zero() {
        // 3 months; 4.50 total -> 1.50/month -> 4.50 over 3 months -> 5
        let txns = vec![txn(1, "SHELL A", dec!(2.25)), txn(4, "SHELL B", dec!(2.25))];
        let config = RecommendConfig {
            pool_size: 1,
            reservoir_size: 1,
            exclusions: vec![],
        };
        let advice = Advice::build(&run(&txns, config), &[], 3).unwrap();
        assert_eq!(advice.lines[0].monthly_average, dec!(1.50));
        assert_eq!(advice.projected_savings, dec!(5));
    }

    #[test]
    fn test_empty_recommendation() {
        let advice = Advice::build(&run(&[], RecommendConfig::default()), &[], 3).unwrap();
        assert!(advice.is_empty());
        assert_eq!(advice.projected_savings, Decimal::ZERO);
    }
}
