//! End-to-end recommendation pipeline:
//! categorize → aggregate → rank → pool → reservoir.

use rust_decimal::Decimal;

use crate::aggregate::{aggregate, CategoryTotals};
use crate::config::RecommendConfig;
use crate::error::{CoreError, CoreResult};
use crate::pool::{select_pool, Pool};
use crate::rank::{rank, RankedList};
use crate::reservoir::{IndexSource, ReservoirSampler};
use crate::time::DateSpan;
use crate::transaction::{Dictionary, Transaction};

/// Everything the reporter needs from one run
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub totals: CategoryTotals,
    pub ranked: RankedList,
    pub pool: Pool,
    /// Sampled labels, in reservoir slot order
    pub reservoir: Vec<String>,
    pub span: Option<DateSpan>,
    /// Whole months between earliest and latest transaction; 0 when empty
    pub months: i32,
    pub total_spend: Decimal,
    pub transaction_count: usize,
}

impl Recommendation {
    /// Average spend per month for `label`
    pub fn monthly_average(&self, label: &str) -> CoreResult<Decimal> {
        let total = self
            .totals
            .get(label)
            .ok_or_else(|| CoreError::UnknownCategory(label.to_string()))?;
        // a known label implies at least one transaction, hence a span
        let span = self
            .span
            .as_ref()
            .ok_or_else(|| CoreError::UnknownCategory(label.to_string()))?;
        let months = span.divisor_months()?;
        Ok(total / Decimal::from(months))
    }
}

/// Runs the pipeline with a fixed configuration and dictionary
#[derive(Debug, Clone)]
pub struct Recommender {
    config: RecommendConfig,
    dictionary: Dictionary,
}

impl Recommender {
    pub fn new(config: RecommendConfig, dictionary: Dictionary) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self { config, dictionary })
    }

    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    /// Aggregate and rank without sampling
    pub fn rank(&self, transactions: &[Transaction]) -> (CategoryTotals, RankedList) {
        let agg = aggregate(transactions, &self.dictionary);
        let ranked = rank(&agg.totals);
        (agg.totals, ranked)
    }

    /// Run the full pipeline.
    ///
    /// Fails with [`CoreError::DegenerateSpan`] when there are transactions
    /// but they all fall in one calendar month. An empty input is not an
    /// error and yields an empty recommendation.
    pub fn recommend<S>(&self, transactions: &[Transaction], source: &mut S) -> CoreResult<Recommendation>
    where
        S: IndexSource + ?Sized,
    {
        let agg = aggregate(transactions, &self.dictionary);
        tracing::debug!(
            transactions = agg.transaction_count,
            categories = agg.totals.len(),
            total_spend = %agg.total_spend,
            "aggregated transactions"
        );

        let months = match &agg.span {
            Some(span) => {
                let months = span.divisor_months()?;
                tracing::debug!(earliest = %span.earliest, latest = %span.latest, months, "date span");
                months as i32
            }
            None => 0,
        };

        let ranked = rank(&agg.totals);
        let pool = select_pool(&ranked, self.config.pool_size, &self.config.exclusions);
        let reservoir: Vec<String> = ReservoirSampler::new(self.config.reservoir_size)
            .sample(pool.labels().iter().cloned(), source);
        tracing::debug!(pool = pool.len(), reservoir = reservoir.len(), "sampled recommendations");

        Ok(Recommendation {
            totals: agg.totals,
            ranked,
            pool,
            reservoir,
            span: agg.span,
            months,
            total_spend: agg.total_spend,
            transaction_count: agg.transaction_count,
        })
    }
}
