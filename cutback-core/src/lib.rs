//! cutback-core: categorization, aggregation, ranking and reservoir sampling
//! of spending categories

pub mod aggregate;
pub mod categorizer;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod pool;
pub mod rank;
pub mod reservoir;
pub mod time;
pub mod transaction;

pub use aggregate::{aggregate, Aggregation, Aggregator, CategoryTotals};
pub use categorizer::{categorize, matching_keyword};
pub use config::RecommendConfig;
pub use error::{CoreError, CoreResult};
pub use pipeline::{Recommendation, Recommender};
pub use pool::{select_pool, Pool};
pub use rank::{rank, RankedCategory, RankedList};
pub use reservoir::{IndexSource, ReservoirSampler};
pub use time::{months_between, DateSpan};
pub use transaction::{Dictionary, Transaction};
