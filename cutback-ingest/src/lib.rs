//! cutback-ingest: dictionary and transaction statement loading.

pub mod amount;
pub mod dictionary;
pub mod parsers;

pub use amount::parse_amount;
pub use dictionary::{load_dictionary, parse_dictionary};
pub use parsers::plain_csv::{load_transactions_csv, parse_transactions_csv};
