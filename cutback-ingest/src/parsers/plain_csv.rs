//! Plain three-column transaction CSV.
//!
//! Expected rows (no header):
//!   2023-01-05,WALMART STORE #1123,50.00
//!   2023-01-09,"SHELL OIL 5512, SAN JOSE",40.00
//!
//! A leading `Date,Description,Amount` header row is tolerated. Any other
//! row that fails to parse aborts the load with its row number.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use cutback_core::Transaction;
use std::io::Read;
use std::path::Path;

use crate::amount::AmountParser;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse transactions from any CSV reader.
///
/// Error messages name the 1-based line of the offending row in the input.
pub fn parse_transactions_csv<R: Read>(mut reader: R) -> Result<Vec<Transaction>> {
    let mut text = String::new();
    reader.read_to_string(&mut text).context("reading transactions")?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let amounts = AmountParser::new()?;
    let mut txns = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            let row = e.position().map_or(idx + 1, |p| record_line(&text, p));
            anyhow::Error::new(e).context(format!("reading row {row}"))
        })?;
        let row = record.position().map_or(idx + 1, |p| record_line(&text, p));

        // Skip rows of empty fields
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }

        let date_str = record.get(0).unwrap_or("");
        if txns.is_empty() && date_str.eq_ignore_ascii_case("date") {
            continue;
        }

        if record.len() < 3 {
            bail!("row {row}: expected date,description,amount but found {} field(s)", record.len());
        }

        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT)
            .with_context(|| format!("row {row}: invalid date '{date_str}' (expected YYYY-MM-DD)"))?;
        let description = record.get(1).unwrap_or("");
        let amount = amounts
            .parse(record.get(2).unwrap_or(""))
            .with_context(|| format!("row {row}"))?;

        txns.push(Transaction::new(date, description, amount));
    }

    Ok(txns)
}

/// Line a record starts on.
///
/// The reader stamps a record with the position where it began looking for
/// it, which is before any blank lines it skipped on the way.
fn record_line(text: &str, pos: &csv::Position) -> usize {
    let skipped = text
        .as_bytes()
        .get(pos.byte() as usize..)
        .unwrap_or_default()
        .iter()
        .take_while(|b| matches!(b, b'\r' | b'\n'))
        .filter(|b| **b == b'\n')
        .count();
    pos.line() as usize + skipped
}

/// Load a transaction CSV from disk.
pub fn load_transactions_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let txns = parse_transactions_csv(file).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), records = txns.len(), "loaded transactions");
    Ok(txns)
}
