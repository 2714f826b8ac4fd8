//! Amount field normalization.
//!
//! Accepts plain decimals as well as statement-style amounts:
//!   50.00   -15.00   $1,234.56   - $14.05   +3

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Compiled amount pattern, reused across rows
pub struct AmountParser {
    re: Regex,
}

impl AmountParser {
    pub fn new() -> Result<Self> {
        let re = Regex::new(concat!(
            r"^\s*(?P<sign>[-+])?\s*\$?\s*",
            r"(?P<int>\d{1,3}(?:,\d{3})+|\d*)",
            r"(?P<frac>\.\d+)?\s*$"
        ))?;
        Ok(Self { re })
    }

    pub fn parse(&self, raw: &str) -> Result<Decimal> {
        let caps = self
            .re
            .captures(raw)
            .ok_or_else(|| anyhow!("invalid amount '{raw}'"))?;

        let int = caps["int"].replace(',', "");
        let frac = caps.name("frac").map_or("", |m| m.as_str());
        if int.is_empty() && frac.is_empty() {
            return Err(anyhow!("invalid amount '{raw}'"));
        }

        let sign = caps.name("sign").map_or("", |m| m.as_str());
        let int = if int.is_empty() { "0" } else { int.as_str() };
        let normalized = format!("{}{}{}", if sign == "-" { "-" } else { "" }, int, frac);
        Decimal::from_str(&normalized).with_context(|| format!("invalid amount '{raw}'"))
    }
}

/// Parse a single amount; builds a fresh parser per call.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    AmountParser::new()?.parse(raw)
}
