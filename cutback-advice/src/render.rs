use anyhow::{Context, Result};
use std::fmt;

use crate::advice::Advice;
use crate::fmt::money;

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No recommendations: no spending categories qualified.");
        }

        writeln!(
            f,
            "Consider cutting these categories (average spend per month over {} month(s)):\n",
            self.months
        )?;
        writeln!(f, "{:>40}   {}", "Description", "Per month")?;
        writeln!(f, "{:>40}   {}", "-----------", "---------")?;
        for line in &self.lines {
            writeln!(f, "{:>40}   {}", line.label, money(line.monthly_average))?;
        }

        writeln!(
            f,
            "\nSkipping them could save about {} over the next {} month(s).",
            money(self.projected_savings),
            self.horizon_months
        )?;

        if !self.essentials.is_empty() {
            writeln!(f, "\nEssentials (never recommended), per month:")?;
            for e in &self.essentials {
                writeln!(f, "{:>40}   {}", e.label, money(e.monthly_average))?;
            }
        }
        Ok(())
    }
}

/// Console rendering of the advice
pub fn render_text(advice: &Advice) -> String {
    advice.to_string()
}

pub fn render_json(advice: &Advice) -> Result<String> {
    serde_json::to_string_pretty(advice).context("serialize advice")
}
