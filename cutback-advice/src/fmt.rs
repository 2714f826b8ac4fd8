use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal as a dollar amount with thousands separators: $1,234.56
pub fn money(val: Decimal) -> String {
    let negative = cents(val) < Decimal::ZERO;
    let mut abs = cents(val.abs());
    abs.rescale(2);
    let rounded = abs.to_string();
    let (int_part, dec_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Round to cents, halves away from zero
pub fn cents(val: Decimal) -> Decimal {
    val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(dec!(1234.56)), "$1,234.56");
        assert_eq!(money(dec!(-500.00)), "-$500.00");
        assert_eq!(money(dec!(0.0)), "$0.00");
        assert_eq!(money(dec!(1000000.99)), "$1,000,000.99");
        assert_eq!(money(dec!(42.1)), "$42.10");
        assert_eq!(money(dec!(60)), "$60.00");
    }

    #[test]
    fn test_cents_rounding() {
        assert_eq!(cents(dec!(10.005)), dec!(10.01));
        assert_eq!(cents(dec!(-10.005)), dec!(-10.01));
        assert_eq!(cents(dec!(33.3333)), dec!(33.33));
    }
}
