//! Lenient numeric input parsing
//!
//! Portions and requirement targets arrive as raw text from the user. Input
//! that does not parse, is negative or is not finite is coerced to zero; it
//! is never rejected.

/// Upper bound on portions entered for a single food, as on the entry form
pub const MAX_PORTIONS: f64 = 100.0;

/// Parse a raw user amount, clamping to a finite non-negative value
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        Ok(v) if v == 0.0 => 0.0,
        Ok(v) => {
            tracing::debug!("Coercing amount '{}' ({}) to 0", raw, v);
            0.0
        }
        Err(_) => {
            tracing::debug!("Coercing unparseable amount '{}' to 0", raw);
            0.0
        }
    }
}

/// Parse a raw portion count: `parse_amount`, capped at `MAX_PORTIONS`
pub fn parse_portion(raw: &str) -> f64 {
    let value = parse_amount(raw);
    if value > MAX_PORTIONS {
        tracing::debug!("Capping portion '{}' at {}", raw, MAX_PORTIONS);
        MAX_PORTIONS
    } else {
        value
    }
}

/// Clamp an already-numeric amount the same way `parse_amount` does
pub fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!(parse_amount("2"), 2.0);
        assert_eq!(parse_amount(" 1.5 "), 1.5);
        assert_eq!(parse_amount("150"), 150.0);
    }

    #[test]
    fn test_parse_invalid_amounts_become_zero() {
        assert_eq!(parse_amount("-5"), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_negative_zero_is_plain_zero() {
        let v = parse_amount("-0");
        assert_eq!(v, 0.0);
        assert!(v.is_sign_positive());
    }

    #[test]
    fn test_parse_portion_is_capped() {
        assert_eq!(parse_portion("2.5"), 2.5);
        assert_eq!(parse_portion("100"), MAX_PORTIONS);
        assert_eq!(parse_portion("1e308"), MAX_PORTIONS);
        assert_eq!(parse_portion("-3"), 0.0);
    }

    #[test]
    fn test_clamp_amount() {
        assert_eq!(clamp_amount(3.0), 3.0);
        assert_eq!(clamp_amount(-1.0), 0.0);
        assert_eq!(clamp_amount(f64::NAN), 0.0);
    }
}
