//! Conversion between base-unit integers and human-readable decimal amounts.
//!
//! Amounts travel as strings so callers never lose precision on large token
//! supplies; all arithmetic is done on [`BigUint`].

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::AmountError;

/// Textual stand-ins for "no value" that reach us from loosely typed callers.
const MISSING_SENTINELS: [&str; 2] = ["undefined", "null"];

/// Render a base-unit amount with `decimals` fractional digits.
///
/// Trailing zeros in the fraction are dropped, and a whole amount is printed
/// without a decimal point: `"1500000"` at 6 decimals is `"1.5"`.
///
/// This is a display helper and never fails. Missing input yields `"0"`, and
/// so does malformed input, after logging the error.
pub fn format_amount(raw: Option<&str>, decimals: u8) -> String {
    let raw = match raw {
        Some(raw) if !raw.is_empty() && !MISSING_SENTINELS.contains(&raw) => raw,
        _ => return "0".to_string(),
    };

    match parse_base_units(raw) {
        Some((negative, amount)) => {
            let formatted = format_with_decimals(&amount, decimals);
            if negative && !amount.is_zero() {
                format!("-{formatted}")
            } else {
                formatted
            }
        }
        None => {
            log::error!(
                "error formatting token amount {raw:?} with {decimals} decimals: not an integer"
            );
            "0".to_string()
        }
    }
}

/// Convert a user-entered decimal amount into base units.
///
/// Fractional digits beyond `decimals` are truncated, not rounded:
/// `"1.23456789"` at 6 decimals is `"1234567"`.
pub fn parse_amount(text: &str, decimals: u8) -> Result<String, AmountError> {
    let invalid = || AmountError::InvalidDigits {
        input: text.to_string(),
    };

    let trimmed = text.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if !is_digits(whole) || !is_digits(fraction) {
        return Err(invalid());
    }

    let decimals = decimals as usize;
    let kept = &fraction[..fraction.len().min(decimals)];

    let mut digits = String::with_capacity(whole.len() + decimals);
    digits.push_str(whole);
    digits.push_str(kept);
    digits.extend(std::iter::repeat_n('0', decimals - kept.len()));

    if digits.is_empty() {
        return Ok("0".to_string());
    }

    let amount: BigUint = digits.parse().map_err(|_| invalid())?;
    Ok(amount.to_string())
}

/// Split an optionally signed integer string into sign and magnitude.
fn parse_base_units(raw: &str) -> Option<(bool, BigUint)> {
    let raw = raw.trim();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !is_digits(digits) {
        return None;
    }
    digits.parse().ok().map(|amount| (negative, amount))
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn format_with_decimals(amount: &BigUint, decimals: u8) -> String {
    let divisor = BigUint::from(10u32).pow(u32::from(decimals));
    let whole = amount / &divisor;
    let fraction = amount % &divisor;

    if fraction.is_zero() {
        return whole.to_string();
    }

    let padded = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    let trimmed = padded.trim_end_matches('0');
    format!("{whole}.{trimmed}")
}
