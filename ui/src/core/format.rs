//! Formatting helpers for presenting metrics.

/// Display text for a missing value.
pub const MISSING: &str = "N/A";

/// Enough digits for the exact decimal expansion of any finite `f64`.
const EXACT_DIGITS: usize = 1100;

/// Fixed-point text with ties rounded away from zero, as `Number.toFixed`
/// does. Rounding is decided on the exact binary value, so `1.005` gives
/// `1.00` while `32.25` gives `32.3`.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();
    let round_up = fraction.as_bytes().get(decimals).is_some_and(|next| *next >= b'5');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let whole_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..whole_len].iter().map(|d| char::from(b'0' + d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[whole_len..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Round to `decimals` and drop the leading zero of values whose rounded
/// magnitude is below one (`0.245` → `.245`, `-0.245` → `-.245`).
pub fn format_fixed(value: f64, decimals: usize) -> String {
    strip_leading_zero(&to_fixed(value, decimals))
}

pub fn strip_leading_zero(rounded: &str) -> String {
    if let Some(fraction) = rounded.strip_prefix("-0.") {
        format!("-.{fraction}")
    } else if let Some(fraction) = rounded.strip_prefix("0.") {
        format!(".{fraction}")
    } else {
        rounded.to_string()
    }
}

pub fn format_metric(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) => format_fixed(value, decimals),
        None => MISSING.to_string(),
    }
}

/// Percentage with one decimal; no leading-zero stripping.
pub fn format_ratio(percent: Option<f64>) -> String {
    match percent {
        Some(percent) => format!("{}%", to_fixed(percent, 1)),
        None => MISSING.to_string(),
    }
}
