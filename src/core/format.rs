use crate::domain::model::RawAmount;

/// Fixed currency prefix. Hardcoded policy, not configurable at call time.
pub const CURRENCY_PREFIX: &str = "Rp";

/// Thousands separator, Indonesian convention.
pub const GROUP_SEPARATOR: char = '.';

/// Strips every non-digit character and parses the remaining run as a
/// base-10 integer. Total over all strings: empty or non-numeric input
/// degrades to zero rather than failing, so a keystroke handler can
/// never be blocked by garbage input. Runs longer than a u64 saturate.
pub fn extract_raw_amount(text: &str) -> RawAmount {
    let mut value: u64 = 0;
    for c in text.chars() {
        if let Some(digit) = c.to_digit(10) {
            value = value.saturating_mul(10).saturating_add(u64::from(digit));
        }
    }
    RawAmount(value)
}

/// Decimal digits of `amount` with a separator every three digits from
/// the right. No separator before a leading group shorter than three;
/// zero is just "0".
pub fn format_grouped(amount: RawAmount) -> String {
    let digits = amount.0.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }

    grouped
}

/// Prepends the fixed prefix and a single space. No currency suffix.
pub fn apply_prefix(grouped: &str) -> String {
    format!("{} {}", CURRENCY_PREFIX, grouped)
}

/// Full masked rendering of an amount. Zero renders as the empty string,
/// never as a bare prefix, so a cleared field stays parseable downstream.
pub fn mask(amount: RawAmount) -> String {
    if amount.is_zero() {
        String::new()
    } else {
        apply_prefix(&format_grouped(amount))
    }
}
