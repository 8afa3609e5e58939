//! Conversion of raw fee strings from the schedule store into whole-currency
//! integers.
//!
//! Stored charges arrive as free text (`"1,420"`, `"$ 135"`, `""`). Parsing is
//! total: anything that is not a non-negative amount becomes 0.

/// Parse a raw charge string, returning `None` when no amount can be read.
///
/// Accepted shape: optional surrounding whitespace, an optional leading `$`,
/// digits with optional `,` thousands separators, and an optional fractional
/// part which is truncated. Trailing text after the digits is ignored.
pub fn try_parse_charge(raw: &str) -> Option<u64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();
    let cleaned = cleaned.strip_prefix('$').unwrap_or(cleaned).trim_start();

    let digits: String = cleaned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    digits.parse::<u64>().ok()
}

/// Parse a raw charge string; unparsable or empty input yields 0.
pub fn parse_charge(raw: &str) -> u64 {
    try_parse_charge(raw).unwrap_or(0)
}
