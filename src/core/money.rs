use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places monetary outputs are shown with
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to display precision.
///
/// Applied once, to final outputs only. Midpoints round away from zero, the
/// way published fee schedules and card statements round.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Formats an amount for display: two decimals with thousands separators.
///
/// `4152.333` renders as `"4,152.33"`.
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole.to_string(), fraction.to_string()),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-{}.{}", grouped, fraction)
    } else {
        format!("{}.{}", grouped, fraction)
    }
}
