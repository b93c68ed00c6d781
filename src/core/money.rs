use rust_decimal::Decimal;

/// Dashboard amounts are whole pesos
pub const DISPLAY_SCALE: u32 = 0;

/// Rounds an amount to the display scale (banker's rounding)
pub fn round(amount: Decimal) -> Decimal {
    amount.round_dp(DISPLAY_SCALE)
}

/// Formats an amount the way KPI cards show it: `$1.234.567`
///
/// Dot as thousands separator, no decimals, leading minus for negatives.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Share of `part` in `whole` as a percentage with two decimals, zero when `whole` is zero
pub fn share_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|percent| percent.round_dp(2))
        .unwrap_or(Decimal::ZERO)
}
