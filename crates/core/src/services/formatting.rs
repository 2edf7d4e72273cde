//! Display formatting for monetary values, quantities, and percentages.
//!
//! Missing numeric input always renders from zero — never a blank, a
//! raw "NaN", or a panic.

/// Fixed two-decimal currency display with thousands grouping.
/// `format_currency(Some(1234.5))` is `"$1,234.50"`; `None` is `"$0.00"`.
#[must_use]
pub fn format_currency(value: Option<f64>) -> String {
    let v = sanitize(value);
    let (sign, abs) = split_sign(v);
    format!("{sign}${}", group_decimal(&format!("{abs:.2}")))
}

/// Signed currency display for profit/loss figures: gains carry an
/// explicit leading `+`.
#[must_use]
pub fn format_profit_loss(value: Option<f64>) -> String {
    let v = sanitize(value);
    if v >= 0.0 {
        format!("+${}", group_decimal(&format!("{v:.2}")))
    } else {
        format!("-${}", group_decimal(&format!("{:.2}", -v)))
    }
}

/// Asset quantity display: up to six decimals, trailing zeros trimmed,
/// thousands grouping on the integer part.
#[must_use]
pub fn format_quantity(value: Option<f64>) -> String {
    let v = sanitize(value);
    let (sign, abs) = split_sign(v);
    let mut fixed = format!("{abs:.6}");
    // Trim trailing zeros, then a dangling decimal point.
    while fixed.ends_with('0') {
        fixed.pop();
    }
    if fixed.ends_with('.') {
        fixed.pop();
    }
    format!("{sign}{}", group_decimal(&fixed))
}

/// Signed two-decimal percentage, e.g. `"+12.34%"`.
#[must_use]
pub fn format_percent(value: Option<f64>) -> String {
    let v = sanitize(value);
    if v >= 0.0 {
        format!("+{v:.2}%")
    } else {
        format!("{v:.2}%")
    }
}

/// Missing or non-finite input formats as zero.
fn sanitize(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

fn split_sign(v: f64) -> (&'static str, f64) {
    if v < 0.0 {
        ("-", -v)
    } else {
        ("", v)
    }
}

/// Insert comma separators into the integer part of an already-formatted
/// non-negative decimal string.
fn group_decimal(s: &str) -> String {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}
