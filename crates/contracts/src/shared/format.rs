//! Display formatting for KPI cards and grid cells.
//!
//! Non-finite input (the `NaN` produced by zero task hours) always renders as
//! a dash instead of `"NaN"`.

pub const DASH: &str = "—";

/// Fixed number of decimals, like `toFixed`
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return DASH.to_string();
    }
    format!("{:.prec$}", value, prec = decimals)
}

/// Number with a comma thousands separator and the given decimals
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return DASH.to_string();
    }
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    // no "-0"
    let rounds_to_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !rounds_to_zero {
        result.insert(0, '-');
    }

    match decimal_part {
        Some(d) => format!("{}.{}", result, d),
        None => result,
    }
}

/// Dollar amount; whole amounts drop the cents
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return DASH.to_string();
    }
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    let number = format_number_with_decimals(value.abs(), decimals);
    if value < 0.0 {
        format!("-${}", number)
    } else {
        format!("${}", number)
    }
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return DASH.to_string();
    }
    format!("{:.prec$}%", value, prec = decimals)
}

/// Percent with an explicit `+` for positive values
pub fn format_signed_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return DASH.to_string();
    }
    if value > 0.0 {
        format!("+{:.prec$}%", value, prec = decimals)
    } else {
        format!("{:.prec$}%", value, prec = decimals)
    }
}
