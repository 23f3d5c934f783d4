//! Display formatting for normalized cells and aggregates.

use crate::schema::ColumnType;
use crate::value::Value;

/// Formats a cell for display according to its column type.
///
/// Text passes through unchanged. Numeric cells render `-` when non-finite,
/// percentages with two decimals and a `%` suffix, and plain numbers with
/// thousands grouping and at most two decimals.
#[must_use]
pub fn format_cell(value: &Value, ty: ColumnType) -> String {
    match ty {
        ColumnType::Text => value.as_text(),
        ColumnType::Percent => format_percent(value.as_number()),
        ColumnType::Number => format_number(value.as_number()),
    }
}

/// Formats a percentage with two decimals, e.g. `12.34 %`.
#[must_use]
pub fn format_percent(n: f64) -> String {
    if n.is_finite() {
        format!("{n:.2} %")
    } else {
        "-".to_string()
    }
}

/// Formats a number with thousands grouping and at most two decimals.
/// Integral values render without a fraction.
#[must_use]
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "-".to_string();
    }
    if n.fract() == 0.0 {
        return group_thousands(n);
    }

    let rounded = format!("{n:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed.split_once('.') {
        Some((int_part, frac)) => {
            let grouped = group_digits(int_part);
            format!("{grouped}.{frac}")
        }
        None => group_digits(trimmed),
    }
}

/// Compact form for large aggregates: trillions, billions and millions get a
/// `T`/`B`/`M` suffix with two decimals; everything else rounds to a grouped
/// integer.
#[must_use]
pub fn format_compact(n: f64) -> String {
    if !n.is_finite() {
        return "-".to_string();
    }
    let abs = n.abs();
    if abs >= 1e12 {
        format!("{:.2}T", n / 1e12)
    } else if abs >= 1e9 {
        format!("{:.2}B", n / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", n / 1e6)
    } else {
        group_thousands(n.round())
    }
}

/// Groups the integral part of `n` by thousands.
#[must_use]
pub fn group_thousands(n: f64) -> String {
    if !n.is_finite() {
        return "-".to_string();
    }
    group_digits(&format!("{:.0}", n))
}

fn group_digits(digits: &str) -> String {
    let (sign, digits) = digits
        .strip_prefix('-')
        .map_or(("", digits), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}
