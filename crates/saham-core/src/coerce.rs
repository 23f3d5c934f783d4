//! Numeric coercion for heterogeneous spreadsheet cells.
//!
//! Every numeric comparison, sort and aggregation in the crate goes through
//! this module, so a column holding `"1,234.50"` in one export and `1234.5`
//! in another behaves identically everywhere.

use crate::value::RawValue;

/// Coerces a raw cell into a finite number. Missing and unparseable input
/// defaults to zero rather than failing the row.
#[must_use]
pub fn to_number(raw: &RawValue) -> f64 {
    match raw {
        RawValue::Empty => 0.0,
        RawValue::Number(n) if n.is_finite() => *n,
        RawValue::Number(_) => 0.0,
        RawValue::Text(s) => parse_number(s),
    }
}

/// Parses a display string into a finite number.
///
/// Strips all whitespace, `%` and thousands-separator `,` characters, then
/// takes the longest valid floating-point prefix of what remains. Anything
/// without such a prefix parses to zero.
#[must_use]
pub fn parse_number(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '%' && *c != ',')
        .collect();

    let prefix = float_prefix(&cleaned);
    if prefix.is_empty() {
        return 0.0;
    }
    match prefix.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Longest prefix of `s` that forms a valid float literal:
/// `[+-]? digits [. digits]? [eE [+-]? digits]?`, where at least one digit
/// must appear before the exponent.
fn float_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - i - 1;
        if int_digits + frac_digits > 0 {
            i = j;
        }
    }

    if int_digits + frac_digits == 0 {
        return "";
    }

    // Exponent only counts when it is complete; "12e" stays 12.
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    &s[..i]
}
