//! Number rendering for the storefront's money/number display filter.
//!
//! Patterns follow the Excel-like placeholder grammar described on
//! [`FormatPattern`]: `format_number(1234.5, "#.##0,00")` renders
//! `"1.234,50"`. Rendering never fails; a pattern the grammar rejects
//! degrades to a comma-grouped two-decimal default.

mod pattern;

pub use pattern::FormatPattern;

/// Renders `value` according to an Excel-style format pattern.
///
/// Decimal digits are truncated to the pattern's precision, never rounded.
/// Invalid patterns fall back to [`default_format`].
pub fn format_number(value: f64, pattern: &str) -> String {
    match FormatPattern::parse(pattern) {
        Some(parsed) => render(value, &parsed),
        None => default_format(value),
    }
}

/// The degraded rendering used whenever a pattern cannot be honored:
/// thousands grouped by comma, exactly two decimal digits.
pub fn default_format(value: f64) -> String {
    let rendered = format!("{value:.2}");
    match rendered.split_once('.') {
        Some((int_part, dec_part)) => {
            let (sign, digits) = match int_part.strip_prefix('-') {
                Some(rest) => ("-", rest),
                None => ("", int_part),
            };
            format!("{sign}{}.{dec_part}", group_integer(digits, ","))
        }
        // Non-finite values have no decimal point to split on.
        None => rendered,
    }
}

fn render(value: f64, pattern: &FormatPattern) -> String {
    // Shortest round-trip representation, the same digits a user would see.
    let repr = format!("{value}");
    let (int_repr, frac_repr) = match repr.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (repr.as_str(), ""),
    };

    // A pattern without a decimal section cannot express a fractional
    // value; such values degrade to the default rendering.
    if !pattern.has_decimal_section() && (value.fract() != 0.0 || pattern.min_decimal_digits() > 0)
    {
        return default_format(value);
    }

    let (sign, digits) = match int_repr.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_repr),
    };
    let min_int = pattern.min_integer_digits();
    let padded = if digits.len() < min_int {
        format!("{}{digits}", "0".repeat(min_int - digits.len()))
    } else {
        digits.to_string()
    };
    let grouped = format!("{sign}{}", group_integer(&padded, &pattern.separator));

    if !pattern.has_decimal_section() {
        return format!("{}{grouped}{}", pattern.prefix, pattern.suffix);
    }

    let mut decimals: String = frac_repr.chars().take(pattern.decimal_places()).collect();
    while decimals.len() < pattern.min_decimal_digits() {
        decimals.push('0');
    }

    if decimals.is_empty() {
        format!("{}{grouped}{}", pattern.prefix, pattern.suffix)
    } else {
        format!(
            "{}{grouped}{}{decimals}{}",
            pattern.prefix, pattern.decimal_marker, pattern.suffix
        )
    }
}

/// Inserts `separator` every three digits from the right. The caller strips
/// any sign beforehand; an empty separator leaves the run untouched.
fn group_integer(digits: &str, separator: &str) -> String {
    if separator.is_empty() {
        return digits.to_string();
    }
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + separator.len() * (digits.len() / 3));
    for (i, ch) in chars.iter().enumerate() {
        if i != 0 && (chars.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(*ch);
    }
    grouped
}
