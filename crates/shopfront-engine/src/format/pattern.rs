use regex::Regex;
use std::sync::OnceLock;

/// Decomposed form of an Excel-style number format pattern.
///
/// A pattern splits into five semantic zones: literal prefix text, a run of
/// integer placeholders, the thousands separator, the 1-3 placeholder ones
/// group, an optional decimal section (marker plus placeholder run) and
/// literal suffix text. `#` marks an optional digit, `0` a mandatory one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPattern {
    pub prefix: String,
    pub int_digits: String,
    pub separator: String,
    pub final_group: String,
    pub decimal_marker: String,
    pub decimal_digits: String,
    pub suffix: String,
}

fn grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        Regex::new(
            r"(?s)^(?P<prefix>.*?)(?P<int>[#0]+)(?P<sep>[^#0]*?)(?P<last>[#0]{1,3})(?:(?P<marker>[^#0]+)(?P<dec>[#0]+))?(?P<suffix>.*)$",
        )
        .expect("format pattern grammar is valid")
    })
}

impl FormatPattern {
    /// Parses a pattern string, or `None` when it fails the grammar.
    ///
    /// An absent decimal section leaves `decimal_marker` and
    /// `decimal_digits` empty.
    pub fn parse(pattern: &str) -> Option<Self> {
        let caps = grammar().captures(pattern)?;
        let group = |name: &str| caps.name(name).map_or("", |m| m.as_str()).to_string();

        Some(Self {
            prefix: group("prefix"),
            int_digits: group("int"),
            separator: group("sep"),
            final_group: group("last"),
            decimal_marker: group("marker"),
            decimal_digits: group("dec"),
            suffix: group("suffix"),
        })
    }

    /// Number of decimal digits the pattern declares.
    pub fn decimal_places(&self) -> usize {
        self.decimal_digits.len()
    }

    /// Mandatory decimal digits: the 1-based position of the rightmost `0`
    /// in the decimal run, zero when every decimal is optional.
    pub fn min_decimal_digits(&self) -> usize {
        self.decimal_digits.rfind('0').map_or(0, |i| i + 1)
    }

    /// Mandatory integer digits: the distance of the leftmost `0` in the
    /// combined integer run from the ones place, zero when none is present.
    pub fn min_integer_digits(&self) -> usize {
        let run_len = self.int_digits.len() + self.final_group.len();
        self.int_digits
            .find('0')
            .or_else(|| {
                self.final_group
                    .find('0')
                    .map(|i| i + self.int_digits.len())
            })
            .map_or(0, |i| run_len - i)
    }

    /// Whether the pattern declares a decimal section at all.
    pub fn has_decimal_section(&self) -> bool {
        !self.decimal_marker.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_grouped_two_decimal_pattern() {
        let p = FormatPattern::parse("#.##0,00").unwrap();
        assert_eq!(p.int_digits, "#");
        assert_eq!(p.separator, ".");
        assert_eq!(p.final_group, "##0");
        assert_eq!(p.decimal_marker, ",");
        assert_eq!(p.decimal_digits, "00");
        assert_eq!(p.suffix, "");
    }

    #[test]
    fn parse_pattern_without_decimal_section() {
        let p = FormatPattern::parse("#,##0").unwrap();
        assert_eq!(p.separator, ",");
        assert_eq!(p.final_group, "##0");
        assert!(!p.has_decimal_section());
        assert_eq!(p.decimal_places(), 0);
    }

    #[test]
    fn parse_pattern_with_prefix_and_suffix() {
        let p = FormatPattern::parse("ca. #.##0,00 EUR").unwrap();
        assert_eq!(p.prefix, "ca. ");
        assert_eq!(p.suffix, " EUR");
    }

    #[test]
    fn single_placeholder_fails_grammar() {
        assert_eq!(FormatPattern::parse("0"), None);
        assert_eq!(FormatPattern::parse("#"), None);
    }

    #[test]
    fn text_only_pattern_fails_grammar() {
        assert_eq!(FormatPattern::parse("price"), None);
        assert_eq!(FormatPattern::parse(""), None);
    }

    #[test]
    fn mandatory_digit_counts() {
        let p = FormatPattern::parse("#.##0,0#").unwrap();
        assert_eq!(p.min_integer_digits(), 1);
        assert_eq!(p.min_decimal_digits(), 1);

        let all_optional = FormatPattern::parse("#.###,##").unwrap();
        assert_eq!(all_optional.min_integer_digits(), 0);
        assert_eq!(all_optional.min_decimal_digits(), 0);

        let wide = FormatPattern::parse("0.000,00").unwrap();
        assert_eq!(wide.min_integer_digits(), 4);
        assert_eq!(wide.min_decimal_digits(), 2);
    }

    #[test]
    fn ungrouped_pattern_has_empty_separator() {
        let p = FormatPattern::parse("###0").unwrap();
        assert_eq!(p.int_digits, "###");
        assert_eq!(p.separator, "");
        assert_eq!(p.final_group, "0");
        assert!(!p.has_decimal_section());
    }

    #[test]
    fn single_separator_is_read_as_thousands_separator() {
        // With only one separator zone the grammar assigns it to grouping,
        // never to the decimal marker.
        let p = FormatPattern::parse("###0.00").unwrap();
        assert_eq!(p.int_digits, "###0");
        assert_eq!(p.separator, ".");
        assert_eq!(p.final_group, "00");
        assert!(!p.has_decimal_section());
    }
}
