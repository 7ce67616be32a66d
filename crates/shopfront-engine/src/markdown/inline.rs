use regex::Regex;
use std::sync::OnceLock;

/// Ordered inline substitution table, compiled once per process.
///
/// Order matters: `***` must be rewritten before `**` and `*`, and every
/// later pattern operates on the output of the earlier ones. All captures
/// are non-greedy, so each pattern takes the shortest span between its
/// delimiters. The color/align patterns carry the dot-matches-newline
/// flag even though substitution runs per line.
fn patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"\*\*\*(.+?)\*\*\*", "<strong><em>${1}</em></strong>"),
            (r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
            (r"\*(.+?)\*", "<em>${1}</em>"),
            (r"~~(.+?)~~", "<s>${1}</s>"),
            (r"_(.+?)_", "<u>${1}</u>"),
            (
                r"(?s)\{color:(#[0-9a-fA-F]{3,6})\}(.*?)\{/color\}",
                r#"<div style="color:${1}">${2}</div>"#,
            ),
            (
                r"(?s)\{align:([a-z]*)\}(.*?)\{/align\}",
                r#"<div style="display: block; text-align:${1}">${2}</div>"#,
            ),
            (r"\[(.+?)\]\((.+?)\)", r#"<a href="${2}">${1}</a>"#),
            (r"`(.+?)`", "<code>${1}</code>"),
        ]
        .into_iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("inline pattern is valid"),
                replacement,
            )
        })
        .collect()
    })
}

/// Runs every inline substitution over a line, in table order.
pub(crate) fn apply(line: &str) -> String {
    let mut line = line.to_string();
    for (regex, replacement) in patterns() {
        if let std::borrow::Cow::Owned(replaced) = regex.replace_all(&line, *replacement) {
            line = replaced;
        }
    }
    line
}
