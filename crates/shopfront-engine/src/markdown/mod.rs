//! The shop's markdown dialect, rendered to HTML one line at a time.
//!
//! Product descriptions and CMS pages are authored in a constrained
//! dialect: inline spans (`**bold**`, `{color:#f00}…{/color}`, links,
//! inline code), headings, lists, blockquotes, `---` rules, fenced code
//! blocks and raw `{html}` passthrough. [`to_html`] never fails; if the
//! converter hits an internal fault the original source is returned
//! unchanged so a rendering bug can never blank user content.

mod inline;

use std::panic::{self, AssertUnwindSafe};

/// Converts a markdown-dialect document to HTML.
///
/// Output lines are joined with `\n`. The result is trusted HTML;
/// sanitizing user-authored input is the caller's concern.
pub fn to_html(source: &str) -> String {
    panic::catch_unwind(AssertUnwindSafe(|| convert(source))).unwrap_or_else(|_| source.to_string())
}

/// Block-level modes. At most one is active for any given line; raw html
/// and code blocks suppress all other interpretation, lists and
/// blockquotes close implicitly on the first non-matching line.
#[derive(Debug, Default)]
struct BlockState {
    in_codeblock: bool,
    in_list: bool,
    in_blockquote: bool,
    in_html: bool,
}

fn convert(source: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut state = BlockState::default();

    for line in source.split('\n') {
        let trimmed = line.trim();

        // Raw-html toggles outrank every other mode, open fences included.
        if trimmed.starts_with("{html}") {
            state.in_html = true;
            continue;
        }
        if trimmed.starts_with("{/html}") {
            state.in_html = false;
            continue;
        }
        if state.in_html {
            out.push(line.to_string());
            continue;
        }

        if trimmed.starts_with("```") {
            let tag = if state.in_codeblock { "</pre>" } else { "<pre>" };
            out.push(tag.to_string());
            state.in_codeblock = !state.in_codeblock;
            continue;
        }
        if state.in_codeblock {
            out.push(html_escape::encode_text(line).into_owned());
            continue;
        }

        if state.in_list && !trimmed.starts_with("- ") {
            out.push("</ul>".to_string());
            state.in_list = false;
        }
        if state.in_blockquote && !trimmed.starts_with("> ") {
            out.push("</blockquote>".to_string());
            state.in_blockquote = false;
        }

        let line = inline::apply(line);
        let trimmed = line.trim();

        if trimmed.is_empty() {
            out.push("<br>".to_string());
        } else if trimmed.starts_with('#') {
            // Level is uncapped; ten hashes render <h10>.
            let level = trimmed.chars().take_while(|&c| c == '#').count();
            let content = trimmed[level..].trim();
            out.push(format!("<h{level}>{content}</h{level}>"));
        } else if trimmed.starts_with("---") {
            out.push("<hr>".to_string());
        } else if trimmed.starts_with("- ") {
            if !state.in_list {
                state.in_list = true;
                out.push("<ul>".to_string());
            }
            out.push(format!("\t<li>{}</li>", strip_marker(&line)));
        } else if trimmed.starts_with("> ") {
            if !state.in_blockquote {
                state.in_blockquote = true;
                out.push("<blockquote>".to_string());
            }
            out.push(strip_marker(&line).to_string());
        } else {
            out.push(format!("<p>{trimmed}</p>"));
        }
    }

    if state.in_list {
        out.push("</ul>".to_string());
    }
    if state.in_blockquote {
        out.push("</blockquote>".to_string());
    }
    if state.in_codeblock {
        out.push("</pre>".to_string());
    }

    out.join("\n")
}

/// Drops the two marker characters (`- ` or `> `) from the front of the
/// raw line and trims the rest.
fn strip_marker(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.next();
    chars.as_str().trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraph_with_inline_bold() {
        assert_eq!(to_html("**bold**"), "<p><strong>bold</strong></p>");
    }

    #[test]
    fn empty_input_renders_a_break() {
        assert_eq!(to_html(""), "<br>");
    }

    #[test]
    fn list_items_are_wrapped_and_tab_indented() {
        assert_eq!(to_html("- a\n- b"), "<ul>\n\t<li>a</li>\n\t<li>b</li>\n</ul>");
    }

    #[test]
    fn list_closes_on_first_non_list_line() {
        assert_eq!(
            to_html("- a\ntext"),
            "<ul>\n\t<li>a</li>\n</ul>\n<p>text</p>"
        );
    }

    #[test]
    fn code_block_content_is_escaped_verbatim() {
        assert_eq!(to_html("```\n<tag>\n```"), "<pre>\n&lt;tag&gt;\n</pre>");
        assert_eq!(
            to_html("```\na & b\n**not bold**\n```"),
            "<pre>\na &amp; b\n**not bold**\n</pre>"
        );
    }

    #[test]
    fn headings_count_leading_hashes_uncapped() {
        assert_eq!(to_html("# One"), "<h1>One</h1>");
        assert_eq!(to_html("### Three"), "<h3>Three</h3>");
        assert_eq!(to_html("########## Ten"), "<h10>Ten</h10>");
    }

    #[test]
    fn horizontal_rule() {
        assert_eq!(to_html("---"), "<hr>");
    }

    #[test]
    fn blockquote_lines_are_unwrapped_inside_container() {
        assert_eq!(
            to_html("> first\n> second\ndone"),
            "<blockquote>\nfirst\nsecond\n</blockquote>\n<p>done</p>"
        );
    }

    #[test]
    fn raw_html_passes_through_unprocessed() {
        assert_eq!(
            to_html("{html}\n<table>**x**</table>\n{/html}\nafter"),
            "<table>**x**</table>\n<p>after</p>"
        );
    }

    #[test]
    fn html_toggle_outranks_code_fences() {
        // A {html} line inside a fence still switches modes.
        assert_eq!(
            to_html("```\n{html}\n<raw>\n{/html}\n```"),
            "<pre>\n<raw>\n</pre>"
        );
    }

    #[test]
    fn unterminated_blocks_are_force_closed_once() {
        assert_eq!(to_html("- open"), "<ul>\n\t<li>open</li>\n</ul>");
        assert_eq!(to_html("> open"), "<blockquote>\nopen\n</blockquote>");
        assert_eq!(to_html("```\nopen"), "<pre>\nopen\n</pre>");
    }

    #[test]
    fn list_then_quote_transition() {
        assert_eq!(
            to_html("- a\n> q"),
            "<ul>\n\t<li>a</li>\n</ul>\n<blockquote>\nq\n</blockquote>"
        );
    }

    #[test]
    fn blank_lines_become_breaks() {
        assert_eq!(to_html("a\n\nb"), "<p>a</p>\n<br>\n<p>b</p>");
    }

    #[test]
    fn mixed_document() {
        let source = "# Shop News\nWelcome to the **summer** sale.\n\n- Hats\n- Shoes\n> quoted";
        assert_eq!(
            to_html(source),
            "<h1>Shop News</h1>\n<p>Welcome to the <strong>summer</strong> sale.</p>\n<br>\n<ul>\n\t<li>Hats</li>\n\t<li>Shoes</li>\n</ul>\n<blockquote>\nquoted\n</blockquote>"
        );
    }

    #[test]
    fn malformed_nesting_never_panics() {
        for source in [
            "{/html}\n{color:#fff}",
            "{html}\n{html}\ntext",
            "```\n```\n```",
            "- \n> \n#",
        ] {
            let _ = to_html(source);
        }
    }
}
