//! Lightweight markup to display markup.
//!
//! The passes run in the order of [`PIPELINE`]; later passes rely on what the
//! earlier ones left behind (list items exist before they are coalesced, bold
//! is gone before italics are matched, list structure is in place before
//! newlines become line breaks).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::extraction::grammar::normalize_newlines;
use crate::models::domain::FormattedMaterial;

static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(#{1,3})[ \t]+(.*?)[ \t]*$").expect("HEADING is a valid regex pattern")
});
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:[*-][ \t]+|\d+\.[ \t]*)(.*?)[ \t]*$")
        .expect("LIST_ITEM is a valid regex pattern")
});
static LIST_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<li>.*?</li>(?:\n<li>.*?</li>)*").expect("LIST_RUN is a valid regex pattern")
});
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("BOLD is a valid regex pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*([^\s*]|[^\s*][^*\n]*[^\s*])\*").expect("ITALIC is a valid regex pattern")
});
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("INLINE_CODE is a valid regex pattern"));
static CODE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(.*?)```").expect("CODE_BLOCK is a valid regex pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Headings,
    ListItems,
    ListContainers,
    Bold,
    Italic,
    InlineCode,
    CodeBlocks,
    LineBreaks,
}

pub const PIPELINE: [Pass; 8] = [
    Pass::Headings,
    Pass::ListItems,
    Pass::ListContainers,
    Pass::Bold,
    Pass::Italic,
    Pass::InlineCode,
    Pass::CodeBlocks,
    Pass::LineBreaks,
];

impl Pass {
    pub fn apply(self, text: &str) -> String {
        match self {
            Pass::Headings => HEADING
                .replace_all(text, |c: &Captures| {
                    let level = c[1].len();
                    format!("<h{level}>{}</h{level}>", &c[2])
                })
                .into_owned(),
            Pass::ListItems => LIST_ITEM.replace_all(text, "<li>${1}</li>").into_owned(),
            Pass::ListContainers => LIST_RUN.replace_all(text, "<ul>${0}</ul>").into_owned(),
            Pass::Bold => BOLD.replace_all(text, "<strong>${1}</strong>").into_owned(),
            Pass::Italic => ITALIC.replace_all(text, "<em>${1}</em>").into_owned(),
            Pass::InlineCode => INLINE_CODE.replace_all(text, "<code>${1}</code>").into_owned(),
            Pass::CodeBlocks => CODE_BLOCK
                .replace_all(text, |c: &Captures| render_code_block(&c[1]))
                .into_owned(),
            Pass::LineBreaks => convert_line_breaks(text),
        }
    }
}

/// Runs the full pipeline. Never fails; text with no markup comes back
/// escaped with its newlines turned into line breaks.
pub fn format_material(text: &str) -> FormattedMaterial {
    let mut markup = escape_html(&normalize_newlines(text));
    for pass in PIPELINE {
        markup = pass.apply(&markup);
    }
    FormattedMaterial { markup }
}

/// Escapes the characters that would otherwise let model text inject markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn render_code_block(body: &str) -> String {
    let (language, code) = match body.split_once('\n') {
        Some((info, rest)) if is_language_tag(info.trim()) => (Some(info.trim()), rest),
        _ => (None, body),
    };
    let code = code.strip_prefix('\n').unwrap_or(code);
    let code = code.strip_suffix('\n').unwrap_or(code);

    match language {
        Some(language) => format!(r#"<pre><code class="language-{language}">{code}</code></pre>"#),
        None => format!("<pre><code>{code}</code></pre>"),
    }
}

fn is_language_tag(info: &str) -> bool {
    !info.is_empty()
        && info
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '_' | '#' | '.'))
}

// A newline right after a list item or right before a list stays a newline.
fn convert_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut last = 0;

    for (idx, _) in text.match_indices('\n') {
        out.push_str(&text[last..idx]);
        let in_list = text[..idx].ends_with("</li>") || text[idx + 1..].starts_with("<ul>");
        out.push_str(if in_list { "\n" } else { "<br>" });
        last = idx + 1;
    }
    out.push_str(&text[last..]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_bullets_become_one_list() {
        let material = format_material("# Title\n* item1\n* item2\n");

        assert_eq!(
            material.markup,
            "<h1>Title</h1>\n<ul><li>item1</li>\n<li>item2</li></ul><br>"
        );
        assert_eq!(material.markup.matches("<ul>").count(), 1);
        assert_eq!(material.markup.matches("<li>").count(), 2);
    }

    #[test]
    fn heading_levels_follow_marker_count() {
        let out = Pass::Headings.apply("# One\n## Two\n### Three\n#### Four\n#NoSpace");

        assert_eq!(
            out,
            "<h1>One</h1>\n<h2>Two</h2>\n<h3>Three</h3>\n#### Four\n#NoSpace"
        );
    }

    #[test]
    fn heading_pass_is_noop_without_hash_lines() {
        let text = "<h1>Done</h1>\n<ul><li>a</li></ul>\nplain";
        assert_eq!(Pass::Headings.apply(text), text);

        let formatted = format_material("plain text\n* a").markup;
        assert_eq!(Pass::Headings.apply(&formatted), formatted);
    }

    #[test]
    fn numbered_and_bulleted_items_share_one_container() {
        let out = format_material("1. First\n2. Second\n- Third").markup;

        assert_eq!(
            out,
            "<ul><li>First</li>\n<li>Second</li>\n<li>Third</li></ul>"
        );
    }

    #[test]
    fn numbered_items_need_no_space_after_numeral() {
        let out = format_material("1.First\n2.Second").markup;

        assert_eq!(out, "<ul><li>First</li>\n<li>Second</li></ul>");
    }

    #[test]
    fn bullets_still_need_a_space() {
        let out = format_material("*emphasis* only\n-5 degrees").markup;

        assert!(!out.contains("<li>"));
        assert!(out.contains("<em>emphasis</em>"));
    }

    #[test]
    fn separate_lists_get_separate_containers() {
        let out = format_material("* a\n\nText\n* b").markup;

        assert_eq!(out.matches("<ul>").count(), 2);
        assert!(out.contains("Text"));
    }

    #[test]
    fn bold_runs_before_italic() {
        let out = format_material("**strong** and *soft*").markup;
        assert_eq!(out, "<strong>strong</strong> and <em>soft</em>");
    }

    #[test]
    fn italic_ignores_spaced_asterisks() {
        let out = Pass::Italic.apply("2 * 3 * 4");
        assert_eq!(out, "2 * 3 * 4");
    }

    #[test]
    fn inline_code_and_fenced_block() {
        let text = "Call `main` first.\n```rust\nfn main() {}\n```\nDone.";
        let out = format_material(text).markup;

        assert!(out.contains("<code>main</code>"));
        assert!(out.contains(r#"<pre><code class="language-rust">fn main() {}</code></pre>"#));
        assert!(out.ends_with("<br>Done."));
    }

    #[test]
    fn fenced_blocks_do_not_merge() {
        let out = Pass::CodeBlocks.apply("```\na\n```\nmid\n```\nb\n```");
        assert_eq!(out, "<pre><code>a</code></pre>\nmid\n<pre><code>b</code></pre>");
    }

    #[test]
    fn multi_line_block_keeps_inner_lines() {
        let out = Pass::CodeBlocks.apply("```python\nx = 1\ny = 2\n```");
        assert_eq!(
            out,
            "<pre><code class=\"language-python\">x = 1\ny = 2</code></pre>"
        );
    }

    #[test]
    fn model_text_cannot_inject_tags() {
        let out = format_material("<script>alert(1)</script> & `Vec<u8>`").markup;

        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
        assert!(out.contains("&amp;"));
        assert!(out.contains("<code>Vec&lt;u8&gt;</code>"));
    }

    #[test]
    fn plain_newlines_become_breaks() {
        assert_eq!(format_material("a\nb\r\nc").markup, "a<br>b<br>c");
    }

    #[test]
    fn empty_and_unbalanced_input_is_total() {
        assert_eq!(format_material("").markup, "");
        let out = format_material("**unclosed and `tick and ``` fence").markup;
        assert!(out.contains("unclosed"));
    }

    #[test]
    fn pipeline_order_is_fixed() {
        assert_eq!(PIPELINE[0], Pass::Headings);
        assert_eq!(PIPELINE[3], Pass::Bold);
        assert_eq!(PIPELINE[4], Pass::Italic);
        assert_eq!(PIPELINE[7], Pass::LineBreaks);
    }
}
