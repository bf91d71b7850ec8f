//! Course outline extraction.
//!
//! Each of the four fields is searched for independently, so a response that
//! drifts from the requested template still yields whatever fields it kept.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::grammar::{clean_field, normalize_newlines, strip_list_numeral};
use crate::models::domain::CourseOutline;

pub const OUTLINE_GRAMMAR_VERSION: u32 = 1;

struct OutlineGrammar {
    title: Regex,
    description: Regex,
    duration: Regex,
    chapters: Regex,
}

static OUTLINE_GRAMMAR: Lazy<OutlineGrammar> = Lazy::new(|| OutlineGrammar {
    title: Regex::new(r"Course Name\s*:\**\s*(.+)").expect("title is a valid regex pattern"),
    description: Regex::new(r"Course Description\s*:\**\s*(.+)")
        .expect("description is a valid regex pattern"),
    duration: Regex::new(r"Time to complete\s*\(in hours\)\s*:\**\s*(\d+)")
        .expect("duration is a valid regex pattern"),
    chapters: Regex::new(r"Chapters\s*:\**[ \t]*\n(?:[ \t]*\n)*((?:[ \t]*\d+\.[ \t]+.+\n?)*)")
        .expect("chapters is a valid regex pattern"),
});

pub fn extract_outline(text: &str) -> CourseOutline {
    let text = normalize_newlines(text);
    let grammar = &*OUTLINE_GRAMMAR;

    let outline = CourseOutline {
        title: first_capture(&grammar.title, &text)
            .map(clean_field)
            .unwrap_or_default(),
        description: first_capture(&grammar.description, &text)
            .map(clean_field)
            .unwrap_or_default(),
        // An hour count too large for u32 is treated like a missing one.
        duration: first_capture(&grammar.duration, &text)
            .and_then(|hours| hours.parse().ok())
            .unwrap_or(0),
        chapters: first_capture(&grammar.chapters, &text)
            .map(parse_chapter_block)
            .unwrap_or_default(),
    };

    log::debug!(
        "outline v{}: title={:?} duration={} chapters={}",
        OUTLINE_GRAMMAR_VERSION,
        outline.title,
        outline.duration,
        outline.chapters.len()
    );

    outline
}

fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn parse_chapter_block(block: &str) -> Vec<String> {
    block
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once(". ") {
            Some((_, rest)) => clean_field(rest),
            None => clean_field(strip_list_numeral(line)),
        })
        .filter(|chapter| !chapter.is_empty())
        .collect()
}
