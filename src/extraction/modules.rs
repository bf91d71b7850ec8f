//! Module list extraction.
//!
//! Not anchored to any section: every numbered line in the response counts,
//! including ones that sit inside unrelated prose.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::grammar::clean_field;

static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\.[ \t]+(.+)").expect("NUMBERED_LINE is a valid regex pattern")
});

/// Module names in source order, duplicates kept.
pub fn extract_modules(text: &str) -> Vec<String> {
    let modules: Vec<String> = NUMBERED_LINE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| clean_field(m.as_str()))
        .filter(|module| !module.is_empty())
        .collect();

    log::debug!("module list: {} entries", modules.len());
    modules
}
