//! Segment-then-match engine shared by the chunked extractors.
//!
//! A [`ChunkGrammar`] splits a model response into chunks at every marker
//! match, then matches each chunk against one body pattern. A chunk that
//! misses any required capture is dropped; its neighbours are unaffected.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static LIST_NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.\s*").expect("LIST_NUMERAL is a valid regex pattern"));

/// A versioned pair of marker and body patterns plus the captures a chunk
/// must yield to become a record.
#[derive(Debug)]
pub struct ChunkGrammar {
    pub name: &'static str,
    pub version: u32,
    marker: Regex,
    body: Regex,
    required: &'static [&'static str],
}

impl ChunkGrammar {
    /// Compiles both patterns. Grammars are built from literals held in
    /// statics, so an invalid pattern is a programming error.
    pub fn new(
        name: &'static str,
        version: u32,
        marker: &str,
        body: &str,
        required: &'static [&'static str],
    ) -> Self {
        let marker = Regex::new(marker)
            .unwrap_or_else(|e| panic!("{} marker is not a valid regex pattern: {}", name, e));
        let body = Regex::new(body)
            .unwrap_or_else(|e| panic!("{} body is not a valid regex pattern: {}", name, e));
        Self {
            name,
            version,
            marker,
            body,
            required,
        }
    }

    pub fn required_fields(&self) -> &'static [&'static str] {
        self.required
    }

    /// Splits `text` into chunks, each running from one marker to the next
    /// marker or the end of the text. Text before the first marker is ignored.
    pub fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let starts: Vec<usize> = self.marker.find_iter(text).map(|m| m.start()).collect();

        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(text.len());
                text[start..end].trim()
            })
            .collect()
    }

    /// Matches one chunk against the body pattern and collects the required
    /// captures, cleaned. `None` when the body does not match or a required
    /// capture did not participate.
    pub fn match_chunk(&self, chunk: &str) -> Option<Fields> {
        let captures = self.body.captures(chunk)?;

        let mut values = HashMap::with_capacity(self.required.len());
        for &name in self.required {
            let value = captures.name(name)?;
            values.insert(name, clean_field(value.as_str()));
        }

        Some(Fields { values })
    }

    /// Runs segmentation and per-chunk matching for record type `R`.
    pub fn extract<R: ChunkRecord>(&self, text: &str) -> Extraction<R> {
        let text = normalize_newlines(text);
        let chunks = self.segment(&text);

        let mut records = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            match self.match_chunk(chunk) {
                Some(mut fields) => records.push(R::from_fields(&mut fields)),
                None => log::debug!(
                    "{} v{} dropped chunk: {:?}",
                    self.name,
                    self.version,
                    preview(chunk)
                ),
            }
        }

        let extraction = Extraction {
            matched: records.len(),
            dropped: chunks.len() - records.len(),
            records,
        };

        if extraction.dropped > 0 {
            log::warn!(
                "{} v{} matched {} of {} chunks, dropped {}",
                self.name,
                self.version,
                extraction.matched,
                extraction.total(),
                extraction.dropped
            );
        } else {
            log::debug!(
                "{} v{} matched {} chunks",
                self.name,
                self.version,
                extraction.matched
            );
        }

        extraction
    }
}

/// A record that can be assembled from the captures of one chunk.
pub trait ChunkRecord: Sized {
    fn grammar() -> &'static ChunkGrammar;

    /// Called only once every required field of the grammar matched.
    fn from_fields(fields: &mut Fields) -> Self;

    fn extract_all(text: &str) -> Extraction<Self> {
        Self::grammar().extract(text)
    }
}

/// Cleaned captures of one matched chunk, keyed by group name.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    values: HashMap<&'static str, String>,
}

impl Fields {
    pub fn take(&mut self, name: &str) -> String {
        self.values.remove(name).unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Records produced by one extraction plus how many chunks matched and how
/// many were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<R> {
    pub records: Vec<R>,
    pub matched: usize,
    pub dropped: usize,
}

impl<R> Default for Extraction<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            matched: 0,
            dropped: 0,
        }
    }
}

impl<R> Extraction<R> {
    pub fn total(&self) -> usize {
        self.matched + self.dropped
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

/// Trims whitespace and a dangling bold marker from either end of a value.
pub fn clean_field(raw: &str) -> String {
    let mut value = raw.trim();
    if let Some(rest) = value.strip_prefix("**") {
        value = rest.trim_start();
    }
    if let Some(rest) = value.strip_suffix("**") {
        value = rest.trim_end();
    }
    value.to_string()
}

/// Drops the leading `"<number>."` of a list line and the whitespace after it.
pub fn strip_list_numeral(line: &str) -> &str {
    match LIST_NUMERAL.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line.trim(),
    }
}

pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn preview(chunk: &str) -> String {
    chunk.chars().take(80).collect()
}
