//! Answer analysis extraction.
//!
//! Same segment-then-match flow as the MCQ extractor, but the review prompt
//! produces `**Question N:` markers and a bulleted field list that ends with
//! an explanation. Chunks without an explanation are dropped.

use once_cell::sync::Lazy;

use crate::extraction::grammar::{ChunkGrammar, ChunkRecord, Extraction, Fields};
use crate::models::domain::AnswerReview;

pub const ANALYSIS_GRAMMAR_VERSION: u32 = 1;

const ANALYSIS_MARKER: &str = r"\*\*Question\s*\d+\s*:";

const ANALYSIS_BODY: &str = r"(?xs)
    \*\*Question\s*(?P<question_number>\d+)\s*:\s*(?P<question>.*?)
    \s*\n\s*(?:[*-]\s*)?(?:\*\*)?Options(?:\*\*)?\s*:(?:\*\*)?
    \s*\n\s*(?:[*-]\s*)?[1aA][.)]\s*(?P<option1>.*?)
    \s*\n\s*(?:[*-]\s*)?[2bB][.)]\s*(?P<option2>.*?)
    \s*\n\s*(?:[*-]\s*)?[3cC][.)]\s*(?P<option3>.*?)
    \s*\n\s*(?:[*-]\s*)?[4dD][.)]\s*(?P<option4>.*?)
    \s*\n\s*(?:[*-]\s*)?(?:\*\*)?Selected\s*Answer(?:\*\*)?\s*:(?:\*\*)?\s*(?P<selected_answer>[^\n]+)
    \s*\n\s*(?:[*-]\s*)?(?:\*\*)?Correct\s*Answer(?:\*\*)?\s*:(?:\*\*)?\s*(?P<correct_answer>[^\n]+)
    \s*\n\s*(?:[*-]\s*)?(?:\*\*)?Explanation(?:\*\*)?\s*:(?:\*\*)?\s*(?P<explanation>[^\n]+)
";

static ANALYSIS_GRAMMAR: Lazy<ChunkGrammar> = Lazy::new(|| {
    ChunkGrammar::new(
        "analysis",
        ANALYSIS_GRAMMAR_VERSION,
        ANALYSIS_MARKER,
        ANALYSIS_BODY,
        &[
            "question_number",
            "question",
            "option1",
            "option2",
            "option3",
            "option4",
            "selected_answer",
            "correct_answer",
            "explanation",
        ],
    )
});

impl ChunkRecord for AnswerReview {
    fn grammar() -> &'static ChunkGrammar {
        &ANALYSIS_GRAMMAR
    }

    fn from_fields(fields: &mut Fields) -> Self {
        AnswerReview {
            question_number: fields.take("question_number"),
            question: fields.take("question"),
            options: [
                fields.take("option1"),
                fields.take("option2"),
                fields.take("option3"),
                fields.take("option4"),
            ],
            selected_answer: fields.take("selected_answer"),
            correct_answer: fields.take("correct_answer"),
            explanation: fields.take("explanation"),
        }
    }
}

pub fn extract_reviews(text: &str) -> Extraction<AnswerReview> {
    AnswerReview::extract_all(text)
}
