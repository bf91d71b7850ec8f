//! Multiple-choice question extraction.
//!
//! Questions are delimited by `**N. Question:**` markers. Each chunk needs a
//! stem, four options on their own lines and a `Correct Answer:` line, in
//! that order; anything short of that is dropped.

use once_cell::sync::Lazy;

use crate::extraction::grammar::{ChunkGrammar, ChunkRecord, Extraction, Fields};
use crate::models::domain::Question;

pub const MCQ_GRAMMAR_VERSION: u32 = 1;

const MCQ_MARKER: &str = r"\*\*\d+\.\s*Question\s*:\s*\*\*";

const MCQ_BODY: &str = r"(?xs)
    \*\*\d+\.\s*Question\s*:\s*\*\*\s*(?P<question>.*?)
    (?:\s*(?:\*\*)?Options(?:\*\*)?\s*:(?:\*\*)?)?
    \s*\n\s*[1aA][.)]\s*(?P<option1>.*?)
    \s*\n\s*[2bB][.)]\s*(?P<option2>.*?)
    \s*\n\s*[3cC][.)]\s*(?P<option3>.*?)
    \s*\n\s*[4dD][.)]\s*(?P<option4>.*?)
    \s*\n\s*(?:\*\*)?Correct\s*Answer(?:\*\*)?\s*:(?:\*\*)?\s*
    (?:[1-4a-dA-D][.)]\s*)?(?P<answer>[^\n]+)
";

static MCQ_GRAMMAR: Lazy<ChunkGrammar> = Lazy::new(|| {
    ChunkGrammar::new(
        "mcq",
        MCQ_GRAMMAR_VERSION,
        MCQ_MARKER,
        MCQ_BODY,
        &[
            "question", "option1", "option2", "option3", "option4", "answer",
        ],
    )
});

impl ChunkRecord for Question {
    fn grammar() -> &'static ChunkGrammar {
        &MCQ_GRAMMAR
    }

    fn from_fields(fields: &mut Fields) -> Self {
        Question {
            question: fields.take("question"),
            options: [
                fields.take("option1"),
                fields.take("option2"),
                fields.take("option3"),
                fields.take("option4"),
            ],
            answer: fields.take("answer"),
        }
    }
}

pub fn extract_questions(text: &str) -> Extraction<Question> {
    Question::extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(n: u32, stem: &str, options: [&str; 4], answer: &str) -> String {
        format!(
            "**{n}. Question:** {stem}\nOptions:\n1. {}\n2. {}\n3. {}\n4. {}\nCorrect Answer: {answer}\n",
            options[0], options[1], options[2], options[3]
        )
    }

    #[test]
    fn extracts_capital_of_france() {
        let text = "**1. Question:** What is the capital of France?\nOptions:\n1. Berlin\n2. Madrid\n3. Paris\n4. Rome\nCorrect Answer: 3. Paris";
        let questions = extract_questions(text).into_records();

        assert_eq!(
            questions,
            vec![Question {
                question: "What is the capital of France?".to_string(),
                options: [
                    "Berlin".to_string(),
                    "Madrid".to_string(),
                    "Paris".to_string(),
                    "Rome".to_string()
                ],
                answer: "Paris".to_string(),
            }]
        );
    }

    #[test]
    fn malformed_block_is_dropped_without_affecting_neighbours() {
        let mut text = String::from("Here are your questions:\n\n");
        text.push_str(&block(1, "2 + 2?", ["3", "4", "5", "6"], "2. 4"));
        text.push_str("**2. Question:** Missing an option?\nOptions:\n1. a\n2. b\n3. c\nCorrect Answer: 1. a\n");
        text.push_str(&block(3, "Rust mascot?", ["Ferris", "Gopher", "Duke", "Tux"], "1. Ferris"));
        text.push_str(&block(4, "Borrow checker?", ["Runtime", "Compile time", "Linker", "Never"], "2. Compile time"));

        let extraction = extract_questions(&text);

        assert_eq!(extraction.matched, 3);
        assert_eq!(extraction.dropped, 1);
        let stems: Vec<&str> = extraction
            .records
            .iter()
            .map(|q| q.question.as_str())
            .collect();
        assert_eq!(stems, vec!["2 + 2?", "Rust mascot?", "Borrow checker?"]);
        assert_eq!(extraction.records[2].answer, "Compile time");
    }

    #[test]
    fn tolerates_bold_labels_and_lettered_options() {
        let text = "**1. Question:** Which keyword declares a constant?\n\n**Options:**\n   A) let\n   B) const\n   C) mut\n   D) static\n\n**Correct Answer:** B) const\n\n---";
        let questions = extract_questions(text).into_records();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options[1], "const");
        assert_eq!(questions[0].answer, "const");
    }

    #[test]
    fn option_text_containing_numbers_stays_whole() {
        let text = "**1. Question:** Which release?\nOptions:\n1. Python 2.7\n2. Python 3.12\n3. Rust 1.80\n4. Go 1.22\nCorrect Answer: 3. Rust 1.80";
        let questions = extract_questions(text).into_records();

        assert_eq!(questions[0].options[0], "Python 2.7");
        assert_eq!(questions[0].answer, "Rust 1.80");
    }

    #[test]
    fn unmarked_text_yields_nothing() {
        let extraction = extract_questions(
            "Question: What is the capital of France?\nOptions:\n1. Berlin\n2. Madrid\n3. Paris\n4. Rome\nCorrect Answer: 3. Paris",
        );

        assert!(extraction.records.is_empty());
        assert_eq!(extraction.total(), 0);
    }

    #[test]
    fn answer_stops_at_end_of_line() {
        let text = "**1. Question:** Q?\nOptions:\n1. a\n2. b\n3. c\n4. d\nCorrect Answer: 4. d\nExplanation: because.";
        let questions = extract_questions(text).into_records();

        assert_eq!(questions[0].answer, "d");
    }
}
