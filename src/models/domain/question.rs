use serde::{Deserialize, Serialize};

/// One multiple-choice question. `answer` is the text of the correct option.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub question: String,
    pub options: [String; 4],
    pub answer: String,
}

/// Model review of one answered question.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerReview {
    pub question_number: String, // kept as written, never parsed
    pub question: String,
    pub options: [String; 4],
    pub selected_answer: String,
    pub correct_answer: String,
    pub explanation: String,
}
