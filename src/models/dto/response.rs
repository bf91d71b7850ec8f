use serde::{Deserialize, Serialize};

use crate::models::domain::{AnswerReview, CourseOutline, Question};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDetailsResponse {
    pub course_details: CourseOutline,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDetailsResponse {
    pub module_details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McqResponse {
    pub mcqs: Vec<Question>,
}

/// `{"message": ...}` envelope used by the text, material and analysis routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse<T> {
    pub message: T,
}

pub type TextResponse = MessageResponse<String>;
pub type AnalysisResponse = MessageResponse<Vec<AnswerReview>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelopes_use_expected_keys() {
        let course = serde_json::to_value(CourseDetailsResponse {
            course_details: CourseOutline::default(),
        })
        .expect("course response should serialize");
        assert!(course.get("course_details").is_some());

        let modules = serde_json::to_value(ModuleDetailsResponse {
            module_details: vec!["Loops".to_string()],
        })
        .expect("module response should serialize");
        assert_eq!(modules["module_details"][0], "Loops");

        let text = serde_json::to_value(TextResponse {
            message: "<h1>Hi</h1>".to_string(),
        })
        .expect("text response should serialize");
        assert_eq!(text["message"], "<h1>Hi</h1>");

        let analysis = serde_json::to_value(AnalysisResponse { message: vec![] })
            .expect("analysis response should serialize");
        assert!(analysis["message"].as_array().is_some_and(|a| a.is_empty()));
    }
}
