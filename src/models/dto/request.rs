use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body shared by every generation endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerationRequest {
    #[validate(length(min = 1, message = "Input is required"))]
    pub input: String,

    #[validate(length(min = 1, max = 200))]
    pub course_id: String,

    #[serde(default)]
    pub user_answer: Option<String>,
}

impl GenerationRequest {
    pub fn new(input: &str, course_id: &str) -> Self {
        GenerationRequest {
            input: input.to_string(),
            course_id: course_id.to_string(),
            user_answer: None,
        }
    }

    pub fn with_user_answer(mut self, user_answer: &str) -> Self {
        self.user_answer = Some(user_answer.to_string());
        self
    }
}
