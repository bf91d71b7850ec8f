#[cfg(test)]
pub mod fixtures {
    /// Outline reply in the requested template with three chapters.
    pub const OUTLINE_RESPONSE: &str = "Course Name: Rust From Zero
Course Description: Ownership, traits and fearless concurrency for beginners.
Time to complete(in hours): 18
Chapters:
1. Getting Started
2. Ownership and Borrowing
3. Concurrency
";

    pub const MODULES_RESPONSE: &str = "1. Moves\n2. Borrowing\n3. Lifetimes";

    /// Two well-formed questions around one that lost an option.
    pub const MCQ_RESPONSE: &str = "**1. Question:** What is the capital of France?
Options:
1. Berlin
2. Madrid
3. Paris
4. Rome
Correct Answer: 3. Paris

**2. Question:** Which planet is known as the Red Planet?
Options:
1. Venus
2. Mars
3. Jupiter
Correct Answer: 2. Mars

**3. Question:** Which ocean is the largest?
Options:
1. Atlantic
2. Indian
3. Arctic
4. Pacific
Correct Answer: 4. Pacific
";

    pub const ANALYSIS_RESPONSE: &str = "**Question 1: What is the capital of France?**
* **Options:**
    1. Berlin
    2. Madrid
    3. Paris
    4. Rome
* **Selected Answer:** 1. Berlin
* **Correct Answer:** 3. Paris
* **Explanation:** Paris is the capital; Berlin is the capital of Germany.
";
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::http::StatusCode;

    use crate::{
        app_state::AppState,
        config::Config,
        repositories::course_repository::MockCourseRepository,
        services::{course_service::CourseService, text_generator::MockTextGenerator},
    };

    /// Builds application state around the given mocks.
    pub fn app_state(generator: MockTextGenerator, repository: MockCourseRepository) -> AppState {
        let service = CourseService::new(Arc::new(generator), Arc::new(repository));
        AppState::from_parts(Arc::new(service), Config::test_config())
    }

    /// A generator that answers every prompt with `reply`.
    pub fn generator_replying(reply: &'static str) -> MockTextGenerator {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .returning(move |_| Ok(reply.to_string()));
        generator
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::extraction::{extract_outline, extract_questions, extract_reviews};

    #[test]
    fn fixtures_parse_as_described() {
        assert_eq!(extract_outline(OUTLINE_RESPONSE).chapters.len(), 3);

        let mcqs = extract_questions(MCQ_RESPONSE);
        assert_eq!((mcqs.matched, mcqs.dropped), (2, 1));

        assert_eq!(extract_reviews(ANALYSIS_RESPONSE).records.len(), 1);
    }
}
