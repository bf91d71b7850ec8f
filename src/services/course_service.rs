use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::prompts::{self, render},
    errors::{AppError, AppResult},
    extraction::{
        extract_modules, extract_outline, extract_questions, extract_reviews, format_material,
    },
    models::{
        domain::{AnswerReview, CourseOutline, CourseRecord, FormattedMaterial, Question},
        dto::request::GenerationRequest,
    },
    repositories::CourseRepository,
    services::text_generator::TextGenerator,
};

/// Prompts the model, runs the matching extractor over the reply and persists
/// what the course document keeps.
pub struct CourseService {
    generator: Arc<dyn TextGenerator>,
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(generator: Arc<dyn TextGenerator>, repository: Arc<dyn CourseRepository>) -> Self {
        Self {
            generator,
            repository,
        }
    }

    pub async fn generate_course(&self, request: GenerationRequest) -> AppResult<CourseOutline> {
        request.validate()?;

        let prompt = render(prompts::COURSE_OUTLINE_PROMPT, &[("topic", &request.input)]);
        let response = self.generator.generate(&prompt).await?;

        let outline = extract_outline(&response);
        if outline.is_empty() {
            log::warn!(
                "Outline for course '{}' matched no fields",
                request.course_id
            );
        }

        self.repository
            .insert_course(CourseRecord::new(
                &request.course_id,
                &request.input,
                outline.clone(),
            ))
            .await?;

        Ok(outline)
    }

    pub async fn generate_modules(&self, request: GenerationRequest) -> AppResult<Vec<String>> {
        request.validate()?;

        let prompt = render(
            prompts::MODULE_LIST_PROMPT,
            &[("chapter", &request.input), ("course_id", &request.course_id)],
        );
        let response = self.generator.generate(&prompt).await?;
        let modules = extract_modules(&response);

        self.repository
            .set_modules(&request.course_id, &request.input, &modules)
            .await?;

        Ok(modules)
    }

    pub async fn generate_material(
        &self,
        request: GenerationRequest,
    ) -> AppResult<FormattedMaterial> {
        request.validate()?;

        let prompt = render(prompts::MATERIAL_PROMPT, &[("module", &request.input)]);
        let response = self.generator.generate(&prompt).await?;

        Ok(format_material(&response))
    }

    pub async fn generate_summary(&self, request: GenerationRequest) -> AppResult<String> {
        request.validate()?;
        let prompt = render(prompts::SUMMARY_PROMPT, &[("material", &request.input)]);
        self.generator.generate(&prompt).await
    }

    pub async fn generate_example(&self, request: GenerationRequest) -> AppResult<String> {
        request.validate()?;
        let prompt = render(prompts::EXAMPLE_PROMPT, &[("material", &request.input)]);
        self.generator.generate(&prompt).await
    }

    pub async fn clarify_doubt(&self, request: GenerationRequest) -> AppResult<String> {
        request.validate()?;
        let prompt = render(prompts::CLARIFY_DOUBT_PROMPT, &[("doubt", &request.input)]);
        self.generator.generate(&prompt).await
    }

    pub async fn generate_mcq(&self, request: GenerationRequest) -> AppResult<Vec<Question>> {
        request.validate()?;

        let prompt = render(prompts::MCQ_PROMPT, &[("topic", &request.input)]);
        let response = self.generator.generate(&prompt).await?;

        let extraction = extract_questions(&response);
        log::info!(
            "MCQ set for '{}': {} questions, {} dropped",
            request.input,
            extraction.matched,
            extraction.dropped
        );
        Ok(extraction.into_records())
    }

    /// Reviews `user_answer` against the questions passed as `input`.
    pub async fn analyze_content(
        &self,
        request: GenerationRequest,
    ) -> AppResult<Vec<AnswerReview>> {
        request.validate()?;

        let answers = request
            .user_answer
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| {
                AppError::ValidationError("user_answer is required for analysis".to_string())
            })?;

        let prompt = render(
            prompts::ANSWER_ANALYSIS_PROMPT,
            &[("answers", answers), ("questions", &request.input)],
        );
        let response = self.generator.generate(&prompt).await?;

        let extraction = extract_reviews(&response);
        log::info!(
            "Answer analysis for course '{}': {} reviews, {} dropped",
            request.course_id,
            extraction.matched,
            extraction.dropped
        );
        Ok(extraction.into_records())
    }
}
