use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::MongoCourseRepository,
    services::{course_service::CourseService, text_generator::ChatSession},
};

#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<CourseService>,
    pub db: Option<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let course_repository = Arc::new(MongoCourseRepository::new(
            &db,
            &config.courses_collection,
        ));
        course_repository.ensure_indexes().await?;

        let chat_session = Arc::new(ChatSession::new(config.model.clone()));
        log::info!(
            "Using model '{}' at {}",
            config.model.model_name,
            config.model.api_base
        );

        let course_service = Arc::new(CourseService::new(chat_session, course_repository));

        Ok(Self {
            course_service,
            db: Some(db),
            config: Arc::new(config),
        })
    }

    /// State without a database handle, for wiring a prebuilt service.
    pub fn from_parts(course_service: Arc<CourseService>, config: Config) -> Self {
        Self {
            course_service,
            db: None,
            config: Arc::new(config),
        }
    }
}
