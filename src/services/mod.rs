pub mod course_service;
pub mod text_generator;
