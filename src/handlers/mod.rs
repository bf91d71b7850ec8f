pub mod course_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use course_handler::{
    analyze_content, clarify_doubt, generate_course, generate_example, generate_material,
    generate_mcq, generate_modules, generate_summary, health_check, health_check_ready,
};

/// Registers every route plus a JSON extractor that answers malformed bodies
/// with the usual error envelope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health_check)
        .service(health_check_ready)
        .service(generate_course)
        .service(generate_modules)
        .service(generate_material)
        .service(generate_summary)
        .service(generate_example)
        .service(generate_mcq)
        .service(clarify_doubt)
        .service(analyze_content);
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("Invalid request body: {}", err)).into()
}
