use std::sync::Arc;

use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::GenerationRequest,
        response::{
            AnalysisResponse, CourseDetailsResponse, McqResponse, ModuleDetailsResponse,
            TextResponse,
        },
    },
};

fn log_request(req: &HttpRequest, route: &str, request: &GenerationRequest) {
    log::info!(
        "[{}] {} course_id={} input_len={}",
        get_request_id(req).unwrap_or_default(),
        route,
        request.course_id,
        request.input.len()
    );
}

#[post("/generate_course")]
pub async fn generate_course(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerationRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    log_request(&req, "generate_course", &request);
    let course_details = state
        .course_service
        .generate_course(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(CourseDetailsResponse { course_details }))
}

#[post("/generate_modules")]
pub async fn generate_modules(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerationRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    log_request(&req, "generate_modules", &request);
    let module_details = state
        .course_service
        .generate_modules(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ModuleDetailsResponse { module_details }))
}

#[post("/generate_material")]
pub async fn generate_material(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerationRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    log_request(&req, "generate_material", &request);
    let material = state
        .course_service
        .generate_material(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(TextResponse {
        message: material.into(),
    }))
}

#[post("/generate_summary")]
pub async fn generate_summary(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerationRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    log_request(&req, "generate_summary", &request);
    let message = state
        .course_service
        .generate_summary(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(TextResponse { message }))
}

#[post("/generate_example")]
pub async fn generate_example(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerationRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    log_request(&req, "generate_example", &request);
    let message = state
        .course_service
        .generate_example(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(TextResponse { message }))
}

#[post("/generate_mcq")]
pub async fn generate_mcq(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerationRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    log_request(&req, "generate_mcq", &request);
    let mcqs = state
        .course_service
        .generate_mcq(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(McqResponse { mcqs }))
}

#[post("/clarify_doubt")]
pub async fn clarify_doubt(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerationRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    log_request(&req, "clarify_doubt", &request);
    let message = state
        .course_service
        .clarify_doubt(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(TextResponse { message }))
}

#[post("/analyze_content")]
pub async fn analyze_content(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerationRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    log_request(&req, "analyze_content", &request);
    let message = state
        .course_service
        .analyze_content(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(AnalysisResponse { message }))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let db_health = match &state.db {
        Some(db) => db.health_check().await.is_ok(),
        None => false,
    };

    let response = serde_json::json!({
        "status": if db_health { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health { "ok" } else { "error" }
        }
    });

    if db_health {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
