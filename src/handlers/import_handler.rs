use std::sync::Arc;

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::csv_template::TEMPLATE_FILE_NAME,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::BatchImportRequest,
        response::{ImportPreviewResponse, ImportResultResponse},
    },
    services::http_helpers::{csv_attachment, success_json},
};

/// Parses the raw CSV body and returns the questions for preview.
#[post("/api/questions/import/preview")]
pub async fn preview_import(
    state: web::Data<Arc<AppState>>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let questions = state.import_service.preview(&body)?;
    Ok(success_json(ImportPreviewResponse::from_questions(questions)))
}

/// Submits a previewed batch to the question bank.
#[post("/api/questions/import")]
pub async fn submit_import(
    req: HttpRequest,
    state: web::Data<Arc<AppState>>,
    request: web::Json<BatchImportRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let (questions, quiz_id) = request.into_questions()?;
    log::info!(
        "[{}] Import submission with {} questions",
        get_request_id(&req).unwrap_or_default(),
        questions.len()
    );

    let result = state.import_service.submit(questions, quiz_id).await?;
    Ok(success_json(ImportResultResponse::from(result)))
}

#[get("/api/questions/import/template")]
pub async fn download_template(state: web::Data<Arc<AppState>>) -> HttpResponse {
    csv_attachment(TEMPLATE_FILE_NAME, state.import_service.template())
}
