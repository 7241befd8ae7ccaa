use serde::Serialize;

use crate::models::domain::{ImportResult, ParsedQuestion};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreview {
    pub total_questions: usize,
    pub questions: Vec<ParsedQuestion>,
}

impl From<Vec<ParsedQuestion>> for ImportPreview {
    fn from(questions: Vec<ParsedQuestion>) -> Self {
        ImportPreview {
            total_questions: questions.len(),
            questions,
        }
    }
}

pub type ImportPreviewResponse = ApiResponse<ImportPreview>;
pub type ImportResultResponse = ApiResponse<ImportResult>;

impl ImportPreviewResponse {
    pub fn from_questions(questions: Vec<ParsedQuestion>) -> Self {
        let preview = ImportPreview::from(questions);
        let message = format!("Parsed {} questions", preview.total_questions);
        ApiResponse {
            data: preview,
            message,
        }
    }
}

impl From<ImportResult> for ImportResultResponse {
    fn from(result: ImportResult) -> Self {
        let message = result.summary();
        ApiResponse {
            data: result,
            message,
        }
    }
}
