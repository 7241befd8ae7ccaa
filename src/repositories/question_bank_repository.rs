use async_trait::async_trait;
use secrecy::{ExposeSecret as _, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{ImportResult, ParsedQuestion},
};

/// Remote store that accepts question batches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionBankRepository: Send + Sync {
    /// Creates every question in one call, optionally attaching them to a quiz.
    async fn create_many(
        &self,
        questions: &[ParsedQuestion],
        quiz_id: Option<String>,
    ) -> AppResult<ImportResult>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateManyRequest<'a> {
    questions: &'a [ParsedQuestion],
    #[serde(skip_serializing_if = "Option::is_none")]
    quiz_id: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CreateManyResponse {
    Enveloped { data: ImportResult },
    Bare(ImportResult),
}

impl From<CreateManyResponse> for ImportResult {
    fn from(response: CreateManyResponse) -> Self {
        match response {
            CreateManyResponse::Enveloped { data } => data,
            CreateManyResponse::Bare(result) => result,
        }
    }
}

pub struct HttpQuestionBankRepository {
    client: reqwest::Client,
    bulk_create_url: String,
    api_token: Option<SecretString>,
}

impl HttpQuestionBankRepository {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            bulk_create_url: config.bulk_create_url(),
            api_token: config.question_bank_api_token.clone(),
        })
    }
}

#[async_trait]
impl QuestionBankRepository for HttpQuestionBankRepository {
    async fn create_many(
        &self,
        questions: &[ParsedQuestion],
        quiz_id: Option<String>,
    ) -> AppResult<ImportResult> {
        let mut request = self
            .client
            .post(&self.bulk_create_url)
            .header("accept", "application/json")
            .json(&CreateManyRequest {
                questions,
                quiz_id: quiz_id.as_deref(),
            });

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            log::error!("Failed to reach question bank at {}: {}", self.bulk_create_url, e);
            AppError::UpstreamError(format!("Failed to reach question bank: {}", e))
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = remote_message(&body).unwrap_or(body);
            log::error!("Question bank rejected batch with status {}: {}", status, message);
            return Err(AppError::UpstreamError(format!(
                "Question bank returned {}: {}",
                status.as_u16(),
                message
            )));
        }

        let parsed = serde_json::from_str::<CreateManyResponse>(&body).map_err(|e| {
            log::error!("Unexpected question bank response: {} | Response: {}", e, body);
            AppError::UpstreamError(format!("Unexpected question bank response: {}", e))
        })?;

        Ok(parsed.into())
    }
}

/// Pulls a human readable `message` (or `error`) out of an error body.
fn remote_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
