use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub question_bank_base_url: String,
    pub question_bank_bulk_path: String,
    pub question_bank_api_token: Option<SecretString>,
    pub admin_origin: String,
    pub max_csv_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            question_bank_base_url: env::var("QUESTION_BANK_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5000/api".to_string()),
            question_bank_bulk_path: env::var("QUESTION_BANK_BULK_PATH")
                .unwrap_or_else(|_| "/questions/bulk".to_string()),
            question_bank_api_token: env::var("QUESTION_BANK_API_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty())
                .map(SecretString::from),
            admin_origin: env::var("ADMIN_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            max_csv_bytes: env::var("MAX_CSV_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(1024 * 1024),
        }
    }

    /// Full URL of the remote create-many endpoint.
    pub fn bulk_create_url(&self) -> String {
        format!(
            "{}/{}",
            self.question_bank_base_url.trim_end_matches('/'),
            self.question_bank_bulk_path.trim_start_matches('/')
        )
    }

    /// Checks settings that would otherwise only fail on the first import.
    pub fn validate(&self) -> AppResult<()> {
        reqwest::Url::parse(&self.bulk_create_url()).map_err(|e| {
            AppError::InternalError(format!(
                "QUESTION_BANK_BASE_URL is not a valid URL ({}): {}",
                self.question_bank_base_url, e
            ))
        })?;

        if self.max_csv_bytes == 0 {
            return Err(AppError::InternalError(
                "MAX_CSV_BYTES must be greater than zero".to_string(),
            ));
        }

        if self.question_bank_api_token.is_none() {
            log::warn!("QUESTION_BANK_API_TOKEN is not set; requests to the question bank will be unauthenticated");
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            question_bank_base_url: "http://localhost:5000/api".to_string(),
            question_bank_bulk_path: "/questions/bulk".to_string(),
            question_bank_api_token: Some(SecretString::from("test_token".to_string())),
            admin_origin: "http://localhost:5173".to_string(),
            max_csv_bytes: 64 * 1024,
        }
    }
}
