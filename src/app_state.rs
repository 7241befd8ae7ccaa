use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{HttpQuestionBankRepository, QuestionBankRepository},
    services::QuestionImportService,
};

#[derive(Clone)]
pub struct AppState {
    pub import_service: Arc<QuestionImportService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let question_bank = Arc::new(HttpQuestionBankRepository::new(&config)?);
        log::info!("Question bank endpoint: {}", config.bulk_create_url());

        Ok(Self::with_repository(config, question_bank))
    }

    /// Builds state around any question bank, e.g. an in-memory one in tests.
    pub fn with_repository(config: Config, question_bank: Arc<dyn QuestionBankRepository>) -> Self {
        Self {
            import_service: Arc::new(QuestionImportService::new(question_bank)),
            config: Arc::new(config),
        }
    }
}
