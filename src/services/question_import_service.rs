use std::sync::Arc;

use crate::{
    constants::csv_template::CSV_TEMPLATE,
    errors::{AppError, AppResult},
    import,
    models::domain::{ImportResult, ParsedQuestion},
    repositories::QuestionBankRepository,
};

pub struct QuestionImportService {
    repository: Arc<dyn QuestionBankRepository>,
}

impl QuestionImportService {
    pub fn new(repository: Arc<dyn QuestionBankRepository>) -> Self {
        Self { repository }
    }

    /// Parses an uploaded CSV into questions for preview. Nothing is sent anywhere.
    pub fn preview(&self, csv: impl AsRef<[u8]>) -> AppResult<Vec<ParsedQuestion>> {
        let questions = import::parse_questions(csv).map_err(|err| {
            log::info!("Rejected CSV import: {}", err);
            AppError::from(err)
        })?;

        log::info!("Parsed {} questions from CSV import", questions.len());
        Ok(questions)
    }

    /// Sends the whole batch to the question bank in a single call.
    ///
    /// Failed rows reported by the question bank are relayed untouched; nothing
    /// is retried here.
    pub async fn submit(
        &self,
        questions: Vec<ParsedQuestion>,
        quiz_id: Option<String>,
    ) -> AppResult<ImportResult> {
        if questions.is_empty() {
            return Err(AppError::ValidationError(
                "At least one question is required".to_string(),
            ));
        }

        log::info!(
            "Submitting {} questions to question bank (quiz: {})",
            questions.len(),
            quiz_id.as_deref().unwrap_or("none")
        );

        let result = self.repository.create_many(&questions, quiz_id).await?;

        if result.is_partial() {
            log::warn!(
                "Question bank created {} of {} questions; {} errors reported",
                result.created_count,
                result.total_processed,
                result.errors.len()
            );
        } else {
            log::info!("Question bank created {} questions", result.created_count);
        }

        Ok(result)
    }

    pub fn template(&self) -> &'static str {
        CSV_TEMPLATE.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::ImportRowError;
    use crate::repositories::MockQuestionBankRepository;
    use crate::test_utils::fixtures;

    fn service_with(mock: MockQuestionBankRepository) -> QuestionImportService {
        QuestionImportService::new(Arc::new(mock))
    }

    #[test]
    fn preview_never_touches_the_repository() {
        let mut mock = MockQuestionBankRepository::new();
        mock.expect_create_many().never();
        let service = service_with(mock);

        let questions = service
            .preview(fixtures::VALID_CSV)
            .expect("fixture should parse");
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn preview_surfaces_row_error_as_validation_error() {
        let service = service_with(MockQuestionBankRepository::new());

        let err = service.preview(fixtures::CSV_WITH_BAD_SECOND_ROW).unwrap_err();
        match err {
            AppError::ValidationError(msg) => {
                assert_eq!(msg, "Row 3: Correct option is 3, but Option 3 is empty")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[actix_rt::test]
    async fn submit_sends_whole_batch_once() {
        let questions = fixtures::sample_questions();
        let expected = questions.clone();

        let mut mock = MockQuestionBankRepository::new();
        mock.expect_create_many()
            .times(1)
            .withf(move |sent, quiz_id| {
                sent.iter().eq(expected.iter()) && quiz_id.as_deref() == Some("quiz-7")
            })
            .returning(|sent, _| {
                Ok(ImportResult {
                    created_count: sent.len() as u32,
                    error_count: 0,
                    total_processed: sent.len() as u32,
                    errors: Vec::new(),
                })
            });

        let result = service_with(mock)
            .submit(questions, Some("quiz-7".to_string()))
            .await
            .expect("submit should succeed");
        assert_eq!(result.created_count, 3);
        assert!(!result.is_partial());
    }

    #[actix_rt::test]
    async fn submit_relays_partial_result_verbatim() {
        let partial = ImportResult {
            created_count: 2,
            error_count: 1,
            total_processed: 3,
            errors: vec![ImportRowError {
                index: 1,
                error: "Question already exists".to_string(),
            }],
        };
        let returned = partial.clone();

        let mut mock = MockQuestionBankRepository::new();
        mock.expect_create_many()
            .times(1)
            .returning(move |_, _| Ok(returned.clone()));

        let result = service_with(mock)
            .submit(fixtures::sample_questions(), None)
            .await
            .expect("partial success is still a response");
        assert_eq!(result, partial);
    }

    #[actix_rt::test]
    async fn submit_propagates_upstream_failure_without_retry() {
        let mut mock = MockQuestionBankRepository::new();
        mock.expect_create_many()
            .times(1)
            .returning(|_, _| Err(AppError::UpstreamError("connection refused".to_string())));

        let err = service_with(mock)
            .submit(fixtures::sample_questions(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UpstreamError(_)));
    }

    #[actix_rt::test]
    async fn submit_rejects_empty_batch() {
        let mut mock = MockQuestionBankRepository::new();
        mock.expect_create_many().never();

        let err = service_with(mock).submit(Vec::new(), None).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn template_is_importable() {
        let service = service_with(MockQuestionBankRepository::new());
        assert!(service.preview(service.template()).is_ok());
    }
}
