#[cfg(test)]
pub mod fixtures {
    use crate::import::parse_questions;
    use crate::models::domain::ParsedQuestion;

    /// Header plus three valid rows: 2, 3 and 4 options.
    pub const VALID_CSV: &str = "\
Question body,Option 1,Option 1 explanation,Option 2,Option 2 explanation,Option 3,Option 3 explanation,Option 4,Option 4 explanation,Hint,Correct option,Difficulty
\"What is 2+2?\",\"3\",\"Wrong\",\"4\",\"Correct\",\"\",\"\",\"\",\"\",\"Basic math\",\"2\",\"Easy\"
\"Pick the primary colour\",Red,\"Yes, red is primary\",Green,,Purple,Secondary,,,,1,medium
\"Which keyword declares a constant in Rust?\",let,,mut,,const,\"Right, const\",static,\"Close, but static\",Think compile time,3,HARD
";

    /// Second data row marks Option 3 correct but leaves it blank.
    pub const CSV_WITH_BAD_SECOND_ROW: &str = "\
Question body,Option 1,Option 1 explanation,Option 2,Option 2 explanation,Option 3,Option 3 explanation,Option 4,Option 4 explanation,Hint,Correct option,Difficulty
Q1,A,,B,,,,,,,1,easy
Q2,A,,B,,,,D,,,3,easy
";

    /// The questions described by [`VALID_CSV`].
    pub fn sample_questions() -> Vec<ParsedQuestion> {
        parse_questions(VALID_CSV).expect("VALID_CSV fixture should parse")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::{Arc, Mutex};

    use actix_web::http::StatusCode;
    use async_trait::async_trait;

    use crate::{
        errors::AppResult,
        models::domain::{ImportResult, ParsedQuestion},
        repositories::QuestionBankRepository,
    };

    /// Records every batch and reports all of them as created.
    #[derive(Default, Clone)]
    pub struct RecordingQuestionBank {
        pub batches: Arc<Mutex<Vec<(Vec<ParsedQuestion>, Option<String>)>>>,
    }

    #[async_trait]
    impl QuestionBankRepository for RecordingQuestionBank {
        async fn create_many(
            &self,
            questions: &[ParsedQuestion],
            quiz_id: Option<String>,
        ) -> AppResult<ImportResult> {
            let count = questions.len() as u32;
            self.batches
                .lock()
                .expect("batches lock poisoned")
                .push((questions.to_vec(), quiz_id));

            Ok(ImportResult {
                created_count: count,
                error_count: 0,
                total_processed: count,
                errors: Vec::new(),
            })
        }
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::{Difficulty, OptionId};

    #[test]
    fn test_fixtures_valid_csv() {
        let questions = sample_questions();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[1].options().len(), 3);
        assert_eq!(
            questions[1].options()[0].explanation.as_deref(),
            Some("Yes, red is primary")
        );
        assert_eq!(questions[2].correct_option_id(), OptionId::C);
        assert_eq!(questions[2].difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_fixtures_bad_csv_fails_on_row_three() {
        let err = crate::import::parse_questions(CSV_WITH_BAD_SECOND_ROW).unwrap_err();
        assert_eq!(err.row(), Some(3));
    }
}
