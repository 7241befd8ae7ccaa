use serde::Deserialize;
use validator::Validate;

use crate::errors::AppResult;
use crate::models::domain::ParsedQuestion;
use crate::models::dto::question_dto::ParsedQuestionDto;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BatchImportRequest {
    #[validate(length(min = 1, message = "At least one question is required"), nested)]
    pub questions: Vec<ParsedQuestionDto>,

    #[validate(length(min = 1, max = 100))]
    pub quiz_id: Option<String>,
}

impl BatchImportRequest {
    /// Re-checks every question and returns them in submission order.
    pub fn into_questions(self) -> AppResult<(Vec<ParsedQuestion>, Option<String>)> {
        let questions = self
            .questions
            .into_iter()
            .map(ParsedQuestion::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok((questions, self.quiz_id))
    }
}
