use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::models::domain::{Difficulty, OptionId, ParsedQuestion, QuestionOption};

/// Question as posted back by the admin UI after previewing an import.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuestionDto {
    #[validate(length(min = 1, max = 5000))]
    pub text: String,

    #[validate(length(min = 2, max = 4))]
    pub options: Vec<QuestionOption>,

    pub correct_option_id: OptionId,

    #[validate(length(max = 2000))]
    pub hint: Option<String>,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<ParsedQuestion> for ParsedQuestionDto {
    fn from(question: ParsedQuestion) -> Self {
        ParsedQuestionDto {
            text: question.text().to_string(),
            options: question.options().to_vec(),
            correct_option_id: question.correct_option_id(),
            hint: question.hint().map(str::to_string),
            difficulty: question.difficulty(),
            tags: question.tags().to_vec(),
        }
    }
}

impl TryFrom<ParsedQuestionDto> for ParsedQuestion {
    type Error = AppError;

    fn try_from(dto: ParsedQuestionDto) -> Result<Self, Self::Error> {
        if !dto.tags.is_empty() {
            log::debug!("Dropping {} tags from imported question", dto.tags.len());
        }

        ParsedQuestion::new(
            &dto.text,
            dto.options,
            dto.correct_option_id,
            dto.hint.as_deref(),
            dto.difficulty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto_json() -> serde_json::Value {
        serde_json::json!({
            "text": "What is 2+2?",
            "options": [
                { "id": "a", "text": "3", "explanation": "Wrong" },
                { "id": "b", "text": "4" }
            ],
            "correctOptionId": "b",
            "hint": "Basic math",
            "difficulty": "easy",
            "tags": []
        })
    }

    #[test]
    fn round_trips_through_domain_question() {
        let dto: ParsedQuestionDto =
            serde_json::from_value(dto_json()).expect("dto should deserialize");
        assert!(dto.validate().is_ok());

        let question = ParsedQuestion::try_from(dto).expect("dto should convert");
        assert_eq!(question.correct_option().text, "4");

        let back = ParsedQuestionDto::from(question);
        assert_eq!(back.options.len(), 2);
        assert_eq!(back.hint.as_deref(), Some("Basic math"));
    }

    #[test]
    fn difficulty_and_tags_default_when_missing() {
        let mut json = dto_json();
        let map = json.as_object_mut().expect("json is an object");
        map.remove("difficulty");
        map.remove("tags");

        let dto: ParsedQuestionDto = serde_json::from_value(json).expect("dto should deserialize");
        assert_eq!(dto.difficulty, Difficulty::Easy);
        assert!(dto.tags.is_empty());
    }

    #[test]
    fn too_many_options_fail_validation() {
        let mut json = dto_json();
        json["options"] = serde_json::json!([
            { "id": "a", "text": "1" },
            { "id": "b", "text": "2" },
            { "id": "c", "text": "3" },
            { "id": "d", "text": "4" },
            { "id": "d", "text": "5" }
        ]);

        let dto: ParsedQuestionDto = serde_json::from_value(json).expect("dto should deserialize");
        assert!(dto.validate().is_err());
    }

    #[test]
    fn dangling_correct_option_fails_conversion() {
        let mut json = dto_json();
        json["correctOptionId"] = serde_json::json!("c");

        let dto: ParsedQuestionDto = serde_json::from_value(json).expect("dto should deserialize");
        assert!(matches!(
            ParsedQuestion::try_from(dto),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn unknown_option_id_is_rejected_by_serde() {
        let mut json = dto_json();
        json["correctOptionId"] = serde_json::json!("e");

        assert!(serde_json::from_value::<ParsedQuestionDto>(json).is_err());
    }
}
