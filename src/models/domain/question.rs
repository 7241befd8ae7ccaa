use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 4;

/// Stable answer identifier tied to the option's CSV column position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionId {
    A,
    B,
    C,
    D,
}

impl OptionId {
    pub const ALL: [OptionId; MAX_OPTIONS] = [OptionId::A, OptionId::B, OptionId::C, OptionId::D];

    /// Maps a 1-based option number (as written in the CSV) to its id.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(OptionId::A),
            2 => Some(OptionId::B),
            3 => Some(OptionId::C),
            4 => Some(OptionId::D),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            OptionId::A => 1,
            OptionId::B => 2,
            OptionId::C => 3,
            OptionId::D => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionId::A => "a",
            OptionId::B => "b",
            OptionId::C => "c",
            OptionId::D => "d",
        }
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Case-insensitive lookup; blank or unknown values fall back to `Easy`.
    pub fn normalize(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOption {
    pub id: OptionId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuestionOption {
    pub fn new(id: OptionId, text: &str, explanation: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            explanation: non_empty(explanation),
        }
    }
}

/// A validated multiple-choice question ready for batch submission.
///
/// Construction goes through [`ParsedQuestion::new`], so every value in
/// circulation has a non-empty body, 2 to 4 options in column order and a
/// correct option that points at one of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuestion {
    text: String,
    options: Vec<QuestionOption>,
    correct_option_id: OptionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
    difficulty: Difficulty,
    tags: Vec<String>,
}

impl ParsedQuestion {
    pub fn new(
        text: &str,
        options: Vec<QuestionOption>,
        correct_option_id: OptionId,
        hint: Option<&str>,
        difficulty: Difficulty,
    ) -> AppResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::ValidationError(
                "Question body is required".to_string(),
            ));
        }

        if options.len() < MIN_OPTIONS || options.len() > MAX_OPTIONS {
            return Err(AppError::ValidationError(format!(
                "A question needs between {} and {} options, got {}",
                MIN_OPTIONS,
                MAX_OPTIONS,
                options.len()
            )));
        }

        // a and b are mandatory; c may be skipped when d is present
        if options[0].id != OptionId::A || options[1].id != OptionId::B {
            return Err(AppError::ValidationError(
                "Options a and b must come first".to_string(),
            ));
        }
        if options.windows(2).any(|pair| pair[0].id >= pair[1].id) {
            return Err(AppError::ValidationError(
                "Option ids must follow column order a, b, c, d".to_string(),
            ));
        }
        if let Some(blank) = options.iter().find(|o| o.text.trim().is_empty()) {
            return Err(AppError::ValidationError(format!(
                "Option {} has no text",
                blank.id
            )));
        }

        if !options.iter().any(|o| o.id == correct_option_id) {
            return Err(AppError::ValidationError(format!(
                "Correct option '{}' does not match any option",
                correct_option_id
            )));
        }

        Ok(Self {
            text: text.to_string(),
            options,
            correct_option_id,
            hint: hint.and_then(non_empty),
            difficulty,
            tags: Vec::new(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    pub fn correct_option_id(&self) -> OptionId {
        self.correct_option_id
    }

    pub fn correct_option(&self) -> &QuestionOption {
        // guaranteed by the constructor
        self.options
            .iter()
            .find(|o| o.id == self.correct_option_id)
            .unwrap_or(&self.options[0])
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
