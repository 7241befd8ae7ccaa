pub mod import_result;
pub mod question;
pub use import_result::{ImportResult, ImportRowError};
pub use question::{Difficulty, OptionId, ParsedQuestion, QuestionOption};
