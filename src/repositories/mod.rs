pub mod question_bank_repository;

pub use question_bank_repository::{HttpQuestionBankRepository, QuestionBankRepository};

#[cfg(test)]
pub use question_bank_repository::MockQuestionBankRepository;
