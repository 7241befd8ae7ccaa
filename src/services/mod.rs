pub mod http_helpers;
pub mod question_import_service;

pub use question_import_service::QuestionImportService;
