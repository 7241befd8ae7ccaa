//! CSV question import: tokenizing, row validation and the column contract.

pub mod columns;
pub mod error;
pub mod parser;

pub use error::{ImportError, RowError};
pub use parser::{parse_questions, read_rows, tokenize_line, validate_row, RawRow};
