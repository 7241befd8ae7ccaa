use crate::import::columns::{
    CORRECT_OPTION, DIFFICULTY, HINT, OPTION_COLUMNS, QUESTION_BODY, REQUIRED_OPTIONS,
};
use crate::import::error::{ImportError, RowError};
use crate::models::domain::{Difficulty, OptionId, ParsedQuestion, QuestionOption};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One tokenized data line of the import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    line: u64,
    fields: Vec<String>,
}

impl RawRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// 1-based line number in the file; the header is line 1.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Missing trailing columns read as empty.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Splits one CSV line into cleaned fields.
///
/// Any `"` toggles the quoted state, wherever it sits in the field. Inside
/// quotes a `,` is literal and `""` is a literal `"`. Each field is then
/// trimmed, and a pair of quote markers still wrapping it is removed.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(clean_field(&std::mem::take(&mut current))),
            _ => current.push(c),
        }
    }
    fields.push(clean_field(&current));

    fields
}

fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Tokenizes every non-blank line after the header, in file order.
///
/// Stops at the first line that is not valid UTF-8.
pub fn read_rows(content: impl AsRef<[u8]>) -> Result<Vec<RawRow>, ImportError> {
    data_rows(content.as_ref()).collect()
}

/// Parses a whole import file into questions.
///
/// The first invalid row aborts the import; no partial list is returned.
pub fn parse_questions(content: impl AsRef<[u8]>) -> Result<Vec<ParsedQuestion>, ImportError> {
    let content = content.as_ref();
    if non_blank_lines(content).take(2).count() < 2 {
        return Err(ImportError::MissingDataRows);
    }

    data_rows(content)
        .map(|row| row.and_then(|row| validate_row(&row)))
        .collect()
}

/// Turns one row into a question, checking the rules in column order.
pub fn validate_row(row: &RawRow) -> Result<ParsedQuestion, ImportError> {
    let fail = |reason: RowError| ImportError::InvalidRow {
        row: row.line(),
        reason,
    };

    let body = row.field(QUESTION_BODY);
    if body.is_empty() {
        return Err(fail(RowError::MissingQuestionBody));
    }

    if OPTION_COLUMNS[..REQUIRED_OPTIONS]
        .iter()
        .any(|(text, _)| row.field(*text).is_empty())
    {
        return Err(fail(RowError::MissingRequiredOptions));
    }

    let correct_number = row
        .field(CORRECT_OPTION)
        .parse::<u8>()
        .ok()
        .filter(|n| (1..=4).contains(n))
        .ok_or_else(|| fail(RowError::InvalidCorrectOption))?;
    let correct_option_id =
        OptionId::from_number(correct_number).ok_or_else(|| fail(RowError::InvalidCorrectOption))?;

    let options: Vec<QuestionOption> = OptionId::ALL
        .iter()
        .zip(OPTION_COLUMNS.iter())
        .enumerate()
        .filter(|(position, (_, (text, _)))| {
            *position < REQUIRED_OPTIONS || !row.field(*text).is_empty()
        })
        .map(|(_, (id, (text, explanation)))| {
            QuestionOption::new(*id, row.field(*text), row.field(*explanation))
        })
        .collect();

    if !options.iter().any(|o| o.id == correct_option_id) {
        return Err(fail(RowError::CorrectOptionEmpty(correct_number)));
    }

    let difficulty = Difficulty::normalize(row.field(DIFFICULTY));

    ParsedQuestion::new(
        body,
        options,
        correct_option_id,
        Some(row.field(HINT)),
        difficulty,
    )
    .map_err(|err| fail(RowError::Rejected(err.to_string())))
}

/// Non-blank lines paired with their 1-based line number. `\r\n` endings and
/// a leading byte order mark are dropped.
fn non_blank_lines(content: &[u8]) -> impl Iterator<Item = (u64, &[u8])> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    content
        .split(|byte| *byte == b'\n')
        .enumerate()
        .map(|(index, bytes)| {
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
            (index as u64 + 1, bytes)
        })
        .filter(|(_, bytes)| !is_blank(bytes))
}

fn is_blank(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes)
        .map(|text| text.trim().is_empty())
        .unwrap_or(false)
}

/// Data lines after the header, decoded and tokenized.
fn data_rows(content: &[u8]) -> impl Iterator<Item = Result<RawRow, ImportError>> + '_ {
    non_blank_lines(content).skip(1).map(|(line, bytes)| {
        std::str::from_utf8(bytes)
            .map(|text| RawRow::new(line, tokenize_line(text)))
            .map_err(|err| ImportError::InvalidRow {
                row: line,
                reason: RowError::InvalidEncoding(err.to_string()),
            })
    })
}
