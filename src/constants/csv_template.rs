use once_cell::sync::Lazy;

use crate::import::columns::{COLUMN_COUNT, COLUMN_TITLES};

pub const TEMPLATE_FILE_NAME: &str = "questions_template.csv";

const EXAMPLE_ROWS: [[&str; COLUMN_COUNT]; 2] = [
    [
        "What is 2+2?",
        "3",
        "Wrong",
        "4",
        "Correct",
        "",
        "",
        "",
        "",
        "Basic math",
        "2",
        "Easy",
    ],
    [
        "Which of these is a \"compiled\" language?",
        "Python",
        "Usually interpreted",
        "Rust",
        "Compiled ahead of time, by rustc",
        "JavaScript",
        "Interpreted or JIT compiled",
        "Bash",
        "A shell language",
        "Think about build steps",
        "2",
        "medium",
    ],
];

/// Downloadable import template: the header row in column order plus example rows.
pub static CSV_TEMPLATE: Lazy<String> = Lazy::new(|| {
    render_template().unwrap_or_else(|err| {
        log::error!("Failed to render CSV template: {}", err);
        COLUMN_TITLES.join(",")
    })
});

fn render_template() -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMN_TITLES)?;
    for row in EXAMPLE_ROWS {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| {
            csv::Error::from(std::io::Error::new(err.error().kind(), err.error().to_string()))
        })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
