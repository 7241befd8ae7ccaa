use serde::{Deserialize, Serialize};

/// Outcome of a batch create as reported by the question-bank service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub created_count: u32,
    pub error_count: u32,
    pub total_processed: u32,
    #[serde(default)]
    pub errors: Vec<ImportRowError>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImportRowError {
    pub index: u32,
    pub error: String,
}

impl ImportResult {
    pub fn is_partial(&self) -> bool {
        self.created_count < self.total_processed
    }

    pub fn summary(&self) -> String {
        if self.is_partial() {
            format!(
                "Created {} of {} questions ({} failed)",
                self.created_count, self.total_processed, self.error_count
            )
        } else {
            format!("Created {} questions", self.created_count)
        }
    }
}
