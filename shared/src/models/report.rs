//! The stored yearly report (bilan).

use serde::{Deserialize, Serialize};

/// The generated Markdown bilan as persisted in `bilan.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportDocument {
    #[serde(default)]
    pub content: String,
}

impl ReportDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}
