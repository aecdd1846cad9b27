//! Report elements.
//!
//! Elements are opaque JSON nodes; the launcher only collects them into a
//! [`SummaryPage`]. The helpers here build the few element kinds the
//! scheduler itself emits.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One node of the report, typically one test's outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultElement(Value);

impl ResultElement {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// A failed case: the title names the case, the message says what went wrong.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self(json!({
            "type": "error",
            "title": title.into(),
            "message": message.into(),
        }))
    }

    /// A titled group of elements.
    pub fn section(title: impl Into<String>, elements: Vec<ResultElement>) -> Self {
        Self(json!({
            "type": "section",
            "title": title.into(),
            "elements": elements,
        }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

}

/// Top-level report object written to `index.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPage {
    pub title: String,
    pub description: String,
    pub elements: Vec<ResultElement>,
}

pub fn page(
    title: impl Into<String>,
    description: impl Into<String>,
    elements: Vec<ResultElement>,
) -> SummaryPage {
    SummaryPage {
        title: title.into(),
        description: description.into(),
        elements,
    }
}
