use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One ladder slot exactly as entered: raw text fields plus the displayed
/// difference, carried along so a stashed working state restores the view
/// verbatim. Empty or non-numeric text is not an error; the row simply
/// does not contribute to the computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RowInput {
    /// Strike price text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub strike: String,
    /// Put implied-value text.
    #[serde(default, rename = "putIV", skip_serializing_if = "String::is_empty")]
    pub put_iv: String,
    /// Call implied-value text.
    #[serde(default, rename = "callIV", skip_serializing_if = "String::is_empty")]
    pub call_iv: String,
    /// Last displayed difference; "-" when the row did not contribute.
    #[serde(default = "dash", rename = "diffText", skip_serializing_if = "is_dash")]
    pub diff_text: String,
    /// Display class of the difference cell ("above-atm", "atm",
    /// "below-atm", "positive", "negative" or empty).
    #[serde(default, rename = "diffClass", skip_serializing_if = "String::is_empty")]
    pub diff_class: String,
}

impl Default for RowInput {
    fn default() -> Self {
        Self {
            strike: String::new(),
            put_iv: String::new(),
            call_iv: String::new(),
            diff_text: dash(),
            diff_class: String::new(),
        }
    }
}

fn dash() -> String {
    "-".to_string()
}

fn is_dash(text: &str) -> bool {
    text == "-"
}
