use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One persisted past calculation. Entries are immutable once created,
/// except for deletion and the deferred chart-snapshot attach; identity in
/// the log is positional, not a stable ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// ISO-8601 creation time. Immutable, and used to key the snapshot
    /// attach once the capture collaborator delivers the image.
    pub date: String,
    /// User-supplied symbol name (may be empty).
    #[serde(default)]
    pub symbol_name: String,
    /// Strikes of the contributing rows, in ladder order.
    pub strike_prices: Vec<f64>,
    /// Differences of the contributing rows, parallel to `strike_prices`.
    pub iv_diffs: Vec<f64>,
    /// Per-ladder-row put values; `None` where the row did not contribute.
    #[serde(default, rename = "putIVs")]
    pub put_ivs: Vec<Option<f64>>,
    /// Per-ladder-row call values; `None` where the row did not contribute.
    #[serde(default, rename = "callIVs")]
    pub call_ivs: Vec<Option<f64>>,
    /// Opaque encoded chart snapshot (data-URI PNG), attached after the
    /// numeric fields are already committed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}
