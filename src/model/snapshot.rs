use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::result::CalculationResult;
use super::row::RowInput;
use super::sheet::Sheet;

/// Transient working-state snapshot bridged across a view-replacing
/// navigation. At most one instance is persisted at a time, and a restore
/// consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkingState {
    /// Per-row inputs with their displayed difference text and class.
    #[serde(default)]
    pub inputs: Vec<RowInput>,
    /// Instrument symbol.
    #[serde(default)]
    pub symbol: String,
    /// Contributing-row strikes from the last computation.
    #[serde(default)]
    pub strike_prices: Vec<f64>,
    /// Contributing-row differences from the last computation.
    #[serde(default)]
    pub iv_diffs: Vec<f64>,
    /// Per-row put values from the last computation.
    #[serde(default, rename = "putIVs")]
    pub put_ivs: Vec<Option<f64>>,
    /// Per-row call values from the last computation.
    #[serde(default, rename = "callIVs")]
    pub call_ivs: Vec<Option<f64>>,
    /// Row count of the ladder at capture time.
    pub row_count: usize,
    /// Theme flag carried opaquely for the presentation layer.
    #[serde(default)]
    pub is_dark: bool,
}

impl WorkingState {
    /// Capture the current working state: the sheet's raw inputs with the
    /// freshly computed difference cells, plus the dense result arrays.
    pub fn capture(sheet: &Sheet, result: &CalculationResult, is_dark: bool) -> Self {
        let inputs = sheet
            .rows
            .iter()
            .zip(&result.rows)
            .map(|(input, row)| RowInput {
                strike: input.strike.clone(),
                put_iv: input.put_iv.clone(),
                call_iv: input.call_iv.clone(),
                diff_text: row.diff_text(),
                diff_class: row.diff_class().to_string(),
            })
            .collect();

        Self {
            inputs,
            symbol: sheet.symbol.clone(),
            strike_prices: result.strike_prices.clone(),
            iv_diffs: result.iv_diffs.clone(),
            put_ivs: result.put_ivs.clone(),
            call_ivs: result.call_ivs.clone(),
            row_count: sheet.rows.len(),
            is_dark,
        }
    }
}
