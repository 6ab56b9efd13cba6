use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::history::HistoryEntry;
use super::layout::Layout;
use super::row::RowInput;
use super::snapshot::WorkingState;

/// Default ladder size: 5 rows above ATM, the ATM row, 5 below.
pub const DEFAULT_ROW_COUNT: usize = 11;

/// The working ladder: an instrument symbol and one input row per strike,
/// centered on the at-the-money row. The layout is derived from the row
/// count, so `atm_index == rows.len() / 2` holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Sheet {
    /// Instrument symbol the ladder describes (may be empty).
    #[serde(default)]
    pub symbol: String,
    /// Input rows, deepest above-ATM strike first.
    pub rows: Vec<RowInput>,
}

impl Sheet {
    /// Blank ladder with `row_count` rows.
    pub fn new(row_count: usize) -> Self {
        Self {
            symbol: String::new(),
            rows: vec![RowInput::default(); row_count],
        }
    }

    /// Current geometry, derived from the live row count.
    pub fn layout(&self) -> Layout {
        Layout::new(self.rows.len())
    }

    /// Add one blank row on each side of the ATM row. The old ATM row ends
    /// up at the new center (`(n + 2) / 2`) and every pre-existing value
    /// keeps its relative order. There is no shrink operation.
    pub fn grow(&mut self) {
        let atm = self.layout().atm_index;
        self.rows.insert(atm, RowInput::default());
        self.rows.insert(atm + 2, RowInput::default());
    }

    /// Repopulate the ladder from a history entry. When the entry's strike
    /// count differs from the live row count the ladder is rebuilt at the
    /// entry's length (layout recomputed); otherwise rows are overwritten
    /// in place.
    pub fn apply_history_entry(&mut self, entry: &HistoryEntry) {
        let count = entry.strike_prices.len();
        if count != self.rows.len() {
            self.rows = vec![RowInput::default(); count];
        }

        for (i, row) in self.rows.iter_mut().enumerate() {
            row.strike = entry
                .strike_prices
                .get(i)
                .map(|v| format_value(*v))
                .unwrap_or_default();
            row.put_iv = entry
                .put_ivs
                .get(i)
                .and_then(|v| *v)
                .map(format_value)
                .unwrap_or_default();
            row.call_iv = entry
                .call_ivs
                .get(i)
                .and_then(|v| *v)
                .map(format_value)
                .unwrap_or_default();
            match entry.iv_diffs.get(i) {
                Some(diff) => {
                    row.diff_text = format!("{diff:.2}");
                    row.diff_class = if *diff >= 0.0 { "positive" } else { "negative" }.to_string();
                }
                None => {
                    row.diff_text = "-".to_string();
                    row.diff_class = String::new();
                }
            }
        }

        self.symbol = entry.symbol_name.clone();
    }

    /// Repopulate the ladder from a restored navigation snapshot. The saved
    /// inputs are taken verbatim, padded or truncated to the snapshot's row
    /// count.
    pub fn apply_working_state(&mut self, state: &WorkingState) {
        let count = if state.row_count >= 1 {
            state.row_count
        } else {
            DEFAULT_ROW_COUNT
        };
        let mut rows = state.inputs.clone();
        rows.resize(count, RowInput::default());
        self.rows = rows;
        self.symbol = state.symbol.clone();
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_COUNT)
    }
}

/// Render a stored numeric value back into input text.
fn format_value(value: f64) -> String {
    format!("{value}")
}
