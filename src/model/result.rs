use super::history::HistoryEntry;
use super::layout::Zone;

/// One computed row: parsed inputs, the derived difference, and the row's
/// zone. `difference` is `None` when any of strike/put/call failed to
/// parse; such a row never enters the aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct RowResult {
    pub strike: Option<f64>,
    pub put_iv: Option<f64>,
    pub call_iv: Option<f64>,
    pub difference: Option<f64>,
    pub zone: Zone,
}

impl RowResult {
    /// True when strike, put and call all parsed and the row entered the
    /// sums.
    pub fn contributes(&self) -> bool {
        self.difference.is_some()
    }

    /// Display text for the difference cell; "-" for a non-contributing
    /// row.
    pub fn diff_text(&self) -> String {
        match self.difference {
            Some(diff) => format!("{diff:.2}"),
            None => "-".to_string(),
        }
    }

    /// Display class for the difference cell, keyed by zone for
    /// contributing rows.
    pub fn diff_class(&self) -> &'static str {
        if self.difference.is_none() {
            return "";
        }
        match self.zone {
            Zone::AboveAtm => "above-atm",
            Zone::Atm => "atm",
            Zone::BelowAtm => "below-atm",
        }
    }
}

/// Outcome of one ladder computation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// One result per sheet row, in ladder order.
    pub rows: Vec<RowResult>,
    /// Sum of differences over rows above the ATM row.
    pub sum_above_atm: f64,
    /// Sum of differences over rows below the ATM row.
    pub sum_below_atm: f64,
    /// Signed net: `sum_above_atm - sum_below_atm`.
    pub net_difference: f64,
    /// True iff at least one row contributed.
    pub has_valid_data: bool,
    /// Strikes of contributing rows only, in ladder order.
    pub strike_prices: Vec<f64>,
    /// Differences of contributing rows only, parallel to `strike_prices`.
    pub iv_diffs: Vec<f64>,
    /// Per-sheet-row put values (`None` for non-contributing rows).
    pub put_ivs: Vec<Option<f64>>,
    /// Per-sheet-row call values (`None` for non-contributing rows).
    pub call_ivs: Vec<Option<f64>>,
}

impl CalculationResult {
    /// Freeze this result into a history entry stamped now. The chart
    /// snapshot is attached later via `HistoryStore::attach_image`, keyed
    /// by the entry's creation time.
    pub fn to_history_entry(&self, symbol: &str) -> HistoryEntry {
        HistoryEntry {
            date: chrono::Utc::now().to_rfc3339(),
            symbol_name: symbol.to_string(),
            strike_prices: self.strike_prices.clone(),
            iv_diffs: self.iv_diffs.clone(),
            put_ivs: self.put_ivs.clone(),
            call_ivs: self.call_ivs.clone(),
            img: None,
        }
    }
}
