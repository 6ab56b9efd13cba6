//! Metrics computation over a ladder sheet: per-row differences and the
//! above/below-ATM aggregates.

use crate::model::{CalculationResult, RowResult, Sheet, Zone};

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse an input field as numeric-or-absent. Empty or unparsable text is
/// absent, never an error.
fn parse_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Compute per-row differences and aggregates for a sheet.
///
/// A row contributes only when strike, put and call all parse; for such a
/// row `difference = round2((call + put) / 100)`. Rows above ATM sum into
/// `sum_above_atm`, rows below into `sum_below_atm`; the ATM row itself
/// never enters either sum. A malformed row degrades to a "-" placeholder
/// without aborting the computation.
pub fn compute(sheet: &Sheet) -> CalculationResult {
    let layout = sheet.layout();

    let mut rows = Vec::with_capacity(sheet.rows.len());
    let mut strike_prices = Vec::new();
    let mut iv_diffs = Vec::new();
    let mut put_ivs = Vec::new();
    let mut call_ivs = Vec::new();
    let mut sum_above = 0.0;
    let mut sum_below = 0.0;
    let mut has_valid_data = false;

    for (i, input) in sheet.rows.iter().enumerate() {
        let zone = layout.classify(i);
        let strike = parse_value(&input.strike);
        let put_iv = parse_value(&input.put_iv);
        let call_iv = parse_value(&input.call_iv);

        let difference = match (strike, put_iv, call_iv) {
            (Some(strike), Some(put), Some(call)) => {
                let diff = round2((call + put) / 100.0);

                strike_prices.push(strike);
                iv_diffs.push(diff);
                put_ivs.push(Some(put));
                call_ivs.push(Some(call));

                match zone {
                    Zone::AboveAtm => sum_above += diff,
                    Zone::BelowAtm => sum_below += diff,
                    Zone::Atm => {}
                }

                has_valid_data = true;
                Some(diff)
            }
            _ => {
                put_ivs.push(None);
                call_ivs.push(None);
                None
            }
        };

        rows.push(RowResult {
            strike,
            put_iv,
            call_iv,
            difference,
            zone,
        });
    }

    CalculationResult {
        rows,
        sum_above_atm: sum_above,
        sum_below_atm: sum_below,
        net_difference: sum_above - sum_below,
        has_valid_data,
        strike_prices,
        iv_diffs,
        put_ivs,
        call_ivs,
    }
}
