use iv_ladder::model::{
    DEFAULT_ROW_COUNT, HistoryEntry, Layout, RowInput, Sheet, WorkingState, Zone,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn numbered_sheet(count: usize) -> Sheet {
    let mut sheet = Sheet::new(count);
    for (i, row) in sheet.rows.iter_mut().enumerate() {
        row.strike = i.to_string();
    }
    sheet
}

fn strikes(sheet: &Sheet) -> Vec<&str> {
    sheet.rows.iter().map(|r| r.strike.as_str()).collect()
}

fn entry_with_strikes(strike_prices: Vec<f64>, iv_diffs: Vec<f64>) -> HistoryEntry {
    let n = strike_prices.len();
    HistoryEntry {
        date: "2026-08-27T10:00:00Z".to_string(),
        symbol_name: "NIFTY".to_string(),
        strike_prices,
        iv_diffs,
        put_ivs: vec![Some(10.0); n],
        call_ivs: vec![Some(20.0); n],
        img: None,
    }
}

// ── Layout invariants ───────────────────────────────────────────────

#[test]
fn atm_index_is_floor_midpoint_for_all_counts() {
    for count in 1..=25 {
        let layout = Layout::new(count);
        assert_eq!(layout.atm_index, count / 2, "row_count {count}");
        assert_eq!(Sheet::new(count).layout(), layout);
    }
}

#[test]
fn default_sheet_splits_five_one_five() {
    let sheet = Sheet::default();
    let layout = sheet.layout();
    assert_eq!(sheet.rows.len(), DEFAULT_ROW_COUNT);
    assert_eq!(layout.atm_index, 5);

    let above = (0..layout.row_count)
        .filter(|&i| layout.classify(i) == Zone::AboveAtm)
        .count();
    let below = (0..layout.row_count)
        .filter(|&i| layout.classify(i) == Zone::BelowAtm)
        .count();
    assert_eq!(above, 5);
    assert_eq!(below, 5);
}

#[test]
fn classify_orders_zones_around_atm() {
    let layout = Layout::new(11);
    assert_eq!(layout.classify(0), Zone::AboveAtm);
    assert_eq!(layout.classify(4), Zone::AboveAtm);
    assert_eq!(layout.classify(5), Zone::Atm);
    assert_eq!(layout.classify(6), Zone::BelowAtm);
    assert_eq!(layout.classify(10), Zone::BelowAtm);
}

// ── Growth ──────────────────────────────────────────────────────────

#[test]
fn grow_inserts_blank_pair_flanking_old_atm() {
    let mut sheet = numbered_sheet(11);
    sheet.grow();

    assert_eq!(sheet.rows.len(), 13);
    assert_eq!(sheet.layout().atm_index, 6);
    // Old ATM row ("5") now sits at the new center with blanks either side.
    assert_eq!(sheet.rows[5].strike, "");
    assert_eq!(sheet.rows[6].strike, "5");
    assert_eq!(sheet.rows[7].strike, "");
    assert_eq!(
        strikes(&sheet),
        vec!["0", "1", "2", "3", "4", "", "5", "", "6", "7", "8", "9", "10"]
    );
}

#[test]
fn grow_twice_adds_four_rows_and_preserves_values() {
    let mut sheet = numbered_sheet(11);
    sheet.grow();
    sheet.grow();

    assert_eq!(sheet.rows.len(), 15);
    assert_eq!(sheet.layout().atm_index, 7);

    let kept: Vec<&str> = strikes(&sheet)
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    assert_eq!(
        kept,
        vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]
    );
}

#[test]
fn grow_keeps_atm_invariant_from_odd_and_even_counts() {
    for count in [1, 2, 3, 4, 11, 12] {
        let mut sheet = numbered_sheet(count);
        sheet.grow();
        assert_eq!(sheet.rows.len(), count + 2);
        assert_eq!(sheet.layout().atm_index, (count + 2) / 2);
    }
}

// ── Rebuild from persisted snapshots ───────────────────────────────

#[test]
fn apply_history_entry_rebuilds_when_length_differs() {
    let mut sheet = Sheet::default();
    let entry = entry_with_strikes(vec![100.0, 105.0, 110.0], vec![0.25, -0.1, 0.4]);
    sheet.apply_history_entry(&entry);

    assert_eq!(sheet.rows.len(), 3);
    assert_eq!(sheet.layout().atm_index, 1);
    assert_eq!(sheet.symbol, "NIFTY");
    assert_eq!(sheet.rows[0].strike, "100");
    assert_eq!(sheet.rows[0].diff_text, "0.25");
    assert_eq!(sheet.rows[0].diff_class, "positive");
    assert_eq!(sheet.rows[1].diff_text, "-0.10");
    assert_eq!(sheet.rows[1].diff_class, "negative");
}

#[test]
fn apply_history_entry_overwrites_in_place_on_matching_length() {
    let mut sheet = numbered_sheet(3);
    let entry = entry_with_strikes(vec![100.0, 105.0, 110.0], vec![0.25, 0.3, 0.4]);
    sheet.apply_history_entry(&entry);

    assert_eq!(sheet.rows.len(), 3);
    assert_eq!(
        strikes(&sheet),
        vec!["100", "105", "110"]
    );
    assert_eq!(sheet.rows[2].put_iv, "10");
    assert_eq!(sheet.rows[2].call_iv, "20");
}

#[test]
fn apply_history_entry_fills_placeholder_past_diffs() {
    // Entry with fewer diffs than strikes leaves the tail rows blank.
    let mut sheet = Sheet::new(2);
    let mut entry = entry_with_strikes(vec![100.0, 105.0], vec![0.25]);
    entry.put_ivs = vec![Some(10.0), None];
    entry.call_ivs = vec![Some(20.0), None];
    sheet.apply_history_entry(&entry);

    assert_eq!(sheet.rows[1].put_iv, "");
    assert_eq!(sheet.rows[1].diff_text, "-");
    assert_eq!(sheet.rows[1].diff_class, "");
}

#[test]
fn apply_working_state_pads_inputs_to_row_count() {
    let mut sheet = Sheet::default();
    let state = WorkingState {
        inputs: vec![
            RowInput {
                strike: "24500".to_string(),
                put_iv: "100".to_string(),
                call_iv: "50".to_string(),
                diff_text: "1.50".to_string(),
                diff_class: "above-atm".to_string(),
            };
            3
        ],
        symbol: "BANKNIFTY".to_string(),
        strike_prices: vec![24500.0; 3],
        iv_diffs: vec![1.5; 3],
        put_ivs: vec![Some(100.0); 3],
        call_ivs: vec![Some(50.0); 3],
        row_count: 5,
        is_dark: false,
    };
    sheet.apply_working_state(&state);

    assert_eq!(sheet.rows.len(), 5);
    assert_eq!(sheet.symbol, "BANKNIFTY");
    assert_eq!(sheet.rows[0].strike, "24500");
    assert_eq!(sheet.rows[0].diff_text, "1.50");
    assert_eq!(sheet.rows[3].strike, "");
    assert_eq!(sheet.rows[3].diff_text, "-");
}
