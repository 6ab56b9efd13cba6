use crate::model::{RowInput, Sheet};

/// Print an example ladder sheet JSON to stdout: an 11-row NIFTY ladder
/// filled with change-in-OI style figures, ATM in the middle.
pub fn run() -> anyhow::Result<()> {
    let rows = [
        ("24300", "118432", "20115"),
        ("24350", "96210", "25480"),
        ("24400", "84155", "31905"),
        ("24450", "72038", "40260"),
        ("24500", "65121", "48834"),
        ("24550", "58907", "57612"), // ATM
        ("24600", "47215", "69348"),
        ("24650", "39482", "81170"),
        ("24700", "30915", "92541"),
        ("24750", "24370", "104882"),
        ("24800", "19056", "121904"),
    ];

    let sheet = Sheet {
        symbol: "NIFTY".to_string(),
        rows: rows
            .iter()
            .map(|(strike, put, call)| RowInput {
                strike: strike.to_string(),
                put_iv: put.to_string(),
                call_iv: call.to_string(),
                ..RowInput::default()
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&sheet)?;
    println!("{json}");
    Ok(())
}
