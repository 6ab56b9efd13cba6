pub mod history;
pub mod layout;
pub mod result;
pub mod row;
pub mod sheet;
pub mod snapshot;

pub use history::HistoryEntry;
pub use layout::{Layout, Zone};
pub use result::{CalculationResult, RowResult};
pub use row::RowInput;
pub use sheet::{DEFAULT_ROW_COUNT, Sheet};
pub use snapshot::WorkingState;
