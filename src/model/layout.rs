use std::cmp::Ordering;

/// A row's position classification relative to the at-the-money row.
/// Derived purely from position, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    AboveAtm,
    Atm,
    BelowAtm,
}

/// Ladder geometry: how many rows exist and which one is the ATM center.
///
/// Invariant: `atm_index == row_count / 2` (floor) at all times. Growth
/// happens in pairs flanking the old ATM row, so the split around the
/// center stays balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub row_count: usize,
    pub atm_index: usize,
}

impl Layout {
    /// Build a layout with the ATM row at the floor midpoint. The default
    /// 11-row ladder splits into 5 above ATM, the ATM row, and 5 below.
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            atm_index: row_count / 2,
        }
    }

    /// Classify a row index relative to the ATM center.
    pub fn classify(&self, index: usize) -> Zone {
        match index.cmp(&self.atm_index) {
            Ordering::Less => Zone::AboveAtm,
            Ordering::Equal => Zone::Atm,
            Ordering::Greater => Zone::BelowAtm,
        }
    }
}
