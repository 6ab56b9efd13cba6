//! Options-chain implied-value ladder analysis: a symmetric row layout
//! around a movable at-the-money center, per-row difference metrics with
//! above/below-ATM aggregates, and a bounded local history of past
//! calculations with deferred chart-snapshot attachment.

pub mod cli;
pub mod engine;
pub mod model;
pub mod store;

pub mod calc;
pub mod example;
pub mod grow;
pub mod history_cmd;
pub mod resume;
pub mod schema;
pub mod stash;
