//! Component widgets for the TUI.

pub mod stat_card;

pub use stat_card::{InlineStat, StatCard};
