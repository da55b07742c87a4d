//! Reusable UI widgets
//!
//! Stateless ratatui widgets that draw the dashboard render tree.

pub mod count_table;
pub mod data_table;
pub mod metrics;
pub mod status_bar;
pub mod tab_bar;
pub mod tab_body;
