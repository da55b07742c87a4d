//! Domain logic
//!
//! This module contains the dashboard's data model and the pure
//! computations over it:
//! - Complaint records and datasets
//! - Aggregation primitives (median, mode, frequency counts)
//! - Header metrics summary
//! - Row filtering
//! - Text formatting utilities

pub mod complaint;
pub mod filter;
pub mod stats;
pub mod summary;
pub mod text;
