//! Presentation layer
//!
//! This module contains everything that turns a dataset into something to look at:
//! - Render trees for the header and the tabs
//! - Chart collaborators and reusable widgets
//! - Configuration (styles, keybindings)
//! - The plain-text summary report

pub mod charts;
pub mod config;
pub mod layouts;
pub mod report;
pub mod widgets;
