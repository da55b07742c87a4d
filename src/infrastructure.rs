//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - CSV dataset loading and export

pub mod cli;
pub mod config;
pub mod export;
pub mod loader;
pub mod tui;
