//! # Complaintui - complaints analytics in the terminal
//!
//! A terminal dashboard over a table of service complaints, built with Rust and Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Domain** (`domain`): Records, datasets and the aggregations over them
//! - **Presentation** (`presentation`): Render trees, charts and widgets
//! - **Core** (`core`): State, messages, the pure update function and commands
//! - **Infrastructure** (`infrastructure`): CLI, configuration, CSV I/O and the terminal
//! - **Integration** (`integration`): The runtime and event loop tying it together
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use complaintui::{
//!     core::{msg::{ui::UiMsg, Msg}, state::AppState, update::update},
//!     domain::complaint::{ComplaintRecord, Dataset},
//!     presentation::layouts::Tab,
//! };
//!
//! let dataset = Dataset::from_records(vec![
//!     ComplaintRecord::new(1.0, "Noise", "QUEENS"),
//!     ComplaintRecord::new(3.0, "Noise", "BRONX"),
//! ]);
//! let state = AppState::new(Arc::new(dataset));
//! assert_eq!(state.dashboard.header.summary.median_response, 2.0);
//!
//! let (state, commands) = update(Msg::Ui(UiMsg::NextTab), state);
//! assert_eq!(state.ui.active_tab, Tab::ByBorough);
//! assert!(commands.is_empty());
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
