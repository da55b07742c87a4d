//! Integration layer
//!
//! Wires the Elm core to the terminal:
//! - Runtime driving the update cycle
//! - Renderer drawing the state
//! - AppRunner owning the event loop

pub mod app_runner;
pub mod renderer;
pub mod runtime;
