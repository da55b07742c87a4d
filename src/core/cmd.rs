use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::complaint::Dataset;

/// Elm-like command definitions
/// Represents side effects the update function asks the host to perform
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Write `dataset` as CSV to `path`
    ExportRows {
        dataset: Arc<Dataset>,
        path: PathBuf,
    },
}

impl Cmd {
    /// Get command name (for debugging)
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::ExportRows { .. } => "ExportRows",
        }
    }
}
