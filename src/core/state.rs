pub mod system;
pub mod ui;

use std::sync::Arc;

use crate::{
    domain::complaint::Dataset,
    infrastructure::config::Config,
    presentation::layouts::{body_layout_tabs_with_bins, header_metrics, BodyTabs, HeaderMetrics},
};

pub use system::SystemState;
pub use ui::UiState;

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub dashboard: Dashboard,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

/// Header and tabs derived from the dataset.
///
/// The dataset never changes while the app runs, so the views are built once
/// instead of on every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub header: HeaderMetrics,
    pub tabs: BodyTabs,
}

impl Dashboard {
    pub fn build(dataset: &Arc<Dataset>, histogram_bins: usize) -> Self {
        Self {
            header: header_metrics(dataset),
            tabs: body_layout_tabs_with_bins(dataset, histogram_bins),
        }
    }
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::new_with_config(dataset, Config::default())
    }

    pub fn new_with_config(dataset: Arc<Dataset>, config: Config) -> Self {
        let dashboard = Dashboard::build(&dataset, config.data.histogram_bins);
        Self {
            dataset,
            dashboard,
            ui: UiState::default(),
            system: SystemState::default(),
            config: ConfigState { config },
        }
    }

    pub fn row_count(&self) -> usize {
        self.dataset.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(Dataset::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::complaint::ComplaintRecord;
    use crate::presentation::layouts::Tab;

    #[test]
    fn test_new_builds_dashboard() {
        let dataset = Arc::new(Dataset::from_records(vec![
            ComplaintRecord::new(1.0, "Noise", "QUEENS"),
            ComplaintRecord::new(3.0, "Heat", "BRONX"),
        ]));
        let state = AppState::new(Arc::clone(&dataset));
        assert_eq!(state.row_count(), 2);
        assert_eq!(state.dashboard.header.summary.total, 2);
        assert_eq!(state.ui.active_tab, Tab::Distribution);
        assert!(!state.system.should_quit);
    }

    #[test]
    fn test_default_is_empty() {
        let state = AppState::default();
        assert_eq!(state.row_count(), 0);
        assert_eq!(state.dashboard.header.metrics[2].value, "—");
    }
}
