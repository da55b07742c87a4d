use crate::domain::filter::Filter;
use crate::presentation::charts::DEFAULT_HISTOGRAM_BINS;
use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// File name used when no export path is configured.
pub const DEFAULT_EXPORT_FILE: &str = "filtered_rows.csv";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DataConfig {
    /// Dataset loaded when `--data` is not given.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    #[serde(default)]
    pub export_path: Option<PathBuf>,
    /// Filter applied on startup; command-line filters replace its parts.
    #[serde(default)]
    pub filter: Filter,
}

fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: None,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            export_path: None,
            filter: Filter::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub data: DataConfig,
}

impl Config {
    /// The built-in configuration shipped with the binary.
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads the user configuration from the standard config directory.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// Loads `config.{json5,json,yaml,toml,ini}` from `config_dir` on top of
    /// the built-in defaults. A missing file is not an error.
    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles.entry(style_key.clone()).or_insert(*style);
        }

        if cfg.data.histogram_bins == 0 {
            return Err(ConfigError::Message(String::from(
                "data.histogram_bins must be at least 1",
            )));
        }

        Ok(cfg)
    }

    pub fn data_dir(&self) -> &Path {
        &self.config._data_dir
    }

    /// Target of the export action.
    pub fn export_path(&self) -> PathBuf {
        self.data
            .export_path
            .clone()
            .unwrap_or_else(|| self.config._data_dir.join(DEFAULT_EXPORT_FILE))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::config::keybindings::Action;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "complaintui-config-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn test_defaults_parse() {
        let cfg = Config::defaults().expect("embedded config is valid");
        assert_eq!(cfg.data.histogram_bins, 20);
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)]),
            Some(&Action::Quit)
        );
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE)]),
            Some(&Action::ScrollToBottom)
        );
        assert!(cfg.styles.contains_key("metric_value"));
    }

    #[test]
    fn test_load_without_user_file_uses_defaults() {
        let config_dir = scratch_dir("empty");
        let data_dir = config_dir.join("data");
        let cfg = Config::load_from(&config_dir, &data_dir).expect("defaults load");
        assert_eq!(cfg.data, DataConfig::default());
        assert_eq!(cfg.data_dir(), data_dir.as_path());
        assert_eq!(cfg.export_path(), data_dir.join(DEFAULT_EXPORT_FILE));
        assert!(!cfg.keybindings.is_empty());
    }

    #[test]
    fn test_user_file_overrides_data_section() {
        let config_dir = scratch_dir("user");
        std::fs::write(
            config_dir.join("config.json5"),
            r#"{
                "data": {
                    "histogram_bins": 8,
                    "export_path": "/tmp/out.csv",
                    "filter": { "boroughs": ["BRONX"] },
                },
            }"#,
        )
        .expect("write config");
        let cfg = Config::load_from(&config_dir, &config_dir).expect("user config loads");
        assert_eq!(cfg.data.histogram_bins, 8);
        assert_eq!(cfg.export_path(), PathBuf::from("/tmp/out.csv"));
        assert_eq!(cfg.data.filter.boroughs, vec!["BRONX".to_string()]);
        // defaults are merged in
        assert!(!cfg.keybindings.is_empty());
    }

    #[test]
    fn test_zero_histogram_bins_rejected() {
        let config_dir = scratch_dir("zero-bins");
        std::fs::write(
            config_dir.join("config.json5"),
            r#"{ "data": { "histogram_bins": 0 } }"#,
        )
        .expect("write config");
        assert!(Config::load_from(&config_dir, &config_dir).is_err());
    }
}
