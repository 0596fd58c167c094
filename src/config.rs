use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Optional overrides read from this file in the working directory.
pub const CONFIG_FILE: &str = "dashboard.json";

/// Dashboard settings. Every field has a default, so a missing or partial
/// `dashboard.json` still yields a complete configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page heading.
    pub title: String,
    /// Spreadsheet loaded at start-up.
    pub source_path: PathBuf,
    /// Suggested name for the CSV download.
    pub export_filename: String,
    /// Maximum height of the table view in points.
    pub table_height: f32,
    /// Number of bins in the corners histogram.
    pub histogram_bins: usize,
    /// Rows listed under "Top fixtures" on the insights tab.
    pub top_fixtures: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Game Week 8".into(),
            source_path: PathBuf::from("GW8.xlsx"),
            export_filename: "filtered_matches.csv".into(),
            table_height: 560.0,
            histogram_bins: 10,
            top_fixtures: 5,
        }
    }
}

impl DashboardConfig {
    /// Read `path` if it exists, otherwise fall back to defaults.
    /// A file that exists but does not parse is reported and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                log::warn!("Could not read {}: {e}", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(config) => {
                log::info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring malformed {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
