use std::path::{Path, PathBuf};

use crate::color::LeagueColors;
use crate::config::DashboardConfig;
use crate::data::error::DataLoadError;
use crate::data::filter::{filtered_indices, FilterSpec, SliderBounds};
use crate::data::loader::load_file;
use crate::data::model::{MatchDataset, MatchRecord};
use crate::data::stats::MatchStats;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Table,
    Charts,
    Insights,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// File the current dataset came from (or failed to come from).
    pub source_path: PathBuf,

    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<MatchDataset>,

    /// Slider ranges derived from the current dataset.
    pub bounds: SliderBounds,

    /// Current filter selections.
    pub filters: FilterSpec,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Statistics over the visible records (cached).
    pub stats: MatchStats,

    pub league_colors: Option<LeagueColors>,

    pub tab: Tab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether `status_message` describes a failure.
    pub status_is_error: bool,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            source_path: config.source_path.clone(),
            config,
            dataset: None,
            bounds: SliderBounds {
                xg: 0.0..=0.0,
                bookings: 0.0..=0.0,
            },
            filters: FilterSpec::default(),
            visible_indices: Vec::new(),
            stats: MatchStats::default(),
            league_colors: None,
            tab: Tab::default(),
            status_message: None,
            status_is_error: false,
        }
    }

    /// Load `path` and make it the current dataset. On failure the previous
    /// dataset is dropped and the error becomes the status message.
    pub fn load(&mut self, path: &Path) -> Result<(), DataLoadError> {
        self.source_path = path.to_path_buf();
        match load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} matches from {} ({} leagues)",
                    dataset.len(),
                    path.display(),
                    dataset.leagues.len()
                );
                self.set_dataset(dataset);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.dataset = None;
                self.visible_indices.clear();
                self.stats = MatchStats::default();
                self.league_colors = None;
                self.set_error(format!("Error: {e}"));
                Err(e)
            }
        }
    }

    /// Re-read the current source file, keeping filter selections where
    /// they still fit the new data.
    pub fn reload(&mut self) -> Result<(), DataLoadError> {
        let path = self.source_path.clone();
        self.load(&path)
    }

    /// Ingest a newly loaded dataset, recompute bounds and colours.
    pub fn set_dataset(&mut self, dataset: MatchDataset) {
        let bounds = SliderBounds::from_dataset(&dataset);
        if self.dataset.is_none() {
            self.filters = FilterSpec::unfiltered(&bounds);
        } else {
            self.filters.clamp_to(&bounds, &dataset);
        }
        self.bounds = bounds;
        self.league_colors = Some(LeagueColors::new(&dataset.leagues));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.status_is_error = false;
        self.refilter();
    }

    /// Recompute `visible_indices` and `stats` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
            self.stats = MatchStats::compute(ds.select(&self.visible_indices));
        }
    }

    /// Apply a new filter spec, clamped to the dataset, and refilter if it changed.
    pub fn apply_filters(&mut self, mut spec: FilterSpec) {
        if let Some(ds) = &self.dataset {
            spec.clamp_to(&self.bounds, ds);
        }
        if spec != self.filters {
            log::debug!("Filters changed: {spec:?}");
            self.filters = spec;
            self.refilter();
        }
    }

    /// Back to "All" leagues and the minimum thresholds.
    pub fn reset_filters(&mut self) {
        self.apply_filters(FilterSpec::unfiltered(&self.bounds));
    }

    /// Records passing the current filters, in sheet order.
    pub fn visible_records(&self) -> impl Iterator<Item = &MatchRecord> + '_ {
        self.dataset
            .iter()
            .flat_map(|ds| ds.select(&self.visible_indices))
    }

    /// Write the visible rows as CSV, reporting the outcome in the status line.
    pub fn export_visible(&mut self, path: &Path) {
        let Some(ds) = &self.dataset else {
            self.set_error("Nothing to export: no dataset loaded".into());
            return;
        };
        match crate::export::save_csv(ds, &self.visible_indices, path) {
            Ok(()) => {
                self.status_message = Some(format!(
                    "Saved {} rows to {}",
                    self.visible_indices.len(),
                    path.display()
                ));
                self.status_is_error = false;
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                self.set_error(format!("Export failed: {e:#}"));
            }
        }
    }

    fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }
}
