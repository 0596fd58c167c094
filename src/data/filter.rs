use std::ops::RangeInclusive;

use super::model::{MatchDataset, MatchRecord, Measure};
use super::stats::{column_bounds, Bounds};

// ---------------------------------------------------------------------------
// Filter predicate: league selection plus minimum thresholds
// ---------------------------------------------------------------------------

/// The user-chosen constraints applied to the base table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    /// `None` means every league ("All").
    pub league: Option<String>,
    pub min_xg: f64,
    pub min_bookings: f64,
}

impl FilterSpec {
    /// A spec that lets every complete record through.
    pub fn unfiltered(bounds: &SliderBounds) -> Self {
        FilterSpec {
            league: None,
            min_xg: *bounds.xg.start(),
            min_bookings: *bounds.bookings.start(),
        }
    }

    /// Whether a record passes every constraint.
    ///
    /// A record missing a thresholded measure never passes that threshold.
    pub fn matches(&self, record: &MatchRecord) -> bool {
        if let Some(league) = &self.league {
            if record.league.as_ref() != Some(league) {
                return false;
            }
        }
        let at_least = |value: Option<f64>, min: f64| value.is_some_and(|v| v >= min);
        at_least(record.match_xg, self.min_xg) && at_least(record.ex_bookings, self.min_bookings)
    }

    /// Pull thresholds back inside `bounds` and forget a league the dataset
    /// no longer has.
    pub fn clamp_to(&mut self, bounds: &SliderBounds, dataset: &MatchDataset) {
        self.min_xg = clamp(self.min_xg, &bounds.xg);
        self.min_bookings = clamp(self.min_bookings, &bounds.bookings);
        if let Some(league) = &self.league {
            if !dataset.leagues.contains(league) {
                self.league = None;
            }
        }
    }
}

fn clamp(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}

// ---------------------------------------------------------------------------
// Slider bounds derived from the base table
// ---------------------------------------------------------------------------

/// Ranges for the threshold sliders, recomputed on every load.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderBounds {
    pub xg: RangeInclusive<f64>,
    pub bookings: RangeInclusive<f64>,
}

impl SliderBounds {
    pub fn from_dataset(dataset: &MatchDataset) -> Self {
        let range = |measure| {
            column_bounds(&dataset.records, measure)
                .map(|Bounds { min, max }| min..=max)
                .unwrap_or(0.0..=0.0)
        };
        SliderBounds {
            xg: range(Measure::MatchXg),
            bookings: range(Measure::ExBookings),
        }
    }
}

/// Return indices of records that pass the filter, in dataset order.
pub fn filtered_indices(dataset: &MatchDataset, spec: &FilterSpec) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| spec.matches(rec))
        .map(|(i, _)| i)
        .collect()
}
