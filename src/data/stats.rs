use std::collections::BTreeMap;

use super::model::{MatchRecord, Measure};

// ---------------------------------------------------------------------------
// Headline statistics for a (possibly filtered) set of matches
// ---------------------------------------------------------------------------

/// The fixture with the highest expected goals.
#[derive(Debug, Clone, PartialEq)]
pub struct HighestXg {
    /// Position within the sequence the stats were computed over.
    pub position: usize,
    pub fixture: String,
    pub value: f64,
}

/// Summary numbers shown on the insights cards.
///
/// Averages skip records missing that measure and are `None` when nothing
/// contributes. Values are kept at full precision; rounding is a display
/// concern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchStats {
    pub count: usize,
    pub avg_match_xg: Option<f64>,
    pub avg_bookings: Option<f64>,
    pub avg_corners: Option<f64>,
    pub highest_xg: Option<HighestXg>,
}

impl MatchStats {
    pub fn compute<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a MatchRecord>,
    {
        let mut count = 0;
        let mut sums = [Accumulator::default(); 3];
        let mut highest: Option<HighestXg> = None;

        for (position, rec) in records.into_iter().enumerate() {
            count += 1;
            for (acc, measure) in sums.iter_mut().zip(Measure::ALL) {
                if let Some(v) = rec.measure(measure) {
                    acc.push(v);
                }
            }
            if let Some(xg) = rec.match_xg {
                // strict comparison keeps the first occurrence on ties
                if highest.as_ref().map_or(true, |h| xg > h.value) {
                    highest = Some(HighestXg {
                        position,
                        fixture: rec.fixture.clone(),
                        value: xg,
                    });
                }
            }
        }

        let [xg, bookings, corners] = sums;
        MatchStats {
            count,
            avg_match_xg: xg.mean(),
            avg_bookings: bookings.mean(),
            avg_corners: corners.mean(),
            highest_xg: highest,
        }
    }

    pub fn average(&self, measure: Measure) -> Option<f64> {
        match measure {
            Measure::MatchXg => self.avg_match_xg,
            Measure::ExBookings => self.avg_bookings,
            Measure::ExCorners => self.avg_corners,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: f64,
    n: usize,
}

impl Accumulator {
    fn push(&mut self, v: f64) {
        self.sum += v;
        self.n += 1;
    }

    fn mean(&self) -> Option<f64> {
        (self.n > 0).then(|| self.sum / self.n as f64)
    }
}

// ---------------------------------------------------------------------------
// Column ranges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

/// Min and max of a measure over the records that have it.
pub fn column_bounds<'a, I>(records: I, measure: Measure) -> Option<Bounds>
where
    I: IntoIterator<Item = &'a MatchRecord>,
{
    records
        .into_iter()
        .filter_map(|r| r.measure(measure))
        .fold(None, |acc, v| match acc {
            None => Some(Bounds { min: v, max: v }),
            Some(b) => Some(Bounds {
                min: b.min.min(v),
                max: b.max.max(v),
            }),
        })
}

// ---------------------------------------------------------------------------
// Per-league breakdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSummary {
    /// `None` groups records without a league.
    pub league: Option<String>,
    pub stats: MatchStats,
}

/// One summary per league, sorted by league name (unlabelled records first).
pub fn league_summaries<'a, I>(records: I) -> Vec<LeagueSummary>
where
    I: IntoIterator<Item = &'a MatchRecord>,
{
    let mut groups: BTreeMap<Option<&str>, Vec<&MatchRecord>> = BTreeMap::new();
    for rec in records {
        groups.entry(rec.league.as_deref()).or_default().push(rec);
    }
    groups
        .into_iter()
        .map(|(league, recs)| LeagueSummary {
            league: league.map(str::to_string),
            stats: MatchStats::compute(recs),
        })
        .collect()
}

/// The `n` records with the highest value of `measure`, descending.
/// Ties keep their input order; records missing the measure are skipped.
pub fn top_by<'a, I>(records: I, measure: Measure, n: usize) -> Vec<&'a MatchRecord>
where
    I: IntoIterator<Item = &'a MatchRecord>,
{
    let mut ranked: Vec<(&MatchRecord, f64)> = records
        .into_iter()
        .filter_map(|r| r.measure(measure).map(|v| (r, v)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().take(n).map(|(r, _)| r).collect()
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Equal-width bins spanning `[min, max]`; the last bin is closed on the
/// right. A single distinct value yields one unit-wide bin centred on it.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let Some(min) = finite.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = finite.iter().copied().fold(min, f64::max);

    if bins == 0 {
        return Vec::new();
    }
    if max - min < f64::EPSILON {
        return vec![HistogramBin {
            start: min - 0.5,
            end: min + 0.5,
            count: finite.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: min + i as f64 * width,
            end: if i + 1 == bins { max } else { min + (i + 1) as f64 * width },
            count: 0,
        })
        .collect();
    for v in finite {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}
