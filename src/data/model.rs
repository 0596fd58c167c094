use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell in a pass-through column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell for sheet columns outside the match schema.
/// Using `BTreeMap` / `BTreeSet` downstream so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// ISO-8601 date string kept as text for simplicity.
    Date(String),
    Null,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
                Date(_) => 5,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) | (Date(a), Date(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Parse a text cell, guessing the narrowest type that fits.
    pub fn guess(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Measure – the numeric columns every sheet must carry
// ---------------------------------------------------------------------------

/// One of the three numeric columns of a match sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Measure {
    MatchXg,
    ExBookings,
    ExCorners,
}

impl Measure {
    pub const ALL: [Measure; 3] = [Measure::MatchXg, Measure::ExBookings, Measure::ExCorners];

    /// Column header as it appears in the source sheet.
    pub fn column(self) -> &'static str {
        match self {
            Measure::MatchXg => "match_xg",
            Measure::ExBookings => "ex_bookings",
            Measure::ExCorners => "ex_corners",
        }
    }

    /// Human-readable label for cards and axes.
    pub fn label(self) -> &'static str {
        match self {
            Measure::MatchXg => "Match xG",
            Measure::ExBookings => "Expected bookings",
            Measure::ExCorners => "Expected corners",
        }
    }
}

pub const FIXTURE_COLUMN: &str = "fixture";
pub const LEAGUE_COLUMN: &str = "league";

// ---------------------------------------------------------------------------
// MatchRecord – one row of the sheet
// ---------------------------------------------------------------------------

/// Betting statistics for a single fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub fixture: String,
    pub league: Option<String>,
    pub match_xg: Option<f64>,
    pub ex_bookings: Option<f64>,
    pub ex_corners: Option<f64>,
    /// Any other sheet columns: column_name → value.
    pub extras: BTreeMap<String, CellValue>,
}

impl MatchRecord {
    pub fn measure(&self, measure: Measure) -> Option<f64> {
        match measure {
            Measure::MatchXg => self.match_xg,
            Measure::ExBookings => self.ex_bookings,
            Measure::ExCorners => self.ex_corners,
        }
    }
}

// ---------------------------------------------------------------------------
// MatchDataset – the complete loaded sheet
// ---------------------------------------------------------------------------

/// The full parsed sheet with pre-computed column indices.
#[derive(Debug, Clone)]
pub struct MatchDataset {
    /// All records, in sheet order.
    pub records: Vec<MatchRecord>,
    /// Whether the source carried a `league` column.
    pub has_league: bool,
    /// Extra column names, in sheet order.
    pub extra_columns: Vec<String>,
    /// Sorted set of distinct leagues.
    pub leagues: BTreeSet<String>,
}

impl MatchDataset {
    /// Build column indices from the loaded records.
    pub fn new(records: Vec<MatchRecord>, has_league: bool, extra_columns: Vec<String>) -> Self {
        let leagues = records
            .iter()
            .filter_map(|r| r.league.clone())
            .collect();
        MatchDataset {
            records,
            has_league,
            extra_columns,
            leagues,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records at the given indices, in index order.
    pub fn select<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a MatchRecord> + 'a {
        indices.iter().map(move |&i| &self.records[i])
    }
}
