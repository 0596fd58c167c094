//! Fixtures shared by the unit tests.

use std::collections::BTreeMap;

use super::model::{MatchDataset, MatchRecord};

pub fn record(fixture: &str, league: Option<&str>, xg: f64, bookings: f64, corners: f64) -> MatchRecord {
    MatchRecord {
        fixture: fixture.to_string(),
        league: league.map(str::to_string),
        match_xg: Some(xg),
        ex_bookings: Some(bookings),
        ex_corners: Some(corners),
        extras: BTreeMap::new(),
    }
}

pub fn dataset(records: Vec<MatchRecord>) -> MatchDataset {
    let has_league = records.iter().any(|r| r.league.is_some());
    MatchDataset::new(records, has_league, Vec::new())
}
