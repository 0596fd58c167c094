use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::{MatchDataset, Measure, FIXTURE_COLUMN, LEAGUE_COLUMN};

// ---------------------------------------------------------------------------
// CSV download of the visible rows
// ---------------------------------------------------------------------------

/// Serialise the records at `indices` as UTF-8 CSV.
///
/// Columns follow the table view: `fixture`, `league` (when the source has
/// one), the three measures, then any extra columns. Missing values are
/// written as empty fields so the file loads back to the same records.
pub fn to_csv_bytes(dataset: &MatchDataset, indices: &[usize]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<&str> = vec![FIXTURE_COLUMN];
    if dataset.has_league {
        header.push(LEAGUE_COLUMN);
    }
    header.extend(Measure::ALL.map(Measure::column));
    header.extend(dataset.extra_columns.iter().map(String::as_str));
    writer.write_record(&header).context("writing CSV header")?;

    for rec in dataset.select(indices) {
        let mut row: Vec<String> = vec![rec.fixture.clone()];
        if dataset.has_league {
            row.push(rec.league.clone().unwrap_or_default());
        }
        row.extend(
            Measure::ALL.map(|m| rec.measure(m).map(|v| v.to_string()).unwrap_or_default()),
        );
        row.extend(
            dataset
                .extra_columns
                .iter()
                .map(|col| rec.extras.get(col).map(|v| v.to_string()).unwrap_or_default()),
        );
        writer
            .write_record(&row)
            .with_context(|| format!("writing CSV row for {:?}", rec.fixture))?;
    }

    writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("flushing CSV buffer")
}

/// Write the visible rows to `path`.
pub fn save_csv(dataset: &MatchDataset, indices: &[usize], path: &Path) -> Result<()> {
    let bytes = to_csv_bytes(dataset, indices)?;
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported {} rows to {}", indices.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterSpec};
    use crate::data::loader::load_file;
    use crate::data::model::{CellValue, MatchRecord};
    use crate::data::testing::{dataset, record};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn header_and_rows_follow_table_layout() {
        let ds = dataset(vec![
            record("A", Some("X"), 6.0, 4.0, 9.0),
            record("B", Some("Y"), 2.0, 1.0, 3.0),
        ]);
        let bytes = to_csv_bytes(&ds, &[0]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "fixture,league,match_xg,ex_bookings,ex_corners\nA,X,6,4,9\n"
        );
    }

    #[test]
    fn empty_selection_writes_header_only() {
        let ds = dataset(vec![record("A", None, 1.0, 1.0, 1.0)]);
        let text = String::from_utf8(to_csv_bytes(&ds, &[]).unwrap()).unwrap();
        assert_eq!(text, "fixture,match_xg,ex_bookings,ex_corners\n");
    }

    #[test]
    fn export_reloads_to_filtered_rows() {
        let mut gap = record("Lazio v Roma, derby", Some("Serie A"), 2.75, 5.5, 0.0);
        gap.ex_corners = None;
        let mut extras = BTreeMap::new();
        extras.insert("kickoff".to_string(), CellValue::String("19:45".into()));
        let records: Vec<MatchRecord> = vec![
            gap,
            record("Arsenal v Spurs", Some("EPL"), 3.1234567, 4.2, 10.5),
            record("Low v Event", Some("EPL"), 0.9, 0.5, 6.0),
            record("Bayern v Dortmund", Some("Bundesliga"), 3.6, 3.9, 9.8),
        ]
        .into_iter()
        .map(|mut r| {
            r.extras = extras.clone();
            r
        })
        .collect();
        let ds = MatchDataset::new(records, true, vec!["kickoff".to_string()]);

        let spec = FilterSpec {
            league: None,
            min_xg: 1.0,
            min_bookings: 1.0,
        };
        let visible = filtered_indices(&ds, &spec);
        assert_eq!(visible, vec![0, 1, 3]);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("filtered_matches.csv");
        save_csv(&ds, &visible, &path).unwrap();

        let reloaded = load_file(&path).unwrap();
        let expected: Vec<MatchRecord> = ds.select(&visible).cloned().collect();
        assert_eq!(reloaded.records, expected);
        assert_eq!(reloaded.extra_columns, ds.extra_columns);
        assert!(reloaded.has_league);
    }

    #[test]
    fn export_keeps_padded_and_numeric_looking_labels() {
        let ds = dataset(vec![
            record(" Arsenal v Spurs ", Some("EPL"), 3.1, 4.2, 10.5),
            record("1.50", Some("007"), 2.0, 3.0, 8.0),
        ]);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("labels.csv");
        save_csv(&ds, &[0, 1], &path).unwrap();

        let reloaded = load_file(&path).unwrap();
        let labels: Vec<(&str, Option<&str>)> = reloaded
            .records
            .iter()
            .map(|r| (r.fixture.as_str(), r.league.as_deref()))
            .collect();
        assert_eq!(
            labels,
            vec![(" Arsenal v Spurs ", Some("EPL")), ("1.50", Some("007"))]
        );
        assert_eq!(reloaded.records, ds.records);
    }
}
