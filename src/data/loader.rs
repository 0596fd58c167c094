use std::collections::BTreeMap;
use std::path::Path;

use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::util::display::{ArrayFormatter, FormatOptions};
use calamine::{open_workbook_auto, Data, Reader};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::{DataLoadError, Result};
use super::model::{CellValue, MatchDataset, MatchRecord, Measure, FIXTURE_COLUMN, LEAGUE_COLUMN};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a match sheet from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xlsb` / `.xls` / `.ods` – first worksheet, header in the first row
/// * `.csv`     – header row, one match per line (what the dashboard exports)
/// * `.json`    – `[{ "fixture": "...", "match_xg": 2.4, ... }, ...]`
/// * `.parquet` – flat columns, as written by `df.to_parquet()`
pub fn load_file(path: &Path) -> Result<MatchDataset> {
    if !path.exists() {
        return Err(DataLoadError::NotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook(path)?,
        "csv" => read_csv(path)?,
        "json" => read_json(path)?,
        "parquet" | "pq" => read_parquet(path)?,
        other => return Err(DataLoadError::UnsupportedFormat(other.to_string())),
    };

    let dataset = build_dataset(table)?;
    log::debug!(
        "parsed {} rows from {} (extra columns: {:?})",
        dataset.len(),
        path.display(),
        dataset.extra_columns
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Format-neutral table → typed records
// ---------------------------------------------------------------------------

/// A header row plus untyped body rows, as read from any source format.
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

/// Where each schema column sits in the header row.
struct ColumnLayout {
    fixture: usize,
    league: Option<usize>,
    measures: [(Measure, usize); 3],
    extras: Vec<(usize, String)>,
}

/// Pandas writes its row index as an unnamed first column; reading it back
/// yields an empty header or `Unnamed: 0`.
fn is_index_column(header: &str) -> bool {
    header.is_empty() || header.starts_with("Unnamed:")
}

impl ColumnLayout {
    fn resolve(headers: &[String]) -> Result<Self> {
        let find = |name: &'static str| headers.iter().position(|h| h == name);
        let require = |name: &'static str| find(name).ok_or(DataLoadError::MissingColumn(name));

        let fixture = require(FIXTURE_COLUMN)?;
        let league = find(LEAGUE_COLUMN);
        let measures = [
            (Measure::MatchXg, require(Measure::MatchXg.column())?),
            (Measure::ExBookings, require(Measure::ExBookings.column())?),
            (Measure::ExCorners, require(Measure::ExCorners.column())?),
        ];

        let mut claimed = vec![fixture];
        claimed.extend(league);
        claimed.extend(measures.iter().map(|&(_, idx)| idx));

        let extras = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !claimed.contains(i))
            .filter(|(_, h)| {
                let index_col = is_index_column(h);
                if index_col {
                    log::debug!("dropping index column {h:?}");
                }
                !index_col
            })
            .map(|(i, h)| (i, h.clone()))
            .collect();

        Ok(ColumnLayout {
            fixture,
            league,
            measures,
            extras,
        })
    }
}

fn build_dataset(table: RawTable) -> Result<MatchDataset> {
    let headers: Vec<String> = table.headers.iter().map(|h| h.trim().to_string()).collect();
    let layout = ColumnLayout::resolve(&headers)?;

    let mut records = Vec::with_capacity(table.rows.len());
    for (i, cells) in table.rows.iter().enumerate() {
        if cells.iter().all(|c| *c == CellValue::Null) {
            continue;
        }
        records.push(build_record(&layout, i + 1, cells)?);
    }

    let extra_columns = layout.extras.iter().map(|(_, h)| h.clone()).collect();
    Ok(MatchDataset::new(records, layout.league.is_some(), extra_columns))
}

static NULL_CELL: CellValue = CellValue::Null;

/// `row` is the 1-based body row, used only for error messages.
fn build_record(layout: &ColumnLayout, row: usize, cells: &[CellValue]) -> Result<MatchRecord> {
    let cell = |idx: usize| cells.get(idx).unwrap_or(&NULL_CELL);

    let mut values = [None; 3];
    for (slot, &(measure, idx)) in values.iter_mut().zip(&layout.measures) {
        *slot = numeric_cell(cell(idx), row, measure.column())?;
    }
    let [match_xg, ex_bookings, ex_corners] = values;

    let league = layout.league.and_then(|idx| match cell(idx) {
        CellValue::Null => None,
        other => Some(other.to_string()),
    });

    let extras = layout
        .extras
        .iter()
        .map(|(idx, name)| (name.clone(), cell(*idx).clone()))
        .collect::<BTreeMap<_, _>>();

    Ok(MatchRecord {
        fixture: cell(layout.fixture).to_string(),
        league,
        match_xg,
        ex_bookings,
        ex_corners,
        extras,
    })
}

fn numeric_cell(value: &CellValue, row: usize, column: &'static str) -> Result<Option<f64>> {
    let invalid = |value: String| DataLoadError::InvalidNumber { row, column, value };
    match value {
        CellValue::Null => Ok(None),
        CellValue::Integer(i) => Ok(Some(*i as f64)),
        CellValue::Float(f) if f.is_nan() => Ok(None),
        CellValue::Float(f) if f.is_infinite() => Err(invalid(f.to_string())),
        CellValue::Float(f) => Ok(Some(*f)),
        CellValue::String(s) if s.trim().is_empty() => Ok(None),
        CellValue::String(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_nan() => Ok(None),
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(invalid(s.clone())),
        },
        other => Err(invalid(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

/// Reads the first worksheet; its first non-empty row is the header.
fn read_workbook(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DataLoadError::EmptyWorkbook)??;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| spreadsheet_to_cell(c).to_string()).collect(),
        None => Vec::new(),
    };
    let rows: Vec<Vec<CellValue>> = rows
        .map(|r| r.iter().map(spreadsheet_to_cell).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

fn spreadsheet_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Null,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTimeIso(s) => CellValue::Date(s.clone()),
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// `fixture` and `league` are labels: kept verbatim so an exported file
/// loads back to the same text. Every other column is type-guessed.
fn read_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let is_label: Vec<bool> = headers
        .iter()
        .map(|h| matches!(h.trim(), FIXTURE_COLUMN | LEAGUE_COLUMN))
        .collect();

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .zip(&is_label)
                .map(|(v, &label)| match (label, v.is_empty()) {
                    (_, true) => CellValue::Null,
                    (true, false) => CellValue::String(v.to_string()),
                    (false, false) => CellValue::guess(v.trim()),
                })
                .collect(),
        );
    }

    Ok(RawTable { headers, rows })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "fixture": "Arsenal v Spurs", "league": "EPL", "match_xg": 2.9, "ex_bookings": 4.1, "ex_corners": 10.2 },
///   ...
/// ]
/// ```
fn read_json(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = root.as_array().ok_or_else(|| DataLoadError::Malformed {
        row: 0,
        message: "expected a top-level JSON array".into(),
    })?;

    let mut objects = Vec::with_capacity(records.len());
    let mut headers: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec.as_object().ok_or_else(|| DataLoadError::Malformed {
            row: i + 1,
            message: "not a JSON object".into(),
        })?;
        for key in obj.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
        objects.push(obj);
    }

    let rows: Vec<Vec<CellValue>> = objects
        .iter()
        .map(|obj| {
            headers
                .iter()
                .map(|h| obj.get(h).map(json_to_cell).unwrap_or(CellValue::Null))
                .collect()
        })
        .collect();

    Ok(RawTable { headers, rows })
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per sheet column.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn read_parquet(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build()?;

    let options = FormatOptions::default();
    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for batch_result in reader {
        let batch = batch_result?;
        let columns: Vec<Column> = batch
            .columns()
            .iter()
            .zip(&headers)
            .map(|(array, name)| Column::new(array.as_ref(), name, &options))
            .collect();
        for row in 0..batch.num_rows() {
            rows.push(columns.iter().map(|col| col.cell(row)).collect());
        }
    }

    Ok(RawTable { headers, rows })
}

/// An Arrow column plus a text formatter for the types without a direct
/// `CellValue` counterpart (dictionaries, dates, timestamps, decimals).
struct Column<'a> {
    array: &'a dyn Array,
    formatter: Option<ArrayFormatter<'a>>,
}

impl<'a> Column<'a> {
    fn new(array: &'a dyn Array, name: &str, options: &'a FormatOptions<'a>) -> Self {
        let formatter = match ArrayFormatter::try_new(array, options) {
            Ok(f) => Some(f),
            Err(e) => {
                log::debug!("column {name:?} ({}) cannot be displayed: {e}", array.data_type());
                None
            }
        };
        Column { array, formatter }
    }

    /// Extract a single cell at a given row.
    fn cell(&self, row: usize) -> CellValue {
        let col = self.array;
        if col.is_null(row) {
            return CellValue::Null;
        }
        match col.data_type() {
            DataType::Utf8 => CellValue::String(col.as_string::<i32>().value(row).to_string()),
            DataType::LargeUtf8 => CellValue::String(col.as_string::<i64>().value(row).to_string()),
            DataType::Int32 => CellValue::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
            DataType::Int64 => CellValue::Integer(col.as_primitive::<Int64Type>().value(row)),
            DataType::Float32 => CellValue::Float(col.as_primitive::<Float32Type>().value(row) as f64),
            DataType::Float64 => CellValue::Float(col.as_primitive::<Float64Type>().value(row)),
            DataType::Boolean => CellValue::Bool(col.as_boolean().value(row)),
            DataType::Date32 | DataType::Date64 | DataType::Timestamp(..) => {
                self.formatted(row).map_or(CellValue::Null, CellValue::Date)
            }
            _ => self.formatted(row).map_or(CellValue::Null, CellValue::String),
        }
    }

    fn formatted(&self, row: usize) -> Option<String> {
        self.formatter.as_ref().map(|f| f.value(row).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Date32Array, DictionaryArray, Float64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use rust_xlsxwriter::Workbook;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Mirrors `df.to_excel()`: an unnamed index column before the data.
    fn write_workbook(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let headers = ["", "fixture", "league", "match_xg", "ex_bookings", "ex_corners", "kickoff"];
        for (col, h) in headers.iter().enumerate() {
            if !h.is_empty() {
                sheet.write_string(0, col as u16, *h).unwrap();
            }
        }
        let rows = [
            ("Arsenal v Spurs", "EPL", 3.1, 4.2, 10.5, "15:00"),
            ("Bayern v Dortmund", "Bundesliga", 3.6, 3.9, 9.8, "17:30"),
        ];
        for (i, (fixture, league, xg, bookings, corners, kickoff)) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            sheet.write_number(r, 0, i as f64).unwrap();
            sheet.write_string(r, 1, *fixture).unwrap();
            sheet.write_string(r, 2, *league).unwrap();
            sheet.write_number(r, 3, *xg).unwrap();
            sheet.write_number(r, 4, *bookings).unwrap();
            sheet.write_number(r, 5, *corners).unwrap();
            sheet.write_string(r, 6, *kickoff).unwrap();
        }
        workbook.save(&path).unwrap();
        path
    }

    // ── Spreadsheets ──────────────────────────────────────────────────────────

    #[test]
    fn test_load_xlsx_drops_index_column() {
        let dir = TempDir::new().unwrap();
        let path = write_workbook(dir.path(), "GW8.xlsx");

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.has_league);
        assert_eq!(ds.extra_columns, vec!["kickoff".to_string()]);

        let first = &ds.records[0];
        assert_eq!(first.fixture, "Arsenal v Spurs");
        assert_eq!(first.league.as_deref(), Some("EPL"));
        assert_eq!(first.match_xg, Some(3.1));
        assert_eq!(first.ex_bookings, Some(4.2));
        assert_eq!(first.ex_corners, Some(10.5));
        assert_eq!(
            first.extras.get("kickoff"),
            Some(&CellValue::String("15:00".into()))
        );
        assert_eq!(ds.records[1].fixture, "Bayern v Dortmund");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file(Path::new("/tmp/does-not-exist-gameweek-xyz.xlsx")).unwrap_err();
        assert!(matches!(err, DataLoadError::NotFound(_)));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "notes.txt", "hello");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::UnsupportedFormat(ext) if ext == "txt"));
    }

    // ── CSV ───────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_csv_without_league() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "gw.csv",
            "Unnamed: 0,fixture,match_xg,ex_bookings,ex_corners\n\
             0,A v B,2.5,3,8.25\n\
             1,C v D,1.75,4.5,11\n",
        );

        let ds = load_file(&path).unwrap();
        assert!(!ds.has_league);
        assert!(ds.extra_columns.is_empty());
        assert!(ds.leagues.is_empty());
        assert_eq!(ds.records[0].league, None);
        assert_eq!(ds.records[0].ex_bookings, Some(3.0));
        assert_eq!(ds.records[1].ex_corners, Some(11.0));
    }

    #[test]
    fn test_load_csv_missing_required_column() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "gw.csv", "fixture,match_xg,ex_bookings\nA,1,2\n");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("ex_corners")));
    }

    #[test]
    fn test_load_csv_blank_numeric_cell_is_none() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "gw.csv",
            "fixture,league,match_xg,ex_bookings,ex_corners\nA,EPL,,2,9\n,,,,\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1, "fully blank rows are skipped");
        assert_eq!(ds.records[0].match_xg, None);
        assert_eq!(ds.records[0].ex_bookings, Some(2.0));
    }

    #[test]
    fn test_load_csv_non_numeric_cell_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "gw.csv",
            "fixture,match_xg,ex_bookings,ex_corners\nA,lots,2,9\n",
        );
        let err = load_file(&path).unwrap_err();
        match err {
            DataLoadError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "match_xg");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_csv_infinite_measure_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "gw.csv",
            "fixture,match_xg,ex_bookings,ex_corners\nA,1.5,2,9\nB,2,-inf,9\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::InvalidNumber { row: 2, column: "ex_bookings", .. }
        ));
    }

    #[test]
    fn test_infinite_numeric_strings_rejected() {
        for text in ["inf", "-infinity", " Infinity "] {
            let cell = CellValue::String(text.into());
            assert!(numeric_cell(&cell, 1, "match_xg").is_err(), "{text:?} accepted");
        }
        assert_eq!(numeric_cell(&CellValue::String("NaN".into()), 1, "match_xg").unwrap(), None);
        assert!(numeric_cell(&CellValue::Float(f64::NEG_INFINITY), 1, "match_xg").is_err());
    }

    #[test]
    fn test_load_csv_keeps_label_text() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "gw.csv",
            "fixture,league,match_xg,ex_bookings,ex_corners\n\" 1.50 \",007, 2.5 ,3,9\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.records[0].fixture, " 1.50 ");
        assert_eq!(ds.records[0].league.as_deref(), Some("007"));
        assert_eq!(ds.records[0].match_xg, Some(2.5));
    }

    // ── JSON ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_json_records() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "gw.json",
            r#"[
                {"fixture": "A v B", "league": "EPL", "match_xg": 2.4, "ex_bookings": 3, "ex_corners": 9.5},
                {"fixture": "C v D", "league": null, "match_xg": null, "ex_bookings": 1.5, "ex_corners": 7}
            ]"#,
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].ex_bookings, Some(3.0));
        assert_eq!(ds.records[1].league, None);
        assert_eq!(ds.records[1].match_xg, None);
    }

    #[test]
    fn test_load_json_extra_columns_keep_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "gw.json",
            r#"[{"fixture": "A v B", "referee": "Taylor", "match_xg": 2.4,
                 "ex_bookings": 3, "ex_corners": 9.5, "kickoff": "15:00", "attendance": 60000}]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.extra_columns, vec!["referee", "kickoff", "attendance"]);
    }

    #[test]
    fn test_load_json_rejects_non_array() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "gw.json", r#"{"fixture": "A"}"#);
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed { .. }));
    }

    // ── Parquet ───────────────────────────────────────────────────────────────

    #[test]
    fn test_load_parquet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gw.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new("fixture", DataType::Utf8, false),
            Field::new("league", DataType::Utf8, true),
            Field::new("match_xg", DataType::Float64, true),
            Field::new("ex_bookings", DataType::Float64, true),
            Field::new("ex_corners", DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["A v B", "C v D"])),
                Arc::new(StringArray::from(vec![Some("EPL"), None])),
                Arc::new(Float64Array::from(vec![Some(2.5), None])),
                Arc::new(Float64Array::from(vec![3.0, 4.0])),
                Arc::new(Float64Array::from(vec![9.0, 10.0])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].league.as_deref(), Some("EPL"));
        assert_eq!(ds.records[0].match_xg, Some(2.5));
        assert_eq!(ds.records[1].league, None);
        assert_eq!(ds.records[1].match_xg, None);
        assert_eq!(ds.records[1].ex_corners, Some(10.0));
    }

    #[test]
    fn test_load_parquet_dictionary_league_and_date_column() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gw.parquet");

        let league_type = DataType::Dictionary(Box::new(DataType::Int32), Box::new(DataType::Utf8));
        let schema = Arc::new(Schema::new(vec![
            Field::new("fixture", DataType::Utf8, false),
            Field::new("league", league_type, true),
            Field::new("match_xg", DataType::Float64, true),
            Field::new("ex_bookings", DataType::Float64, true),
            Field::new("ex_corners", DataType::Float64, true),
            Field::new("kickoff", DataType::Date32, true),
        ]));
        let leagues: DictionaryArray<Int32Type> = vec!["EPL", "La Liga", "EPL"].into_iter().collect();
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["A v B", "C v D", "E v F"])),
                Arc::new(leagues),
                Arc::new(Float64Array::from(vec![2.5, 1.0, 3.0])),
                Arc::new(Float64Array::from(vec![3.0, 4.0, 2.0])),
                Arc::new(Float64Array::from(vec![9.0, 10.0, 8.0])),
                // 2024-10-19 is day 20015 of the Unix epoch.
                Arc::new(Date32Array::from(vec![Some(20015), None, Some(20016)])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.records[0].league.as_deref(), Some("EPL"));
        assert_eq!(ds.records[1].league.as_deref(), Some("La Liga"));
        assert_eq!(
            ds.leagues.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["EPL", "La Liga"]
        );
        assert_eq!(
            ds.records[0].extras.get("kickoff"),
            Some(&CellValue::Date("2024-10-19".into()))
        );
        assert_eq!(ds.records[1].extras.get("kickoff"), Some(&CellValue::Null));
        assert_eq!(
            ds.records[2].extras.get("kickoff"),
            Some(&CellValue::Date("2024-10-20".into()))
        );
    }
}
