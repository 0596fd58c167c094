//! egui rendering: side/top panels plus one module per tab.

pub mod charts;
pub mod insights;
pub mod panels;
pub mod table;

/// Two-decimal rendering for statistics; undefined values show as a dash.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "–".to_string(),
    }
}
