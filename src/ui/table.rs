use eframe::egui::{Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use super::format_value;
use crate::color::Tier;
use crate::data::model::{Measure, FIXTURE_COLUMN, LEAGUE_COLUMN};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Match table (central panel, "Table" tab)
// ---------------------------------------------------------------------------

/// Render the visible records with tier-coloured measure cells.
pub fn match_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a match sheet to begin  (File → Open…)");
        });
        return;
    };

    if state.visible_indices.is_empty() {
        ui.label("No matches pass the current filters.");
        return;
    }

    let extra_count = dataset.extra_columns.len();
    let league_count = usize::from(dataset.has_league);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(180.0))
        .columns(Column::auto().at_least(90.0), league_count + Measure::ALL.len())
        .columns(Column::auto(), extra_count)
        .min_scrolled_height(0.0)
        .max_scroll_height(state.config.table_height)
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong(FIXTURE_COLUMN);
            });
            if dataset.has_league {
                header.col(|ui| {
                    ui.strong(LEAGUE_COLUMN);
                });
            }
            for measure in Measure::ALL {
                header.col(|ui| {
                    ui.strong(measure.column());
                });
            }
            for col in &dataset.extra_columns {
                header.col(|ui| {
                    ui.strong(col.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.visible_indices.len(), |mut row| {
                let rec = &dataset.records[state.visible_indices[row.index()]];

                row.col(|ui| {
                    ui.label(rec.fixture.as_str());
                });
                if dataset.has_league {
                    row.col(|ui| {
                        ui.label(rec.league.as_deref().unwrap_or(""));
                    });
                }
                for measure in Measure::ALL {
                    let value = rec.measure(measure);
                    row.col(|ui| {
                        if let Some(v) = value {
                            let rect = ui.max_rect();
                            ui.painter().rect_filled(rect, 0.0, Tier::classify(v).fill());
                        }
                        ui.label(RichText::new(format_value(value)).monospace());
                    });
                }
                for col in &dataset.extra_columns {
                    row.col(|ui| {
                        let text = rec.extras.get(col).map(|v| v.to_string()).unwrap_or_default();
                        ui.label(text);
                    });
                }
            });
        });

    ui.add_space(6.0);
    tier_legend(ui);
}

fn tier_legend(ui: &mut Ui) {
    ui.horizontal(|ui: &mut Ui| {
        for (tier, label) in [
            (Tier::High, "> 5"),
            (Tier::Medium, "3 – 5"),
            (Tier::Low, "≤ 3"),
        ] {
            let text = RichText::new(format!("  {label}  ")).background_color(tier.fill());
            ui.label(text);
        }
    });
}

