use eframe::egui::{self, RichText, Ui};

use super::format_value;
use crate::data::model::Measure;
use crate::data::stats::{league_summaries, top_by};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Insights (central panel, "Insights" tab)
// ---------------------------------------------------------------------------

pub fn insights(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a match sheet to begin  (File → Open…)");
        });
        return;
    }

    let stats = &state.stats;

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for measure in Measure::ALL {
            let title = format!("Average {}", measure.label().to_lowercase());
            metric_card(ui, &title, format_value(stats.average(measure)));
        }
        let highest = match &stats.highest_xg {
            Some(top) => {
                let league = state
                    .visible_records()
                    .nth(top.position)
                    .and_then(|r| r.league.as_deref())
                    .map(|l| format!(", {l}"))
                    .unwrap_or_default();
                format!("{}  ({}{league})", top.fixture, format_value(Some(top.value)))
            }
            None => "–".to_string(),
        };
        metric_card(ui, "Highest xG match", highest);
    });

    if stats.count == 0 {
        ui.add_space(8.0);
        ui.label("No matches pass the current filters.");
        return;
    }

    ui.add_space(12.0);
    ui.heading("By league");
    egui::Grid::new("league_breakdown")
        .striped(true)
        .num_columns(5)
        .show(ui, |ui: &mut Ui| {
            ui.strong("League");
            ui.strong("Matches");
            for measure in Measure::ALL {
                ui.strong(measure.column());
            }
            ui.end_row();

            for summary in league_summaries(state.visible_records()) {
                ui.label(summary.league.as_deref().unwrap_or("(none)"));
                ui.label(summary.stats.count.to_string());
                for measure in Measure::ALL {
                    ui.label(format_value(summary.stats.average(measure)));
                }
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    ui.heading(format!("Top {} fixtures by xG", state.config.top_fixtures));
    let top = top_by(state.visible_records(), Measure::MatchXg, state.config.top_fixtures);
    for (rank, rec) in top.into_iter().enumerate() {
        ui.label(format!(
            "{}. {}  {}",
            rank + 1,
            rec.fixture,
            format_value(rec.match_xg)
        ));
    }
}

fn metric_card(ui: &mut Ui, title: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(160.0);
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(title).small());
            ui.label(RichText::new(value).heading().strong());
        });
    });
}
