use eframe::egui::{Color32, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::data::model::Measure;
use crate::data::stats::histogram;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Charts (central panel, "Charts" tab)
// ---------------------------------------------------------------------------

/// Render xG per fixture, xG against bookings, and the corners distribution.
pub fn charts(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a match sheet to begin  (File → Open…)");
        });
        return;
    }
    if state.visible_indices.is_empty() {
        ui.label("No matches pass the current filters.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Expected goals by fixture");
            xg_bar_chart(ui, state);
            ui.add_space(12.0);

            ui.strong("Expected goals vs expected bookings");
            xg_bookings_scatter(ui, state);
            ui.add_space(12.0);

            ui.strong("Distribution of expected corners");
            corners_histogram(ui, state);
        });
}

fn xg_bar_chart(ui: &mut Ui, state: &AppState) {
    let bars: Vec<Bar> = state
        .visible_records()
        .enumerate()
        .filter_map(|(i, rec)| {
            let xg = rec.match_xg?;
            Some(Bar::new(i as f64, xg).name(&rec.fixture).width(0.7))
        })
        .collect();

    let chart = BarChart::new(bars)
        .name(Measure::MatchXg.label())
        .color(Color32::LIGHT_BLUE);

    Plot::new("xg_bar_chart")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .y_axis_label(Measure::MatchXg.label())
        .allow_scroll(false)
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));
}

fn xg_bookings_scatter(ui: &mut Ui, state: &AppState) {
    let colors = state.league_colors.as_ref();
    let mut series: Vec<Points> = Vec::new();

    // One series per league so the legend doubles as a colour key.
    let mut groups: Vec<(Option<&str>, Vec<[f64; 2]>)> = Vec::new();
    for rec in state.visible_records() {
        let (Some(xg), Some(bookings)) = (rec.match_xg, rec.ex_bookings) else {
            continue;
        };
        let league = rec.league.as_deref();
        match groups.iter_mut().find(|(l, _)| *l == league) {
            Some((_, pts)) => pts.push([xg, bookings]),
            None => groups.push((league, vec![[xg, bookings]])),
        }
    }

    for (league, pts) in groups {
        let color = colors
            .map(|c| c.color_for(league))
            .unwrap_or(Color32::LIGHT_BLUE);
        series.push(
            Points::new(PlotPoints::from(pts))
                .name(league.unwrap_or("Matches"))
                .color(color)
                .radius(4.0),
        );
    }

    Plot::new("xg_bookings_scatter")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(Measure::MatchXg.label())
        .y_axis_label(Measure::ExBookings.label())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for points in series {
                plot_ui.points(points);
            }
        });
}

fn corners_histogram(ui: &mut Ui, state: &AppState) {
    let values: Vec<f64> = state
        .visible_records()
        .filter_map(|r| r.ex_corners)
        .collect();

    let bars: Vec<Bar> = histogram(&values, state.config.histogram_bins)
        .into_iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .name(format!("{:.1} – {:.1}", bin.start, bin.end))
        })
        .collect();

    let chart = BarChart::new(bars)
        .name("Matches")
        .color(Color32::from_rgb(230, 160, 60));

    Plot::new("corners_histogram")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(Measure::ExCorners.label())
        .y_axis_label("Matches")
        .allow_scroll(false)
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));
}
