use chrono::Local;
use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{charts, insights, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: render time ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.small(format!(
                "Last updated: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            ));
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.state.config.title.as_str());
            ui.separator();
            match self.state.tab {
                Tab::Table => table::match_table(ui, &self.state),
                Tab::Charts => charts::charts(ui, &self.state),
                Tab::Insights => insights::insights(ui, &self.state),
            }
        });
    }
}
