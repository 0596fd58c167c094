use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    if dataset.is_empty() {
        ui.label("The sheet has no match rows.");
        return;
    }

    // Edit a copy; the state only changes through `apply_filters`.
    let mut spec = state.filters.clone();
    let bounds = state.bounds.clone();

    if dataset.has_league {
        ui.strong("League");
        let selected_text = spec.league.clone().unwrap_or_else(|| "All".into());
        egui::ComboBox::from_id_salt("league_filter")
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui: &mut Ui| {
                ui.selectable_value(&mut spec.league, None, "All");
                for league in &dataset.leagues {
                    ui.selectable_value(&mut spec.league, Some(league.clone()), league.as_str());
                }
            });
        ui.add_space(8.0);
    }

    ui.strong("Minimum expected goals");
    ui.add(egui::Slider::new(&mut spec.min_xg, bounds.xg).step_by(0.1).fixed_decimals(1));
    ui.add_space(8.0);

    ui.strong("Minimum expected bookings");
    ui.add(
        egui::Slider::new(&mut spec.min_bookings, bounds.bookings)
            .step_by(0.1)
            .fixed_decimals(1),
    );
    ui.add_space(8.0);

    let reset = ui.button("Reset filters").clicked();

    state.apply_filters(spec);
    if reset {
        state.reset_filters();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                if let Err(e) = state.reload() {
                    log::warn!("Reload failed, dataset cleared: {e}");
                }
                ui.close_menu();
            }
            let can_export = state.dataset.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Download CSV…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.tab, Tab::Table, "Table");
        ui.selectable_value(&mut state.tab, Tab::Charts, "Charts");
        ui.selectable_value(&mut state.tab, Tab::Insights, "Insights");

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} matches loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if state.status_is_error {
                Color32::RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open match sheet")
        .add_filter(
            "Supported files",
            &["xlsx", "xlsm", "xlsb", "xls", "ods", "csv", "json", "parquet", "pq"],
        )
        .add_filter("Spreadsheets", &["xlsx", "xlsm", "xlsb", "xls", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.load(&path) {
            log::warn!("Open failed, dataset cleared: {e}");
        }
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Download filtered matches")
        .set_file_name(state.config.export_filename.as_str())
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        state.export_visible(&path);
    }
}
