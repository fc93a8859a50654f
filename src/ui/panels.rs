use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::{Island, NumericAttribute, Species};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the sidebar: species / island filters and histogram options.
/// This is the single writer of the filter selection.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Species ----
            ui.horizontal(|ui: &mut Ui| {
                ui.strong("Species");
                if ui.small_button("All").clicked() {
                    state.selection.select_all_species();
                }
                if ui.small_button("None").clicked() {
                    state.selection.clear_species();
                }
            });
            for species in Species::ALL {
                let mut checked = state.selection.species().contains(&species);
                let text = RichText::new(species.label()).color(state.colors.color_for(species));
                if ui.checkbox(&mut checked, text).changed() {
                    state.selection.toggle_species(species);
                }
            }
            ui.separator();

            // ---- Island ----
            ui.horizontal(|ui: &mut Ui| {
                ui.strong("Island");
                if ui.small_button("All").clicked() {
                    state.selection.select_all_islands();
                }
                if ui.small_button("None").clicked() {
                    state.selection.clear_islands();
                }
            });
            for island in Island::ALL {
                let mut checked = state.selection.islands().contains(&island);
                if ui.checkbox(&mut checked, island.label()).changed() {
                    state.selection.toggle_island(island);
                }
            }
            ui.separator();

            // ---- Histogram options ----
            ui.heading("Histogram Options");
            ui.label("Attribute");
            egui::ComboBox::from_id_salt("histogram_attribute")
                .selected_text(state.hist_attribute.column_name())
                .show_ui(ui, |ui: &mut Ui| {
                    for attribute in NumericAttribute::ALL {
                        if ui
                            .selectable_label(
                                state.hist_attribute == attribute,
                                attribute.column_name(),
                            )
                            .clicked()
                        {
                            state.hist_attribute = attribute;
                        }
                    }
                });

            ui.add_space(4.0);
            ui.horizontal(|ui: &mut Ui| {
                ui.label("Overlay bins");
                ui.add(egui::DragValue::new(&mut state.overlay_bins).speed(1));
            });
            ui.add(egui::Slider::new(&mut state.stacked_bins, 0..=100).text("Stacked bins"));

            ui.separator();
            ui.hyperlink_to(
                "palmerpenguins dataset",
                "https://allisonhorst.github.io/palmerpenguins/",
            );
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar: dataset size and current match count.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Penguin Dashboard");
        ui.separator();
        ui.label(format!(
            "{} penguins loaded, {} matching filters",
            state.dataset.len(),
            state.view.rows().len()
        ));
    });
}
