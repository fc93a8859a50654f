use eframe::egui;
use egui_extras::{Size, StripBuilder};

use crate::state::AppState;
use crate::ui::histogram::{HistogramBackend, HistogramNode, HistogramParams};
use crate::ui::panels;
use crate::ui::scatter::ScatterNode;
use crate::ui::table::{TableNode, TableStyle};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinApp {
    state: AppState,
    data_table: TableNode,
    data_grid: TableNode,
    overlay_hist: HistogramNode,
    stacked_hist: HistogramNode,
    scatter: ScatterNode,
}

impl PenguinApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            data_table: TableNode::new(TableStyle::Plain),
            data_grid: TableNode::new(TableStyle::Grid),
            overlay_hist: HistogramNode::new(HistogramBackend::Overlay),
            stacked_hist: HistogramNode::new(HistogramBackend::Stacked),
            scatter: ScatterNode::new(),
        }
    }

    fn show_displays(&mut self, ui: &mut egui::Ui) {
        let state = &self.state;
        let version = state.view.version();
        let rows = state.view.rows();

        let data_table = &mut self.data_table;
        let data_grid = &mut self.data_grid;
        let overlay_hist = &mut self.overlay_hist;
        let stacked_hist = &mut self.stacked_hist;
        let scatter = &mut self.scatter;

        let overlay_params = HistogramParams {
            attribute: state.hist_attribute,
            bins: state.overlay_bins,
        };
        let stacked_params = HistogramParams {
            attribute: state.hist_attribute,
            bins: state.stacked_bins,
        };

        StripBuilder::new(ui)
            .size(Size::relative(0.45))
            .size(Size::remainder())
            .vertical(|mut strip| {
                strip.strip(|builder| {
                    builder
                        .sizes(Size::remainder(), 2)
                        .horizontal(|mut strip| {
                            strip.cell(|ui| {
                                data_table.show(ui, version, rows, &state.dataset);
                            });
                            strip.cell(|ui| {
                                data_grid.show(ui, version, rows, &state.dataset);
                            });
                        });
                });
                strip.strip(|builder| {
                    builder
                        .sizes(Size::remainder(), 3)
                        .horizontal(|mut strip| {
                            strip.cell(|ui| {
                                overlay_hist.show(
                                    ui,
                                    version,
                                    rows,
                                    &state.dataset,
                                    &state.colors,
                                    overlay_params,
                                );
                            });
                            strip.cell(|ui| {
                                stacked_hist.show(
                                    ui,
                                    version,
                                    rows,
                                    &state.dataset,
                                    &state.colors,
                                    stacked_params,
                                );
                            });
                            strip.cell(|ui| {
                                scatter.show(ui, version, rows, &state.dataset, &state.colors);
                            });
                        });
                });
            });
    }
}

impl eframe::App for PenguinApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Catch up with any change left over from the previous frame before
        // the top bar reads the match count.
        self.state.refresh();

        // ---- Top panel: counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // The sidebar is done mutating; take the frame's filtered read so
        // every display observes one consistent selection snapshot.
        self.state.refresh();

        // ---- Central panel: tables and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_displays(ui);
        });
    }
}
