use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Penguin, PenguinDataset};

use super::display::DisplayCache;

// ---------------------------------------------------------------------------
// Table display nodes
// ---------------------------------------------------------------------------

/// Column headers, matching the dataset schema order.
const HEADERS: [&str; 7] = [
    "species",
    "island",
    "bill_length_mm",
    "bill_depth_mm",
    "flipper_length_mm",
    "body_mass_g",
    "sex",
];

/// Presentation variant: the plain data table, and the striped grid with
/// row numbers and resizable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableStyle {
    Plain,
    Grid,
}

impl TableStyle {
    fn title(self) -> &'static str {
        match self {
            TableStyle::Plain => "Penguin Data Table",
            TableStyle::Grid => "Penguin Data Grid",
        }
    }
}

/// Preformatted cells for every filtered row, dataset order.
type TableRows = Vec<[String; 7]>;

/// Renders the filtered view as-is: every row, every column, no
/// aggregation. The formatted cells are the cached artifact.
pub struct TableNode {
    style: TableStyle,
    cache: DisplayCache<(), TableRows>,
}

impl TableNode {
    pub fn new(style: TableStyle) -> Self {
        Self {
            style,
            cache: DisplayCache::new(),
        }
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        view_version: u64,
        rows: &[usize],
        dataset: &PenguinDataset,
    ) {
        let formatted = self.cache.read(view_version, (), || format_rows(rows, dataset));
        let show_row_numbers = self.style == TableStyle::Grid;

        ui.strong(self.style.title());
        if formatted.is_empty() {
            ui.weak("No penguins match the current filters.");
        }

        let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;

        ui.push_id(self.style, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(show_row_numbers)
                .resizable(show_row_numbers)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .min_scrolled_height(0.0)
                .vscroll(true);

            if show_row_numbers {
                builder = builder.column(Column::initial(36.0).at_least(28.0));
            }
            builder = builder.columns(Column::auto().at_least(56.0).clip(true), HEADERS.len());

            builder
                .header(20.0, |mut header| {
                    if show_row_numbers {
                        header.col(|ui| {
                            ui.strong("#");
                        });
                    }
                    for name in HEADERS {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(text_height, formatted.len(), |mut row| {
                        let idx = row.index();
                        if show_row_numbers {
                            row.col(|ui| {
                                ui.monospace(format!("{idx}"));
                            });
                        }
                        for cell in &formatted[idx] {
                            row.col(|ui| {
                                ui.label(cell);
                            });
                        }
                    });
                });
        });
    }
}

fn format_rows(rows: &[usize], dataset: &PenguinDataset) -> TableRows {
    rows.iter()
        .map(|&i| format_cells(&dataset.penguins[i]))
        .collect()
}

fn format_cells(p: &Penguin) -> [String; 7] {
    [
        p.species.to_string(),
        p.island.to_string(),
        format_measurement(p.bill_length_mm, 1),
        format_measurement(p.bill_depth_mm, 1),
        format_measurement(p.flipper_length_mm, 0),
        format_measurement(p.body_mass_g, 0),
        p.sex.map(|s| s.to_string()).unwrap_or_else(|| "NA".into()),
    ]
}

fn format_measurement(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "NA".to_string(),
    }
}
