use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, PlotUi, Points};

use crate::color::ColorMap;
use crate::data::model::{NumericAttribute, PenguinDataset, Sex, Species};

use super::display::DisplayCache;

// ---------------------------------------------------------------------------
// Scatterplot display node – flipper length vs body mass
// ---------------------------------------------------------------------------

/// One legend group: every plotted penguin of a (species, sex) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub species: Species,
    pub sex: Option<Sex>,
    /// (flipper length, body mass) per point.
    pub points: Vec<[f64; 2]>,
    /// Dataset index per point, for hover inspection.
    pub rows: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterArtifact {
    pub series: Vec<ScatterSeries>,
    /// Filtered records left out because a plotted value was missing.
    pub excluded: usize,
}

impl ScatterArtifact {
    pub fn plotted(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Plots the two fixed numeric attributes, coloured by species and shaped
/// by sex. Records missing either attribute are dropped from the plot
/// only, never from the filtered view.
pub struct ScatterNode {
    cache: DisplayCache<(), ScatterArtifact>,
}

impl ScatterNode {
    pub fn new() -> Self {
        Self {
            cache: DisplayCache::new(),
        }
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        view_version: u64,
        rows: &[usize],
        dataset: &PenguinDataset,
        colors: &ColorMap,
    ) {
        let artifact = self.cache.read(view_version, (), || build_artifact(rows, dataset));

        ui.strong("Flipper Length vs Body Mass");

        let hovered = Plot::new("scatter")
            .legend(Legend::default())
            .x_axis_label(NumericAttribute::FlipperLength.label())
            .y_axis_label(NumericAttribute::BodyMass.label())
            .label_formatter(|name, value| {
                if name.is_empty() {
                    format!("{:.0} mm, {:.0} g", value.x, value.y)
                } else {
                    format!("{name}\n{:.0} mm, {:.0} g", value.x, value.y)
                }
            })
            .show(ui, |plot_ui| {
                for series in &artifact.series {
                    let points: PlotPoints = series.points.iter().copied().collect();
                    plot_ui.points(
                        Points::new(points)
                            .name(series_name(series))
                            .color(colors.color_for(series.species))
                            .shape(marker_for(series.sex))
                            .radius(3.0)
                            .filled(true),
                    );
                }
                nearest_row(plot_ui, artifact)
            })
            .inner;

        // Auxiliary fields for the point under the pointer.
        match hovered {
            Some(idx) => {
                let p = &dataset.penguins[idx];
                ui.weak(format!(
                    "{} on {} – bill {} × {} mm",
                    p.species,
                    p.island,
                    format_bill(p.bill_length_mm),
                    format_bill(p.bill_depth_mm),
                ));
            }
            None if artifact.excluded > 0 => {
                ui.weak(format!(
                    "{} plotted, {} without both measurements",
                    artifact.plotted(),
                    artifact.excluded
                ));
            }
            None => {
                ui.weak(format!("{} plotted", artifact.plotted()));
            }
        }
    }
}

fn series_name(series: &ScatterSeries) -> String {
    match series.sex {
        Some(sex) => format!("{} ({sex})", series.species),
        None => format!("{} (sex NA)", series.species),
    }
}

fn marker_for(sex: Option<Sex>) -> MarkerShape {
    match sex {
        Some(Sex::Male) => MarkerShape::Circle,
        Some(Sex::Female) => MarkerShape::Diamond,
        None => MarkerShape::Cross,
    }
}

fn format_bill(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "NA".to_string(),
    }
}

/// Index of the plotted record nearest the pointer, within a small
/// bounds-relative radius.
fn nearest_row(plot_ui: &PlotUi, artifact: &ScatterArtifact) -> Option<usize> {
    let pointer = plot_ui.pointer_coordinate()?;
    let bounds = plot_ui.plot_bounds();
    let (width, height) = (bounds.width(), bounds.height());
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let mut best: Option<(f64, usize)> = None;
    for series in &artifact.series {
        for (point, &row) in series.points.iter().zip(&series.rows) {
            let dx = (point[0] - pointer.x) / width;
            let dy = (point[1] - pointer.y) / height;
            let dist = dx * dx + dy * dy;
            if best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, row));
            }
        }
    }

    // Within ~2% of the visible range.
    best.filter(|&(dist, _)| dist < 0.0004).map(|(_, row)| row)
}

// ---------------------------------------------------------------------------
// Point grouping
// ---------------------------------------------------------------------------

fn build_artifact(rows: &[usize], dataset: &PenguinDataset) -> ScatterArtifact {
    let mut series: Vec<ScatterSeries> = Vec::new();
    let mut excluded = 0usize;

    for &idx in rows {
        let p = &dataset.penguins[idx];
        let (Some(x), Some(y)) = (p.flipper_length_mm, p.body_mass_g) else {
            excluded += 1;
            continue;
        };

        let pos = match series
            .iter()
            .position(|s| s.species == p.species && s.sex == p.sex)
        {
            Some(pos) => pos,
            None => {
                series.push(ScatterSeries {
                    species: p.species,
                    sex: p.sex,
                    points: Vec::new(),
                    rows: Vec::new(),
                });
                series.len() - 1
            }
        };
        series[pos].points.push([x, y]);
        series[pos].rows.push(idx);
    }

    // Stable legend order.
    series.sort_by_key(|s| (s.species, s.sex));

    ScatterArtifact { series, excluded }
}
