use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::ColorMap;
use crate::data::model::{NumericAttribute, PenguinDataset, Species};

use super::display::DisplayCache;

// ---------------------------------------------------------------------------
// Histogram display node – one node type, two rendering backends
// ---------------------------------------------------------------------------

/// Rendering backend for a histogram node. Both bucket identically; they
/// differ in how the per-species bars are composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramBackend {
    /// Translucent per-species bars drawn on top of each other.
    Overlay,
    /// Per-species bars stacked, with a density curve overlay.
    Stacked,
}

impl HistogramBackend {
    fn title(self) -> &'static str {
        match self {
            HistogramBackend::Overlay => "Overlay Histogram",
            HistogramBackend::Stacked => "Stacked Histogram",
        }
    }
}

/// Node parameters: which column to bucket and how many buckets. `bins` is
/// the raw widget value; anything below 1 is clamped at build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramParams {
    pub attribute: NumericAttribute,
    pub bins: i32,
}

/// Bucket counts for one species, in bin order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesCounts {
    pub species: Species,
    pub counts: Vec<usize>,
}

/// Computed bucket data, ready to paint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistogramArtifact {
    /// Left edge of the first bin.
    pub min: f64,
    pub bin_width: f64,
    /// One entry per species with at least one counted value.
    pub series: Vec<SpeciesCounts>,
    /// Filtered records with a value for the chosen attribute.
    pub counted: usize,
    /// Filtered records excluded because the attribute was missing.
    pub excluded: usize,
    /// Whether the requested bin count was below 1 and got clamped.
    pub clamped: bool,
    /// Count-scaled density curve; empty unless the backend draws one.
    pub density: Vec<[f64; 2]>,
}

/// Buckets the selected attribute over the filtered view, grouped by
/// species. Missing values are excluded from the buckets, never counted.
pub struct HistogramNode {
    backend: HistogramBackend,
    cache: DisplayCache<HistogramParams, HistogramArtifact>,
}

impl HistogramNode {
    pub fn new(backend: HistogramBackend) -> Self {
        Self {
            backend,
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
        params: HistogramParams,
    ) {
        let backend = self.backend;
        let artifact = self
            .cache
            .read(view_version, params, || build_artifact(rows, dataset, params, backend));

        ui.strong(backend.title());
        if artifact.clamped {
            ui.colored_label(
                Color32::YELLOW,
                format!("bin count {} is invalid – using a single bucket", params.bins),
            );
        }
        if artifact.excluded > 0 {
            ui.weak(format!(
                "{} of {} filtered penguins lack {}",
                artifact.excluded,
                artifact.counted + artifact.excluded,
                params.attribute.column_name()
            ));
        }

        Plot::new(("histogram", backend.title()))
            .legend(Legend::default())
            .x_axis_label(params.attribute.label())
            .y_axis_label("Count")
            .show(ui, |plot_ui| {
                let mut drawn: Vec<BarChart> = Vec::new();
                for sc in &artifact.series {
                    let color = colors.color_for(sc.species);
                    let bars: Vec<Bar> = sc
                        .counts
                        .iter()
                        .enumerate()
                        .filter(|(_, &count)| count > 0)
                        .map(|(bin, &count)| {
                            let center = artifact.min + (bin as f64 + 0.5) * artifact.bin_width;
                            Bar::new(center, count as f64).width(artifact.bin_width * 0.95)
                        })
                        .collect();

                    let mut chart = BarChart::new(bars).name(sc.species.to_string());
                    chart = match backend {
                        HistogramBackend::Overlay => chart.color(color.gamma_multiply(0.55)),
                        HistogramBackend::Stacked => {
                            let below: Vec<&BarChart> = drawn.iter().collect();
                            chart.color(color).stack_on(&below)
                        }
                    };
                    drawn.push(chart);
                }
                for chart in drawn {
                    plot_ui.bar_chart(chart);
                }

                if !artifact.density.is_empty() {
                    let points: PlotPoints = artifact.density.iter().copied().collect();
                    plot_ui.line(
                        Line::new(points)
                            .name("density")
                            .color(Color32::LIGHT_GRAY)
                            .width(1.5),
                    );
                }
            });
    }
}

// ---------------------------------------------------------------------------
// Bucketing
// ---------------------------------------------------------------------------

fn build_artifact(
    rows: &[usize],
    dataset: &PenguinDataset,
    params: HistogramParams,
    backend: HistogramBackend,
) -> HistogramArtifact {
    let bins = params.bins.max(1) as usize;
    let clamped = params.bins < 1;
    if clamped {
        log::warn!(
            "histogram bin count {} is below 1, clamping to a single bucket",
            params.bins
        );
    }

    let mut values: Vec<(Species, f64)> = Vec::new();
    let mut excluded = 0usize;
    for &idx in rows {
        let p = &dataset.penguins[idx];
        match p.numeric(params.attribute) {
            Some(v) => values.push((p.species, v)),
            None => excluded += 1,
        }
    }

    if values.is_empty() {
        return HistogramArtifact {
            excluded,
            clamped,
            ..HistogramArtifact::default()
        };
    }

    let min = values.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
    let max = values
        .iter()
        .map(|&(_, v)| v)
        .fold(f64::NEG_INFINITY, f64::max);
    // All values identical: one degenerate bucket of nominal width.
    let bin_width = if max > min { (max - min) / bins as f64 } else { 1.0 };

    let mut series: Vec<SpeciesCounts> = Species::ALL
        .into_iter()
        .map(|species| SpeciesCounts {
            species,
            counts: vec![0; bins],
        })
        .collect();

    for &(species, v) in &values {
        // Last bucket is closed on the right so `max` lands inside it.
        let mut bin = ((v - min) / bin_width) as usize;
        if bin >= bins {
            bin = bins - 1;
        }
        if let Some(sc) = series.iter_mut().find(|sc| sc.species == species) {
            sc.counts[bin] += 1;
        }
    }
    series.retain(|sc| sc.counts.iter().any(|&c| c > 0));

    let counted = values.len();
    let density = match backend {
        HistogramBackend::Stacked if counted > 1 && max > min => {
            density_curve(&values, min, max, bin_width)
        }
        _ => Vec::new(),
    };

    HistogramArtifact {
        min,
        bin_width,
        series,
        counted,
        excluded,
        clamped,
        density,
    }
}

/// Gaussian kernel density estimate over all counted values, scaled by
/// `n * bin_width` so the curve is comparable to bucket counts.
fn density_curve(
    values: &[(Species, f64)],
    min: f64,
    max: f64,
    bin_width: f64,
) -> Vec<[f64; 2]> {
    let n = values.len() as f64;
    let mean = values.iter().map(|&(_, v)| v).sum::<f64>() / n;
    let variance = values.iter().map(|&(_, v)| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    // Silverman's rule of thumb.
    let bandwidth = 1.06 * std_dev * n.powf(-0.2);
    if bandwidth <= 0.0 {
        return Vec::new();
    }

    let steps = 100;
    let norm = (2.0 * std::f64::consts::PI).sqrt();
    (0..=steps)
        .map(|i| {
            let x = min + (max - min) * i as f64 / steps as f64;
            let mut density = 0.0;
            for &(_, v) in values {
                let u = (x - v) / bandwidth;
                density += (-0.5 * u * u).exp();
            }
            density /= n * bandwidth * norm;
            [x, density * n * bin_width]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Island, Penguin};

    fn penguin(species: Species, mass: Option<f64>) -> Penguin {
        Penguin {
            species,
            island: Island::Biscoe,
            bill_length_mm: None,
            bill_depth_mm: None,
            flipper_length_mm: None,
            body_mass_g: mass,
            sex: None,
        }
    }

    fn params(bins: i32) -> HistogramParams {
        HistogramParams {
            attribute: NumericAttribute::BodyMass,
            bins,
        }
    }

    fn total_count(artifact: &HistogramArtifact) -> usize {
        artifact
            .series
            .iter()
            .map(|sc| sc.counts.iter().sum::<usize>())
            .sum()
    }

    #[test]
    fn bucket_counts_sum_to_the_non_missing_count() {
        let mut penguins: Vec<Penguin> = (0..47)
            .map(|i| penguin(Species::Adelie, Some(3000.0 + 40.0 * i as f64)))
            .collect();
        penguins.extend((0..3).map(|_| penguin(Species::Adelie, None)));
        let dataset = PenguinDataset { penguins };
        let rows: Vec<usize> = (0..dataset.len()).collect();

        let artifact = build_artifact(&rows, &dataset, params(10), HistogramBackend::Overlay);

        assert_eq!(artifact.counted, 47);
        assert_eq!(artifact.excluded, 3);
        assert_eq!(total_count(&artifact), 47);
    }

    #[test]
    fn zero_bin_count_clamps_to_a_single_bucket() {
        let dataset = PenguinDataset {
            penguins: vec![
                penguin(Species::Adelie, Some(3500.0)),
                penguin(Species::Gentoo, Some(5000.0)),
            ],
        };

        let artifact = build_artifact(&[0, 1], &dataset, params(0), HistogramBackend::Overlay);

        assert!(artifact.clamped);
        assert_eq!(total_count(&artifact), 2);
        for sc in &artifact.series {
            assert_eq!(sc.counts.len(), 1);
        }
    }

    #[test]
    fn negative_bin_count_also_clamps() {
        let dataset = PenguinDataset {
            penguins: vec![penguin(Species::Chinstrap, Some(3700.0))],
        };

        let artifact = build_artifact(&[0], &dataset, params(-5), HistogramBackend::Stacked);
        assert!(artifact.clamped);
        assert_eq!(total_count(&artifact), 1);
    }

    #[test]
    fn counts_are_grouped_by_species() {
        let dataset = PenguinDataset {
            penguins: vec![
                penguin(Species::Adelie, Some(3500.0)),
                penguin(Species::Adelie, Some(3600.0)),
                penguin(Species::Gentoo, Some(5000.0)),
            ],
        };

        let artifact = build_artifact(&[0, 1, 2], &dataset, params(4), HistogramBackend::Overlay);

        let count_for = |species: Species| {
            artifact
                .series
                .iter()
                .find(|sc| sc.species == species)
                .map(|sc| sc.counts.iter().sum::<usize>())
        };
        assert_eq!(count_for(Species::Adelie), Some(2));
        assert_eq!(count_for(Species::Gentoo), Some(1));
        assert_eq!(count_for(Species::Chinstrap), None);
    }

    #[test]
    fn identical_values_collapse_into_one_bucket() {
        let dataset = PenguinDataset {
            penguins: vec![
                penguin(Species::Adelie, Some(4000.0)),
                penguin(Species::Adelie, Some(4000.0)),
            ],
        };

        let artifact = build_artifact(&[0, 1], &dataset, params(20), HistogramBackend::Overlay);
        assert_eq!(total_count(&artifact), 2);
        assert_eq!(artifact.series[0].counts.iter().filter(|&&c| c > 0).count(), 1);
    }

    #[test]
    fn empty_view_yields_an_empty_artifact() {
        let dataset = PenguinDataset { penguins: vec![] };
        let artifact = build_artifact(&[], &dataset, params(20), HistogramBackend::Stacked);

        assert!(artifact.series.is_empty());
        assert_eq!(artifact.counted, 0);
        assert!(artifact.density.is_empty());
    }

    #[test]
    fn stacked_backend_carries_a_density_curve() {
        let dataset = PenguinDataset {
            penguins: (0..20)
                .map(|i| penguin(Species::Adelie, Some(3000.0 + 100.0 * i as f64)))
                .collect(),
        };
        let rows: Vec<usize> = (0..dataset.len()).collect();

        let stacked = build_artifact(&rows, &dataset, params(10), HistogramBackend::Stacked);
        let overlay = build_artifact(&rows, &dataset, params(10), HistogramBackend::Overlay);

        assert!(!stacked.density.is_empty());
        assert!(overlay.density.is_empty());
        // The curve spans the value range.
        assert_eq!(stacked.density.first().map(|p| p[0]), Some(3000.0));
        assert_eq!(stacked.density.last().map(|p| p[0]), Some(4900.0));
    }
}
