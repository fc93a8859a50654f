use super::filter::{filtered_indices, FilterSelection};
use super::model::PenguinDataset;

// ---------------------------------------------------------------------------
// Filtered view – the memoized filter result every display reads
// ---------------------------------------------------------------------------

/// Caches the most recent [`filtered_indices`] result, keyed by the
/// selection's version counter.
///
/// A read with an unchanged selection returns the cache untouched; a read
/// after any selection change recomputes exactly once. Displays key their
/// own caches off [`FilteredView::version`], which moves only when the
/// cached result does.
#[derive(Debug, Default)]
pub struct FilteredView {
    indices: Vec<usize>,
    /// Selection version the cache was computed from.
    seen: Option<u64>,
    /// Version of the cached result; bumped on every actual recompute.
    version: u64,
    /// Total number of recomputations, observable in tests.
    recomputes: u64,
}

impl FilteredView {
    /// Current filtered indices, recomputing first if the selection has
    /// changed since the last read.
    pub fn read(&mut self, dataset: &PenguinDataset, selection: &FilterSelection) -> &[usize] {
        if self.seen != Some(selection.version()) {
            self.indices = filtered_indices(dataset, selection);
            self.seen = Some(selection.version());
            self.version += 1;
            self.recomputes += 1;
        }
        &self.indices
    }

    /// Last computed indices, without checking for staleness. Only
    /// meaningful after a [`FilteredView::read`] in the same frame.
    pub fn rows(&self) -> &[usize] {
        &self.indices
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Island, Penguin, PenguinDataset, Species};

    fn penguin(species: Species, island: Island) -> Penguin {
        Penguin {
            species,
            island,
            bill_length_mm: None,
            bill_depth_mm: None,
            flipper_length_mm: None,
            body_mass_g: None,
            sex: None,
        }
    }

    fn dataset() -> PenguinDataset {
        PenguinDataset {
            penguins: vec![
                penguin(Species::Adelie, Island::Torgersen),
                penguin(Species::Gentoo, Island::Biscoe),
                penguin(Species::Chinstrap, Island::Dream),
            ],
        }
    }

    #[test]
    fn repeated_reads_compute_once() {
        let dataset = dataset();
        let selection = FilterSelection::default();
        let mut view = FilteredView::default();

        let first = view.read(&dataset, &selection).to_vec();
        let second = view.read(&dataset, &selection).to_vec();

        assert_eq!(first, second);
        assert_eq!(view.recomputes(), 1);
    }

    #[test]
    fn selection_change_recomputes_exactly_once() {
        let dataset = dataset();
        let mut selection = FilterSelection::default();
        let mut view = FilteredView::default();

        view.read(&dataset, &selection);
        assert_eq!(view.recomputes(), 1);

        selection.toggle_species(Species::Gentoo);

        // Many readers after one change: still a single recompute.
        for _ in 0..5 {
            view.read(&dataset, &selection);
        }
        assert_eq!(view.recomputes(), 2);
        assert_eq!(view.rows(), &[0, 2]);
    }

    #[test]
    fn mutation_alone_is_lazy() {
        let dataset = dataset();
        let mut selection = FilterSelection::default();
        let mut view = FilteredView::default();

        view.read(&dataset, &selection);
        selection.clear_islands();
        selection.select_all_islands();

        // Nothing recomputes until the next read.
        assert_eq!(view.recomputes(), 1);
        view.read(&dataset, &selection);
        assert_eq!(view.recomputes(), 2);
    }

    #[test]
    fn result_version_moves_only_on_recompute() {
        let dataset = dataset();
        let mut selection = FilterSelection::default();
        let mut view = FilteredView::default();

        view.read(&dataset, &selection);
        let v1 = view.version();
        view.read(&dataset, &selection);
        assert_eq!(view.version(), v1);

        selection.toggle_island(Island::Dream);
        view.read(&dataset, &selection);
        assert_eq!(view.version(), v1 + 1);
    }
}
