use crate::color::ColorMap;
use crate::data::filter::FilterSelection;
use crate::data::model::{NumericAttribute, PenguinDataset};
use crate::data::view::FilteredView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI-independent state: the immutable dataset, the user's filter
/// selection, the shared filtered view, and per-chart parameters.
pub struct AppState {
    /// Loaded once at startup; never mutated afterwards.
    pub dataset: PenguinDataset,

    /// Species / island choice, owned by the sidebar widgets.
    pub selection: FilterSelection,

    /// Memoized filter result every display reads from.
    pub view: FilteredView,

    /// Fixed per-species colours shared by charts and the filter panel.
    pub colors: ColorMap,

    /// Which numeric column both histograms bucket.
    pub hist_attribute: NumericAttribute,

    /// Bin count for the overlay histogram (free-form numeric input).
    pub overlay_bins: i32,

    /// Bin count for the stacked histogram (bounded slider).
    pub stacked_bins: i32,
}

impl AppState {
    pub fn new(dataset: PenguinDataset) -> Self {
        Self {
            dataset,
            selection: FilterSelection::default(),
            view: FilteredView::default(),
            colors: ColorMap::new(),
            hist_attribute: NumericAttribute::FlipperLength,
            overlay_bins: 20,
            stacked_bins: 50,
        }
    }

    /// Take the frame's read of the filtered view. Called after the sidebar
    /// may have mutated the selection and before any display node runs, so
    /// all of them observe the same snapshot of both selection sets.
    pub fn refresh(&mut self) {
        self.view.read(&self.dataset, &self.selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Island, Penguin, Species};

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

    fn state() -> AppState {
        AppState::new(PenguinDataset {
            penguins: vec![
                penguin(Species::Adelie, Island::Torgersen),
                penguin(Species::Gentoo, Island::Biscoe),
                penguin(Species::Adelie, Island::Biscoe),
                penguin(Species::Gentoo, Island::Biscoe),
            ],
        })
    }

    #[test]
    fn selecting_one_species_narrows_the_view_to_it() {
        let mut state = state();
        state.selection.clear_species();
        state.selection.toggle_species(Species::Adelie);
        state.refresh();

        let rows = state.view.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows
            .iter()
            .all(|&i| state.dataset.penguins[i].species == Species::Adelie));
    }

    #[test]
    fn deselecting_every_island_empties_the_view() {
        let mut state = state();
        state.selection.select_all_species();
        state.selection.clear_islands();
        state.refresh();

        assert!(state.view.rows().is_empty());
    }

    #[test]
    fn redundant_refreshes_do_not_recompute() {
        let mut state = state();
        state.refresh();
        state.refresh();
        state.refresh();

        assert_eq!(state.view.recomputes(), 1);
    }
}
