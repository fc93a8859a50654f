use std::collections::BTreeSet;

use super::model::{Island, PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Filter selection – which species and islands are currently chosen
// ---------------------------------------------------------------------------

/// The user's current species / island choice.
///
/// Mutation goes through the methods below so that every effective change
/// bumps `version`; downstream caches compare versions instead of sets.
#[derive(Debug, Clone)]
pub struct FilterSelection {
    species: BTreeSet<Species>,
    islands: BTreeSet<Island>,
    version: u64,
}

impl Default for FilterSelection {
    /// Everything selected, matching the initial state of the checkboxes.
    fn default() -> Self {
        Self {
            species: Species::ALL.into_iter().collect(),
            islands: Island::ALL.into_iter().collect(),
            version: 0,
        }
    }
}

impl FilterSelection {
    pub fn species(&self) -> &BTreeSet<Species> {
        &self.species
    }

    pub fn islands(&self) -> &BTreeSet<Island> {
        &self.islands
    }

    /// Monotonic change counter; bumped by every call that alters a set.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn toggle_species(&mut self, species: Species) {
        if !self.species.remove(&species) {
            self.species.insert(species);
        }
        self.version += 1;
    }

    pub fn toggle_island(&mut self, island: Island) {
        if !self.islands.remove(&island) {
            self.islands.insert(island);
        }
        self.version += 1;
    }

    pub fn select_all_species(&mut self) {
        if self.species.len() != Species::ALL.len() {
            self.species = Species::ALL.into_iter().collect();
            self.version += 1;
        }
    }

    pub fn clear_species(&mut self) {
        if !self.species.is_empty() {
            self.species.clear();
            self.version += 1;
        }
    }

    pub fn select_all_islands(&mut self) {
        if self.islands.len() != Island::ALL.len() {
            self.islands = Island::ALL.into_iter().collect();
            self.version += 1;
        }
    }

    pub fn clear_islands(&mut self) {
        if !self.islands.is_empty() {
            self.islands.clear();
            self.version += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Filter predicate
// ---------------------------------------------------------------------------

/// Return indices of penguins matching the current selection, in dataset
/// order.
///
/// An empty set on either axis yields an empty result: deselecting every
/// species (or every island) means "show nothing", not "show everything".
pub fn filtered_indices(dataset: &PenguinDataset, selection: &FilterSelection) -> Vec<usize> {
    if selection.species().is_empty() || selection.islands().is_empty() {
        return Vec::new();
    }

    dataset
        .penguins
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            selection.species().contains(&p.species) && selection.islands().contains(&p.island)
        })
        .map(|(i, _)| i)
        .collect()
}
