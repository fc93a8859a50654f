/// Data layer: core types, the bundled-dataset loader, filtering, and the
/// memoized filtered view.
///
/// Architecture:
/// ```text
///  assets/penguins.csv (bundled)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → PenguinDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ PenguinDataset │  Vec<Penguin>, immutable after load
///   └────────────────┘
///        │
///        ▼              FilterSelection (species/island sets, versioned)
///   ┌──────────┐            │
///   │  filter   │ ◄─────────┘
///   └──────────┘   species ∧ island predicate → indices
///        │
///        ▼
///   ┌──────────────┐
///   │ FilteredView │  memoized indices every display reads
///   └──────────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
