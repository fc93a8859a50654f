use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Categorical attributes – closed enumerations
// ---------------------------------------------------------------------------

/// Error produced when a categorical cell holds a value outside the fixed
/// enumeration for its column. Only reachable at the load boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {column} value: {value:?}")]
pub struct ParseCategoryError {
    pub column: &'static str,
    pub value: String,
}

/// Penguin species. The dataset enumerates exactly these three.
/// `Ord` so the values can live in `BTreeSet` selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Adelie,
    Chinstrap,
    Gentoo,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Chinstrap, Species::Gentoo];

    pub fn label(self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Chinstrap => "Chinstrap",
            Species::Gentoo => "Gentoo",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Species {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Adelie" => Ok(Species::Adelie),
            "Chinstrap" => Ok(Species::Chinstrap),
            "Gentoo" => Ok(Species::Gentoo),
            other => Err(ParseCategoryError {
                column: "species",
                value: other.to_string(),
            }),
        }
    }
}

/// Island a penguin was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Island {
    Torgersen,
    Biscoe,
    Dream,
}

impl Island {
    pub const ALL: [Island; 3] = [Island::Torgersen, Island::Biscoe, Island::Dream];

    pub fn label(self) -> &'static str {
        match self {
            Island::Torgersen => "Torgersen",
            Island::Biscoe => "Biscoe",
            Island::Dream => "Dream",
        }
    }
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Island {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Torgersen" => Ok(Island::Torgersen),
            "Biscoe" => Ok(Island::Biscoe),
            "Dream" => Ok(Island::Dream),
            other => Err(ParseCategoryError {
                column: "island",
                value: other.to_string(),
            }),
        }
    }
}

/// Recorded sex of a penguin. Missing in some rows, hence `Option<Sex>`
/// on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sex {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(ParseCategoryError {
                column: "sex",
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric attributes – the four measurement columns
// ---------------------------------------------------------------------------

/// The numeric measurement columns a histogram can be drawn over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericAttribute {
    BillLength,
    BillDepth,
    FlipperLength,
    BodyMass,
}

impl NumericAttribute {
    pub const ALL: [NumericAttribute; 4] = [
        NumericAttribute::BillLength,
        NumericAttribute::BillDepth,
        NumericAttribute::FlipperLength,
        NumericAttribute::BodyMass,
    ];

    /// Column name as it appears in the dataset header.
    pub fn column_name(self) -> &'static str {
        match self {
            NumericAttribute::BillLength => "bill_length_mm",
            NumericAttribute::BillDepth => "bill_depth_mm",
            NumericAttribute::FlipperLength => "flipper_length_mm",
            NumericAttribute::BodyMass => "body_mass_g",
        }
    }

    /// Human-readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            NumericAttribute::BillLength => "Bill Length (mm)",
            NumericAttribute::BillDepth => "Bill Depth (mm)",
            NumericAttribute::FlipperLength => "Flipper Length (mm)",
            NumericAttribute::BodyMass => "Body Mass (g)",
        }
    }
}

impl fmt::Display for NumericAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the dataset
// ---------------------------------------------------------------------------

/// A single observed penguin (one row of the source table). Measurements
/// may be missing for individual rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Penguin {
    pub species: Species,
    pub island: Island,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    pub sex: Option<Sex>,
}

impl Penguin {
    /// Value of the given numeric column, `None` when missing.
    pub fn numeric(&self, attribute: NumericAttribute) -> Option<f64> {
        match attribute {
            NumericAttribute::BillLength => self.bill_length_mm,
            NumericAttribute::BillDepth => self.bill_depth_mm,
            NumericAttribute::FlipperLength => self.flipper_length_mm,
            NumericAttribute::BodyMass => self.body_mass_g,
        }
    }
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full loaded dataset. Constructed once at startup and never mutated
/// afterwards; every reader gets a shared reference.
#[derive(Debug, Clone)]
pub struct PenguinDataset {
    /// All penguins (rows), in file order.
    pub penguins: Vec<Penguin>,
}

impl PenguinDataset {
    /// Number of penguins.
    pub fn len(&self) -> usize {
        self.penguins.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.penguins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_round_trips_through_label() {
        for species in Species::ALL {
            assert_eq!(species.label().parse::<Species>(), Ok(species));
        }
    }

    #[test]
    fn unknown_species_is_an_error() {
        let err = "Emperor".parse::<Species>().unwrap_err();
        assert_eq!(err.column, "species");
        assert_eq!(err.value, "Emperor");
    }

    #[test]
    fn numeric_accessor_picks_the_right_column() {
        let penguin = Penguin {
            species: Species::Adelie,
            island: Island::Dream,
            bill_length_mm: Some(39.1),
            bill_depth_mm: Some(18.7),
            flipper_length_mm: None,
            body_mass_g: Some(3750.0),
            sex: Some(Sex::Male),
        };

        assert_eq!(penguin.numeric(NumericAttribute::BillLength), Some(39.1));
        assert_eq!(penguin.numeric(NumericAttribute::FlipperLength), None);
        assert_eq!(penguin.numeric(NumericAttribute::BodyMass), Some(3750.0));
    }
}
