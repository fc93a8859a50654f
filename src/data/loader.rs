use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{Penguin, PenguinDataset, Sex};

/// The dataset that ships with the application.
/// Regenerate with `cargo run --bin generate_penguins`.
const BUNDLED_CSV: &str = include_str!("../../assets/penguins.csv");

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse the bundled penguin dataset. Called once at startup; the result
/// is immutable for the lifetime of the process.
pub fn load_bundled() -> Result<PenguinDataset> {
    let dataset = parse_csv(BUNDLED_CSV).context("parsing bundled penguins.csv")?;
    log::info!("Loaded {} penguins from the bundled dataset", dataset.len());
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One raw CSV row before typed conversion. Every cell arrives as text so
/// the `NA` missing-value marker can be handled uniformly.
#[derive(Debug, Deserialize)]
struct RawRecord {
    species: String,
    island: String,
    bill_length_mm: String,
    bill_depth_mm: String,
    flipper_length_mm: String,
    body_mass_g: String,
    sex: String,
}

fn parse_csv(text: &str) -> Result<PenguinDataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut penguins = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;

        let species = raw
            .species
            .parse()
            .with_context(|| format!("row {row_no}: species"))?;
        let island = raw
            .island
            .parse()
            .with_context(|| format!("row {row_no}: island"))?;

        penguins.push(Penguin {
            species,
            island,
            bill_length_mm: parse_measurement(&raw.bill_length_mm, row_no, "bill_length_mm")?,
            bill_depth_mm: parse_measurement(&raw.bill_depth_mm, row_no, "bill_depth_mm")?,
            flipper_length_mm: parse_measurement(
                &raw.flipper_length_mm,
                row_no,
                "flipper_length_mm",
            )?,
            body_mass_g: parse_measurement(&raw.body_mass_g, row_no, "body_mass_g")?,
            sex: parse_sex(&raw.sex, row_no)?,
        });
    }

    Ok(PenguinDataset { penguins })
}

/// `NA` and empty cells mark a missing measurement.
fn parse_measurement(cell: &str, row: usize, col: &str) -> Result<Option<f64>> {
    if is_missing(cell) {
        return Ok(None);
    }
    cell.trim()
        .parse::<f64>()
        .map(Some)
        .with_context(|| format!("row {row}, {col}: {cell:?} is not a number"))
}

fn parse_sex(cell: &str, row: usize) -> Result<Option<Sex>> {
    if is_missing(cell) {
        return Ok(None);
    }
    cell.trim()
        .parse()
        .map(Some)
        .with_context(|| format!("row {row}: sex"))
}

fn is_missing(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || cell == "NA"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Island, Species};

    #[test]
    fn parses_typed_rows_and_missing_markers() {
        let csv = "\
species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex
Adelie,Torgersen,39.1,18.7,181,3750,male
Gentoo,Biscoe,NA,NA,NA,NA,NA
Chinstrap,Dream,46.5,17.9,192,3500,female
";
        let dataset = parse_csv(csv).unwrap();
        assert_eq!(dataset.len(), 3);

        let first = &dataset.penguins[0];
        assert_eq!(first.species, Species::Adelie);
        assert_eq!(first.island, Island::Torgersen);
        assert_eq!(first.bill_length_mm, Some(39.1));
        assert_eq!(first.sex, Some(Sex::Male));

        let second = &dataset.penguins[1];
        assert_eq!(second.species, Species::Gentoo);
        assert_eq!(second.body_mass_g, None);
        assert_eq!(second.sex, None);
    }

    #[test]
    fn empty_cell_also_means_missing() {
        let csv = "\
species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex
Adelie,Dream,36.9,19.2,187,3900,
";
        let dataset = parse_csv(csv).unwrap();
        assert_eq!(dataset.penguins[0].sex, None);
        assert_eq!(dataset.penguins[0].flipper_length_mm, Some(187.0));
    }

    #[test]
    fn unknown_category_fails_with_row_context() {
        let csv = "\
species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex
Adelie,Torgersen,39.1,18.7,181,3750,male
Emperor,Dream,40.0,18.0,190,4000,male
";
        let err = parse_csv(csv).unwrap_err();
        assert!(format!("{err:#}").contains("row 1"));
    }

    #[test]
    fn non_numeric_measurement_fails_with_column_context() {
        let csv = "\
species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex
Adelie,Torgersen,soon,18.7,181,3750,male
";
        let err = parse_csv(csv).unwrap_err();
        assert!(format!("{err:#}").contains("bill_length_mm"));
    }

    #[test]
    fn bundled_dataset_loads() {
        let dataset = load_bundled().unwrap();
        assert_eq!(dataset.len(), 344);

        let count = |species: Species| {
            dataset
                .penguins
                .iter()
                .filter(|p| p.species == species)
                .count()
        };
        assert_eq!(count(Species::Adelie), 152);
        assert_eq!(count(Species::Chinstrap), 68);
        assert_eq!(count(Species::Gentoo), 124);

        let missing_mass = dataset
            .penguins
            .iter()
            .filter(|p| p.body_mass_g.is_none())
            .count();
        let missing_sex = dataset.penguins.iter().filter(|p| p.sex.is_none()).count();
        assert_eq!(missing_mass, 2);
        assert_eq!(missing_sex, 8);
    }
}
