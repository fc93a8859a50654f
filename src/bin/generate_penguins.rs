/// Regenerates `assets/penguins.csv`: a deterministic, palmerpenguins-shaped
/// sample dataset. Species counts, island assignment, and the per-species
/// measurement distributions mirror the published summary statistics.
struct SpeciesSpec {
    name: &'static str,
    count: usize,
    islands: &'static [&'static str],
    bill_length: (f64, f64),
    bill_depth: (f64, f64),
    flipper_length: (f64, f64),
    body_mass: (f64, f64),
}

const SPECIES: [SpeciesSpec; 3] = [
    SpeciesSpec {
        name: "Adelie",
        count: 152,
        islands: &["Torgersen", "Biscoe", "Dream"],
        bill_length: (38.8, 2.66),
        bill_depth: (18.35, 1.22),
        flipper_length: (190.0, 6.54),
        body_mass: (3700.0, 458.0),
    },
    SpeciesSpec {
        name: "Chinstrap",
        count: 68,
        islands: &["Dream"],
        bill_length: (48.8, 3.34),
        bill_depth: (18.42, 1.14),
        flipper_length: (195.8, 7.13),
        body_mass: (3733.0, 384.0),
    },
    SpeciesSpec {
        name: "Gentoo",
        count: 124,
        islands: &["Biscoe"],
        bill_length: (47.5, 3.08),
        bill_depth: (14.98, 0.98),
        flipper_length: (217.2, 6.48),
        body_mass: (5076.0, 504.0),
    },
];

/// Rows with every measurement missing: (species, index within species).
const FULLY_MISSING: [(&str, usize); 2] = [("Adelie", 3), ("Gentoo", 75)];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "assets/penguins.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "species",
            "island",
            "bill_length_mm",
            "bill_depth_mm",
            "flipper_length_mm",
            "body_mass_g",
            "sex",
        ])
        .expect("Failed to write header");

    let mut total = 0usize;
    for spec in &SPECIES {
        for i in 0..spec.count {
            let island = spec.islands[i % spec.islands.len()];

            if FULLY_MISSING.contains(&(spec.name, i)) {
                writer
                    .write_record([spec.name, island, "NA", "NA", "NA", "NA", "NA"])
                    .expect("Failed to write row");
                total += 1;
                continue;
            }

            let bill_length = format!("{:.1}", rng.gauss(spec.bill_length.0, spec.bill_length.1));
            let bill_depth = format!("{:.1}", rng.gauss(spec.bill_depth.0, spec.bill_depth.1));
            let flipper =
                format!("{}", (rng.gauss(spec.flipper_length.0, spec.flipper_length.1) + 0.5) as i64);
            // Body mass comes in 25 g steps, like the field data.
            let mass = format!(
                "{}",
                ((rng.gauss(spec.body_mass.0, spec.body_mass.1) / 25.0 + 0.5) as i64) * 25
            );
            let mut sex = if rng.next_f64() < 0.5 { "male" } else { "female" };
            if (i * 7 + spec.name.len()) % 45 == 2 {
                sex = "NA";
            }

            writer
                .write_record([
                    spec.name,
                    island,
                    bill_length.as_str(),
                    bill_depth.as_str(),
                    flipper.as_str(),
                    mass.as_str(),
                    sex,
                ])
                .expect("Failed to write row");
            total += 1;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {total} penguins to {output_path}");
}
