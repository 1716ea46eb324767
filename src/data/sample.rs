use std::path::Path;

use crate::error::{EdaError, Result};

use super::model::{WineKind, WineTable};

/// Column names of the published dataset, in file order.
pub const FEATURE_NAMES: [&str; 11] = [
    "fixed acidity",
    "volatile acidity",
    "citric acid",
    "residual sugar",
    "chlorides",
    "free sulfur dioxide",
    "total sulfur dioxide",
    "density",
    "pH",
    "sulphates",
    "alcohol",
];

pub const QUALITY_COLUMN: &str = "quality";

/// Per-feature (mean, std dev, lower bound, decimals) roughly matching each
/// population.
fn feature_profile(kind: WineKind) -> [(f64, f64, f64, i32); 11] {
    match kind {
        WineKind::Red => [
            (8.3, 1.7, 4.6, 1),
            (0.53, 0.18, 0.12, 3),
            (0.27, 0.19, 0.0, 2),
            (2.5, 1.4, 0.9, 1),
            (0.087, 0.047, 0.012, 3),
            (15.9, 10.5, 1.0, 0),
            (46.5, 32.9, 6.0, 0),
            (0.9967, 0.0019, 0.990, 5),
            (3.31, 0.15, 2.74, 2),
            (0.66, 0.17, 0.33, 2),
            (10.4, 1.07, 8.4, 1),
        ],
        WineKind::White => [
            (6.85, 0.84, 3.8, 1),
            (0.28, 0.10, 0.08, 2),
            (0.33, 0.12, 0.0, 2),
            (6.4, 5.1, 0.6, 1),
            (0.046, 0.022, 0.009, 3),
            (35.3, 17.0, 2.0, 0),
            (138.4, 42.5, 9.0, 0),
            (0.9940, 0.0030, 0.987, 5),
            (3.19, 0.15, 2.72, 2),
            (0.49, 0.11, 0.22, 2),
            (10.5, 1.23, 8.0, 1),
        ],
    }
}

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
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
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

/// Generate a synthetic table with the real column layout.
///
/// Quality is an integer in 3..=9 driven up by alcohol and down by volatile
/// acidity, so the correlation passes have something to show.
pub fn generate_table(kind: WineKind, rows: usize, seed: u64) -> WineTable {
    let mut rng = SimpleRng::new(seed);
    let profile = feature_profile(kind);
    let mut values: Vec<Vec<f64>> = vec![Vec::with_capacity(rows); FEATURE_NAMES.len() + 1];

    for _ in 0..rows {
        let mut z_alcohol = 0.0;
        let mut z_volatile = 0.0;
        for (col, &(mean, sd, floor, decimals)) in profile.iter().enumerate() {
            let z = rng.gauss(0.0, 1.0);
            match FEATURE_NAMES[col] {
                "alcohol" => z_alcohol = z,
                "volatile acidity" => z_volatile = z,
                _ => {}
            }
            let v = (mean + sd * z).max(floor);
            values[col].push(round_to(v, decimals));
        }
        let score = 5.8 + 0.6 * z_alcohol - 0.35 * z_volatile + rng.gauss(0.0, 0.55);
        values[FEATURE_NAMES.len()].push(score.round().clamp(3.0, 9.0));
    }

    let columns = FEATURE_NAMES
        .iter()
        .copied()
        .chain(std::iter::once(QUALITY_COLUMN))
        .map(String::from)
        .collect();

    WineTable::new(kind, columns, values).expect("every generated column holds `rows` values")
}

/// Write a table in the dataset's on-disk format: quoted header, `delimiter`
/// separated, quality written as an integer.
pub fn write_table(table: &WineTable, path: &Path, delimiter: u8) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let to_csv = |source: csv::Error| EdaError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(csv::QuoteStyle::Never)
        .from_path(path)
        .map_err(to_csv)?;

    let header: Vec<String> = table
        .column_names()
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect();
    writer.write_record(&header).map_err(to_csv)?;

    let quality_idx = table.column_index(QUALITY_COLUMN);
    for row in 0..table.len() {
        let record: Vec<String> = table
            .columns()
            .enumerate()
            .map(|(i, (_, col))| {
                if Some(i) == quality_idx {
                    format!("{}", col[row] as i64)
                } else {
                    format!("{}", col[row])
                }
            })
            .collect();
        writer.write_record(&record).map_err(to_csv)?;
    }
    writer.flush()?;
    Ok(())
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_table_has_real_layout() {
        let t = generate_table(WineKind::Red, 50, 42);
        assert_eq!(t.len(), 50);
        assert_eq!(t.width(), 12);
        assert_eq!(t.column_names().last().map(String::as_str), Some("quality"));
        assert_eq!(t.feature_names(QUALITY_COLUMN), FEATURE_NAMES);
    }

    #[test]
    fn quality_is_bounded_integer() {
        let t = generate_table(WineKind::White, 500, 7);
        for &q in t.column("quality").unwrap() {
            assert!((3.0..=9.0).contains(&q));
            assert_eq!(q.fract(), 0.0);
        }
    }

    #[test]
    fn same_seed_same_table() {
        assert_eq!(
            generate_table(WineKind::Red, 20, 1),
            generate_table(WineKind::Red, 20, 1)
        );
        assert_ne!(
            generate_table(WineKind::Red, 20, 1),
            generate_table(WineKind::Red, 20, 2)
        );
    }

    #[test]
    fn density_keeps_its_precision() {
        let t = generate_table(WineKind::Red, 10, 3);
        let density = t.column("density").unwrap();
        for &d in density {
            assert!(d > 0.98 && d < 1.01, "{d}");
        }
        assert!(density.iter().any(|d| (d * 100.0).fract().abs() > 1e-9));
    }
}
