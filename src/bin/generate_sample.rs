use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};

const LEAGUES: [(&str, &[&str]); 4] = [
    (
        "EPL",
        &["Arsenal", "Chelsea", "Liverpool", "Man City", "Newcastle", "Spurs", "Villa", "Brighton"],
    ),
    (
        "La Liga",
        &["Barcelona", "Real Madrid", "Atletico", "Sevilla", "Betis", "Girona"],
    ),
    (
        "Bundesliga",
        &["Bayern", "Dortmund", "Leipzig", "Leverkusen", "Stuttgart", "Frankfurt"],
    ),
    (
        "Serie A",
        &["Inter", "Milan", "Juventus", "Napoli", "Roma", "Lazio"],
    ),
];

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

    /// Normal sample clipped at zero and rounded to two decimals.
    fn measure(&mut self, mean: f64, std_dev: f64) -> f64 {
        (self.gauss(mean, std_dev).max(0.0) * 100.0).round() / 100.0
    }
}

fn main() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "GW8.xlsx".to_string());
    let mut rng = SimpleRng::new(42);

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    // Column A mimics the unnamed index pandas writes with `to_excel()`.
    let headers = ["fixture", "league", "match_xg", "ex_bookings", "ex_corners"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16 + 1, *header, &bold)?;
    }

    let mut row = 1u32;
    for (league, teams) in LEAGUES {
        // Pair neighbours: 0 v 1, 2 v 3, ...
        for pair in teams.chunks(2) {
            let [home, away] = pair else { continue };
            sheet.write_number(row, 0, (row - 1) as f64)?;
            sheet.write_string(row, 1, format!("{home} v {away}"))?;
            sheet.write_string(row, 2, league)?;
            sheet.write_number(row, 3, rng.measure(2.8, 0.9))?;
            sheet.write_number(row, 4, rng.measure(3.9, 1.2))?;
            sheet.write_number(row, 5, rng.measure(10.0, 1.8))?;
            row += 1;
        }
    }

    workbook
        .save(&path)
        .with_context(|| format!("writing {path}"))?;
    println!("Wrote {} fixtures to {path}", row - 1);
    Ok(())
}
