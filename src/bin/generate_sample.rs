use anyhow::{Context, Result};

use launch_dash::data::{LaunchRecord, Outcome};

/// Minimal deterministic PRNG (xoshiro256**). Seeded with a constant so every
/// run writes the same CSV.
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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// One booster generation: how many flights it flew, where, and how they went.
struct Era {
    category: &'static str,
    version_prefix: &'static str,
    flights: u32,
    sites: &'static [&'static str],
    payload_kg: (f64, f64),
    success_rate: f64,
}

const ERAS: &[Era] = &[
    Era {
        category: "v1.0",
        version_prefix: "F9 v1.0  B",
        flights: 5,
        sites: &["CCAFS LC-40"],
        payload_kg: (0.0, 700.0),
        success_rate: 0.2,
    },
    Era {
        category: "v1.1",
        version_prefix: "F9 v1.1  B",
        flights: 15,
        sites: &["CCAFS LC-40", "VAFB SLC-4E"],
        payload_kg: (500.0, 5000.0),
        success_rate: 0.35,
    },
    Era {
        category: "FT",
        version_prefix: "F9 FT B",
        flights: 20,
        sites: &["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"],
        payload_kg: (2000.0, 9600.0),
        success_rate: 0.7,
    },
    Era {
        category: "B4",
        version_prefix: "F9 B4 B",
        flights: 8,
        sites: &["KSC LC-39A", "CCAFS SLC-40", "VAFB SLC-4E"],
        payload_kg: (2000.0, 9600.0),
        success_rate: 0.6,
    },
    Era {
        category: "B5",
        version_prefix: "F9 B5 B",
        flights: 8,
        sites: &["KSC LC-39A", "CCAFS SLC-40"],
        payload_kg: (2500.0, 9600.0),
        success_rate: 0.85,
    },
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut flight_number = 0u32;
    let mut booster_serial = 1003u32;
    for era in ERAS {
        for _ in 0..era.flights {
            flight_number += 1;
            booster_serial += 1;

            let (low, high) = era.payload_kg;
            // Round to whole kilograms like the published manifests.
            let payload_mass_kg = (low + rng.next_f64() * (high - low)).round();
            let outcome = if rng.next_f64() < era.success_rate {
                Outcome::Success
            } else {
                Outcome::Failure
            };

            let mut record = LaunchRecord::new(rng.pick(era.sites), payload_mass_kg, era.category, outcome);
            record.flight_number = Some(flight_number);
            record.booster_version = Some(format!("{}{booster_serial}", era.version_prefix));
            writer.serialize(&record).context("writing launch record")?;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {flight_number} launches to {output_path}");
    Ok(())
}
