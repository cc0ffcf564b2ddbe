use fitsio::FitsFile;
use fitsio::tables::{ColumnDataType, ColumnDescription};

/// TESS short cadence: 2 minutes, in days.
const CADENCE_DAYS: f64 = 2.0 / 1440.0;
/// First timestamp, BTJD (BJD - 2457000).
const START_BTJD: f64 = 1325.2932;
const N_SAMPLES: usize = 9000;

const BASELINE_FLUX: f64 = 12_000.0;
const NOISE_SIGMA: f64 = 18.0;

const PERIOD_DAYS: f64 = 3.289;
const TRANSIT_DURATION_DAYS: f64 = 0.13;
const TRANSIT_DEPTH: f64 = 0.011;
const FIRST_MIDTRANSIT: f64 = START_BTJD + 1.1;

/// Relative flux of a box-shaped transit model at time `t`.
fn transit_model(t: f64) -> f64 {
    let phase = (t - FIRST_MIDTRANSIT).rem_euclid(PERIOD_DAYS);
    let from_center = phase.min(PERIOD_DAYS - phase);
    if from_center < TRANSIT_DURATION_DAYS / 2.0 {
        1.0 - TRANSIT_DEPTH
    } else {
        1.0
    }
}

/// Samples the spacecraft would not deliver: a downlink gap in the middle of
/// the sector and a short dropout every ~2.5 days (momentum dumps).
fn in_gap(i: usize) -> bool {
    let downlink = (N_SAMPLES / 2)..(N_SAMPLES / 2 + 700);
    downlink.contains(&i) || i % 1800 < 5
}

/// Deterministic photometric noise source: xoshiro256** seeded through
/// SplitMix64, with Box-Muller pairs so every second draw is free.
struct NoiseRng {
    s: [u64; 4],
    spare: Option<f64>,
}

impl NoiseRng {
    fn seeded(seed: u64) -> Self {
        let mut z = seed;
        let s = std::array::from_fn(|_| {
            z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut x = z;
            x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            x ^ (x >> 31)
        });
        NoiseRng { s, spare: None }
    }

    fn next_u64(&mut self) -> u64 {
        let [a, b, c, d] = self.s;
        let out = b.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let c = c ^ a;
        let d = d ^ b;
        self.s = [a ^ d, b ^ c, c ^ (b << 17), d.rotate_left(45)];
        out
    }

    /// Uniform in (0, 1].
    fn unit(&mut self) -> f64 {
        ((self.next_u64() >> 11) + 1) as f64 / (1u64 << 53) as f64
    }

    fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        let r = (-2.0 * self.unit().ln()).sqrt();
        let theta = std::f64::consts::TAU * self.unit();
        self.spare = Some(r * theta.sin());
        r * theta.cos()
    }

    /// One flux reading: `level` plus Gaussian noise, at column width.
    fn flux_reading(&mut self, level: f64, sigma: f64) -> f32 {
        (level + sigma * self.standard_normal()) as f32
    }
}

fn main() {
    let mut rng = NoiseRng::seeded(42);

    let times: Vec<f64> = (0..N_SAMPLES)
        .map(|i| START_BTJD + i as f64 * CADENCE_DAYS)
        .collect();

    let fluxes: Vec<f32> = times
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            if in_gap(i) {
                f32::NAN
            } else {
                rng.flux_reading(BASELINE_FLUX * transit_model(t), NOISE_SIGMA)
            }
        })
        .collect();
    let n_missing = fluxes.iter().filter(|f| f.is_nan()).count();

    let output_path = "sample_lc.fits";
    let mut fptr = FitsFile::create(output_path)
        .overwrite()
        .open()
        .expect("Failed to create output file");

    let columns = [
        ColumnDescription::new("TIME")
            .with_type(ColumnDataType::Double)
            .create()
            .expect("Invalid TIME column"),
        ColumnDescription::new("PDCSAP_FLUX")
            .with_type(ColumnDataType::Float)
            .create()
            .expect("Invalid PDCSAP_FLUX column"),
    ];
    let hdu = fptr
        .create_table("LIGHTCURVE".to_string(), &columns)
        .expect("Failed to create LIGHTCURVE table");
    hdu.write_col(&mut fptr, "TIME", &times)
        .expect("Failed to write TIME");
    hdu.write_col(&mut fptr, "PDCSAP_FLUX", &fluxes)
        .expect("Failed to write PDCSAP_FLUX");
    hdu.write_key(&mut fptr, "OBJECT", "SYNTHETIC")
        .expect("Failed to write OBJECT key");

    println!(
        "Wrote {N_SAMPLES} samples ({n_missing} NaN, transit every {PERIOD_DAYS} d) to {output_path}"
    );
}
