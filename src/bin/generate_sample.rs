use std::f64::consts::PI;
use std::io::{BufWriter, Write};

/// Gaussian bump used for the QRS-like pulses.
fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Small seedable PRNG (xoshiro256**), enough for reproducible test noise
/// without pulling in `rand`.
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    /// Expand the seed into the full state with splitmix64.
    fn new(seed: u64) -> Self {
        let mut x = seed;
        let state = std::array::from_fn(|_| {
            x = x.wrapping_add(0x9e3779b97f4a7c15);
            let mut z = x;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            z ^ (z >> 31)
        });
        SimpleRng { state }
    }

    fn next_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = self.state;
        let result = s1.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = s1 << 17;
        self.state = [
            s0 ^ s3 ^ s1,
            s1 ^ s2 ^ s0,
            s2 ^ s0 ^ t,
            (s3 ^ s1).rotate_left(45),
        ];
        result
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Normal deviate via Box-Muller.
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// Synthetic ECG beat train: one QRS-like bump per beat plus a low T-wave.
fn clean_ecg(t: f64, beat_hz: f64) -> f64 {
    let phase = (t * beat_hz).fract() / beat_hz;
    gaussian(phase, 0.2, 0.012, 1.0) + gaussian(phase, 0.35, 0.05, 0.18)
}

fn main() {
    const FS_HZ: f64 = 1000.0;
    const SECONDS: f64 = 5.0;
    const MAINS_HZ: f64 = 50.0;
    const MAINS_AMPLITUDE: f64 = 0.4;
    const SETTLE_TAU: f64 = 0.6;

    let mut rng = SimpleRng::new(42);
    let n = (FS_HZ * SECONDS) as usize;

    let output_path = "ecg_filtered.dat";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = BufWriter::new(file);

    for i in 0..n {
        let t = i as f64 / FS_HZ;
        let clean = clean_ecg(t, 1.2);
        let mains = MAINS_AMPLITUDE * (2.0 * PI * MAINS_HZ * t).sin();
        let noise = mains + rng.gauss(0.0, 0.02);

        // The fake adaptive stage converges onto the interference with a
        // first-order settle, like the real filter's weight trajectory.
        let settle = 1.0 - (-t / SETTLE_TAU).exp();
        let remover = noise * settle;
        let original = clean + noise;
        let filtered = original - remover;

        let w1 = 0.8 * settle + rng.gauss(0.0, 0.004);
        let w2 = 0.3 * settle + rng.gauss(0.0, 0.002);

        writeln!(
            writer,
            "{filtered:.6} {original:.6} {remover:.6} {w1:.6} {w2:.6}"
        )
        .expect("Failed to write sample row");
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {n} samples (5 channels at {FS_HZ} Hz) to {output_path}");
}
