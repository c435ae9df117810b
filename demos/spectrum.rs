use std::env;
use std::f64::consts::PI;
use std::str::FromStr;

use cplxfft::{fft, moduli, normalize, Complex};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Prints the magnitude spectrum of a two-tone signal with `num_samples` samples.
///
/// Run with `RUST_LOG=cplxfft=debug` to see the padding decision.
fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    assert_eq!(args.len(), 2, "Usage {} <num_samples>", args[0]);
    let num_samples = usize::from_str(&args[1]).unwrap();

    let mut signal: Vec<Complex<f64>> = (0..num_samples)
        .map(|i| {
            let t = i as f64 / num_samples as f64;
            Complex::new((2.0 * PI * 3.0 * t).cos() + 0.5 * (2.0 * PI * 7.0 * t).sin(), 0.0)
        })
        .collect();

    fft(&mut signal).unwrap();
    normalize(&mut signal);

    for (bin, magnitude) in moduli(&signal).iter().enumerate().take(signal.len() / 2) {
        println!("{bin:>5} {magnitude:.6}");
    }
}
