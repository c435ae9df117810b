//! FFT Butterfly and Scaling Kernels
//!
//! Hot loops are compiled for several target feature sets and dispatched at runtime.
use num_traits::Float;

use crate::complex::Complex;

/// One decimation-in-time merge stage over every block of `dist << 1` elements.
///
/// Within each block the lower half `x0` and upper half `x1` are combined pairwise as
/// `(x0 + w * x1, x0 - w * x1)`, where `w` starts at `1` for every block and is rotated by
/// the stage's principal root of unity `wm` after each pair.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn butterfly_stage<T: Float>(signal: &mut [Complex<T>], wm: Complex<T>, dist: usize) {
    let chunk_size = dist << 1;

    signal.chunks_exact_mut(chunk_size).for_each(|chunk| {
        let (s0, s1) = chunk.split_at_mut(dist);
        let mut w = Complex::one();

        s0.iter_mut().zip(s1.iter_mut()).for_each(|(x0, x1)| {
            let t = w * *x1;
            let u = *x0;
            *x0 = u + t;
            *x1 = u - t;
            w *= wm;
        });
    });
}

/// Divides every element of `signal` by `divisor`
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn scale_down<T: Float>(signal: &mut [Complex<T>], divisor: T) {
    signal.iter_mut().for_each(|z| *z = *z / divisor);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_point_stage() {
        let mut signal = vec![
            Complex::new(1.0, 2.0),
            Complex::new(3.0, 4.0),
            Complex::new(-1.0, 0.5),
            Complex::new(0.0, 0.0),
        ];

        // With dist == 1 the twiddle is always 1, so each pair becomes (a + b, a - b)
        butterfly_stage(&mut signal, Complex::new(-1.0, 0.0), 1);

        assert_eq!(
            signal,
            vec![
                Complex::new(4.0, 6.0),
                Complex::new(-2.0, -2.0),
                Complex::new(-1.0, 0.5),
                Complex::new(-1.0, 0.5),
            ]
        );
    }

    #[test]
    fn four_point_stage() {
        // Second stage of a 4-point FFT: wm = -i rotates the second pair
        let mut signal = vec![
            Complex::new(1.0f32, 0.0),
            Complex::new(0.0, 0.0),
            Complex::new(0.0, 0.0),
            Complex::new(1.0, 0.0),
        ];
        butterfly_stage(&mut signal, Complex::new(0.0, -1.0), 2);

        assert_eq!(
            signal,
            vec![
                Complex::new(1.0, 0.0),
                Complex::new(0.0, -1.0),
                Complex::new(1.0, 0.0),
                Complex::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn scaling() {
        let mut signal = vec![Complex::new(2.0, -4.0), Complex::new(0.0, 8.0)];
        scale_down(&mut signal, 2.0);
        assert_eq!(signal, vec![Complex::new(1.0, -2.0), Complex::new(0.0, 4.0)]);
    }
}
