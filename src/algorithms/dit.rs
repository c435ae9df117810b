//! Decimation-in-Time (DIT) FFT Implementation
//!
//! The DIT algorithm decomposes the DFT from small to large sub-problems. Input is processed in
//! bit-reversed order, and output is produced in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. Apply bit-reversal to input data
//! 2. Start with small butterflies (size 2)
//! 3. Work up to stage `log(N)`, where `N` is the size of the input.
//!
use num_traits::{Float, FloatConst};

use crate::algorithms::bit_reverse::bit_reverse_permutation;
use crate::complex::Complex;
use crate::kernels::butterfly_stage;
use crate::utils::len_to_float;

/// Principal root of unity `exp(-2πi / chunk_size)` for a merge stage
#[inline]
pub(crate) fn stage_root<T: Float + FloatConst>(chunk_size: usize) -> Complex<T> {
    let theta = -(T::PI() + T::PI()) / len_to_float(chunk_size);
    let (sin, cos) = theta.sin_cos();
    Complex::new(cos, sin)
}

/// Forward, unnormalized FFT of a power-of-two-length signal, in place.
///
/// # Panics
///
/// Panics if `signal.len()` is not a power of two.
pub fn fft_dit<T: Float + FloatConst>(signal: &mut [Complex<T>]) {
    let big_n = signal.len();
    assert!(
        big_n.is_power_of_two(),
        "signal length {big_n} is not a power of two"
    );

    let log_n = big_n.ilog2() as usize;
    tracing::trace!(len = big_n, stages = log_n, "fft_dit");

    bit_reverse_permutation(signal, log_n);

    for stage in 1..=log_n {
        let chunk_size = 1 << stage;
        let dist = chunk_size >> 1;
        butterfly_stage(signal, stage_root(chunk_size), dist);
    }
}
