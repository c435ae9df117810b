//! Generic complex numbers and an in-place radix-2 Cooley-Tukey FFT.
//!
//! ```
//! use cplxfft::{fft, normalize, Complex};
//!
//! let mut signal = vec![Complex::new(1.0, 0.0); 4];
//! fft(&mut signal).unwrap();
//! assert_eq!(signal[0], Complex::new(4.0, 0.0));
//!
//! normalize(&mut signal);
//! assert_eq!(signal[0], Complex::new(2.0, 0.0));
//! ```
//!
//! Signals whose length is not a power of two are zero-padded in place, so [`fft`] takes the
//! caller's `Vec` and may grow it. Use [`fft_in_place`] for fixed buffers and [`fft_copied`] to
//! keep the input untouched.

use num_traits::{Float, FloatConst};

use crate::algorithms::dit::fft_dit;
use crate::kernels::scale_down;
use crate::utils::{is_power2, len_to_float, padding_up_power2};

pub use crate::algorithms::bit_reverse::bit_reverse_permutation;
pub use crate::complex::{imags, moduli, reals, Angle, Complex};
pub use crate::error::FftError;

pub mod algorithms;
pub mod complex;
mod error;
#[cfg(feature = "complex-nums")]
mod interop;
mod kernels;
pub mod utils;

/// Forward FFT of `signal`, in place.
///
/// If the length of `signal` is not a power of two, zeros are appended until it is
/// (see [`padding_up_power2`]), so the caller's vector grows. The result is the
/// unnormalized DFT in natural order; see [`normalize`].
///
/// # Errors
///
/// Returns [`FftError::InvalidInput`] if `signal` is empty.
pub fn fft<T: Float + FloatConst>(signal: &mut Vec<Complex<T>>) -> Result<(), FftError> {
    if signal.is_empty() {
        return Err(FftError::InvalidInput);
    }

    let len = signal.len();
    if !is_power2(len) {
        let padded = padding_up_power2(len);
        tracing::debug!(len, padded, "zero-padding signal to a power of two");
        signal.resize(padded, Complex::zero());
    }

    fft_dit(signal);
    Ok(())
}

/// Forward FFT of a buffer whose length is already a power of two.
///
/// # Errors
///
/// Returns [`FftError::InvalidInput`] if `signal` is empty, and [`FftError::NotPowerOfTwo`]
/// if it would need padding.
pub fn fft_in_place<T: Float + FloatConst>(signal: &mut [Complex<T>]) -> Result<(), FftError> {
    match signal.len() {
        0 => Err(FftError::InvalidInput),
        len if !is_power2(len) => Err(FftError::NotPowerOfTwo { len }),
        _ => {
            fft_dit(signal);
            Ok(())
        }
    }
}

/// Forward FFT of a copy of `signal`, padded the same way [`fft`] pads.
///
/// # Errors
///
/// Returns [`FftError::InvalidInput`] if `signal` is empty.
pub fn fft_copied<T: Float + FloatConst>(
    signal: &[Complex<T>],
) -> Result<Vec<Complex<T>>, FftError> {
    if signal.is_empty() {
        return Err(FftError::InvalidInput);
    }

    let mut spectrum = Vec::with_capacity(padding_up_power2(signal.len()));
    spectrum.extend_from_slice(signal);
    fft(&mut spectrum)?;
    Ok(spectrum)
}

/// Divides every element of `signal` by `N / 2`, where `N` is its current length.
///
/// `N / 2` is an integer division, so a single-element signal is divided by zero and turns
/// into infinities/NaN. An empty signal is left alone.
pub fn normalize<T: Float>(signal: &mut [Complex<T>]) {
    let half = signal.len() / 2;
    scale_down(signal, len_to_float(half));
}
