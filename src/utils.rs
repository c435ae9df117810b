//! Power-of-two helpers and utility functions such as interleave/deinterleave

use num_traits::Float;

#[cfg(feature = "complex-nums")]
use bytemuck::{cast_slice, Pod};

#[cfg(feature = "complex-nums")]
use crate::complex::Complex;

/// Returns `true` iff exactly one bit of `n` is set. `0` is not a power of two.
#[inline]
pub const fn is_power2(n: usize) -> bool {
    n.count_ones() == 1
}

/// Returns the smallest power of two that is `>= x`.
///
/// Powers of two map to themselves, so `padding_up_power2(8) == 8` and
/// `padding_up_power2(9) == 16`. An empty length pads to a single element: `padding_up_power2(0) == 1`.
///
/// # Panics
///
/// Panics if the result does not fit in a `usize`, i.e. `x > 2^(usize::BITS - 1)`.
#[inline]
pub fn padding_up_power2(x: usize) -> usize {
    match x.checked_next_power_of_two() {
        Some(padded) => padded,
        None => panic!("cannot pad {x} up to a power of two representable as usize"),
    }
}

/// Converts a length into the element type. Every float can hold a `usize`, rounded at worst.
#[inline]
pub(crate) fn len_to_float<T: Float>(len: usize) -> T {
    T::from(len).unwrap_or_else(T::infinity)
}

/// Separates the components of a complex signal into `(reals, imags)`
///
/// The signal is viewed as an interleaved `[re0, im0, re1, im1, ...]` slice without copying.
#[cfg(feature = "complex-nums")]
pub fn deinterleave<T: Float + Pod>(signal: &[Complex<T>]) -> (Vec<T>, Vec<T>) {
    let interleaved: &[T] = cast_slice(signal);
    interleaved.chunks_exact(2).map(|c| (c[0], c[1])).unzip()
}

/// Utility function to combine separate vectors of real and imaginary components
/// into a single vector of Complex Number Structs.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
#[cfg(feature = "complex-nums")]
pub fn combine_re_im<T: Float>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect()
}
