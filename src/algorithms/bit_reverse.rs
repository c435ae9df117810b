//! In-place bit-reversal permutation
//!
//! Reorders a power-of-two-length buffer so that the element at index `i` moves to the index whose
//! low `log_n` bits are those of `i` in reverse order. This is the input ordering the iterative
//! decimation-in-time FFT expects.

/// Returns `i` with its low `log_n` bits reversed
#[inline]
pub(crate) const fn reverse_low_bits(i: usize, log_n: usize) -> usize {
    if log_n == 0 {
        0
    } else {
        i.reverse_bits() >> (usize::BITS as usize - log_n)
    }
}

/// Performs the bit-reversal permutation on `buf` in place.
///
/// Every pair is swapped exactly once (only when the reversed index is larger), so the pass is
/// `O(N)` and applying it twice restores the original order.
///
/// # Panics
///
/// Panics if `buf.len() != 2^log_n`.
pub fn bit_reverse_permutation<T>(buf: &mut [T], log_n: usize) {
    assert!(
        log_n < usize::BITS as usize && buf.len() == 1 << log_n,
        "buffer length {} is not 2^{log_n}",
        buf.len()
    );

    for i in 0..buf.len() {
        let j = reverse_low_bits(i, log_n);
        if j > i {
            buf.swap(i, j);
        }
    }
}
