//! FFT Algorithm Implementations
//!
//! ## Available Algorithms
//!
//! - **Bit reversal**: The in-place index permutation that brings a natural-order signal into
//!   the bit-reversed order the iterative transform consumes.
//!
//! - **DIT (Decimation-in-Time)**: The iterative radix-2 Cooley-Tukey transform. Processes data
//!   from small butterflies to large. Input is bit-reversed, output is in natural order.

pub mod bit_reverse;
pub mod dit;
