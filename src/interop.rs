//! Interoperability with the `num-complex` and `bytemuck` ecosystems

use bytemuck::{Pod, Zeroable};

use crate::complex::Complex;

// SAFETY: `Complex<T>` is `#[repr(C)]` with two fields of the same type, so it has no padding
// and every bit pattern valid for `T` is valid for both fields.
unsafe impl<T: Zeroable> Zeroable for Complex<T> {}

// SAFETY: see above; `T: Pod` guarantees `T` itself is plain old data.
unsafe impl<T: Pod> Pod for Complex<T> {}

impl<T> From<num_complex::Complex<T>> for Complex<T> {
    #[inline]
    fn from(z: num_complex::Complex<T>) -> Self {
        Complex::new(z.re, z.im)
    }
}

impl<T> From<Complex<T>> for num_complex::Complex<T> {
    #[inline]
    fn from(z: Complex<T>) -> Self {
        num_complex::Complex::new(z.re, z.im)
    }
}
