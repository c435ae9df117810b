//! Generic complex numbers
//!
//! [`Complex`] is a plain `(re, im)` pair over any [`Float`] element type. Equality is exact
//! component-wise equality; callers that need a tolerance have to compare the components
//! themselves.
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Not, Sub};

use num_traits::Float;

/// A complex number `re + i * im`
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Complex<T> {
    /// Real component
    pub re: T,
    /// Imaginary component
    pub im: T,
}

/// The unit [`Complex::arg`] reports its angle in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Angle {
    #[default]
    Radians,
    Degrees,
}

impl<T> Complex<T> {
    /// Create a complex number from its real and imaginary components
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Float> Complex<T> {
    /// The additive identity, `0 + 0i`
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// The multiplicative identity, `1 + 0i`
    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Returns the complex conjugate. Same as `!self`.
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Returns `sqrt(re² + im²)`
    #[inline]
    pub fn modulus(self) -> T {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Returns `atan(im / re)` in the requested unit.
    ///
    /// This is the two-quadrant arctangent: numbers in the left half-plane report the angle of
    /// their reflection through the origin, and `re == 0` yields `±π/2` or `NaN` depending on
    /// `im`. Use `im.atan2(re)` on the components if you need the full-circle angle.
    #[inline]
    pub fn arg(self, angle: Angle) -> T {
        let radians = (self.im / self.re).atan();
        match angle {
            Angle::Radians => radians,
            Angle::Degrees => radians.to_degrees(),
        }
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;

    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Float> Mul<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl<T: Float> Div<T> for Complex<T> {
    type Output = Self;

    /// Component-wise division. A zero divisor propagates infinities/NaN.
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.re / rhs, self.im / rhs)
    }
}

impl<T: Float> AddAssign for Complex<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Float> MulAssign for Complex<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Float> Neg for Complex<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<T: Float> Not for Complex<T> {
    type Output = Self;

    /// Complex conjugate
    #[inline]
    fn not(self) -> Self {
        self.conj()
    }
}

// Coherence rules only let us put the scalar on the left for concrete float types
macro_rules! impl_scalar_lhs_mul {
    ($precision:ty) => {
        impl Mul<Complex<$precision>> for $precision {
            type Output = Complex<$precision>;

            #[inline]
            fn mul(self, rhs: Complex<$precision>) -> Complex<$precision> {
                rhs * self
            }
        }
    };
}

impl_scalar_lhs_mul!(f32);
impl_scalar_lhs_mul!(f64);

/// Returns the modulus of every element of `signal`, in order
pub fn moduli<T: Float>(signal: &[Complex<T>]) -> Vec<T> {
    signal.iter().map(|z| z.modulus()).collect()
}

/// Returns the real component of every element of `signal`, in order
pub fn reals<T: Copy>(signal: &[Complex<T>]) -> Vec<T> {
    signal.iter().map(|z| z.re).collect()
}

/// Returns the imaginary component of every element of `signal`, in order
pub fn imags<T: Copy>(signal: &[Complex<T>]) -> Vec<T> {
    signal.iter().map(|z| z.im).collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_4, FRAC_PI_6};

    use utilities::assert_float_closeness;

    use super::*;

    #[test]
    fn arithmetic() {
        let a: Complex<f64> = Complex::new(1.0, 2.0);
        let b: Complex<f64> = Complex::new(3.0, -4.0);

        assert_eq!(a + b, Complex::new(4.0, -2.0));
        assert_eq!(a - b, Complex::new(-2.0, 6.0));
        // (1 + 2i)(3 - 4i) = 3 - 4i + 6i + 8 = 11 + 2i
        assert_eq!(a * b, Complex::new(11.0, 2.0));
        assert_eq!(a * 2.0, Complex::new(2.0, 4.0));
        assert_eq!(2.0_f64 * a, a * 2.0);
        assert_eq!(b / 2.0, Complex::new(1.5, -2.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
        assert_ne!(a, b);
    }

    #[test]
    fn compound_assignment() {
        let mut z = Complex::new(1.0f32, 1.0);
        z += Complex::new(1.0, -2.0);
        assert_eq!(z, Complex::new(2.0, -1.0));

        // (2 - i) * i = 1 + 2i
        z *= Complex::new(0.0, 1.0);
        assert_eq!(z, Complex::new(1.0, 2.0));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Complex::<f64>::default(), Complex::zero());
        assert_eq!(Complex::<f32>::one() * Complex::new(5.0, -7.0), Complex::new(5.0, -7.0));
    }

    #[test]
    fn conjugate() {
        let z = Complex::new(3.5, -1.25);
        assert_eq!(!z, Complex::new(3.5, 1.25));
        assert_eq!(!!z, z);
        assert_eq!(z * !z, Complex::new(13.8125, 0.0));
    }

    #[test]
    fn modulus() {
        assert_eq!(Complex::new(3.0, 4.0).modulus(), 5.0);
        assert_eq!(Complex::new(-3.0f32, -4.0).modulus(), 5.0);
        assert_eq!(Complex::<f64>::zero().modulus(), 0.0);
    }

    #[test]
    fn argument() {
        let z = Complex::new(1.0, 1.0);
        assert_float_closeness(z.arg(Angle::Radians), FRAC_PI_4, 1e-12);
        assert_float_closeness(z.arg(Angle::Degrees), 45.0, 1e-12);
        assert_eq!(z.arg(Angle::default()), z.arg(Angle::Radians));

        let z = Complex::new(3.0f64.sqrt(), 1.0);
        assert_float_closeness(z.arg(Angle::Radians), FRAC_PI_6, 1e-12);
        assert_float_closeness(z.arg(Angle::Degrees), 30.0, 1e-12);

        let z = Complex::new(1.0f32, 1.0);
        assert_float_closeness(z.arg(Angle::Degrees), 45.0, 1e-5);
    }

    #[test]
    fn argument_is_two_quadrant() {
        // -1 - i sits in the third quadrant but reports the first-quadrant angle
        let z = Complex::new(-1.0, -1.0);
        assert_float_closeness(z.arg(Angle::Radians), FRAC_PI_4, 1e-12);

        assert!(Complex::new(0.0, 0.0).arg(Angle::Radians).is_nan());
        assert_float_closeness(
            Complex::new(0.0, 2.0).arg(Angle::Radians),
            std::f64::consts::FRAC_PI_2,
            1e-12,
        );
    }

    #[test]
    fn division_by_zero_propagates() {
        let z = Complex::new(1.0, -1.0) / 0.0;
        assert_eq!(z.re, f64::INFINITY);
        assert_eq!(z.im, f64::NEG_INFINITY);

        let z = Complex::<f32>::zero() / 0.0;
        assert!(z.re.is_nan() && z.im.is_nan());
    }

    #[test]
    fn projections() {
        let signal = vec![
            Complex::new(3.0, 4.0),
            Complex::new(-1.0, 0.0),
            Complex::new(0.0, -2.0),
        ];

        assert_eq!(reals(&signal), vec![3.0, -1.0, 0.0]);
        assert_eq!(imags(&signal), vec![4.0, 0.0, -2.0]);
        assert_eq!(moduli(&signal), vec![5.0, 1.0, 2.0]);

        let empty: Vec<Complex<f32>> = vec![];
        assert!(reals(&empty).is_empty());
        assert!(imags(&empty).is_empty());
        assert!(moduli(&empty).is_empty());
    }
}
