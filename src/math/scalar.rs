use std::fmt::{Debug, Display};

use num_traits::{Float, NumCast, Signed, ToPrimitive};

use super::approx_eq::ApproxEq;

/// Element type of vectors and matrices.
///
/// Floating types compare with a tolerance, integer types compare exactly (see [`ApproxEq`]).
pub trait Scalar:
    Signed + NumCast + ToPrimitive + Copy + PartialOrd + Default + Debug + Display + ApproxEq
{
    /// Floating type results are promoted to when `Self` is not floating already.
    type Float: Scalar + Float;

    fn to_float(self) -> Self::Float;

    /// Lossy for very large integers, exact for every type this crate renders with.
    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    fn is_near_zero(self) -> bool {
        self.approx_eq(&Self::zero())
    }
}

impl Scalar for f64 {
    type Float = f64;

    fn to_float(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    type Float = f32;

    fn to_float(self) -> f32 {
        self
    }
}

macro_rules! impl_integer_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                type Float = f64;

                fn to_float(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_scalar!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_promote_to_f64() {
        assert_eq!(3_i32.to_float(), 3.0_f64);
        assert_eq!((-7_i64).to_float(), -7.0_f64);
    }

    #[test]
    fn floats_keep_their_type() {
        let x: f32 = 1.5_f32.to_float();
        assert_eq!(x, 1.5);
        assert_eq!(2.5_f64.to_float(), 2.5);
    }

    #[test]
    fn near_zero() {
        assert!(1e-9_f64.is_near_zero());
        assert!(!1e-3_f64.is_near_zero());
        assert!(0_i32.is_near_zero());
        assert!(!1_i32.is_near_zero());
    }
}
