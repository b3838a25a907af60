use super::numeric;

/// Default tolerance for floating point comparisons.
pub const EPSILON: f64 = numeric::EPSILON;
/// Tolerance used by tests comparing against values printed with 5 decimal places.
pub const LOW_PREC_EPSILON: f64 = 1.0e-5;

pub trait ApproxEq<Rhs = Self> {
    fn approx_eq_epsilon(&self, other: &Rhs, epsilon: f64) -> bool;

    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_epsilon(other, EPSILON)
    }

    fn approx_eq_low_prec(&self, other: &Rhs) -> bool {
        self.approx_eq_epsilon(other, LOW_PREC_EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        numeric::are_close_eps(*self, *other, epsilon)
    }
}

impl ApproxEq for f32 {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        numeric::are_close_eps(f64::from(*self), f64::from(*other), epsilon)
    }
}

macro_rules! impl_exact_eq {
    ($($ty:ty),*) => {
        $(
            impl ApproxEq for $ty {
                fn approx_eq_epsilon(&self, other: &Self, _epsilon: f64) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_exact_eq!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[macro_export]
macro_rules! assert_approx_eq_low_prec {
    ($lhs:expr, $rhs:expr $(,)?) => {
        match (&$lhs, &$rhs) {
            (lhs, rhs) => {
                if !$crate::math::approx_eq::ApproxEq::approx_eq_low_prec(lhs, rhs) {
                    panic!(
                        "assertion `left ~= right` failed\n  left: {:?}\n right: {:?}",
                        lhs, rhs
                    );
                }
            }
        }
    };
}
