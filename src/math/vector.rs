use std::{
    fmt::{self, Display},
    ops::{self, Index, IndexMut},
};

use num_traits::{Float, PrimInt};

use super::{
    approx_eq::ApproxEq,
    error::{MathError, MathResult},
    numeric,
    scalar::Scalar,
};

/// Fixed length tuple of 1 to 4 scalars.
///
/// 4-vectors are homogeneous: `w == 1` marks a point, `w == 0` a direction.
#[derive(Copy, Clone, Debug)]
pub struct Vector<const N: usize, T = f64> {
    data: [T; N],
}

/// Homogeneous point or direction.
pub type Vec4 = Vector<4, f64>;
/// Linear rgb color, channels nominally in [0; 1].
pub type Color = Vector<3, f64>;
/// Quantized color as written to a canvas.
pub type Rgb8 = Vector<3, u8>;

impl<const N: usize, T: Copy> Vector<N, T> {
    pub const fn new(data: [T; N]) -> Self {
        const { assert!(N >= 1 && N <= 4, "vectors hold 1 to 4 elements") };
        Self { data }
    }

    pub fn data(&self) -> &[T; N] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn map<U: Copy>(self, f: impl FnMut(T) -> U) -> Vector<N, U> {
        Vector::new(self.data.map(f))
    }
}

impl<const N: usize, T: Scalar> Vector<N, T> {
    pub fn zero() -> Self {
        Self::new([T::zero(); N])
    }

    pub fn dot(&self, rhs: &Self) -> T {
        self.data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::zero(), |acc, (&l, &r)| acc + l * r)
    }

    /// Always computed in `f64`, whatever the element type.
    pub fn magnitude(&self) -> f64 {
        numeric::sqrt(self.data.iter().map(|x| x.as_f64() * x.as_f64()).sum())
    }

    /// The zero vector has no direction, normalizing it yields NaN components.
    pub fn normalize(&self) -> Vector<N, f64> {
        let len = self.magnitude();
        self.map(|x| x.as_f64() / len)
    }

    pub fn to_float(self) -> Vector<N, T::Float> {
        self.map(T::to_float)
    }

    pub fn try_div(self, rhs: T) -> MathResult<Self> {
        if rhs.is_near_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(self.map(|x| x / rhs))
    }

    /// Element-wise division, fails if any element of `rhs` is (near) zero.
    pub fn try_div_elementwise(mut self, rhs: Self) -> MathResult<Self> {
        if rhs.iter().any(|x| x.is_near_zero()) {
            return Err(MathError::DivisionByZero);
        }
        for (l, r) in self.data.iter_mut().zip(rhs.data) {
            *l = *l / r;
        }
        Ok(self)
    }

    pub fn reflect(&self, normal: &Self) -> Self {
        let two = T::one() + T::one();
        *self - *normal * two * self.dot(normal)
    }
}

impl<const N: usize, T: Scalar + PrimInt> Vector<N, T> {
    pub fn try_rem(self, rhs: T) -> MathResult<Self> {
        if rhs.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(self.map(|x| x % rhs))
    }

    pub fn try_rem_elementwise(mut self, rhs: Self) -> MathResult<Self> {
        if rhs.iter().any(|x| x.is_zero()) {
            return Err(MathError::DivisionByZero);
        }
        for (l, r) in self.data.iter_mut().zip(rhs.data) {
            *l = *l % r;
        }
        Ok(self)
    }
}

impl<T: Copy> Vector<4, T> {
    pub fn with_w(mut self, w: T) -> Self {
        self.data[3] = w;
        self
    }
}

impl<T: Scalar> Vector<4, T> {
    pub fn point(x: T, y: T, z: T) -> Self {
        Self::new([x, y, z, T::one()])
    }

    pub fn direction(x: T, y: T, z: T) -> Self {
        Self::new([x, y, z, T::zero()])
    }

    pub fn is_point(&self) -> bool {
        self.data[3].approx_eq(&T::one())
    }

    pub fn is_direction(&self) -> bool {
        self.data[3].is_near_zero()
    }

    /// Cross product of the xyz parts. Only directions have one, so `w` is always 0.
    pub fn cross(&self, rhs: &Self) -> Self {
        let [ax, ay, az, _] = self.data;
        let [bx, by, bz, _] = rhs.data;
        Self::direction(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl Color {
    pub fn black() -> Self {
        Self::new([0., 0., 0.])
    }
    pub fn white() -> Self {
        Self::new([1., 1., 1.])
    }

    fn scale_val_to_u8(v: f64) -> u8 {
        (v * 255.).clamp(0., 255.).round() as u8
    }

    /// Clamps each channel to [0; 255] and rounds to the nearest level, so 0.5 maps to 128.
    pub fn to_rgb8(&self) -> Rgb8 {
        self.map(Self::scale_val_to_u8)
    }
}

macro_rules! impl_accessors {
    ($n:literal { $($name:ident => $id:literal),* }) => {
        impl<T: Copy> Vector<$n, T> {
            $(
                pub fn $name(&self) -> T {
                    self.data[$id]
                }
            )*
        }
    };
}

impl_accessors!(1 { x => 0, r => 0 });
impl_accessors!(2 { x => 0, y => 1, r => 0, g => 1 });
impl_accessors!(3 { x => 0, y => 1, z => 2, r => 0, g => 1, b => 2 });
impl_accessors!(4 { x => 0, y => 1, z => 2, w => 3, r => 0, g => 1, b => 2 });

impl<const N: usize, T: Copy + Default> Default for Vector<N, T> {
    fn default() -> Self {
        Self::new([T::default(); N])
    }
}

impl<const N: usize, T: Copy> From<[T; N]> for Vector<N, T> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize, T: Copy> TryFrom<&[T]> for Vector<N, T> {
    type Error = MathError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        let data = <[T; N]>::try_from(values).map_err(|_| MathError::LengthMismatch {
            expected: N,
            found: values.len(),
        })?;
        Ok(Self::new(data))
    }
}

impl<const N: usize, T> Index<usize> for Vector<N, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<const N: usize, T> IndexMut<usize> for Vector<N, T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<const N: usize, T: ApproxEq> ApproxEq for Vector<N, T> {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(l, r)| l.approx_eq_epsilon(r, epsilon))
    }
}

impl<const N: usize, T: ApproxEq> PartialEq for Vector<N, T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<const N: usize, T: Display> Display for Vector<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (id, x) in self.data.iter().enumerate() {
            if id > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}

/// Element-wise `vector op vector`.
macro_rules! impl_elementwise_op {
    ($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident, $tok:tt) => {
        impl<const N: usize, T: Scalar> ops::$op_assign for Vector<N, T> {
            fn $fn_assign(&mut self, rhs: Self) {
                for (l, r) in self.data.iter_mut().zip(rhs.data) {
                    *l = *l $tok r;
                }
            }
        }

        impl<const N: usize, T: Scalar> ops::$op for Vector<N, T> {
            type Output = Self;

            fn $fn(mut self, rhs: Self) -> Self::Output {
                ops::$op_assign::$fn_assign(&mut self, rhs);
                self
            }
        }
    };
}

/// Uniform `vector op scalar`.
macro_rules! impl_uniform_op {
    ($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident, $tok:tt) => {
        impl<const N: usize, T: Scalar> ops::$op_assign<T> for Vector<N, T> {
            fn $fn_assign(&mut self, rhs: T) {
                for l in self.data.iter_mut() {
                    *l = *l $tok rhs;
                }
            }
        }

        impl<const N: usize, T: Scalar> ops::$op<T> for Vector<N, T> {
            type Output = Self;

            fn $fn(mut self, rhs: T) -> Self::Output {
                ops::$op_assign::$fn_assign(&mut self, rhs);
                self
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign, +);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign, *);

impl_uniform_op!(Add, add, AddAssign, add_assign, +);
impl_uniform_op!(Sub, sub, SubAssign, sub_assign, -);
impl_uniform_op!(Mul, mul, MulAssign, mul_assign, *);

/// Float division by a zero element gives an infinity or NaN, integers go through
/// [`Vector::try_div_elementwise`].
impl<const N: usize, T: Scalar + Float> ops::DivAssign for Vector<N, T> {
    fn div_assign(&mut self, rhs: Self) {
        for (l, r) in self.data.iter_mut().zip(rhs.data) {
            *l = *l / r;
        }
    }
}

impl<const N: usize, T: Scalar + Float> ops::Div for Vector<N, T> {
    type Output = Self;

    fn div(mut self, rhs: Self) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<const N: usize, T: Scalar> ops::Neg for Vector<N, T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use super::*;
    use crate::assert_approx_eq_low_prec;

    #[test]
    fn point_and_direction() {
        let p = Vec4::point(4., -4., 3.);
        let v = Vec4::direction(4., -4., 3.);

        assert_eq!(p, Vec4::new([4., -4., 3., 1.]));
        assert!(p.is_point() && !p.is_direction());
        assert_eq!(v, Vec4::new([4., -4., 3., 0.]));
        assert!(v.is_direction() && !v.is_point());
    }

    #[test]
    fn accessors_alias_storage() {
        let v = Vector::new([0.5, 0.25, 0.125, 1.]);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (0.5, 0.25, 0.125, 1.));
        assert_eq!((v.r(), v.g(), v.b()), (v.x(), v.y(), v.z()));

        let c = Color::new([-0.5, 0.4, 1.7]);
        assert_eq!((c.r(), c.g(), c.b()), (-0.5, 0.4, 1.7));
        assert_eq!(Vector::new([7_i32]).x(), 7);
    }

    #[test]
    fn from_slice_checks_length() {
        let values = [1., 2., 3.];
        assert_eq!(Vector::<3>::try_from(&values[..]), Ok(Vector::new([1., 2., 3.])));
        assert_eq!(
            Vector::<4>::try_from(&values[..]),
            Err(MathError::LengthMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn add_point_and_direction() {
        assert_approx_eq_low_prec!(
            Vec4::point(3., -2., 5.) + Vec4::direction(-2., 3., 1.),
            Vec4::point(1., 1., 6.)
        );
    }

    #[test]
    fn sub_points_gives_direction() {
        assert_approx_eq_low_prec!(
            Vec4::point(3., 2., 1.) - Vec4::point(5., 6., 7.),
            Vec4::direction(-2., -4., -6.)
        );
    }

    #[test]
    fn neg() {
        assert_approx_eq_low_prec!(
            -Vec4::new([1., -2., 3., -4.]),
            Vec4::new([-1., 2., -3., 4.])
        );
    }

    #[test]
    fn scalar_ops() {
        let v = Vec4::new([1., -2., 3., -4.]);
        assert_approx_eq_low_prec!(v * 3.5, Vec4::new([3.5, -7., 10.5, -14.]));
        assert_approx_eq_low_prec!(v + 1., Vec4::new([2., -1., 4., -3.]));
        assert_approx_eq_low_prec!(v - 1., Vec4::new([0., -3., 2., -5.]));
        assert_approx_eq_low_prec!(v.try_div(2.).unwrap(), Vec4::new([0.5, -1., 1.5, -2.]));
    }

    #[test]
    fn elementwise_ops() {
        let a = Vector::new([2_f64, 9., 5.]);
        let b = Vector::new([4_f64, 3., 2.]);
        assert_approx_eq_low_prec!(a * b, Vector::new([8., 27., 10.]));
        assert_approx_eq_low_prec!(a / b, Vector::new([0.5, 3., 2.5]));
        assert_approx_eq_low_prec!(
            a.try_div_elementwise(b).unwrap(),
            Vector::new([0.5, 3., 2.5])
        );
    }

    #[test]
    fn float_elementwise_division_by_zero_does_not_panic() {
        let v = Vector::new([1_f64, -1.]) / Vector::new([0., 0.]);
        assert!(v.x().is_infinite() && v.x() > 0.);
        assert!(v.y().is_infinite() && v.y() < 0.);
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vector::new([1_i32, 2, 3]);
        v += Vector::new([1, 1, 1]);
        v *= 2;
        v -= 1;
        assert_eq!(v, Vector::new([3, 5, 7]));
    }

    #[test]
    fn integer_modulus() {
        assert_eq!(Vector::new([7_i32, 8, 9]).try_rem(4), Ok(Vector::new([3, 0, 1])));
        assert_eq!(
            Vector::new([7_i32, 8, 9]).try_rem_elementwise(Vector::new([2, 3, 5])),
            Ok(Vector::new([1, 2, 4]))
        );
    }

    #[test]
    fn integer_equality_is_exact() {
        assert_eq!(Vector::new([1_i64, 2]), Vector::new([1, 2]));
        assert_ne!(Vector::new([1_i64, 2]), Vector::new([1, 3]));
    }

    #[test]
    fn float_equality_tolerates_rounding() {
        assert_eq!(Vector::new([0.1 + 0.2, 1.]), Vector::new([0.3, 1.]));
        assert_ne!(Vector::new([0.1, 1.]), Vector::new([0.2, 1.]));
    }

    #[test]
    fn division_by_zero_scalar_fails() {
        assert_eq!(
            Vec4::point(1., 2., 3.).try_div(0.),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            Vec4::point(1., 2., 3.).try_div(1e-9),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            Vector::new([4_i32, 2]).try_div(0),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(Vector::new([4_i32, 2]).try_div(2), Ok(Vector::new([2, 1])));
    }

    #[test]
    fn integer_modulus_by_zero_fails() {
        assert_eq!(Vector::new([7_i32, 8]).try_rem(0), Err(MathError::DivisionByZero));
        assert_eq!(Vector::new([7_i32, 8]).try_rem(3), Ok(Vector::new([1, 2])));
        assert_eq!(
            Vector::new([7_i64, 8]).try_rem_elementwise(Vector::new([2, 0])),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn elementwise_division_by_zero_element_fails() {
        assert_eq!(
            Vector::new([7_i32, 8]).try_div_elementwise(Vector::new([1, 0])),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            Vector::new([7_i32, 8]).try_div_elementwise(Vector::new([2, 4])),
            Ok(Vector::new([3, 2]))
        );
        assert_eq!(
            Vec4::point(1., 2., 3.).try_div_elementwise(Vec4::new([1., 1e-9, 1., 1.])),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn magnitude() {
        assert_approx_eq_low_prec!(Vec4::direction(1., 0., 0.).magnitude(), 1.);
        assert_approx_eq_low_prec!(Vec4::direction(0., 1., 0.).magnitude(), 1.);
        assert_approx_eq_low_prec!(Vec4::direction(0., 0., 1.).magnitude(), 1.);
        assert_approx_eq_low_prec!(Vec4::direction(0., 0., 0.).magnitude(), 0.);

        assert_approx_eq_low_prec!(Vec4::direction(1., 2., 3.).magnitude(), 14_f64.sqrt());
        assert_approx_eq_low_prec!(Vec4::direction(-1., -2., 3.).magnitude(), 14_f64.sqrt());
        assert_approx_eq_low_prec!(Vector::new([3_i32, 4]).magnitude(), 5.);
    }

    #[test]
    fn normalize() {
        assert_approx_eq_low_prec!(
            Vec4::direction(4., 0., 0.).normalize(),
            Vec4::direction(1., 0., 0.)
        );
        let sqrt_14 = 14_f64.sqrt();
        assert_approx_eq_low_prec!(
            Vec4::direction(1., -2., 3.).normalize(),
            Vec4::direction(1. / sqrt_14, -2. / sqrt_14, 3. / sqrt_14)
        );
        assert_approx_eq_low_prec!(Vector::new([0_i32, -5]).normalize(), Vector::new([0., -1.]));
    }

    #[test]
    fn normalized_has_unit_length_and_is_idempotent() {
        for v in [
            Vec4::direction(1., 2., 3.),
            Vec4::direction(-0.001, 0., 2e3),
            Vec4::new([1., 1., 1., 1.]),
        ] {
            let n = v.normalize();
            assert_approx_eq_low_prec!(n.magnitude(), 1.);
            assert_approx_eq_low_prec!(n.normalize(), n);
        }
    }

    #[test]
    fn normalizing_zero_vector_yields_nan() {
        assert!(Vec4::zero().normalize().iter().all(|x| x.is_nan()));
    }

    #[test]
    fn dot_product() {
        assert_approx_eq_low_prec!(
            Vec4::direction(1., 2., 3.).dot(&Vec4::direction(2., 3., 4.)),
            20.
        );
        assert_eq!(Vector::new([1_i32, 2]).dot(&Vector::new([3, -4])), -5);
    }

    #[test]
    fn cross_product() {
        let v1 = Vec4::direction(1., 2., 3.);
        let v2 = Vec4::direction(2., 3., 4.);
        assert_approx_eq_low_prec!(v1.cross(&v2), Vec4::direction(-1., 2., -1.));
        assert_approx_eq_low_prec!(v2.cross(&v1), Vec4::direction(1., -2., 1.));
    }

    #[test]
    fn cross_product_drops_w() {
        let v1 = Vec4::new([1., 0., 0., 1.]);
        let v2 = Vec4::new([0., 1., 0., 1.]);
        assert!(v1.cross(&v2).is_direction());
    }

    #[test]
    fn reflect_vector_approaching_at_45_deg() {
        let v = Vec4::direction(1., -1., 0.);
        let normal = Vec4::direction(0., 1., 0.);
        assert_approx_eq_low_prec!(v.reflect(&normal), Vec4::direction(1., 1., 0.));
    }

    #[test]
    fn reflect_vector_off_slanted_surface() {
        let v = Vec4::direction(0., -1., 0.);
        let normal = Vec4::direction(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.);
        assert_approx_eq_low_prec!(v.reflect(&normal), Vec4::direction(1., 0., 0.));
    }

    #[test]
    fn color_ops() {
        assert_approx_eq_low_prec!(
            Color::new([0.9, 0.6, 0.75]) + Color::new([0.7, 0.1, 0.25]),
            Color::new([1.6, 0.7, 1.0])
        );
        assert_approx_eq_low_prec!(
            Color::new([1., 0.2, 0.4]) * Color::new([0.9, 1., 0.1]),
            Color::new([0.9, 0.2, 0.04])
        );
    }

    #[test]
    fn color_quantization_clamps() {
        assert_eq!(Color::new([-0.5, 0.5, 1.7]).to_rgb8(), Rgb8::new([0, 128, 255]));
        assert_eq!(Color::white().to_rgb8(), Rgb8::new([255, 255, 255]));
    }

    #[test]
    fn color_quantization_rounds_to_nearest() {
        assert_eq!(Color::new([0.5, 0.499, 0.002]).to_rgb8(), Rgb8::new([128, 127, 1]));
    }

    #[test]
    fn display() {
        assert_eq!(Vector::new([1_i32, -2, 3]).to_string(), "(1, -2, 3)");
    }
}
