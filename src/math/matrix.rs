use std::{
    array,
    fmt::{self, Display},
    ops,
};

use super::{
    approx_eq::ApproxEq,
    error::{MathError, MathResult},
    numeric,
    scalar::Scalar,
    vector::Vector,
};

/// Row-major `R x C` grid of scalars, at most 16 elements.
#[derive(Debug, Clone, Copy)]
pub struct Matrix<const R: usize, const C: usize, T = f64> {
    data: [[T; C]; R],
}

/// Affine transformation in homogeneous coordinates.
pub type Matrix4 = Matrix<4, 4, f64>;

impl<const R: usize, const C: usize, T: Copy> Matrix<R, C, T> {
    pub const fn new(data: [[T; C]; R]) -> Self {
        const { assert!(R >= 1 && C >= 1 && R * C <= 16, "matrices hold at most 16 elements") };
        Self { data }
    }

    pub fn rows(&self) -> &[[T; C]; R] {
        &self.data
    }

    pub fn map<U: Copy>(self, mut f: impl FnMut(T) -> U) -> Matrix<R, C, U> {
        Matrix::new(self.data.map(|row| row.map(&mut f)))
    }

    pub fn transpose(&self) -> Matrix<C, R, T> {
        Matrix::new(array::from_fn(|row| array::from_fn(|col| self.data[col][row])))
    }

    /// Copy without `row` and `col`, both assumed in range.
    fn without<const SR: usize, const SC: usize>(&self, row: usize, col: usize) -> Matrix<SR, SC, T> {
        const { assert!(SR + 1 == R && SC + 1 == C, "submatrix drops exactly one row and column") };
        let skip = |id: usize, removed: usize| if id < removed { id } else { id + 1 };
        Matrix::new(array::from_fn(|r| {
            array::from_fn(|c| self.data[skip(r, row)][skip(c, col)])
        }))
    }
}

impl<const R: usize, const C: usize, T: Scalar> Matrix<R, C, T> {
    pub fn zero() -> Self {
        Self::new([[T::zero(); C]; R])
    }

    pub fn to_float(self) -> Matrix<R, C, T::Float> {
        self.map(T::to_float)
    }

    /// Matrices can only be divided by a scalar, never by another matrix.
    pub fn try_div(self, rhs: T) -> MathResult<Self> {
        if rhs.is_near_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(self.map(|x| x / rhs))
    }
}

impl<const E: usize, T: Scalar> Matrix<E, E, T> {
    pub fn identity() -> Self {
        Self::new(array::from_fn(|row| {
            array::from_fn(|col| if row == col { T::one() } else { T::zero() })
        }))
    }
}

impl<const E: usize, T: Scalar> Default for Matrix<E, E, T> {
    fn default() -> Self {
        Self::identity()
    }
}

pub trait Determinant<T> {
    fn determinant(&self) -> T;
}

/// Square matrices whose determinant is expanded through cofactors.
pub trait Cofactor<T: Scalar>: Determinant<T> {
    type Submatrix: Determinant<T>;

    /// Fails when `row` or `col` is outside of the matrix.
    fn submatrix(&self, row: usize, col: usize) -> MathResult<Self::Submatrix>;

    fn minor(&self, row: usize, col: usize) -> MathResult<T> {
        Ok(self.submatrix(row, col)?.determinant())
    }

    fn cofactor(&self, row: usize, col: usize) -> MathResult<T> {
        Ok(signed(row, col, self.minor(row, col)?))
    }
}

fn signed<T: Scalar>(row: usize, col: usize, minor: T) -> T {
    if (row + col) % 2 == 1 { -minor } else { minor }
}

impl<T: Scalar> Determinant<T> for Matrix<1, 1, T> {
    fn determinant(&self) -> T {
        self.data[0][0]
    }
}

impl<T: Scalar> Determinant<T> for Matrix<2, 2, T> {
    fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.data;
        a * d - b * c
    }
}

macro_rules! impl_cofactor {
    ($dim:literal => $sub:literal) => {
        impl<T: Scalar> Cofactor<T> for Matrix<$dim, $dim, T> {
            type Submatrix = Matrix<$sub, $sub, T>;

            fn submatrix(&self, row: usize, col: usize) -> MathResult<Self::Submatrix> {
                if row >= $dim || col >= $dim {
                    return Err(MathError::IndexOutOfRange { row, col, dim: $dim });
                }
                Ok(self.without(row, col))
            }
        }
    };
}

/// Cofactor expansion along the first row.
macro_rules! impl_determinant_by_expansion {
    ($dim:literal => $sub:literal) => {
        impl<T: Scalar> Determinant<T> for Matrix<$dim, $dim, T> {
            fn determinant(&self) -> T {
                self.data[0]
                    .iter()
                    .enumerate()
                    .fold(T::zero(), |acc, (col, &x)| {
                        let minor = self.without::<$sub, $sub>(0, col).determinant();
                        acc + x * signed(0, col, minor)
                    })
            }
        }
    };
}

impl_cofactor!(2 => 1);
impl_cofactor!(3 => 2);
impl_cofactor!(4 => 3);

impl_determinant_by_expansion!(3 => 2);
impl_determinant_by_expansion!(4 => 3);

impl<const E: usize, T: Scalar> Matrix<E, E, T>
where
    Self: Cofactor<T>,
{
    pub fn is_invertible(&self) -> bool {
        !self.determinant().is_near_zero()
    }

    /// Integer matrices are promoted to `f64`, floating ones keep their type.
    pub fn inverse(&self) -> MathResult<Matrix<E, E, T::Float>> {
        let determinant = self.determinant();
        if determinant.is_near_zero() {
            return Err(MathError::SingularMatrix {
                determinant: determinant.as_f64(),
            });
        }
        let determinant = determinant.to_float();

        let mut res = Matrix::<E, E, T::Float>::zero();
        for row in 0..E {
            for col in 0..E {
                // transpose the matrix here
                res[(col, row)] = self.cofactor(row, col)?.to_float() / determinant;
            }
        }
        Ok(res)
    }
}

impl Matrix4 {
    #[rustfmt::skip]
    pub const fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::new([
            [1., 0., 0., x],
            [0., 1., 0., y],
            [0., 0., 1., z],
            [0., 0., 0., 1.],
        ])
    }

    #[rustfmt::skip]
    pub const fn scaling(x: f64, y: f64, z: f64) -> Self {
        Self::new([
            [x, 0., 0., 0.],
            [0., y, 0., 0.],
            [0., 0., z, 0.],
            [0., 0., 0., 1.],
        ])
    }

    pub const fn scaling_uniform(f: f64) -> Self {
        Self::scaling(f, f, f)
    }

    pub fn from_translation(offset: Vector<3>) -> Self {
        Self::translation(offset.x(), offset.y(), offset.z())
    }

    pub fn from_scaling(factors: Vector<3>) -> Self {
        Self::scaling(factors.x(), factors.y(), factors.z())
    }

    #[rustfmt::skip]
    pub const fn rotation_x(radians: f64) -> Self {
        let sin_r = numeric::sin(radians);
        let cos_r = numeric::cos(radians);
        Self::new([
            [1., 0., 0., 0.],
            [0., cos_r, -sin_r, 0.],
            [0., sin_r, cos_r, 0.],
            [0., 0., 0., 1.],
        ])
    }

    #[rustfmt::skip]
    pub const fn rotation_y(radians: f64) -> Self {
        let sin_r = numeric::sin(radians);
        let cos_r = numeric::cos(radians);
        Self::new([
            [cos_r, 0., sin_r, 0.],
            [0., 1., 0., 0.],
            [-sin_r, 0., cos_r, 0.],
            [0., 0., 0., 1.],
        ])
    }

    #[rustfmt::skip]
    pub const fn rotation_z(radians: f64) -> Self {
        let sin_r = numeric::sin(radians);
        let cos_r = numeric::cos(radians);
        Self::new([
            [cos_r, -sin_r, 0., 0.],
            [sin_r, cos_r, 0., 0.],
            [0., 0., 1., 0.],
            [0., 0., 0., 1.],
        ])
    }

    #[rustfmt::skip]
    pub const fn shearing(
        x_prop_y: f64,
        x_prop_z: f64,
        y_prop_x: f64,
        y_prop_z: f64,
        z_prop_x: f64,
        z_prop_y: f64,
    ) -> Self {
        Self::new([
            [1., x_prop_y, x_prop_z, 0.],
            [y_prop_x, 1., y_prop_z, 0.],
            [z_prop_x, z_prop_y, 1., 0.],
            [0., 0., 0., 1.],
        ])
    }
}

impl<const R: usize, const C: usize, T: Copy> TryFrom<&[T]> for Matrix<R, C, T> {
    type Error = MathError;

    /// Reads `values` in row-major order.
    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        if values.len() != R * C {
            return Err(MathError::LengthMismatch {
                expected: R * C,
                found: values.len(),
            });
        }
        Ok(Self::new(array::from_fn(|row| {
            array::from_fn(|col| values[row * C + col])
        })))
    }
}

impl<const R: usize, const C: usize, T: Copy> From<[[T; C]; R]> for Matrix<R, C, T> {
    fn from(data: [[T; C]; R]) -> Self {
        Self::new(data)
    }
}

impl<const R: usize, const C: usize, T: ApproxEq> ApproxEq for Matrix<R, C, T> {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(l, r)| l.approx_eq_epsilon(r, epsilon))
    }
}

impl<const R: usize, const C: usize, T: ApproxEq> PartialEq for Matrix<R, C, T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<const R: usize, const C: usize, T: Display + Copy> Display for Matrix<R, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for x in row {
                write!(f, "{x:>12}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<const R: usize, const C: usize, T> ops::Index<(usize, usize)> for Matrix<R, C, T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row][col]
    }
}

impl<const R: usize, const C: usize, T> ops::IndexMut<(usize, usize)> for Matrix<R, C, T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row][col]
    }
}

macro_rules! impl_elementwise_op {
    ($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident, $tok:tt) => {
        impl<const R: usize, const C: usize, T: Scalar> ops::$op_assign for Matrix<R, C, T> {
            fn $fn_assign(&mut self, rhs: Self) {
                for (l, r) in self.data.iter_mut().flatten().zip(rhs.data.iter().flatten()) {
                    *l = *l $tok *r;
                }
            }
        }

        impl<const R: usize, const C: usize, T: Scalar> ops::$op for Matrix<R, C, T> {
            type Output = Self;

            fn $fn(mut self, rhs: Self) -> Self::Output {
                ops::$op_assign::$fn_assign(&mut self, rhs);
                self
            }
        }
    };
}

macro_rules! impl_uniform_op {
    ($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident, $tok:tt) => {
        impl<const R: usize, const C: usize, T: Scalar> ops::$op_assign<T> for Matrix<R, C, T> {
            fn $fn_assign(&mut self, rhs: T) {
                for l in self.data.iter_mut().flatten() {
                    *l = *l $tok rhs;
                }
            }
        }

        impl<const R: usize, const C: usize, T: Scalar> ops::$op<T> for Matrix<R, C, T> {
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

impl_uniform_op!(Add, add, AddAssign, add_assign, +);
impl_uniform_op!(Sub, sub, SubAssign, sub_assign, -);
impl_uniform_op!(Mul, mul, MulAssign, mul_assign, *);

impl<const R: usize, const C: usize, T: Scalar> ops::Neg for Matrix<R, C, T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl<const R: usize, const C: usize, const K: usize, T: Scalar> ops::Mul<Matrix<C, K, T>>
    for Matrix<R, C, T>
{
    type Output = Matrix<R, K, T>;

    fn mul(self, rhs: Matrix<C, K, T>) -> Self::Output {
        Matrix::new(array::from_fn(|row| {
            array::from_fn(|col| {
                (0..C).fold(T::zero(), |acc, i| acc + self.data[row][i] * rhs.data[i][col])
            })
        }))
    }
}

impl<const E: usize, T: Scalar> ops::MulAssign<Matrix<E, E, T>> for Matrix<E, E, T> {
    fn mul_assign(&mut self, rhs: Self) {
        for row in 0..E {
            // the row is overwritten while it is still being read
            let buffer = self.data[row];
            for col in 0..E {
                self.data[row][col] =
                    (0..E).fold(T::zero(), |acc, i| acc + buffer[i] * rhs.data[i][col]);
            }
        }
    }
}

impl<const R: usize, const C: usize, T: Scalar> ops::Mul<Vector<C, T>> for Matrix<R, C, T> {
    type Output = Vector<R, T>;

    fn mul(self, rhs: Vector<C, T>) -> Self::Output {
        Vector::new(array::from_fn(|row| {
            self.data[row]
                .iter()
                .zip(rhs.iter())
                .fold(T::zero(), |acc, (&m, &v)| acc + m * v)
        }))
    }
}
