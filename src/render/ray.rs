use crate::math::{
    approx_eq::ApproxEq,
    matrix::{Matrix, Matrix4},
    scalar::Scalar,
    transform::Transform,
    vector::Vector,
};

#[derive(Debug, Clone, Copy)]
pub struct Ray<T = f64> {
    pub origin: Vector<4, T>,
    pub direction: Vector<4, T>,
}

impl<T: Scalar> Ray<T> {
    pub fn new(origin: Vector<4, T>, direction: Vector<4, T>) -> Self {
        Self { origin, direction }
    }

    pub fn position(&self, time: T) -> Vector<4, T> {
        self.origin + self.direction * time
    }

    /// Returns a new ray, `self` is left untouched.
    pub fn transformed_by(&self, matrix: &Matrix<4, 4, T>) -> Self {
        Self::new(*matrix * self.origin, *matrix * self.direction)
    }
}

impl Transform for Ray {
    fn transform(&mut self, matrix: &Matrix4) {
        *self = self.transformed_by(matrix);
    }
}

impl<T: ApproxEq> ApproxEq for Ray<T> {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.origin.approx_eq_epsilon(&other.origin, epsilon)
            && self.direction.approx_eq_epsilon(&other.direction, epsilon)
    }
}

impl<T: ApproxEq> PartialEq for Ray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}
