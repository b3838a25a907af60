pub mod sphere;

use log::debug;

use crate::math::{error::MathResult, matrix::Matrix4, vector::Vec4};

use self::sphere::Sphere;

use super::{
    intersection::{Intersection, Intersections},
    material::Material,
    ray::Ray,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
}

/// A shape placed in the world by a transformation.
///
/// The inverse transformation is computed once, whenever the transformation is set, so the two
/// always match.
#[derive(Debug, Clone)]
pub struct Object {
    shape: Shape,
    transformation: Matrix4,
    transformation_inverse: Matrix4,
}

impl Object {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            transformation: Matrix4::identity(),
            transformation_inverse: Matrix4::identity(),
        }
    }

    pub fn sphere() -> Self {
        Self::new(Shape::Sphere(Sphere::default()))
    }

    /// Fails when `matrix` is not invertible.
    pub fn with_transformation(shape: Shape, matrix: Matrix4) -> MathResult<Self> {
        let mut object = Self::new(shape);
        object.set_transformation(matrix)?;
        Ok(object)
    }

    /// Fails when `matrix` is not invertible, leaving the object unchanged.
    pub fn set_transformation(&mut self, matrix: Matrix4) -> MathResult<()> {
        let inverse = matrix.inverse()?;
        self.transformation = matrix;
        self.transformation_inverse = inverse;
        debug!("object transformation set to\n{}", self.transformation);
        Ok(())
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn transformation(&self) -> &Matrix4 {
        &self.transformation
    }

    pub fn transformation_inverse(&self) -> &Matrix4 {
        &self.transformation_inverse
    }

    pub fn material(&self) -> &Material {
        match &self.shape {
            Shape::Sphere(sphere) => sphere.material(),
        }
    }

    pub fn material_mut(&mut self) -> &mut Material {
        match &mut self.shape {
            Shape::Sphere(sphere) => sphere.material_mut(),
        }
    }

    pub fn intersect(&self, world_ray: &Ray) -> Option<Intersections<'_>> {
        let object_ray = world_ray.transformed_by(&self.transformation_inverse);
        let [t1, t2] = match &self.shape {
            Shape::Sphere(sphere) => sphere.local_intersect(&object_ray)?,
        };
        Some([Intersection::new(t1, self), Intersection::new(t2, self)])
    }

    pub fn normal_at(&self, world_point: Vec4) -> Vec4 {
        let object_point = self.transformation_inverse * world_point;
        let object_normal = match &self.shape {
            Shape::Sphere(sphere) => sphere.local_normal_at(object_point),
        };
        // the inverse transpose also moves w, which has to stay 0 for a direction
        let world_normal = (self.transformation_inverse.transpose() * object_normal).with_w(0.);
        world_normal.normalize()
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::sphere()
    }
}
