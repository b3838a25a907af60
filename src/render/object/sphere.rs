use crate::{
    math::vector::Vec4,
    render::{material::Material, ray::Ray},
};

/// Sphere of radius 1 centered at the origin of object space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sphere {
    material: Material,
}

impl Sphere {
    pub fn new(material: Material) -> Self {
        Self { material }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    fn center() -> Vec4 {
        Vec4::point(0., 0., 0.)
    }

    pub fn local_normal_at(&self, object_point: Vec4) -> Vec4 {
        object_point - Self::center()
    }

    /// Both roots in ascending order, `None` when the ray misses.
    pub fn local_intersect(&self, object_ray: &Ray) -> Option<[f64; 2]> {
        let vector_sphere_to_ray = object_ray.origin - Self::center();

        let a = object_ray.direction.dot(&object_ray.direction);
        let b = 2. * object_ray.direction.dot(&vector_sphere_to_ray);
        let c = vector_sphere_to_ray.dot(&vector_sphere_to_ray) - 1.;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. || a == 0. {
            return None;
        }

        let delta_sqrt = discriminant.sqrt();
        Some([(-b - delta_sqrt) / (2. * a), (-b + delta_sqrt) / (2. * a)])
    }
}
