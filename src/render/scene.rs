use std::time::Instant;

use indicatif::ProgressBar;
use log::{debug, info};

use crate::math::{
    error::MathResult,
    vector::{Color, Vec4},
};

use super::{
    canvas::Canvas,
    intersection::hit,
    light::{PointLight, lighting},
    material::Material,
    object::{Object, Shape, sphere::Sphere},
    ray::Ray,
};

/// A single object lit by a point light, seen from a pinhole camera looking down +z.
///
/// Pixel `(row, col)` of a `width x height` image is shot through the point
/// `(col - width / 2, row - height / 2, plane_z)`.
#[derive(Debug, Clone)]
pub struct Scene {
    object: Object,
    light: PointLight,
    camera_origin: Vec4,
    plane_z: f64,
}

impl Scene {
    pub const DEFAULT_CAMERA_Z: f64 = -1.5;
    pub const DEFAULT_PLANE_Z: f64 = 500.;

    pub fn new(object: Object, light: PointLight) -> Self {
        Self {
            object,
            light,
            camera_origin: Vec4::point(0., 0., Self::DEFAULT_CAMERA_Z),
            plane_z: Self::DEFAULT_PLANE_Z,
        }
    }

    pub fn with_camera(mut self, camera_origin: Vec4, plane_z: f64) -> Self {
        self.camera_origin = camera_origin;
        self.plane_z = plane_z;
        self
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut Object {
        &mut self.object
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn ray_for_pixel(&self, row: usize, col: usize, width: usize, height: usize) -> Ray {
        let scene_x = col as f64 - width as f64 / 2.;
        let scene_y = row as f64 - height as f64 / 2.;
        let plane_point = Vec4::point(scene_x, scene_y, self.plane_z);

        Ray::new(
            self.camera_origin,
            (plane_point - self.camera_origin).normalize(),
        )
    }

    /// Shaded color where `ray` first hits the object, `None` on a miss.
    pub fn color_at(&self, ray: &Ray) -> Option<Color> {
        let hit = hit(self.object.intersect(ray)?)?;

        let point = ray.position(hit.time());
        let normal = hit.object().normal_at(point);
        let eye = -ray.direction;

        Some(lighting(
            hit.object().material(),
            &self.light,
            point,
            eye,
            normal,
        ))
    }

    /// Renders row by row, pixels missing the object stay black.
    pub fn render(
        &self,
        width: usize,
        height: usize,
        progressbar: Option<ProgressBar>,
    ) -> MathResult<Canvas> {
        info!("rendering image with {width}x{height} resolution");
        let now = Instant::now();

        let mut canvas = Canvas::new(width, height);
        let mut hits = 0;

        for row in 0..height {
            for col in 0..width {
                let ray = self.ray_for_pixel(row, col, width, height);
                if let Some(color) = self.color_at(&ray) {
                    canvas.write_pixel(row, col, color.to_rgb8())?;
                    hits += 1;
                }
            }
            if let Some(pb) = &progressbar {
                pb.inc(width as u64);
            }
        }

        if let Some(pb) = progressbar {
            pb.finish_and_clear();
        }
        debug!("{hits} of {} pixels hit the object", width * height);
        info!("render time: {:?}", now.elapsed());
        Ok(canvas)
    }
}

impl Default for Scene {
    fn default() -> Self {
        let sphere = Sphere::new(Material::with_color(Color::new([1., 0.2, 1.])));
        let object = Object::new(Shape::Sphere(sphere));
        let light = PointLight::new(Vec4::point(-10., 10., -10.), Color::white());

        Self::new(object, light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        math::{matrix::Matrix4, vector::Rgb8},
    };

    #[test]
    fn default_scene() {
        let scene = Scene::default();

        assert_approx_eq_low_prec!(scene.object().material().color(), Color::new([1., 0.2, 1.]));
        assert_approx_eq_low_prec!(scene.light().position(), Vec4::point(-10., 10., -10.));
        assert_approx_eq_low_prec!(scene.light().intensity(), Color::white());
        assert_approx_eq_low_prec!(scene.camera_origin, Vec4::point(0., 0., -1.5));
        assert_approx_eq_low_prec!(scene.plane_z, 500.);
    }

    #[test]
    fn center_ray_goes_straight_ahead() {
        let scene = Scene::default();
        let ray = scene.ray_for_pixel(50, 50, 100, 100);

        assert_eq!(
            ray,
            Ray::new(Vec4::point(0., 0., -1.5), Vec4::direction(0., 0., 1.))
        );
    }

    #[test]
    fn color_at_hit_and_miss() {
        let mut scene = Scene::default();
        let center = Ray::new(Vec4::point(0., 0., -5.), Vec4::direction(0., 0., 1.));
        let miss = Ray::new(Vec4::point(0., 5., -5.), Vec4::direction(0., 0., 1.));

        assert!(scene.color_at(&center).is_some());
        assert_eq!(scene.color_at(&miss), None);

        // light behind the sphere leaves only the ambient term
        scene.light = PointLight::new(Vec4::point(0., 0., 10.), Color::white());
        assert_approx_eq_low_prec!(
            scene.color_at(&center).unwrap_or_default(),
            Color::new([0.1, 0.02, 0.1])
        );
    }

    #[test]
    fn render_small_image() {
        let scene = Scene::default().with_camera(Vec4::point(0., 0., -1.5), 1.);
        let canvas = scene.render(11, 11, None).unwrap();

        assert_eq!(canvas.width(), 11);
        assert_eq!(canvas.height(), 11);
        assert_ne!(canvas.pixel_at(5, 5), Ok(Rgb8::default()));
        assert_eq!(canvas.pixel_at(0, 0), Ok(Rgb8::default()));
    }

    #[test]
    fn transformed_object_is_rendered() {
        let mut scene = Scene::default().with_camera(Vec4::point(0., 0., -1.5), 1.);
        scene
            .object_mut()
            .set_transformation(Matrix4::translation(0., 3., 0.))
            .unwrap();
        let canvas = scene.render(11, 11, None).unwrap();

        assert_eq!(canvas.pixel_at(5, 5), Ok(Rgb8::default()));
        assert_ne!(canvas.pixel_at(10, 5), Ok(Rgb8::default()));
    }

    #[test]
    fn render_of_ray_behind_camera_stays_black() {
        let scene = Scene::default().with_camera(Vec4::point(0., 0., 5.), 500.);
        let canvas = scene.render(4, 4, None).unwrap();

        assert!(canvas.as_u8_rgb().iter().all(|&channel| channel == 0));
    }
}
