use crate::math::vector::{Color, Vec4};

use super::material::Material;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    position: Vec4,
    intensity: Color,
}

impl PointLight {
    pub fn new(position: Vec4, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }

    pub fn position(&self) -> Vec4 {
        self.position
    }
}

/// Phong shading of `point`. The result is not clamped.
pub fn lighting(
    material: &Material,
    light: &PointLight,
    point: Vec4,
    eye_v: Vec4,
    normal_v: Vec4,
) -> Color {
    // combine surface color with lights's intensity (color)
    let effective_color = material.color() * light.intensity();

    // direction to the light source
    let light_v = (light.position() - point).normalize();

    let ambient = effective_color * material.ambient();

    let light_dot_normal = light_v.dot(&normal_v);

    // light is on the other side of the surface
    if light_dot_normal < 0. {
        return ambient;
    }
    let diffuse = effective_color * material.diffuse() * light_dot_normal;

    let reflect_v = (-light_v).reflect(&normal_v);
    let reflect_dot_eye = reflect_v.dot(&eye_v);

    // light reflects away from the eye
    let specular = if reflect_dot_eye > 0. {
        let factor = reflect_dot_eye.powf(material.shininess());
        light.intensity() * material.specular() * factor
    } else {
        Color::black()
    };

    ambient + diffuse + specular
}
