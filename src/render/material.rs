use crate::math::vector::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    color: Color,
    ambient: f64,   // <0;1>
    diffuse: f64,   // <0;1>
    specular: f64,  // <0;1>
    shininess: f64, // <10;inf) (typically up to 200.0)
}

impl Material {
    pub const DEFAULT_AMBIENT: f64 = 0.1;
    pub const DEFAULT_DIFFUSE: f64 = 0.9;
    pub const DEFAULT_SPECULAR: f64 = 0.9;
    pub const DEFAULT_SHININESS: f64 = 200.;

    pub fn new(color: Color, ambient: f64, diffuse: f64, specular: f64, shininess: f64) -> Self {
        Self {
            color,
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    pub fn with_color(color: Color) -> Self {
        Self::new(
            color,
            Self::DEFAULT_AMBIENT,
            Self::DEFAULT_DIFFUSE,
            Self::DEFAULT_SPECULAR,
            Self::DEFAULT_SHININESS,
        )
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    pub fn diffuse(&self) -> f64 {
        self.diffuse
    }

    pub fn specular(&self) -> f64 {
        self.specular
    }

    pub fn shininess(&self) -> f64 {
        self.shininess
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_ambient(&mut self, ambient: f64) {
        self.ambient = ambient;
    }

    pub fn set_diffuse(&mut self, diffuse: f64) {
        self.diffuse = diffuse;
    }

    pub fn set_specular(&mut self, specular: f64) {
        self.specular = specular;
    }

    pub fn set_shininess(&mut self, shininess: f64) {
        self.shininess = shininess;
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::with_color(Color::white())
    }
}
