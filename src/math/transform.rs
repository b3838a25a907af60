use std::str::FromStr;

use thiserror::Error;

use super::{matrix::Matrix4, vector::Vec4};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Single affine transformation, turned into a matrix with [`Matrix4::from`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transformation {
    Scaling(f64, f64, f64),
    Translation(f64, f64, f64),
    Rotation(Axis, f64),
    Shearing(f64, f64, f64, f64, f64, f64),
    Identity,
}

impl Transformation {
    pub fn scaling_uniform(f: f64) -> Self {
        Self::Scaling(f, f, f)
    }
}

impl From<Transformation> for Matrix4 {
    fn from(val: Transformation) -> Self {
        match val {
            Transformation::Scaling(x, y, z) => Matrix4::scaling(x, y, z),
            Transformation::Translation(x, y, z) => Matrix4::translation(x, y, z),
            Transformation::Rotation(axis, radians) => match axis {
                Axis::X => Matrix4::rotation_x(radians),
                Axis::Y => Matrix4::rotation_y(radians),
                Axis::Z => Matrix4::rotation_z(radians),
            },
            Transformation::Shearing(xpy, xpz, ypx, ypz, zpx, zpy) => {
                Matrix4::shearing(xpy, xpz, ypx, ypz, zpx, zpy)
            }
            Transformation::Identity => Matrix4::identity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTransformationError {
    #[error("unknown transformation `{0}`")]
    UnknownKind(String),
    #[error("`{kind}` expects {expected} comma separated values, got {found}")]
    ArgumentCount {
        kind: String,
        expected: &'static str,
        found: usize,
    },
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}

/// Parses `kind:args`, e.g. `translate:1,0,-2`, `scale:2`, `rotate-y:1.57`, `shear:1,0,0,0,0,0`
/// or `identity`. Angles are in radians.
impl FromStr for Transformation {
    type Err = ParseTransformationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, args) = s.split_once(':').unwrap_or((s, ""));
        let kind = kind.trim();
        let values = args
            .split(',')
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .map(|arg| {
                arg.parse::<f64>()
                    .map_err(|_| ParseTransformationError::InvalidNumber(arg.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let arg_count = |expected| ParseTransformationError::ArgumentCount {
            kind: kind.to_string(),
            expected,
            found: values.len(),
        };

        let transformation = match (kind, values.as_slice()) {
            ("identity", []) => Self::Identity,
            ("translate", &[x, y, z]) => Self::Translation(x, y, z),
            ("scale", &[f]) => Self::scaling_uniform(f),
            ("scale", &[x, y, z]) => Self::Scaling(x, y, z),
            ("rotate-x", &[r]) => Self::Rotation(Axis::X, r),
            ("rotate-y", &[r]) => Self::Rotation(Axis::Y, r),
            ("rotate-z", &[r]) => Self::Rotation(Axis::Z, r),
            ("shear", &[xpy, xpz, ypx, ypz, zpx, zpy]) => {
                Self::Shearing(xpy, xpz, ypx, ypz, zpx, zpy)
            }
            ("identity", _) => return Err(arg_count("0")),
            ("translate", _) => return Err(arg_count("3")),
            ("scale", _) => return Err(arg_count("1 or 3")),
            ("rotate-x" | "rotate-y" | "rotate-z", _) => return Err(arg_count("1")),
            ("shear", _) => return Err(arg_count("6")),
            _ => return Err(ParseTransformationError::UnknownKind(kind.to_string())),
        };
        Ok(transformation)
    }
}

/// Ordered list of transformations, the first one is applied first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transformations {
    data: Vec<Transformation>,
}

impl Transformations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vec(&self) -> &[Transformation] {
        &self.data
    }

    pub fn push(&mut self, t: Transformation) {
        self.data.push(t);
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<Transformation>> for Transformations {
    fn from(val: Vec<Transformation>) -> Self {
        Self { data: val }
    }
}

impl From<&Transformations> for Matrix4 {
    fn from(val: &Transformations) -> Self {
        Matrix4::from(val.vec())
    }
}

impl From<&[Transformation]> for Matrix4 {
    fn from(val: &[Transformation]) -> Self {
        val.iter().fold(Matrix4::identity(), |acc, t| {
            acc.transform_new(&Matrix4::from(*t))
        })
    }
}

/// Anything that can be moved around by a transformation matrix.
///
/// Chained calls apply in call order: `m.scale(..).translate(..)` scales first.
pub trait Transform: Sized + Clone {
    fn transform(&mut self, matrix: &Matrix4);

    fn transform_new(&self, matrix: &Matrix4) -> Self {
        let mut copy = self.clone();
        copy.transform(matrix);
        copy
    }

    fn transformed(self) -> Self {
        self
    }

    fn transform_chain(&mut self, transformation: &Matrix4) -> &mut Self {
        self.transform(transformation);
        self
    }

    fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix4::translation(x, y, z))
    }

    fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix4::scaling(x, y, z))
    }

    fn scale_uniform(&mut self, factor: f64) -> &mut Self {
        self.transform_chain(&Matrix4::scaling_uniform(factor))
    }

    fn rotate_x(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix4::rotation_x(radians))
    }

    fn rotate_y(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix4::rotation_y(radians))
    }

    fn rotate_z(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix4::rotation_z(radians))
    }

    fn sheare(
        &mut self,
        x_prop_y: f64,
        x_prop_z: f64,
        y_prop_x: f64,
        y_prop_z: f64,
        z_prop_x: f64,
        z_prop_y: f64,
    ) -> &mut Self {
        self.transform_chain(&Matrix4::shearing(
            x_prop_y, x_prop_z, y_prop_x, y_prop_z, z_prop_x, z_prop_y,
        ))
    }
}

impl Transform for Matrix4 {
    fn transform(&mut self, matrix: &Matrix4) {
        *self = *matrix * *self;
    }
}

impl Transform for Vec4 {
    fn transform(&mut self, matrix: &Matrix4) {
        *self = *matrix * *self;
    }
}
