pub mod error;

pub mod math {
    pub mod approx_eq;
    pub mod error;
    pub mod matrix;
    pub mod numeric;
    pub mod scalar;
    pub mod transform;
    pub mod vector;
}

pub mod render {
    pub mod canvas;
    pub mod intersection;
    pub mod light;
    pub mod material;
    pub mod object;
    pub mod ray;
    pub mod scene;
}
