use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::{LevelFilter, debug, info};
use raytracer_kernel::{
    math::{
        matrix::Matrix4,
        transform::{Transformation, Transformations},
        vector::{Vec4, Vector},
    },
    render::{canvas::ImageFormat, light::PointLight, scene::Scene},
};

const DEFAULT_WIDTH: usize = 1000;
const DEFAULT_HEIGHT: usize = 1000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Renders a single shaded sphere lit by a point light
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The format of the output image
    #[clap(short = 'f', long, default_value = "ppm")]
    image_format: ImageFormat,

    /// The output path of the rendered image.
    /// By default it's `./sphere.<image_format>`
    #[clap(short, long)]
    output_path: Option<PathBuf>,

    /// Width (in pixels) of the output image
    #[clap(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Height (in pixels) of the output image
    #[clap(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Surface color of the sphere as `r,g,b`
    #[clap(long, value_parser = parse_triple)]
    color: Option<Vector<3>>,

    /// Position of the light as `x,y,z`
    #[clap(long, value_parser = parse_triple)]
    light_position: Option<Vector<3>>,

    /// Intensity (color) of the light as `r,g,b`
    #[clap(long, value_parser = parse_triple)]
    light_intensity: Option<Vector<3>>,

    /// Transformation applied to the sphere, repeat to chain them in order.
    /// One of `translate:x,y,z`, `scale:f`, `scale:x,y,z`, `rotate-x:rad`, `rotate-y:rad`,
    /// `rotate-z:rad`, `shear:xy,xz,yx,yz,zx,zy` or `identity`
    #[clap(short, long = "transform")]
    transformations: Vec<Transformation>,

    /// Z coordinate of the camera, which looks down the +z axis
    #[clap(long, default_value_t = Scene::DEFAULT_CAMERA_Z, allow_hyphen_values = true)]
    camera_z: f64,

    /// Z coordinate of the projection plane the pixels are placed on
    #[clap(long, default_value_t = Scene::DEFAULT_PLANE_Z, allow_hyphen_values = true)]
    plane_z: f64,

    /// Log level, overridden by `RUST_LOG`
    #[clap(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: LevelFilter,
}

fn parse_triple(s: &str) -> Result<Vector<3>, String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in `{s}`: {e}"))?;
    Vector::try_from(values.as_slice()).map_err(|e| format!("invalid triple `{s}`: {e}"))
}

fn build_scene(args: &Args) -> Result<Scene, String> {
    let mut scene = Scene::default();

    if let Some(color) = args.color {
        scene.object_mut().material_mut().set_color(color);
    }

    let mut transformations = Transformations::new();
    for t in &args.transformations {
        transformations.push(*t);
    }
    if !transformations.is_empty() {
        scene
            .object_mut()
            .set_transformation(Matrix4::from(&transformations))
            .map_err(|e| format!("Invalid sphere transformation: {}", e))?;
    }

    let default_light = *scene.light();
    let light_position = args
        .light_position
        .map(|p| Vec4::point(p.x(), p.y(), p.z()))
        .unwrap_or(default_light.position());
    let light_intensity = args
        .light_intensity
        .unwrap_or(default_light.intensity());

    let object = scene.object().clone();
    let scene = Scene::new(object, PointLight::new(light_position, light_intensity))
        .with_camera(Vec4::point(0., 0., args.camera_z), args.plane_z);

    debug!("sphere material: {:?}", scene.object().material());
    debug!("light: {:?}", scene.light());
    Ok(scene)
}

fn progress_bar(width: usize, height: usize) -> indicatif::ProgressBar {
    let style = indicatif::ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] {wide_bar:.cyan/blue} pixels shaded: {human_pos}/{human_len} {percent}% ({eta})",
    )
    .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar());
    indicatif::ProgressBar::new(width as u64 * height as u64).with_style(style)
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.to_string()))
        .init();

    let scene = build_scene(&args)?;
    let canvas = scene
        .render(
            args.width,
            args.height,
            Some(progress_bar(args.width, args.height)),
        )
        .map_err(|e| format!("Failed to render scene: {}", e))?;

    let output_path = args
        .output_path
        .unwrap_or_else(|| PathBuf::from(format!("sphere.{}", args.image_format)));
    canvas
        .save_to_file(&output_path, args.image_format)
        .map_err(|e| format!("Failed to save image: {}", e))?;

    info!("done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raytracer_kernel::{math::vector::Color, render::material::Material};

    #[test]
    fn parse_triples() {
        assert_eq!(parse_triple("1, 0.2,1"), Ok(Color::new([1., 0.2, 1.])));
        assert!(parse_triple("1,2").is_err());
        assert!(parse_triple("1,x,3").is_err());
    }

    #[test]
    fn default_args_build_default_scene() {
        let args = Args::parse_from(["raytracer-kernel"]);
        let scene = build_scene(&args).unwrap();
        let default = Scene::default();

        assert_eq!(scene.light(), default.light());
        assert_eq!(scene.object().material(), &Material::with_color(Color::new([1., 0.2, 1.])));
        assert_eq!(args.image_format, ImageFormat::Ppm);
        assert_eq!(args.width, DEFAULT_WIDTH);
    }

    #[test]
    fn args_override_scene() {
        let args = Args::parse_from([
            "raytracer-kernel",
            "--color",
            "0.5,0.5,1",
            "--light-position",
            "0,0,-10",
            "-t",
            "scale:2",
            "-t",
            "translate:0,1,0",
            "--camera-z",
            "-3",
        ]);
        let scene = build_scene(&args).unwrap();

        assert_eq!(scene.object().material().color(), Color::new([0.5, 0.5, 1.]));
        assert_eq!(scene.light().position(), Vec4::point(0., 0., -10.));
        assert_eq!(
            *scene.object().transformation(),
            Matrix4::translation(0., 1., 0.) * Matrix4::scaling_uniform(2.)
        );
        assert_eq!(args.camera_z, -3.);
    }

    #[test]
    fn singular_transformation_is_rejected() {
        let args = Args::parse_from(["raytracer-kernel", "-t", "scale:0"]);
        assert!(build_scene(&args).is_err());
    }
}
