use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use clap::ValueEnum;
use log::info;

use crate::{
    error::Result,
    math::{
        error::{MathError, MathResult},
        vector::Rgb8,
    },
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Ppm,
    Png,
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Ppm => write!(f, "ppm"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// Grid of quantized pixels, addressed by `(row, col)` with row 0 at the top.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgb8>,
}

impl Canvas {
    pub fn with_color(width: usize, height: usize, color: Rgb8) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; height * width],
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_color(width, height, Rgb8::default())
    }

    fn index(&self, row: usize, col: usize) -> MathResult<usize> {
        if row >= self.height || col >= self.width {
            return Err(MathError::IndexOutOfRange {
                row,
                col,
                dim: self.width.max(self.height),
            });
        }
        Ok(self.width * row + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_at(&self, row: usize, col: usize) -> MathResult<Rgb8> {
        Ok(self.pixels[self.index(row, col)?])
    }

    pub fn write_pixel(&mut self, row: usize, col: usize, new_color: Rgb8) -> MathResult<()> {
        let id = self.index(row, col)?;
        self.pixels[id] = new_color;
        Ok(())
    }

    pub fn as_u8_rgb(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|color| *color.data()).collect()
    }
}

/// saving image in ppm format
impl Canvas {
    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    fn ppm_data(&self) -> String {
        self.pixels
            .chunks(self.width.max(1))
            .map(|row| {
                let line = row
                    .iter()
                    .flat_map(|color| color.data().map(|val| val.to_string()))
                    .collect::<Vec<_>>()
                    .join(" ");
                line + "\n"
            })
            .collect()
    }

    pub fn to_ppm(&self) -> String {
        self.ppm_header() + &self.ppm_data()
    }

    pub fn save_to_ppm(&self, writer: impl Write) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        writer.write_all(self.to_ppm().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// saving image in png format
impl Canvas {
    pub fn save_to_png(&self, writer: impl Write) -> Result<()> {
        let mut encoder = png::Encoder::new(
            BufWriter::new(writer),
            self.width as u32,
            self.height as u32,
        );
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.as_u8_rgb())?;
        writer.finish()?;
        Ok(())
    }
}

impl Canvas {
    pub fn save_to_file(&self, path: &Path, format: ImageFormat) -> Result<()> {
        let file = File::create(path)?;
        match format {
            ImageFormat::Ppm => self.save_to_ppm(file)?,
            ImageFormat::Png => self.save_to_png(file)?,
        }
        info!(
            "saved {}x{} {} image to {}",
            self.width,
            self.height,
            format,
            path.display()
        );
        Ok(())
    }
}
