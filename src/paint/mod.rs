//! Toolkit-independent paint canvas: a fixed-size RGB raster, brush state,
//! shape stamping, a linear undo history and whole-image load/save.

mod brush;
mod font;
mod raster;
mod surface;

pub use brush::*;
pub use raster::{draw_line, draw_text, fill_disc, fill_square};
pub use surface::*;

use std::path::PathBuf;
use thiserror::Error;

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 400;

pub type Color = image::Rgb<u8>;
pub type RasterImage = image::RgbImage;

pub const WHITE: Color = image::Rgb([255, 255, 255]);
pub const BLACK: Color = image::Rgb([0, 0, 0]);

/// Pointer position in canvas pixel coordinates. May lie outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Error)]
pub enum PaintError {
    #[error("failed to save image to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to load image from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unknown brush '{0}', expected one of: circle, square, line")]
    UnknownBrush(String),
}

/// A fresh all-white canvas
pub fn blank_canvas() -> RasterImage {
    RasterImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, WHITE)
}
