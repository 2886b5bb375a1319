//! Icon description: fixed configuration and the descriptors derived from it.

use std::path::PathBuf;

use crate::color::{HexColor, hsl_to_rgb8};
use crate::foundation::core::{Canvas, Point};
use crate::geometry::{petal_angles, petal_path};

/// Site background (peach).
pub const BACKGROUND: HexColor = HexColor::rgb(0xff, 0xda, 0xb9);
pub const ICON_SIZE: u32 = 180;
pub const OUTPUT_PATH: &str = "public/apple-touch-icon.png";

/// Every knob of the generated icon. The binary only ever uses [`IconConfig::default`].
#[derive(Clone, Debug, PartialEq)]
pub struct IconConfig {
    pub canvas: Canvas,
    pub background: HexColor,
    pub petal_count: u32,
    pub petal_radius: f64,
    /// Center circle radius as a fraction of `petal_radius`.
    pub center_radius_ratio: f64,
    pub starting_angle: f64,
    pub petal_hue: f64,
    pub petal_saturation: f64,
    pub petal_lightness: f64,
    /// Added to `petal_hue` to get the center hue.
    pub center_hue_offset: f64,
    pub center_saturation: f64,
    pub center_lightness: f64,
    pub stroke_width: f64,
    pub output_path: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::square(ICON_SIZE),
            background: BACKGROUND,
            petal_count: 8,
            petal_radius: 80.0,
            center_radius_ratio: 0.14,
            starting_angle: 0.0,
            petal_hue: 30.0,
            petal_saturation: 70.0,
            petal_lightness: 50.0,
            center_hue_offset: -20.0,
            center_saturation: 65.0,
            center_lightness: 45.0,
            stroke_width: 2.0,
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl IconConfig {
    pub fn center_hue(&self) -> f64 {
        self.petal_hue + self.center_hue_offset
    }

    /// Where the markup goes when it cannot be rasterized: the output path with an `.svg`
    /// extension.
    pub fn svg_fallback_path(&self) -> PathBuf {
        self.output_path.with_extension("svg")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Flower {
    pub center: Point,
    pub petal_radius: f64,
    pub starting_angle: f64,
    /// SVG path data, one entry per petal, in angle order.
    pub petal_paths: Vec<String>,
    pub petal_color: HexColor,
    pub center_color: HexColor,
    pub center_radius: f64,
}

impl Flower {
    pub fn from_config(config: &IconConfig) -> Self {
        let center = config.canvas.center();
        let petal_paths = petal_angles(config.petal_count, config.starting_angle)
            .into_iter()
            .map(|angle| petal_path(center, config.petal_radius, angle))
            .collect();

        Self {
            center,
            petal_radius: config.petal_radius,
            starting_angle: config.starting_angle,
            petal_paths,
            petal_color: hsl_to_rgb8(
                config.petal_hue,
                config.petal_saturation,
                config.petal_lightness,
            ),
            center_color: hsl_to_rgb8(
                config.center_hue(),
                config.center_saturation,
                config.center_lightness,
            ),
            center_radius: config.petal_radius * config.center_radius_ratio,
        }
    }

    pub fn petal_count(&self) -> usize {
        self.petal_paths.len()
    }
}

/// Everything needed to serialize the icon as SVG markup.
#[derive(Clone, Debug, PartialEq)]
pub struct IconImage {
    pub canvas: Canvas,
    pub background: HexColor,
    pub flower: Flower,
    pub stroke_width: f64,
}

impl IconImage {
    pub fn from_config(config: &IconConfig) -> Self {
        Self {
            canvas: config.canvas,
            background: config.background,
            flower: Flower::from_config(config),
            stroke_width: config.stroke_width,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/flower.rs"]
mod tests;
