//! Procedural flower touch icon.
//!
//! The icon is laid out from a handful of fixed constants ([`IconConfig`]), serialized as SVG
//! markup ([`IconImage::to_svg`]) and rasterized to a square PNG through a [`Rasterizer`].
//! When the crate is built without the `raster` feature the markup itself is written instead.
#![forbid(unsafe_code)]

pub mod color;
pub mod flower;
mod foundation;
pub mod geometry;
pub mod icon;
pub mod raster;
mod svg;

pub use color::{HexColor, hsl_to_hex, hsl_to_rgb8};
pub use flower::{Flower, IconConfig, IconImage};
pub use foundation::core::{BezPath, Canvas, Point};
pub use foundation::error::{IconError, IconResult};
pub use geometry::{petal_angles, petal_bez_path, petal_path, polar};
pub use icon::{IconOutcome, write_icon};
pub use raster::{Rasterizer, ResvgRasterizer};
