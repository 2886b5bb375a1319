use std::path::Path;

use crate::foundation::error::{IconError, IconResult};

/// Turns SVG markup into a PNG file of a fixed pixel size.
pub trait Rasterizer {
    /// Write `svg` to `out` as a `width`×`height` PNG.
    ///
    /// Returns [`IconError::RasterUnavailable`] when the capability is missing from this build;
    /// any other error means rasterization was attempted and failed.
    fn rasterize(&self, svg: &str, out: &Path, width: u32, height: u32) -> IconResult<()>;
}

/// `usvg` + `resvg` rasterizer, encoded with `image`. Needs the `raster` feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResvgRasterizer;

impl ResvgRasterizer {
    pub fn is_available() -> bool {
        cfg!(feature = "raster")
    }
}

impl Rasterizer for ResvgRasterizer {
    #[cfg(feature = "raster")]
    fn rasterize(&self, svg: &str, out: &Path, width: u32, height: u32) -> IconResult<()> {
        let rgba = rasterize_svg_to_rgba8(svg, width, height)?;
        write_png(out, &rgba, width, height)
    }

    #[cfg(not(feature = "raster"))]
    fn rasterize(&self, _svg: &str, _out: &Path, _width: u32, _height: u32) -> IconResult<()> {
        Err(IconError::raster_unavailable(
            "built without the `raster` feature",
        ))
    }
}

/// Render `svg` scaled to fill `width`×`height`, returning straight (non-premultiplied) RGBA8.
#[cfg(feature = "raster")]
pub fn rasterize_svg_to_rgba8(svg: &str, width: u32, height: u32) -> IconResult<Vec<u8>> {
    use anyhow::Context as _;

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;

    let size = tree.size();
    if !(size.width() > 0.0 && size.height() > 0.0) {
        return Err(IconError::render("svg has invalid width/height"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| IconError::render(format!("failed to allocate {width}x{height} pixmap")))?;

    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(rgba)
}

#[cfg(feature = "raster")]
fn write_png(out: &Path, rgba: &[u8], width: u32, height: u32) -> IconResult<()> {
    use anyhow::Context as _;

    image::save_buffer_with_format(
        out,
        rgba,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/raster.rs"]
mod tests;
