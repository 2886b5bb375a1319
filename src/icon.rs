use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::flower::{IconConfig, IconImage};
use crate::foundation::error::{IconError, IconResult};
use crate::raster::Rasterizer;

/// What ended up on disk. Both variants are successful runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconOutcome {
    Png(PathBuf),
    /// The rasterizer was unavailable; `path` holds the SVG markup instead.
    SvgFallback { path: PathBuf, reason: String },
}

impl IconOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Png(path) | Self::SvgFallback { path, .. } => path,
        }
    }
}

/// Build the icon described by `config` and write it with `rasterizer`, falling back to the raw
/// SVG when the rasterizer reports itself unavailable.
#[tracing::instrument(skip(config, rasterizer), fields(out = %config.output_path.display()))]
pub fn write_icon<R: Rasterizer>(config: &IconConfig, rasterizer: &R) -> IconResult<IconOutcome> {
    let image = IconImage::from_config(config);
    tracing::debug!(
        petals = image.flower.petal_count(),
        petal_color = %image.flower.petal_color,
        center_color = %image.flower.center_color,
        "icon laid out"
    );
    let svg = image.to_svg();

    let out = &config.output_path;
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let canvas = config.canvas;
    match rasterizer.rasterize(&svg, out, canvas.width, canvas.height) {
        Ok(()) => {
            tracing::debug!("png written");
            Ok(IconOutcome::Png(out.clone()))
        }
        Err(IconError::RasterUnavailable(reason)) => {
            let path = config.svg_fallback_path();
            tracing::debug!(%reason, svg = %path.display(), "rasterizer unavailable, keeping svg");
            std::fs::write(&path, svg.as_bytes())
                .with_context(|| format!("write svg '{}'", path.display()))?;
            Ok(IconOutcome::SvgFallback { path, reason })
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "../tests/unit/icon.rs"]
mod tests;
