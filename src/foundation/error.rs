pub type IconResult<T> = Result<T, IconError>;

#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// The rasterization collaborator cannot run in this build. Recovered by the driver.
    #[error("rasterizer unavailable: {0}")]
    RasterUnavailable(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    pub fn raster_unavailable(msg: impl Into<String>) -> Self {
        Self::RasterUnavailable(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn is_raster_unavailable(&self) -> bool {
        matches!(self, Self::RasterUnavailable(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
