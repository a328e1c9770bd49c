//! Surface rendering and PNG export.

use background_gen::CanvasConfig;
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when exporting the background image.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Renders the full-resolution surface: an opaque solid fill of `color`.
pub fn render_surface(width: u32, height: u32, color: [u8; 3]) -> RgbaImage {
    let [r, g, b] = color;
    RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]))
}

/// Renders the configured canvas and writes it as a PNG into `dir`.
/// Returns the full path of the written file.
pub fn export_png(dir: &Path, config: &CanvasConfig) -> Result<PathBuf, ExportError> {
    let config = config.clamped();
    let path = dir.join(config.export_filename());

    render_surface(config.width, config.height, config.color)
        .save(&path)
        .map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

/// Directory exports are written to: the platform downloads folder, falling
/// back to the current working directory.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
