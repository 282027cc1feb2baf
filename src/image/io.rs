//! I/O helpers for binary rasters and JSON.
//!
//! - `load_binary_image`: read a PNG/BMP/etc. into an owned 8-bit buffer whose
//!   values are restricted to the foreground/background sentinel pair.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BinaryImage, Sentinels};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned binary raster with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct BinaryImageBuf {
    width: usize,
    height: usize,
    sentinels: Sentinels,
    data: Vec<u8>,
}

impl BinaryImageBuf {
    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `BinaryImage` view
    pub fn as_view(&self) -> BinaryImage<'_> {
        BinaryImage::new(self.width, self.height, &self.data, self.sentinels)
            .expect("binary buffer length matches width * height")
    }
}

/// Load an already-binarized image from disk.
///
/// The image is converted to 8-bit luma; every pixel must equal one of the two
/// sentinels. No thresholding is performed.
pub fn load_binary_image(path: &Path, sentinels: Sentinels) -> Result<BinaryImageBuf, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    if let Some(pos) = data.iter().position(|&v| !sentinels.is_known(v)) {
        return Err(format!(
            "{} is not binary: pixel ({}, {}) has value {} (expected {} or {})",
            path.display(),
            pos % width.max(1),
            pos / width.max(1),
            data[pos],
            sentinels.foreground,
            sentinels.background
        ));
    }
    Ok(BinaryImageBuf {
        width,
        height,
        sentinels,
        data,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
