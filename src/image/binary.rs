//! Borrowed binary raster in row-major layout (stride == width).
//!
//! The raster is produced upstream; this view only answers "foreground or
//! background" for a linear index `y * w + x`. Values equal to the foreground
//! sentinel are foreground, every other value is background.
use crate::error::FeatureError;
use serde::{Deserialize, Serialize};

/// The two opaque values that mark foreground and background cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentinels {
    pub foreground: u8,
    pub background: u8,
}

/// Black foreground on a white background.
impl Default for Sentinels {
    fn default() -> Self {
        Self::BLACK_ON_WHITE
    }
}

impl Sentinels {
    pub const BLACK_ON_WHITE: Sentinels = Sentinels {
        foreground: 0,
        background: 255,
    };

    pub const WHITE_ON_BLACK: Sentinels = Sentinels {
        foreground: 255,
        background: 0,
    };

    #[inline]
    pub fn is_known(&self, value: u8) -> bool {
        value == self.foreground || value == self.background
    }
}

/// Classification of a single raster cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelClass {
    Background,
    Foreground,
}

#[derive(Clone, Debug)]
pub struct BinaryImage<'a> {
    w: usize,
    h: usize,
    data: &'a [u8],
    sentinels: Sentinels,
}

impl<'a> BinaryImage<'a> {
    /// Wrap `data` as a `w × h` raster. Fails when `data.len() != w * h`.
    pub fn new(
        w: usize,
        h: usize,
        data: &'a [u8],
        sentinels: Sentinels,
    ) -> Result<Self, FeatureError> {
        let invalid = FeatureError::InvalidDimensions {
            width: w,
            height: h,
            len: data.len(),
        };
        let n = w.checked_mul(h).ok_or(invalid)?;
        if n != data.len() {
            return Err(invalid);
        }
        Ok(Self {
            w,
            h,
            data,
            sentinels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Number of cells (`w * h`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn sentinels(&self) -> Sentinels {
        self.sentinels
    }

    #[inline]
    pub fn class_at(&self, idx: usize) -> PixelClass {
        if self.data[idx] == self.sentinels.foreground {
            PixelClass::Foreground
        } else {
            PixelClass::Background
        }
    }

    #[inline]
    pub fn is_foreground(&self, idx: usize) -> bool {
        self.data[idx] == self.sentinels.foreground
    }

    /// Foreground test by coordinate; points outside the raster are background.
    pub fn is_foreground_at(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.w as i64 || y >= self.h as i64 {
            return false;
        }
        self.is_foreground(y as usize * self.w + x as usize)
    }

    /// Number of cells equal to the foreground sentinel.
    pub fn foreground_count(&self) -> usize {
        let fg = self.sentinels.foreground;
        self.data.iter().filter(|&&v| v == fg).count()
    }
}
