use anyhow::Context as _;

use crate::foundation::error::{ForgeError, ForgeResult};
use crate::raster::region::Region;

/// Read-only alpha grid that segmentation runs over.
///
/// Rows are stored in texture space: row 0 is the bottom row of the image and `y` grows upward.
/// [`PixelMask::from_rgba_image`] flips decoded images into this layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>, // row-major, bottom row first
}

impl PixelMask {
    /// Create a mask from row-major alpha values (bottom row first).
    pub fn new(width: u32, height: u32, alpha: Vec<u8>) -> ForgeResult<Self> {
        if width == 0 || height == 0 {
            return Err(ForgeError::validation(format!(
                "pixel mask must be non-empty, got {width}x{height}"
            )));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| ForgeError::validation("pixel mask dimensions overflow"))?;
        if alpha.len() != expected {
            return Err(ForgeError::validation(format!(
                "pixel mask {width}x{height} needs {expected} alpha values, got {}",
                alpha.len()
            )));
        }
        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    /// Create a mask from normalized `0.0..=1.0` alpha values.
    ///
    /// Values are clamped and rounded onto `0..=255`.
    pub fn from_unit_alpha(width: u32, height: u32, alpha: &[f32]) -> ForgeResult<Self> {
        let bytes = alpha
            .iter()
            .map(|a| (a.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect();
        Self::new(width, height, bytes)
    }

    /// Take the alpha channel of a decoded RGBA image, flipping rows into texture space.
    pub fn from_rgba_image(img: &image::RgbaImage) -> ForgeResult<Self> {
        let (width, height) = img.dimensions();
        let mut alpha = Vec::with_capacity(width as usize * height as usize);
        for y in (0..height).rev() {
            for x in 0..width {
                alpha.push(img.get_pixel(x, y).0[3]);
            }
        }
        Self::new(width, height, alpha)
    }

    /// Decode an image file from disk and take its alpha channel.
    pub fn open(path: &std::path::Path) -> ForgeResult<(Self, image::RgbaImage)> {
        let img = image::open(path)
            .with_context(|| format!("decode image '{}'", path.display()))?
            .to_rgba8();
        let mask = Self::from_rgba_image(&img)?;
        Ok((mask, img))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha at texture-space `(x, y)`.
    ///
    /// Panics when out of bounds, like slice indexing.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.alpha[self.index(x, y)]
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub(crate) fn alpha(&self) -> &[u8] {
        &self.alpha
    }
}

/// Copy the pixels covered by `region` out of the source image.
///
/// `region` is in texture space; `img` is the decoded image in its native top-down row order.
pub fn crop_region(img: &image::RgbaImage, region: &Region) -> ForgeResult<image::RgbaImage> {
    let (width, height) = img.dimensions();
    if region.max_x >= width || region.max_y >= height {
        return Err(ForgeError::validation(format!(
            "region {} exceeds image bounds {width}x{height}",
            region.id
        )));
    }
    let top = height - 1 - region.max_y;
    let view = image::imageops::crop_imm(img, region.min_x, top, region.width(), region.height());
    Ok(view.to_image())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mask.rs"]
mod tests;
