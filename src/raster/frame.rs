use std::path::Path;

use anyhow::Context as _;
use image::GrayImage;

use crate::foundation::error::DlavidResult;

/// Luma value of an occupied pixel.
pub const OCCUPIED_LUMA: u8 = 0;
/// Luma value of an empty pixel.
pub const EMPTY_LUMA: u8 = 255;

/// One rendered snapshot of the canvas: black aggregate on a white background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    image: GrayImage,
}

impl Frame {
    pub(crate) fn from_image(image: GrayImage) -> Self {
        Self { image }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// All drawn pixels in row-major order.
    pub fn occupied_pixels(&self) -> Vec<(u32, u32)> {
        self.image
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] == OCCUPIED_LUMA)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Encode as PNG at `path`.
    pub fn save_png(&self, path: &Path) -> DlavidResult<()> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}
