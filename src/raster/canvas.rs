use image::{GrayImage, Luma};

use crate::foundation::core::Coordinate;
use crate::foundation::error::{DlavidError, DlavidResult};
use crate::raster::frame::{EMPTY_LUMA, Frame, OCCUPIED_LUMA};

/// Fixed-size two-valued bitmap with its origin at the center cell.
///
/// A coordinate `(x, y)` lands on cell `(x + width / 2, y + height / 2)`. Cells only
/// ever go from empty to occupied.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    cells: Vec<bool>,
    occupied: usize,
}

impl Canvas {
    /// Allocate an all-empty canvas. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> DlavidResult<Self> {
        if width == 0 || height == 0 {
            return Err(DlavidError::validation(format!(
                "canvas width/height must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
            occupied: 0,
        })
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Grid cell a coordinate maps to, or `None` when it falls outside the canvas.
    pub fn cell_for(&self, coord: Coordinate) -> Option<(u32, u32)> {
        let cx = coord.x.checked_add(i64::from(self.width / 2))?;
        let cy = coord.y.checked_add(i64::from(self.height / 2))?;
        let cx = u32::try_from(cx).ok().filter(|&v| v < self.width)?;
        let cy = u32::try_from(cy).ok().filter(|&v| v < self.height)?;
        Some((cx, cy))
    }

    /// Mark the cell under `coord` as occupied.
    pub fn plot(&mut self, coord: Coordinate) -> DlavidResult<()> {
        let (cx, cy) = self.cell_for(coord).ok_or(DlavidError::OutOfBounds {
            x: coord.x,
            y: coord.y,
            width: self.width,
            height: self.height,
        })?;

        let idx = self.offset(cx, cy);
        if !self.cells[idx] {
            self.cells[idx] = true;
            self.occupied += 1;
        }
        Ok(())
    }

    /// `true` when grid cell `(x, y)` has been plotted. Out-of-range cells read as empty.
    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.cells[self.offset(x, y)]
    }

    /// Number of distinct occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Render the current state.
    ///
    /// `scale > 1` upscales by nearest neighbor to `width * scale` x `height * scale`;
    /// any smaller value renders at native resolution.
    pub fn snapshot(&self, scale: u32) -> DlavidResult<Frame> {
        let scale = scale.max(1);
        let (out_w, out_h) = scaled_dims(self.width, self.height, scale)?;

        let image = GrayImage::from_fn(out_w, out_h, |x, y| {
            if self.is_occupied(x / scale, y / scale) {
                Luma([OCCUPIED_LUMA])
            } else {
                Luma([EMPTY_LUMA])
            }
        });
        Ok(Frame::from_image(image))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Output dimensions for a canvas rendered at `scale` (values `<= 1` mean native).
pub fn scaled_dims(width: u32, height: u32, scale: u32) -> DlavidResult<(u32, u32)> {
    let scale = scale.max(1);
    match (width.checked_mul(scale), height.checked_mul(scale)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(DlavidError::validation(format!(
            "rescale factor {scale} overflows a {width}x{height} canvas"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
