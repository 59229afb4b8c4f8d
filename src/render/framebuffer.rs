//! Pixel buffer abstraction for 2D pixel access.
//!
//! [`PixelBuffer`] owns a flat byte buffer and encapsulates its stride and
//! pixel format behind bounds-checked accessors. The memory layout is an
//! external contract shared with the presentation layer: row-major, `pitch`
//! bytes per row (at least `width * 4`), each pixel a 32-bit little-endian
//! `0x00RRGGBB` value with the top byte as padding.

use std::path::Path;

use crate::colors::unpack_rgb;

const BYTES_PER_PIXEL: u32 = 4;

/// An RGB framebuffer with explicit row stride.
///
/// All pixel access goes through [`set_pixel`](Self::set_pixel) and
/// [`get_pixel`](Self::get_pixel), which silently drop out-of-range
/// coordinates. Rasterizers that pre-clamp their loops may index rows
/// directly via the row offset math these accessors share.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pitch: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a buffer with the tightest stride, `pitch = width * 4`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_pitch(width, height, width * BYTES_PER_PIXEL)
    }

    /// Creates a buffer with an explicit row stride.
    ///
    /// # Panics
    /// Panics if `pitch < width * 4`.
    pub fn with_pitch(width: u32, height: u32, pitch: u32) -> Self {
        assert!(
            pitch >= width * BYTES_PER_PIXEL,
            "pitch {pitch} is too small for width {width}"
        );
        Self {
            width,
            height,
            pitch,
            data: vec![0; (pitch * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    pub fn pitch(&self) -> u32 {
        self.pitch
    }

    /// Reallocates the buffer for new dimensions.
    ///
    /// Called by the presentation layer when the display surface changes
    /// size. Previous pixel content is discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("pixel buffer resize: {width}x{height}");
        self.width = width;
        self.height = height;
        self.pitch = width * BYTES_PER_PIXEL;
        self.data = vec![0; (self.pitch * height) as usize];
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y * self.pitch + x * BYTES_PER_PIXEL) as usize
    }

    /// Writes a pixel, silently dropping out-of-range coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let offset = self.offset(x as u32, y as u32);
            self.data[offset..offset + 4].copy_from_slice(&color.to_le_bytes());
        }
    }

    /// Reads the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let offset = self.offset(x as u32, y as u32);
            let bytes = [
                self.data[offset],
                self.data[offset + 1],
                self.data[offset + 2],
                self.data[offset + 3],
            ];
            Some(u32::from_le_bytes(bytes))
        } else {
            None
        }
    }

    /// Fills every pixel with `color`, respecting the row stride.
    pub fn clear(&mut self, color: u32) {
        let bytes = color.to_le_bytes();
        for y in 0..self.height {
            let row_start = (y * self.pitch) as usize;
            for x in 0..self.width {
                let offset = row_start + (x * BYTES_PER_PIXEL) as usize;
                self.data[offset..offset + 4].copy_from_slice(&bytes);
            }
        }
    }

    /// Writes a scrolling RGB gradient test pattern.
    ///
    /// Useful for verifying the buffer-to-surface path independently of the
    /// geometry pipeline: blue tracks the column, green the row, red is
    /// fixed at half intensity.
    pub fn fill_gradient(&mut self, x_offset: u32, y_offset: u32) {
        for y in 0..self.height {
            let row_start = (y * self.pitch) as usize;
            for x in 0..self.width {
                let blue = (x + x_offset) as u8;
                let green = (y + y_offset) as u8;
                let color = crate::colors::pack_rgb(0x80, green, blue);
                let offset = row_start + (x * BYTES_PER_PIXEL) as usize;
                self.data[offset..offset + 4].copy_from_slice(&color.to_le_bytes());
            }
        }
    }

    /// Raw byte view for presentation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Exports the buffer as a PNG image (frame capture).
    pub fn save_png(&self, path: &Path) -> Result<(), image::ImageError> {
        let mut img = image::RgbImage::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let color = self.get_pixel(x as i32, y as i32).unwrap_or(0);
                let (r, g, b) = unpack_rgb(color);
                img.put_pixel(x, y, image::Rgb([r, g, b]));
            }
        }
        img.save(path)
    }
}
