//! Host-side pixel storage
//!
//! [`PixelBuffer`] holds one packed RGB565 [`Color`] per pixel, two bytes,
//! high byte first, rows top to bottom. The byte layout is exactly what the
//! controller expects in a memory write, so rows can be streamed straight
//! out of the buffer.
//!
//! The pixel at `(x, y)` starts at byte `(y * width + x) * 2`.
//!
//! ## Example
//!
//! ```
//! use axs15231::{Color, PixelBuffer};
//!
//! let mut pixels = match PixelBuffer::new([0u8; 4 * 4 * 2], 4, 4) {
//!     Ok(pixels) => pixels,
//!     Err(_) => return,
//! };
//! assert!(pixels.set_pixel(1, 2, Color::RED));
//! assert!(!pixels.set_pixel(1, 2, Color::RED)); // unchanged
//! assert_eq!(pixels.pixel(1, 2), Some(Color::RED));
//! ```

use crate::color::Color;

/// Bytes stored per pixel
pub const BYTES_PER_PIXEL: usize = 2;

/// The backing storage is shorter than `width * height * 2` bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferTooSmall {
    /// Required buffer size in bytes
    pub required: usize,
    /// Provided buffer size in bytes
    pub provided: usize,
}

/// Reserving the backing storage failed
#[cfg(feature = "alloc")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationFailed {
    /// Requested size in bytes
    pub bytes: usize,
}

/// A fixed-size RGB565 pixel buffer
///
/// The storage is checked once on construction and never resized.
#[derive(Debug)]
pub struct PixelBuffer<B> {
    /// Backing storage, at least `width * height * 2` bytes
    buffer: B,
    /// Width in pixels
    width: u16,
    /// Height in pixels
    height: u16,
}

impl<B> PixelBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap existing storage
    ///
    /// Storage contents are kept as they are.
    ///
    /// # Errors
    ///
    /// Returns [`BufferTooSmall`] if the storage cannot hold every pixel.
    pub fn new(buffer: B, width: u16, height: u16) -> Result<Self, BufferTooSmall> {
        let required = Self::required_len(width, height);
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(BufferTooSmall { required, provided });
        }
        Ok(Self {
            buffer,
            width,
            height,
        })
    }

    fn required_len(width: u16, height: u16) -> usize {
        width as usize * height as usize * BYTES_PER_PIXEL
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Pixels per row, which is also the row stride
    pub fn stride(&self) -> usize {
        self.width as usize
    }

    /// Pixel bytes, `width * height * 2` long
    pub fn as_bytes(&self) -> &[u8] {
        let len = Self::required_len(self.width, self.height);
        &self.buffer.as_ref()[..len]
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    /// Read back the color at `(x, y)`
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let pos = self.offset(x, y)?;
        let bytes = self.buffer.as_ref();
        Some(Color::new(u16::from_be_bytes([bytes[pos], bytes[pos + 1]])))
    }

    /// Store `color` at `(x, y)`
    ///
    /// Returns `true` if the stored bytes changed. Coordinates outside the
    /// buffer are logged and ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        let Some(pos) = self.offset(x, y) else {
            log::warn!(
                "trying to draw invalid pixel: x(0 <= {} < {}) && y(0 <= {} < {})",
                x,
                self.width,
                y,
                self.height
            );
            return false;
        };

        let [hi, lo] = color.to_be_bytes();
        let bytes = &mut self.buffer.as_mut()[pos..pos + BYTES_PER_PIXEL];
        let mut updated = false;
        if bytes[0] != hi {
            bytes[0] = hi;
            updated = true;
        }
        if bytes[1] != lo {
            bytes[1] = lo;
            updated = true;
        }
        updated
    }

    /// Overwrite every pixel with `color`
    pub fn fill(&mut self, color: Color) {
        let len = Self::required_len(self.width, self.height);
        let bytes = &mut self.buffer.as_mut()[..len];
        let pair = color.to_be_bytes();
        if color.is_byte_uniform() {
            // Upper and lower bytes are equal, a plain byte fill will do
            bytes.fill(pair[0]);
        } else {
            for px in bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
                px.copy_from_slice(&pair);
            }
        }
    }

    /// Release the backing storage
    pub fn into_inner(self) -> B {
        self.buffer
    }
}

#[cfg(feature = "alloc")]
impl PixelBuffer<alloc::vec::Vec<u8>> {
    /// Allocate zeroed storage on the heap
    ///
    /// # Errors
    ///
    /// Returns [`AllocationFailed`] if the allocator cannot provide
    /// `width * height * 2` bytes.
    pub fn allocate(width: u16, height: u16) -> Result<Self, AllocationFailed> {
        let bytes = Self::required_len(width, height);
        let mut buffer = alloc::vec::Vec::new();
        buffer
            .try_reserve_exact(bytes)
            .map_err(|_| AllocationFailed { bytes })?;
        buffer.resize(bytes, 0);
        Ok(Self {
            buffer,
            width,
            height,
        })
    }
}
