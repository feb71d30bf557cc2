//! Pixel streaming of a dirty rectangle
//!
//! The whole transfer runs inside one chip-select bracket. If the rectangle
//! starts at the origin and spans full rows, its bytes are contiguous in
//! the buffer and go out as a single memory write. Otherwise a memory
//! write with no payload primes the controller and each row follows as a
//! continuation frame, top to bottom.

use crate::damage::DirtyRect;
use crate::framebuffer::BYTES_PER_PIXEL;
use crate::interface::DisplayInterface;

/// How a rectangle was sent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferPath {
    /// Nothing to send
    Skipped,
    /// One contiguous memory write
    Burst,
    /// One continuation frame per row
    Rows,
}

/// Stream the pixels of `rect` out of `bytes`
///
/// `bytes` is a packed RGB565 buffer with `stride` pixels per row, and
/// `rect` must lie inside it. The window must already be programmed.
/// Chip select is released even if a write fails.
pub fn transfer<I: DisplayInterface>(
    interface: &mut I,
    rect: &DirtyRect,
    bytes: &[u8],
    stride: usize,
) -> Result<TransferPath, I::Error> {
    if rect.is_empty() {
        return Ok(TransferPath::Skipped);
    }

    interface.select()?;
    let streamed = stream(interface, rect, bytes, stride);
    let released = interface.deselect();
    let path = streamed?;
    released?;
    Ok(path)
}

fn stream<I: DisplayInterface>(
    interface: &mut I,
    rect: &DirtyRect,
    bytes: &[u8],
    stride: usize,
) -> Result<TransferPath, I::Error> {
    let x_low = rect.x_low as usize;
    let y_low = rect.y_low as usize;
    let w = rect.width() as usize;
    let h = rect.height() as usize;
    let pad = stride.saturating_sub(w + x_low);

    if x_low == 0 && y_low == 0 && pad == 0 {
        interface.start_memory_write(&bytes[..w * h * BYTES_PER_PIXEL])?;
        return Ok(TransferPath::Burst);
    }

    stream_rows(interface, rect, bytes, stride)?;
    Ok(TransferPath::Rows)
}

fn stream_rows<I: DisplayInterface>(
    interface: &mut I,
    rect: &DirtyRect,
    bytes: &[u8],
    stride: usize,
) -> Result<(), I::Error> {
    let x_low = rect.x_low as usize;
    let row_len = rect.width() as usize * BYTES_PER_PIXEL;
    interface.start_memory_write(&[])?;
    for y in rect.y_low as usize..=rect.y_high as usize {
        let start = (y * stride + x_low) * BYTES_PER_PIXEL;
        interface.continue_memory_write(&bytes[start..start + row_len])?;
    }
    Ok(())
}
