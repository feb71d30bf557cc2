//! Addressing window programming
//!
//! The controller writes incoming pixel data into the rectangle set by
//! CASET (columns) and RASET (rows). Both payloads are two big-endian
//! 16-bit bounds, inclusive. The configured [`Offset`] is added to every
//! bound with 16-bit wrap-around.

use crate::command::{COLUMN_ADDRESS_SET, ROW_ADDRESS_SET};
use crate::config::Offset;
use crate::damage::DirtyRect;
use crate::interface::DisplayInterface;

/// Encode an inclusive `[low, high]` bound pair as a CASET/RASET payload
pub const fn encode_bounds(low: u16, high: u16) -> [u8; 4] {
    let [l1, l0] = low.to_be_bytes();
    let [h1, h0] = high.to_be_bytes();
    [l1, l0, h1, h0]
}

/// Program the controller window to `rect`, shifted by `offset`
///
/// Sends CASET then RASET. `rect` is expected to be non-empty.
pub fn program_window<I: DisplayInterface>(
    interface: &mut I,
    rect: &DirtyRect,
    offset: Offset,
) -> Result<(), I::Error> {
    let columns = encode_bounds(
        rect.x_low.wrapping_add_signed(offset.x),
        rect.x_high.wrapping_add_signed(offset.x),
    );
    let rows = encode_bounds(
        rect.y_low.wrapping_add_signed(offset.y),
        rect.y_high.wrapping_add_signed(offset.y),
    );
    interface.send_command(COLUMN_ADDRESS_SET, &columns)?;
    interface.send_command(ROW_ADDRESS_SET, &rows)
}
