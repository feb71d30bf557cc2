//! AXS15231 command definitions
//!
//! This module defines the command bytes used to control the AXS15231
//! LCD controller, plus the QSPI framing opcodes that carry them.
//!
//! ## Command Structure
//!
//! The controller has no D/C line. Every bus transaction is a framed write:
//! 1. Assert CS (Chip Select)
//! 2. Send an 8-bit instruction ([`QSPI_WRITE_COMMAND`] or [`QSPI_WRITE_PIXELS`])
//! 3. Send a 24-bit address holding `command << 8`
//! 4. Send the payload bytes (if any)
//! 5. Deassert CS
//!
//! Pixel streams keep CS asserted across several frames; only the first
//! frame carries instruction and address.
//!
//! ## Example
//!
//! ```
//! use axs15231::command;
//!
//! assert_eq!(command::address_for(command::MEMORY_WRITE), 0x002C00);
//! ```

// QSPI framing

/// Instruction byte for register writes, payload on a single data line (0x02)
pub const QSPI_WRITE_COMMAND: u8 = 0x02;

/// Instruction byte for pixel writes, payload on four data lines (0x32)
pub const QSPI_WRITE_PIXELS: u8 = 0x32;

/// Build the 24-bit frame address for a controller command
///
/// The command byte sits in the middle byte of the address phase.
pub const fn address_for(command: u8) -> u32 {
    (command as u32) << 8
}

// Power management commands

/// Sleep in command (0x10)
///
/// Stops the internal oscillator. Wait 120ms before sending SLEEP_OUT.
pub const SLEEP_IN: u8 = 0x10;

/// Sleep out command (0x11)
///
/// Wakes the panel. Wait 120ms before the next command.
pub const SLEEP_OUT: u8 = 0x11;

/// Normal display mode on (0x13)
pub const NORMAL_DISPLAY_ON: u8 = 0x13;

/// Display off command (0x28)
pub const DISPLAY_OFF: u8 = 0x28;

/// Display on command (0x29)
pub const DISPLAY_ON: u8 = 0x29;

/// All pixels off (0x22)
pub const ALL_PIXELS_OFF: u8 = 0x22;

// Addressing and memory commands

/// Column address set command (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;

/// Row address set command (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const ROW_ADDRESS_SET: u8 = 0x2B;

/// Memory write command (0x2C)
///
/// Starts a pixel stream at the top-left of the programmed window. The
/// controller's write cursor advances left to right, top to bottom.
pub const MEMORY_WRITE: u8 = 0x2C;

/// Memory access control command (0x36)
///
/// Requires 1 byte composed from the `MADCTL_*` bits.
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;

/// Write display brightness command (0x51)
///
/// Requires 1 byte: 0x00 (off) to 0xFF (maximum).
pub const WRITE_BRIGHTNESS: u8 = 0x51;

/// Vendor register unlock command (0xBB)
pub const VENDOR_UNLOCK: u8 = 0xBB;

// MADCTL bits

/// Row address order (mirror Y)
pub const MADCTL_MY: u8 = 0x80;

/// Column address order (mirror X)
pub const MADCTL_MX: u8 = 0x40;

/// Row/column exchange (swap X and Y)
pub const MADCTL_MV: u8 = 0x20;

/// BGR color order
pub const MADCTL_BGR: u8 = 0x08;

/// RGB color order
pub const MADCTL_RGB: u8 = 0x00;
