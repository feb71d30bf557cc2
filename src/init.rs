//! Panel initialization command tables
//!
//! An initialization table is an ordered list of [`InitCommand`]s sent once
//! during setup. Each entry is written with
//! [`DisplayInterface::send_command`](crate::DisplayInterface::send_command)
//! and followed by an optional settle delay.
//!
//! The register values in [`VENDOR_INIT`] are panel tuning data (power,
//! timing and gamma) supplied by the panel vendor. They are not interpreted
//! by the driver.

use crate::command::{
    ALL_PIXELS_OFF, DISPLAY_ON, MEMORY_WRITE, NORMAL_DISPLAY_ON, SLEEP_OUT, VENDOR_UNLOCK,
};

/// A single entry of an initialization table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitCommand {
    /// Command byte
    pub command: u8,
    /// Payload bytes sent after the command
    pub data: &'static [u8],
    /// Delay in milliseconds after the command, 0 for none
    pub delay_ms: u32,
}

impl InitCommand {
    /// Create a table entry
    pub const fn new(command: u8, data: &'static [u8], delay_ms: u32) -> Self {
        Self {
            command,
            data,
            delay_ms,
        }
    }
}

/// Default vendor initialization sequence for AXS15231B panels
#[rustfmt::skip]
pub const VENDOR_INIT: &[InitCommand] = &[
    InitCommand::new(VENDOR_UNLOCK, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x5A, 0xA5], 0),
    InitCommand::new(0xA0, &[0x00, 0x10, 0x00, 0x02, 0x00, 0x00, 0x64, 0x3F, 0x20, 0x05, 0x3F, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00], 0),
    InitCommand::new(0xA2, &[0x30, 0x04, 0x0A, 0x3C, 0xEC, 0x54, 0xC4, 0x30, 0xAC, 0x28, 0x7F, 0x7F, 0x7F, 0x20, 0xF8, 0x10, 0x02, 0xFF, 0xFF, 0xF0, 0x90, 0x01, 0x32, 0xA0, 0x91, 0xC0, 0x20, 0x7F, 0xFF, 0x00, 0x54], 0),
    InitCommand::new(0xD0, &[0x30, 0xAC, 0x21, 0x24, 0x08, 0x09, 0x10, 0x01, 0xAA, 0x14, 0xC2, 0x00, 0x22, 0x22, 0xAA, 0x03, 0x10, 0x12, 0x40, 0x14, 0x1E, 0x51, 0x15, 0x00, 0x40, 0x10, 0x00, 0x03, 0x3D, 0x12], 0),
    InitCommand::new(0xA3, &[0xA0, 0x06, 0xAA, 0x08, 0x08, 0x02, 0x0A, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x55, 0x55], 0),
    InitCommand::new(0xC1, &[0x33, 0x04, 0x02, 0x02, 0x71, 0x05, 0x24, 0x55, 0x02, 0x00, 0x41, 0x00, 0x53, 0xFF, 0xFF, 0xFF, 0x4F, 0x52, 0x00, 0x4F, 0x52, 0x00, 0x45, 0x3B, 0x0B, 0x02, 0x0D, 0x00, 0xFF, 0x40], 0),
    InitCommand::new(0xC3, &[0x00, 0x00, 0x00, 0x50, 0x03, 0x00, 0x00, 0x00, 0x01, 0x80, 0x01], 0),
    InitCommand::new(0xC4, &[0x00, 0x24, 0x33, 0x90, 0x50, 0xEA, 0x64, 0x32, 0xC8, 0x64, 0xC8, 0x32, 0x90, 0x90, 0x11, 0x06, 0xDC, 0xFA, 0x04, 0x03, 0x80, 0xFE, 0x10, 0x10, 0x00, 0x0A, 0x0A, 0x44, 0x50], 0),
    InitCommand::new(0xC5, &[0x18, 0x00, 0x00, 0x03, 0xFE, 0x78, 0x33, 0x20, 0x30, 0x10, 0x88, 0xDE, 0x0D, 0x08, 0x0F, 0x0F, 0x01, 0x78, 0x33, 0x20, 0x10, 0x10, 0x80], 0),
    InitCommand::new(0xC6, &[0x05, 0x0A, 0x05, 0x0A, 0x00, 0xE0, 0x2E, 0x0B, 0x12, 0x22, 0x12, 0x22, 0x01, 0x00, 0x00, 0x3F, 0x6A, 0x18, 0xC8, 0x22], 0),
    InitCommand::new(0xC7, &[0x50, 0x32, 0x28, 0x00, 0xA2, 0x80, 0x8F, 0x00, 0x80, 0xFF, 0x07, 0x11, 0x9F, 0x6F, 0xFF, 0x26, 0x0C, 0x0D, 0x0E, 0x0F], 0),
    InitCommand::new(0xC9, &[0x33, 0x44, 0x44, 0x01], 0),
    InitCommand::new(0xCF, &[0x34, 0x1E, 0x88, 0x58, 0x13, 0x18, 0x56, 0x18, 0x1E, 0x68, 0xF7, 0x00, 0x65, 0x0C, 0x22, 0xC4, 0x0C, 0x77, 0x22, 0x44, 0xAA, 0x55, 0x04, 0x04, 0x12, 0xA0, 0x08], 0),
    InitCommand::new(0xD5, &[0x3E, 0x3E, 0x88, 0x00, 0x44, 0x04, 0x78, 0x33, 0x20, 0x78, 0x33, 0x20, 0x04, 0x28, 0xD3, 0x47, 0x03, 0x03, 0x03, 0x03, 0x86, 0x00, 0x00, 0x00, 0x30, 0x52, 0x3F, 0x40, 0x40, 0x96], 0),
    InitCommand::new(0xD6, &[0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE, 0x95, 0x00, 0x01, 0x83, 0x75, 0x36, 0x20, 0x75, 0x36, 0x20, 0x3F, 0x03, 0x03, 0x03, 0x10, 0x10, 0x00, 0x04, 0x51, 0x20, 0x01, 0x00], 0),
    InitCommand::new(0xD7, &[0x0A, 0x08, 0x0E, 0x0C, 0x1E, 0x18, 0x19, 0x1F, 0x00, 0x1F, 0x1A, 0x1F, 0x3E, 0x3E, 0x04, 0x00, 0x1F, 0x1F, 0x1F], 0),
    InitCommand::new(0xD8, &[0x0B, 0x09, 0x0F, 0x0D, 0x1E, 0x18, 0x19, 0x1F, 0x01, 0x1F, 0x1A, 0x1F], 0),
    InitCommand::new(0xD9, &[0x00, 0x0D, 0x0F, 0x09, 0x0B, 0x1F, 0x18, 0x19, 0x1F, 0x01, 0x1E, 0x1A, 0x1F], 0),
    InitCommand::new(0xDD, &[0x0C, 0x0E, 0x08, 0x0A, 0x1F, 0x18, 0x19, 0x1F, 0x00, 0x1E, 0x1A, 0x1F], 0),
    InitCommand::new(0xDF, &[0x44, 0x73, 0x4B, 0x69, 0x00, 0x0A, 0x02, 0x90], 0),
    InitCommand::new(0xE0, &[0x19, 0x20, 0x0A, 0x13, 0x0E, 0x09, 0x12, 0x28, 0xD4, 0x24, 0x0C, 0x35, 0x13, 0x31, 0x36, 0x2F, 0x03], 0),
    InitCommand::new(0xE1, &[0x38, 0x20, 0x09, 0x12, 0x0E, 0x08, 0x12, 0x28, 0xC5, 0x24, 0x0C, 0x34, 0x12, 0x31, 0x36, 0x2F, 0x27], 0),
    InitCommand::new(0xE2, &[0x19, 0x20, 0x0A, 0x11, 0x09, 0x06, 0x11, 0x25, 0xD4, 0x22, 0x0B, 0x33, 0x12, 0x2D, 0x32, 0x2F, 0x03], 0),
    InitCommand::new(0xE3, &[0x38, 0x20, 0x0A, 0x11, 0x09, 0x06, 0x11, 0x25, 0xC4, 0x21, 0x0A, 0x32, 0x11, 0x2C, 0x32, 0x2F, 0x27], 0),
    InitCommand::new(0xE4, &[0x19, 0x20, 0x0D, 0x14, 0x0D, 0x08, 0x12, 0x2A, 0xD4, 0x26, 0x0E, 0x35, 0x13, 0x34, 0x39, 0x2F, 0x03], 0),
    InitCommand::new(0xE5, &[0x38, 0x20, 0x0D, 0x13, 0x0D, 0x07, 0x12, 0x29, 0xC4, 0x25, 0x0D, 0x35, 0x12, 0x33, 0x39, 0x2F, 0x27], 0),
    InitCommand::new(VENDOR_UNLOCK, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], 0),
    InitCommand::new(NORMAL_DISPLAY_ON, &[], 0),
    InitCommand::new(SLEEP_OUT, &[], 200),
    InitCommand::new(DISPLAY_ON, &[], 200),
    InitCommand::new(MEMORY_WRITE, &[0x00, 0x00, 0x00, 0x00], 0),
    InitCommand::new(ALL_PIXELS_OFF, &[], 200),
];
