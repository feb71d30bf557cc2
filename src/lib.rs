//! AXS15231 QSPI LCD Driver
//!
//! A damage-tracking framebuffer driver for AXS15231 color LCD controllers
//! connected over quad SPI, up to 320x480 pixels.
//!
//! Drawing happens in an RGB565 buffer in host memory. The driver tracks
//! the bounding rectangle of every pixel that changed and, on update, sends
//! only that rectangle: one burst when it is the whole frame, otherwise one
//! row at a time.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Caller-provided or heap-allocated (`alloc` feature) pixel buffer
//! - Mirroring, origin offsets and brightness control
//! - Re-entrant update requests collapse into one extra pass
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use axs15231::{Builder, Color, Dimensions, Display, Interface, SerialQspi};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _r: &mut [u8], _w: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let cs = MockPin;
//! # let rst = MockPin;
//! # let backlight = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(SerialQspi::new(spi, cs), Some(rst), Some(backlight));
//! let dims = match Dimensions::new(320, 480) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).mirror_y(true).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let buffer = vec![0u8; dims.buffer_size()];
//! let mut display = match Display::new(interface, config, buffer) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let _ = display.initialize(&mut delay);
//!
//! display.fill(Color::BLACK);
//! display.set_pixel(10, 20, Color::RED);
//! let _ = display.update();
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// RGB565 color type
pub mod color;
/// AXS15231 command definitions
pub mod command;
/// Host lifecycle hooks
pub mod component;
/// Display configuration types and builder
pub mod config;
/// Dirty-rectangle tracking
pub mod damage;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Host-side pixel storage
pub mod framebuffer;
/// Vendor initialization table
pub mod init;
/// Hardware interface abstraction
pub mod interface;
/// MADCTL orientation flags
pub mod orientation;
/// Pixel streaming of a dirty rectangle
pub mod transfer;
/// Refresh pass coordination
pub mod update;
/// Addressing window programming
pub mod window;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use component::Component;
pub use config::{
    Builder, Config, DEFAULT_BRIGHTNESS, DEFAULT_DATA_RATE_HZ, Dimensions, MAX_COLUMNS, MAX_ROWS,
    Offset,
};
pub use damage::{DamageTracker, DirtyRect};
pub use display::{Display, Lifecycle};
pub use error::{BuilderError, Error};
pub use framebuffer::{BYTES_PER_PIXEL, BufferTooSmall, PixelBuffer};
pub use init::{InitCommand, VENDOR_INIT};
pub use interface::{
    DisplayInterface, Frame, Interface, InterfaceError, Lanes, QspiBus, SerialQspi,
    SerialQspiError,
};
pub use orientation::Orientation;
pub use transfer::TransferPath;
pub use update::UpdateState;
