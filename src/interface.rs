//! Hardware interface abstraction
//!
//! This module provides two layers:
//!
//! - [`QspiBus`]: the framed command/address/data write primitive of a quad
//!   SPI peripheral, plus chip-select control. [`SerialQspi`] implements it
//!   on top of any embedded-hal [`SpiBus`] and a chip-select pin.
//! - [`DisplayInterface`]: the operations the display core needs (commands,
//!   pixel streams, reset, backlight). [`Interface`] implements it on a
//!   [`QspiBus`] with optional reset and backlight pins.
//!
//! ## Hardware Requirements
//!
//! The AXS15231 in QSPI mode requires:
//! - QSPI bus (SCK + 4 data lines + CS)
//! - 2 optional GPIO pins:
//!   - **RST**: Reset (output, active low)
//!   - **BL**: Backlight enable (output, active high)
//!
//! ## Framing
//!
//! | Transaction        | Instruction | Address       | Data lanes |
//! |--------------------|-------------|---------------|------------|
//! | Register write     | `0x02`      | `command << 8`| 1          |
//! | Pixel stream start | `0x32`      | `0x2C << 8`   | 4          |
//! | Pixel continuation | none        | none          | 4          |
//!
//! ## Example
//!
//! ```rust,no_run
//! use axs15231::{DisplayInterface, Interface, SerialQspi};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::SpiBus;
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
//! # let mut delay = MockDelay;
//! let bus = SerialQspi::new(MockSpi, MockPin);
//! let mut interface = Interface::new(bus, Some(MockPin), Some(MockPin));
//!
//! // Pulse reset and switch the backlight on
//! let _ = interface.reset(&mut delay);
//! let _ = interface.set_backlight(true);
//!
//! // Write brightness register
//! let _ = interface.send_command(0x51, &[0xD0]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::command::{MEMORY_WRITE, QSPI_WRITE_COMMAND, QSPI_WRITE_PIXELS, address_for};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Reset pulse settle time in milliseconds
pub const RESET_SETTLE_MS: u32 = 20;

/// Number of data lines used for a frame's payload
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lanes {
    /// One data line (register writes)
    #[default]
    Single,
    /// Four data lines (pixel data)
    Quad,
}

/// One framed QSPI write
///
/// A frame without instruction and address continues the data phase of
/// the previous frame; the chip select must stay asserted between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    /// 8-bit instruction phase
    pub instruction: Option<u8>,
    /// 24-bit address phase
    pub address: Option<u32>,
    /// Payload
    pub data: &'a [u8],
    /// Payload lane width
    pub lanes: Lanes,
}

impl<'a> Frame<'a> {
    /// Register write: instruction `0x02`, address `command << 8`, single lane
    pub const fn command(command: u8, data: &'a [u8]) -> Self {
        Self {
            instruction: Some(QSPI_WRITE_COMMAND),
            address: Some(address_for(command)),
            data,
            lanes: Lanes::Single,
        }
    }

    /// First frame of a pixel stream: instruction `0x32`, address `0x2C << 8`
    pub const fn memory_write(data: &'a [u8]) -> Self {
        Self {
            instruction: Some(QSPI_WRITE_PIXELS),
            address: Some(address_for(MEMORY_WRITE)),
            data,
            lanes: Lanes::Quad,
        }
    }

    /// Data-only frame continuing a pixel stream
    pub const fn continuation(data: &'a [u8]) -> Self {
        Self {
            instruction: None,
            address: None,
            data,
            lanes: Lanes::Quad,
        }
    }
}

/// Framed write primitive of a quad SPI peripheral
///
/// `enable` asserts the chip select and `disable` releases it. A frame is
/// only ever written between the two.
pub trait QspiBus {
    /// Error type for bus operations
    type Error: Debug;

    /// Assert chip select
    fn enable(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Release chip select once all queued data is on the wire
    fn disable(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Clock out one frame
    fn write_framed(&mut self, frame: &Frame<'_>) -> InterfaceResult<(), Self::Error>;
}

/// Errors from [`SerialQspi`]
#[derive(Debug)]
pub enum SerialQspiError<SpiErr, CsErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// Chip-select pin error
    ChipSelect(CsErr),
}

impl<SpiErr: Debug, CsErr: Debug> core::fmt::Display for SerialQspiError<SpiErr, CsErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::ChipSelect(e) => write!(f, "Chip select error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, CsErr: Debug> core::error::Error for SerialQspiError<SpiErr, CsErr> {}

/// [`QspiBus`] over a plain embedded-hal [`SpiBus`]
///
/// Every phase is clocked out on a single data line: the instruction byte,
/// the three address bytes (big-endian) and the payload. [`Lanes`] is
/// ignored, so this suits panels strapped for single-line SPI and bus
/// capture in tests. Chip select is driven manually so a pixel stream can
/// span several frames.
pub struct SerialQspi<SPI, CS> {
    /// SPI bus (exclusive)
    spi: SPI,
    /// Chip select pin (active low)
    cs: CS,
}

impl<SPI, CS> SerialQspi<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Create a new SerialQspi
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Release the bus and chip-select pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> QspiBus for SerialQspi<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = SerialQspiError<SPI::Error, CS::Error>;

    fn enable(&mut self) -> InterfaceResult<(), Self::Error> {
        self.cs.set_low().map_err(SerialQspiError::ChipSelect)
    }

    fn disable(&mut self) -> InterfaceResult<(), Self::Error> {
        self.spi.flush().map_err(SerialQspiError::Spi)?;
        self.cs.set_high().map_err(SerialQspiError::ChipSelect)
    }

    fn write_framed(&mut self, frame: &Frame<'_>) -> InterfaceResult<(), Self::Error> {
        if let Some(instruction) = frame.instruction {
            self.spi
                .write(&[instruction])
                .map_err(SerialQspiError::Spi)?;
        }
        if let Some(address) = frame.address {
            let [_, a2, a1, a0] = address.to_be_bytes();
            self.spi.write(&[a2, a1, a0]).map_err(SerialQspiError::Spi)?;
        }
        if !frame.data.is_empty() {
            self.spi.write(frame.data).map_err(SerialQspiError::Spi)?;
        }
        Ok(())
    }
}

/// Trait for hardware interface to the AXS15231 controller
///
/// This trait abstracts over different hardware implementations, allowing
/// the [`Display`](crate::display::Display) to work with any bus and GPIO
/// implementation. Use [`Interface`] unless you need custom behavior.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write a command with its payload as one self-contained transaction
    ///
    /// The implementation asserts and releases chip select itself.
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication fails.
    fn send_command(&mut self, command: u8, payload: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Assert chip select for a multi-frame pixel stream
    fn select(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Release chip select after a pixel stream
    fn deselect(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Start a pixel stream with the memory write command
    ///
    /// `data` may be empty, in which case the controller is only primed for
    /// the continuation frames that follow. Must be called between
    /// [`select`](Self::select) and [`deselect`](Self::deselect).
    fn start_memory_write(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Append pixel data to the stream started by
    /// [`start_memory_write`](Self::start_memory_write)
    fn continue_memory_write(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must drive RST high, low, then high again with
    /// [`RESET_SETTLE_MS`] after each edge. Without a reset pin this does
    /// nothing.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Drive the backlight enable pin, if any
    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error>;

    /// Whether a reset pin is wired
    fn has_reset_pin(&self) -> bool {
        false
    }

    /// Whether a backlight pin is wired
    fn has_backlight_pin(&self) -> bool {
        false
    }
}

/// Errors that can occur at the interface level
///
/// Generic over bus and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<BusErr, PinErr> {
    /// Bus communication error
    Bus(BusErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<BusErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<BusErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "Bus error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<BusErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<BusErr, PinErr> {}

/// Hardware interface implementation for AXS15231
///
/// Implements [`DisplayInterface`] on a [`QspiBus`] and embedded-hal v1.0
/// output pins. The interface owns its bus and pins.
///
/// ## Type Parameters
///
/// * `BUS` - Framed bus implementing [`QspiBus`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BL` - Backlight pin implementing [`OutputPin`]
pub struct Interface<BUS, RST, BL> {
    /// Framed QSPI bus
    bus: BUS,
    /// Reset pin (active low)
    rst: Option<RST>,
    /// Backlight enable pin (active high)
    backlight: Option<BL>,
}

impl<BUS, RST, BL> Interface<BUS, RST, BL>
where
    BUS: QspiBus,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `bus` - Framed QSPI bus
    /// * `rst` - Reset pin (output, active low), if wired
    /// * `backlight` - Backlight enable pin (output, active high), if wired
    pub fn new(bus: BUS, rst: Option<RST>, backlight: Option<BL>) -> Self {
        Self {
            bus,
            rst,
            backlight,
        }
    }

    /// Release the bus and pins
    pub fn release(self) -> (BUS, Option<RST>, Option<BL>) {
        (self.bus, self.rst, self.backlight)
    }
}

impl<BUS, RST, BL, PinErr> Interface<BUS, RST, BL>
where
    BUS: QspiBus,
    RST: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    /// Write one frame inside its own chip-select bracket
    fn write_bracketed(
        &mut self,
        frame: &Frame<'_>,
    ) -> InterfaceResult<(), InterfaceError<BUS::Error, PinErr>> {
        self.bus.enable().map_err(InterfaceError::Bus)?;
        let written = self.bus.write_framed(frame);
        let released = self.bus.disable();
        written.and(released).map_err(InterfaceError::Bus)
    }
}

impl<BUS, RST, BL, PinErr> DisplayInterface for Interface<BUS, RST, BL>
where
    BUS: QspiBus,
    RST: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<BUS::Error, PinErr>;

    fn send_command(&mut self, command: u8, payload: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.write_bracketed(&Frame::command(command, payload))
    }

    fn select(&mut self) -> InterfaceResult<(), Self::Error> {
        self.bus.enable().map_err(InterfaceError::Bus)
    }

    fn deselect(&mut self) -> InterfaceResult<(), Self::Error> {
        self.bus.disable().map_err(InterfaceError::Bus)
    }

    fn start_memory_write(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.bus
            .write_framed(&Frame::memory_write(data))
            .map_err(InterfaceError::Bus)
    }

    fn continue_memory_write(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.bus
            .write_framed(&Frame::continuation(data))
            .map_err(InterfaceError::Bus)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };
        // Reset sequence: HIGH -> LOW -> HIGH, 20ms after each edge
        rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error> {
        match self.backlight.as_mut() {
            Some(pin) if on => pin.set_high().map_err(InterfaceError::Pin),
            Some(pin) => pin.set_low().map_err(InterfaceError::Pin),
            None => Ok(()),
        }
    }

    fn has_reset_pin(&self) -> bool {
        self.rst.is_some()
    }

    fn has_backlight_pin(&self) -> bool {
        self.backlight.is_some()
    }
}
