//! Host lifecycle hooks
//!
//! Firmware that manages several peripherals can drive the display through
//! [`Component`] without knowing its concrete type: `initialize` once at
//! boot, `refresh` from the main loop, `describe` when dumping the
//! configuration.

use embedded_hal::delay::DelayNs;

use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Lifecycle of a peripheral owned by the host loop
pub trait Component {
    /// Error returned by the hooks
    type Error;

    /// One-time setup
    fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Periodic work, called from the host loop
    fn refresh(&mut self) -> Result<(), Self::Error>;

    /// Log the configuration
    fn describe(&self);

    /// Whether setup completed and the host may proceed
    fn is_ready(&self) -> bool;
}

impl<I, B> Component for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Error = Error<I>;

    fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        Display::initialize(self, delay)
    }

    fn refresh(&mut self) -> Result<(), Self::Error> {
        self.update()
    }

    fn describe(&self) {
        Display::describe(self);
    }

    fn is_ready(&self) -> bool {
        Display::is_ready(self)
    }
}
