//! Graphics support via embedded-graphics
//!
//! Implements [`DrawTarget`] and [`OriginDimensions`] for
//! [`Display`], so any embedded-graphics primitive, font or image can be
//! drawn into the pixel buffer. Drawing only marks damage; call
//! [`Display::update`] to send it to the panel.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use axs15231::{Builder, Dimensions, Display, DisplayInterface};
//! # struct MockInterface;
//! # impl DisplayInterface for MockInterface {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _c: u8, _p: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! #     fn select(&mut self) -> Result<(), Infallible> { Ok(()) }
//! #     fn deselect(&mut self) -> Result<(), Infallible> { Ok(()) }
//! #     fn start_memory_write(&mut self, _d: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! #     fn continue_memory_write(&mut self, _d: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! #     fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Infallible> { Ok(()) }
//! #     fn set_backlight(&mut self, _on: bool) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! # let dims = match Dimensions::new(320, 480) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let buffer = vec![0u8; dims.buffer_size()];
//! let mut display = match Display::new(MockInterface, config, buffer) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let _ = display.initialize(&mut delay);
//!
//! // Clear to black
//! let _ = display.clear(Rgb565::BLACK);
//!
//! // Draw shapes
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::GREEN, 2))
//!     .draw(&mut display);
//!
//! // Send the damaged area
//! let _ = display.update();
//! ```

use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    primitives::{PointsIter, Rectangle},
};

use crate::color::Color;
use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, Color::from(color));
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(Color::from(color));
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&Rectangle::new(Point::zero(), self.size()));
        let color = Color::from(color);
        for point in area.points() {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}
