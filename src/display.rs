//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{
    DISPLAY_OFF, DISPLAY_ON, MEMORY_ACCESS_CONTROL, SLEEP_IN, SLEEP_OUT, WRITE_BRIGHTNESS,
};
use crate::config::{Config, Dimensions};
use crate::damage::{DamageTracker, DirtyRect};
use crate::error::Error;
use crate::framebuffer::PixelBuffer;
use crate::interface::DisplayInterface;
use crate::transfer::transfer;
use crate::update::{Request, UpdateCoordinator, UpdateState};
use crate::window::program_window;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Settle time after entering or leaving sleep, in milliseconds
pub const SLEEP_SETTLE_MS: u32 = 120;

/// Setup progress of a [`Display`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// `initialize` has not completed yet
    #[default]
    Uninitialized,
    /// Setup completed, refreshes are allowed
    Ready,
    /// Setup hit a bus error; the panel state is unknown
    Failed,
}

/// Core display driver for AXS15231
///
/// Owns the hardware interface and an RGB565 pixel buffer. Drawing only
/// touches the buffer and widens the dirty rectangle; [`update`](Self::update)
/// sends the dirty rectangle to the panel.
///
/// For embedded-graphics support enable the `graphics` feature, which
/// implements `DrawTarget` for this type.
pub struct Display<I, B>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Host-side copy of the frame
    pixels: PixelBuffer<B>,
    /// Pixels changed since the last transfer
    damage: DamageTracker,
    /// Refresh state
    coordinator: UpdateCoordinator,
    /// Brightness to write on setup and on change
    brightness: u8,
    /// Setup progress
    lifecycle: Lifecycle,
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Display instance over caller-provided pixel storage
    ///
    /// No bus traffic happens until [`initialize`](Self::initialize).
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `buffer` holds fewer than
    /// `config.dimensions.buffer_size()` bytes.
    pub fn new(interface: I, config: Config, buffer: B) -> Result<Self, Error<I>> {
        let Dimensions { width, height } = config.dimensions;
        let pixels = PixelBuffer::new(buffer, width, height).map_err(|e| {
            log::error!(
                "pixel buffer too small: {} of {} bytes",
                e.provided,
                e.required
            );
            Error::BufferTooSmall {
                required: e.required,
                provided: e.provided,
            }
        })?;
        Ok(Self::from_parts(interface, config, pixels))
    }

    fn from_parts(interface: I, config: Config, pixels: PixelBuffer<B>) -> Self {
        let Dimensions { width, height } = config.dimensions;
        Self {
            interface,
            brightness: config.brightness,
            config,
            pixels,
            damage: DamageTracker::new(width, height),
            coordinator: UpdateCoordinator::new(),
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// Power up and configure the panel
    ///
    /// Switches the backlight on, pulses reset, sends the init table,
    /// programs MADCTL from the orientation and writes the brightness.
    /// Panel RAM holds garbage after reset, so the whole buffer is marked
    /// dirty and the first update sends a full frame.
    ///
    /// # Errors
    ///
    /// On a bus error the display is marked [`Lifecycle::Failed`] and the
    /// error is returned. Calling this again retries the whole sequence.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::info!("setting up AXS15231");
        match self.run_setup(delay) {
            Ok(()) => {
                self.lifecycle = Lifecycle::Ready;
                log::info!("AXS15231 setup complete");
                Ok(())
            }
            Err(e) => {
                log::error!("AXS15231 setup failed: {:?}", e);
                self.lifecycle = Lifecycle::Failed;
                Err(Error::Interface(e))
            }
        }
    }

    fn run_setup<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), I::Error> {
        self.interface.set_backlight(true)?;
        self.interface.reset(delay)?;

        let sequence = self.config.init_sequence;
        log::info!("sending {} init commands", sequence.len());
        for step in sequence {
            self.interface.send_command(step.command, step.data)?;
            if step.delay_ms > 0 {
                delay.delay_ms(step.delay_ms);
            }
        }

        self.apply_orientation()?;
        self.damage.mark_all();
        self.interface.send_command(WRITE_BRIGHTNESS, &[self.brightness])
    }

    fn apply_orientation(&mut self) -> Result<(), I::Error> {
        let orientation = self.config.orientation;
        if !orientation.is_fully_supported() {
            log::warn!("swap_xy is not supported by this controller, output will be distorted");
        }
        let madctl = orientation.madctl();
        self.interface.send_command(MEMORY_ACCESS_CONTROL, &[madctl])?;
        log::debug!("wrote MADCTL 0x{:02X}", madctl);
        Ok(())
    }

    /// Store `color` at `(x, y)` in the pixel buffer
    ///
    /// Returns `true` if the pixel changed, in which case it joins the
    /// dirty rectangle. Out-of-range coordinates are logged and dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        let changed = self.pixels.set_pixel(x, y, color);
        if changed {
            // set_pixel only reports a change for in-range coordinates
            self.damage.mark(x as u16, y as u16);
        }
        changed
    }

    /// Overwrite the whole buffer with `color` and mark it all dirty
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
        self.damage.mark_all();
    }

    /// Send the dirty rectangle to the panel
    ///
    /// Equivalent to [`update_with`](Self::update_with) with a render hook
    /// that draws nothing. Called from inside a render hook, it schedules
    /// one more pass of the running refresh and returns immediately.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotReady` before setup has completed, or
    /// `Error::Interface` if the bus fails.
    pub fn update(&mut self) -> DisplayResult<I> {
        self.update_with(|_| {})
    }

    /// Run `render`, then send the dirty rectangle to the panel
    ///
    /// `render` gets the display to draw into. If it requests another
    /// update, the request is remembered and the render/send pass repeats
    /// once more after the current one, however many requests were made.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotReady` before setup has completed, or
    /// `Error::Interface` if the bus fails. The refresh ends either way and
    /// damage that was not sent stays tracked.
    pub fn update_with<F>(&mut self, mut render: F) -> DisplayResult<I>
    where
        F: FnMut(&mut Self),
    {
        if self.lifecycle != Lifecycle::Ready {
            return Err(Error::NotReady);
        }
        if self.coordinator.request() == Request::Deferred {
            log::debug!("update requested during refresh, scheduling another pass");
            return Ok(());
        }

        let result = self.run_passes(&mut render);
        self.coordinator.finish();
        result
    }

    fn run_passes<F>(&mut self, render: &mut F) -> DisplayResult<I>
    where
        F: FnMut(&mut Self),
    {
        loop {
            self.coordinator.begin_pass();
            render(self);
            self.flush()?;
            if !self.coordinator.needs_another_pass() {
                return Ok(());
            }
        }
    }

    fn flush(&mut self) -> DisplayResult<I> {
        let rect = self.damage.current();
        if rect.is_empty() {
            return Ok(());
        }

        program_window(&mut self.interface, &rect, self.config.offset)
            .map_err(Error::Interface)?;
        let path = transfer(
            &mut self.interface,
            &rect,
            self.pixels.as_bytes(),
            self.pixels.stride(),
        )
        .map_err(Error::Interface)?;
        log::debug!(
            "sent {}x{} at ({}, {}) as {:?}",
            rect.width(),
            rect.height(),
            rect.x_low,
            rect.y_low,
            path
        );

        self.damage.reset();
        Ok(())
    }

    /// Set the backlight brightness
    ///
    /// The value is kept and written to the panel once setup has completed.
    /// Setup always writes the latest value.
    pub fn set_brightness(&mut self, brightness: u8) -> DisplayResult<I> {
        self.brightness = brightness;
        if self.lifecycle == Lifecycle::Ready {
            self.interface
                .send_command(WRITE_BRIGHTNESS, &[brightness])
                .map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Blank the panel and enter sleep mode
    ///
    /// The frame memory is kept; [`wake`](Self::wake) shows it again.
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if self.lifecycle != Lifecycle::Ready {
            return Err(Error::NotReady);
        }
        self.send_command(DISPLAY_OFF)?;
        self.send_command(SLEEP_IN)?;
        delay.delay_ms(SLEEP_SETTLE_MS);
        Ok(())
    }

    /// Leave sleep mode and turn the panel back on
    pub fn wake<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if self.lifecycle != Lifecycle::Ready {
            return Err(Error::NotReady);
        }
        self.send_command(SLEEP_OUT)?;
        delay.delay_ms(SLEEP_SETTLE_MS);
        self.send_command(DISPLAY_ON)?;
        delay.delay_ms(SLEEP_SETTLE_MS);
        Ok(())
    }

    /// Log the configuration at info level
    pub fn describe(&self) {
        let Dimensions { width, height } = self.config.dimensions;
        log::info!("AXS15231 Display");
        log::info!("  Height: {}", height);
        log::info!("  Width: {}", width);
        log::info!("  Reset Pin: {}", pin_label(self.interface.has_reset_pin()));
        log::info!(
            "  Backlight Pin: {}",
            pin_label(self.interface.has_backlight_pin())
        );
        log::info!(
            "  Offset: ({}, {})",
            self.config.offset.x,
            self.config.offset.y
        );
        log::info!("  MADCTL: 0x{:02X}", self.config.orientation.madctl());
        log::info!("  SPI Data rate: {}MHz", self.config.data_rate_hz / 1_000_000);
    }

    /// Whether setup completed
    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    /// Setup progress
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Get display configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current brightness
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Rectangle that the next update will send
    pub fn dirty_rect(&self) -> DirtyRect {
        self.damage.current()
    }

    /// Read back a pixel from the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.pixels.pixel(x, y)
    }

    /// Raw RGB565 buffer, high byte first
    pub fn buffer(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    /// Refresh state
    pub fn update_state(&self) -> UpdateState {
        self.coordinator.state()
    }

    /// Render/transfer passes run since creation
    pub fn update_passes(&self) -> u32 {
        self.coordinator.passes()
    }

    /// Release the interface and pixel storage
    pub fn release(self) -> (I, B) {
        (self.interface, self.pixels.into_inner())
    }

    fn send_command(&mut self, command: u8) -> DisplayResult<I> {
        self.interface
            .send_command(command, &[])
            .map_err(Error::Interface)
    }
}

fn pin_label(wired: bool) -> &'static str {
    if wired { "yes" } else { "none" }
}

#[cfg(feature = "alloc")]
impl<I> Display<I, alloc::vec::Vec<u8>>
where
    I: DisplayInterface,
{
    /// Create a new Display with a heap-allocated pixel buffer
    ///
    /// # Errors
    ///
    /// Returns `Error::AllocationFailed` if the buffer cannot be reserved.
    pub fn with_allocated_buffer(interface: I, config: Config) -> Result<Self, Error<I>> {
        let Dimensions { width, height } = config.dimensions;
        let pixels = PixelBuffer::allocate(width, height).map_err(|e| {
            log::error!("could not allocate {} byte pixel buffer", e.bytes);
            Error::AllocationFailed { bytes: e.bytes }
        })?;
        Ok(Self::from_parts(interface, config, pixels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{COLUMN_ADDRESS_SET, ROW_ADDRESS_SET};
    use crate::config::{Builder, Offset};
    use crate::init::VENDOR_INIT;
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Command(u8, Vec<u8>),
        Select,
        Deselect,
        Start(Vec<u8>),
        Continue(Vec<u8>),
        Reset,
        Backlight(bool),
    }

    #[derive(Debug, PartialEq)]
    struct MockError;

    #[derive(Debug, Default)]
    struct MockInterface {
        events: Vec<Event>,
        fail_commands: bool,
        fail_streams: bool,
    }

    impl MockInterface {
        fn commands(&self) -> Vec<(u8, Vec<u8>)> {
            self.events
                .iter()
                .filter_map(|event| match event {
                    Event::Command(cmd, data) => Some((*cmd, data.clone())),
                    _ => None,
                })
                .collect()
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn send_command(&mut self, command: u8, payload: &[u8]) -> Result<(), Self::Error> {
            if self.fail_commands {
                return Err(MockError);
            }
            self.events.push(Event::Command(command, payload.to_vec()));
            Ok(())
        }

        fn select(&mut self) -> Result<(), Self::Error> {
            self.events.push(Event::Select);
            Ok(())
        }

        fn deselect(&mut self) -> Result<(), Self::Error> {
            self.events.push(Event::Deselect);
            Ok(())
        }

        fn start_memory_write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if self.fail_streams {
                return Err(MockError);
            }
            self.events.push(Event::Start(data.to_vec()));
            Ok(())
        }

        fn continue_memory_write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if self.fail_streams {
                return Err(MockError);
            }
            self.events.push(Event::Continue(data.to_vec()));
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            self.events.push(Event::Reset);
            Ok(())
        }

        fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
            self.events.push(Event::Backlight(on));
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockDelay {
        total_ms: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ms += u64::from(ns) / 1_000_000;
        }
    }

    fn config(width: u16, height: u16) -> Config {
        Builder::new()
            .dimensions(Dimensions::new(width, height).unwrap())
            .build()
            .unwrap()
    }

    fn test_display(width: u16, height: u16) -> Display<MockInterface, Vec<u8>> {
        let buffer = vec![0u8; width as usize * height as usize * 2];
        Display::new(MockInterface::default(), config(width, height), buffer).unwrap()
    }

    fn ready_display(width: u16, height: u16) -> Display<MockInterface, Vec<u8>> {
        let mut display = test_display(width, height);
        display.initialize(&mut MockDelay::default()).unwrap();
        display.update().unwrap();
        display.interface.events.clear();
        display
    }

    #[test]
    fn test_new_rejects_small_buffer() {
        let result = Display::new(MockInterface::default(), config(8, 8), vec![0u8; 127]);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 128,
                provided: 127
            })
        ));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_with_allocated_buffer() {
        let display = Display::with_allocated_buffer(MockInterface::default(), config(8, 4)).unwrap();
        assert_eq!(display.buffer().len(), 64);
        assert!(!display.is_ready());
    }

    #[test]
    fn test_initialize_sequence() {
        let mut display = test_display(16, 16);
        let mut delay = MockDelay::default();
        display.initialize(&mut delay).unwrap();

        let events = &display.interface.events;
        assert_eq!(events[0], Event::Backlight(true));
        assert_eq!(events[1], Event::Reset);

        let commands = display.interface.commands();
        assert_eq!(commands.len(), VENDOR_INIT.len() + 2);
        for (sent, step) in commands.iter().zip(VENDOR_INIT) {
            assert_eq!(sent.0, step.command);
            assert_eq!(sent.1, step.data);
        }
        assert_eq!(commands[VENDOR_INIT.len()], (MEMORY_ACCESS_CONTROL, vec![0x00]));
        assert_eq!(commands[VENDOR_INIT.len() + 1], (WRITE_BRIGHTNESS, vec![0xD0]));

        let table_delay: u64 = VENDOR_INIT.iter().map(|c| u64::from(c.delay_ms)).sum();
        assert_eq!(delay.total_ms, table_delay);
        assert!(display.is_ready());
        assert_eq!(display.lifecycle(), Lifecycle::Ready);
    }

    #[test]
    fn test_initialize_writes_orientation() {
        let config = Builder::new()
            .dimensions(Dimensions::new(16, 16).unwrap())
            .mirror_x(true)
            .mirror_y(true)
            .swap_xy(true)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::default(), config, vec![0u8; 512]).unwrap();
        display.initialize(&mut MockDelay::default()).unwrap();
        let commands = display.interface.commands();
        assert!(commands.contains(&(MEMORY_ACCESS_CONTROL, vec![0xE0])));
    }

    #[test]
    fn test_initialize_marks_whole_panel_dirty() {
        let mut display = test_display(16, 16);
        display.initialize(&mut MockDelay::default()).unwrap();
        assert_eq!(display.dirty_rect(), DirtyRect::full(16, 16));

        display.interface.events.clear();
        display.update().unwrap();
        assert_eq!(
            display.interface.events[2..],
            [
                Event::Select,
                Event::Start(vec![0u8; 16 * 16 * 2]),
                Event::Deselect
            ]
        );
        assert!(display.dirty_rect().is_empty());
    }

    #[test]
    fn test_pixels_drawn_before_setup_reach_panel() {
        let mut display = test_display(8, 8);
        assert!(display.set_pixel(3, 3, Color::RED));
        display.initialize(&mut MockDelay::default()).unwrap();
        display.interface.events.clear();
        display.update().unwrap();

        let mut panel = PanelModel::new(8, 8);
        panel.replay(&display.interface.events);
        assert_eq!(panel.ram[3 * 8 + 3], Some(Color::RED.raw()));

        // Redrawing the same color is a no-op, so the first update must
        // already have carried it
        display.interface.events.clear();
        assert!(!display.set_pixel(3, 3, Color::RED));
        display.update().unwrap();
        assert!(display.interface.events.is_empty());
    }

    #[test]
    fn test_failed_setup_blocks_updates() {
        let mut display = test_display(16, 16);
        display.interface.fail_commands = true;
        let result = display.initialize(&mut MockDelay::default());
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert_eq!(display.lifecycle(), Lifecycle::Failed);
        assert!(!display.is_ready());

        display.interface.fail_commands = false;
        display.interface.events.clear();
        display.fill(Color::RED);
        assert!(matches!(display.update(), Err(Error::NotReady)));
        assert!(display.interface.events.is_empty());
    }

    #[test]
    fn test_update_before_setup_is_rejected() {
        let mut display = test_display(16, 16);
        display.set_pixel(1, 1, Color::BLUE);
        assert!(matches!(display.update(), Err(Error::NotReady)));
        assert!(display.interface.events.is_empty());
        assert_eq!(display.update_passes(), 0);
        assert!(!display.dirty_rect().is_empty());
    }

    #[test]
    fn test_brightness_deferred_until_setup() {
        let mut display = test_display(16, 16);
        display.set_brightness(0x40).unwrap();
        assert!(display.interface.events.is_empty());

        display.initialize(&mut MockDelay::default()).unwrap();
        assert_eq!(
            display.interface.commands().last(),
            Some(&(WRITE_BRIGHTNESS, vec![0x40]))
        );

        display.interface.events.clear();
        display.set_brightness(0x80).unwrap();
        assert_eq!(display.interface.commands(), [(WRITE_BRIGHTNESS, vec![0x80])]);
        assert_eq!(display.brightness(), 0x80);
    }

    #[test]
    fn test_full_fill_uses_burst() {
        let mut display = ready_display(64, 64);
        display.fill(Color::BLACK);
        display.update().unwrap();

        let events = &display.interface.events;
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], Event::Command(COLUMN_ADDRESS_SET, vec![0, 0, 0, 63]));
        assert_eq!(events[1], Event::Command(ROW_ADDRESS_SET, vec![0, 0, 0, 63]));
        assert_eq!(events[2], Event::Select);
        assert_eq!(events[3], Event::Start(vec![0u8; 64 * 64 * 2]));
        assert_eq!(events[4], Event::Deselect);
        assert!(display.dirty_rect().is_empty());
    }

    #[test]
    fn test_partial_update_example() {
        let mut display = ready_display(64, 64);
        display.fill(Color::BLACK);
        display.update().unwrap();
        display.interface.events.clear();

        assert!(display.set_pixel(5, 5, Color::RED));
        assert!(display.set_pixel(10, 40, Color::RED));
        assert_eq!(
            display.dirty_rect(),
            DirtyRect {
                x_low: 5,
                y_low: 5,
                x_high: 10,
                y_high: 40
            }
        );
        display.update().unwrap();

        let events = &display.interface.events;
        assert_eq!(events[0], Event::Command(COLUMN_ADDRESS_SET, vec![0x00, 0x05, 0x00, 0x0A]));
        assert_eq!(events[1], Event::Command(ROW_ADDRESS_SET, vec![0x00, 0x05, 0x00, 0x28]));
        assert_eq!(events[2], Event::Select);
        assert_eq!(events[3], Event::Start(Vec::new()));
        let rows: Vec<&Event> = events[4..events.len() - 1].iter().collect();
        assert_eq!(rows.len(), 36);
        assert!(rows
            .iter()
            .all(|event| matches!(event, Event::Continue(data) if data.len() == 12)));
        assert_eq!(events.last(), Some(&Event::Deselect));

        let mut first_row = vec![0u8; 12];
        first_row[..2].copy_from_slice(&Color::RED.to_be_bytes());
        assert_eq!(*rows[0], Event::Continue(first_row));
    }

    #[test]
    fn test_unchanged_pixel_causes_no_traffic() {
        let mut display = ready_display(16, 16);
        assert!(!display.set_pixel(2, 2, Color::BLACK));
        display.update().unwrap();
        assert!(display.interface.events.is_empty());
        // one pass from setup, one here
        assert_eq!(display.update_passes(), 2);
    }

    #[test]
    fn test_out_of_range_pixel_is_dropped() {
        let mut display = ready_display(16, 16);
        assert!(!display.set_pixel(16, 0, Color::RED));
        assert!(!display.set_pixel(-1, 3, Color::RED));
        assert!(display.dirty_rect().is_empty());
    }

    #[test]
    fn test_offset_shifts_window() {
        let config = Builder::new()
            .dimensions(Dimensions::new(16, 16).unwrap())
            .offset(Offset::new(4, -1))
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::default(), config, vec![0u8; 512]).unwrap();
        display.initialize(&mut MockDelay::default()).unwrap();
        display.update().unwrap();
        display.interface.events.clear();

        display.set_pixel(0, 0, Color::GREEN);
        display.update().unwrap();
        assert_eq!(
            display.interface.commands(),
            [
                (COLUMN_ADDRESS_SET, vec![0x00, 0x04, 0x00, 0x04]),
                (ROW_ADDRESS_SET, vec![0xFF, 0xFF, 0xFF, 0xFF]),
            ]
        );
    }

    #[test]
    fn test_nested_updates_run_one_extra_pass() {
        let mut display = ready_display(32, 32);
        let mut renders = 0;
        display
            .update_with(|d| {
                renders += 1;
                if renders == 1 {
                    d.set_pixel(1, 1, Color::RED);
                    for _ in 0..3 {
                        d.update().unwrap();
                    }
                    assert_eq!(d.update_state(), UpdateState::Refreshing);
                } else {
                    d.set_pixel(2, 2, Color::BLUE);
                }
            })
            .unwrap();

        assert_eq!(renders, 2);
        assert_eq!(display.update_passes(), 1 + 2);
        assert_eq!(display.update_state(), UpdateState::Idle);
        assert!(display.dirty_rect().is_empty());

        let selects = display
            .interface
            .events
            .iter()
            .filter(|event| **event == Event::Select)
            .count();
        assert_eq!(selects, 2);
    }

    #[test]
    fn test_failed_transfer_returns_to_idle() {
        let mut display = ready_display(16, 16);
        display.fill(Color::WHITE);
        display.interface.fail_streams = true;
        assert!(matches!(display.update(), Err(Error::Interface(MockError))));
        assert_eq!(display.update_state(), UpdateState::Idle);
        assert_eq!(display.interface.events.last(), Some(&Event::Deselect));
        assert_eq!(display.dirty_rect(), DirtyRect::full(16, 16));

        display.interface.fail_streams = false;
        display.update().unwrap();
        assert!(display.dirty_rect().is_empty());
    }

    #[test]
    fn test_sleep_and_wake() {
        let mut display = ready_display(16, 16);
        let mut delay = MockDelay::default();
        display.sleep(&mut delay).unwrap();
        display.wake(&mut delay).unwrap();
        assert_eq!(
            display.interface.commands(),
            [
                (DISPLAY_OFF, vec![]),
                (SLEEP_IN, vec![]),
                (SLEEP_OUT, vec![]),
                (DISPLAY_ON, vec![]),
            ]
        );
        assert_eq!(delay.total_ms, 3 * u64::from(SLEEP_SETTLE_MS));
    }

    #[test]
    fn test_sleep_before_setup_is_rejected() {
        let mut display = test_display(16, 16);
        assert!(matches!(
            display.sleep(&mut MockDelay::default()),
            Err(Error::NotReady)
        ));
    }

    #[test]
    fn test_release_returns_storage() {
        let mut display = ready_display(4, 4);
        display.fill(Color::WHITE);
        let (_, buffer) = display.release();
        assert_eq!(buffer, vec![0xFFu8; 32]);
    }

    /// Panel RAM model driven by CASET/RASET/RAMWR frames
    struct PanelModel {
        width: usize,
        ram: Vec<Option<u16>>,
        columns: (usize, usize),
        rows: (usize, usize),
        cursor: (usize, usize),
    }

    impl PanelModel {
        fn new(width: usize, height: usize) -> Self {
            Self {
                width,
                ram: vec![None; width * height],
                columns: (0, 0),
                rows: (0, 0),
                cursor: (0, 0),
            }
        }

        fn bounds(data: &[u8]) -> (usize, usize) {
            (
                usize::from(u16::from_be_bytes([data[0], data[1]])),
                usize::from(u16::from_be_bytes([data[2], data[3]])),
            )
        }

        fn write(&mut self, data: &[u8]) {
            for pair in data.chunks_exact(2) {
                let (x, y) = self.cursor;
                assert!(y <= self.rows.1, "write past the window");
                self.ram[y * self.width + x] = Some(u16::from_be_bytes([pair[0], pair[1]]));
                self.cursor = if x == self.columns.1 {
                    (self.columns.0, y + 1)
                } else {
                    (x + 1, y)
                };
            }
        }

        fn replay(&mut self, events: &[Event]) {
            for event in events {
                match event {
                    Event::Command(COLUMN_ADDRESS_SET, data) => self.columns = Self::bounds(data),
                    Event::Command(ROW_ADDRESS_SET, data) => self.rows = Self::bounds(data),
                    Event::Start(data) => {
                        self.cursor = (self.columns.0, self.rows.0);
                        self.write(data);
                    }
                    Event::Continue(data) => self.write(data),
                    _ => {}
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_replay_reconstructs_dirty_rect(
            writes in proptest::collection::vec((0i32..24, 0i32..16, any::<u16>()), 0..30)
        ) {
            let mut display = ready_display(24, 16);
            for &(x, y, raw) in &writes {
                display.set_pixel(x, y, Color::new(raw));
            }
            let rect = display.dirty_rect();
            display.update().unwrap();

            let mut panel = PanelModel::new(24, 16);
            panel.replay(&display.interface.events);
            for y in 0..16u16 {
                for x in 0..24u16 {
                    let sent = panel.ram[usize::from(y) * 24 + usize::from(x)];
                    if rect.contains(x, y) {
                        prop_assert_eq!(sent, display.pixel(i32::from(x), i32::from(y)).map(Color::raw));
                    } else {
                        prop_assert_eq!(sent, None);
                    }
                }
            }
        }

        #[test]
        fn prop_dirty_rect_bounds_only_changing_writes(
            writes in proptest::collection::vec(
                (0i32..24, 0i32..16, prop_oneof![Just(0x0000u16), Just(0xF800u16)]),
                0..40,
            )
        ) {
            let mut display = ready_display(24, 16);
            let mut shadow = vec![0u16; 24 * 16];
            let mut expected = DamageTracker::new(24, 16);
            for &(x, y, raw) in &writes {
                let slot = &mut shadow[y as usize * 24 + x as usize];
                let changed = *slot != raw;
                *slot = raw;
                if changed {
                    expected.mark(x as u16, y as u16);
                }
                prop_assert_eq!(display.set_pixel(x, y, Color::new(raw)), changed);
            }
            prop_assert_eq!(display.dirty_rect(), expected.current());
        }

        #[test]
        fn prop_fill_twice_matches_fill_once(raw in any::<u16>()) {
            let mut display = ready_display(8, 8);
            display.fill(Color::new(raw));
            let once = display.buffer().to_vec();
            display.fill(Color::new(raw));
            prop_assert_eq!(display.buffer(), once.as_slice());
            prop_assert_eq!(display.dirty_rect(), DirtyRect::full(8, 8));
        }
    }
}
