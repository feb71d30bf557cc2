//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};
use crate::framebuffer::BYTES_PER_PIXEL;
use crate::init::{InitCommand, VENDOR_INIT};
use crate::orientation::Orientation;

/// Default backlight brightness written at setup
pub const DEFAULT_BRIGHTNESS: u8 = 0xD0;

/// Default QSPI clock rate in Hz (reporting only)
pub const DEFAULT_DATA_RATE_HZ: u32 = 40_000_000;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is 0 or > MAX_COLUMNS
    /// - height is 0 or > MAX_ROWS
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS || height == 0 || height > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }
}

/// Signed origin offset of the visible area in controller RAM
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    /// Column offset in pixels
    pub x: i16,
    /// Row offset in pixels
    pub y: i16,
}

impl Offset {
    /// Create an offset
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Display configuration
///
/// Use `Builder` to create a Config. Immutable once the display is set up.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Mirror/swap flags written to MADCTL at setup
    pub orientation: Orientation,
    /// Origin offset applied to every addressing window
    pub offset: Offset,
    /// Initial backlight brightness
    pub brightness: u8,
    /// Bus clock rate in Hz, reported by `describe`
    pub data_rate_hz: u32,
    /// Initialization table sent during setup
    pub init_sequence: &'static [InitCommand],
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use axs15231::{Builder, Dimensions, Offset, Orientation};
///
/// let dims = match Dimensions::new(320, 480) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .orientation(Orientation::new().mirror_y(true))
///     .offset(Offset::new(0, 0))
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Mirror/swap flags
    orientation: Orientation,
    /// Origin offset
    offset: Offset,
    /// Initial brightness
    brightness: u8,
    /// Bus clock rate in Hz
    data_rate_hz: u32,
    /// Initialization table
    init_sequence: &'static [InitCommand],
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            orientation: Orientation::new(),
            offset: Offset::default(),
            brightness: DEFAULT_BRIGHTNESS,
            data_rate_hz: DEFAULT_DATA_RATE_HZ,
            // Panel-specific, override as needed
            init_sequence: VENDOR_INIT,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set mirror/swap flags
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set X mirroring
    pub fn mirror_x(mut self, value: bool) -> Self {
        self.orientation.mirror_x = value;
        self
    }

    /// Set Y mirroring
    pub fn mirror_y(mut self, value: bool) -> Self {
        self.orientation.mirror_y = value;
        self
    }

    /// Set axis swap
    ///
    /// See [`Orientation`] for the known limitation.
    pub fn swap_xy(mut self, value: bool) -> Self {
        self.orientation.swap_xy = value;
        self
    }

    /// Set the origin offset of the visible area
    pub fn offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    /// Set the initial brightness
    pub fn brightness(mut self, value: u8) -> Self {
        self.brightness = value;
        self
    }

    /// Set the bus clock rate reported by `describe`
    pub fn data_rate_hz(mut self, value: u32) -> Self {
        self.data_rate_hz = value;
        self
    }

    /// Replace the initialization table
    pub fn init_sequence(mut self, sequence: &'static [InitCommand]) -> Self {
        self.init_sequence = sequence;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            orientation: self.orientation,
            offset: self.offset,
            brightness: self.brightness,
            data_rate_hz: self.data_rate_hz,
            init_sequence: self.init_sequence,
        })
    }
}
