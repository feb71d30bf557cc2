//! Driver errors
//!
//! - [`BuilderError`]: rejected configuration, reported by [`Builder::build`](crate::Builder::build)
//!   and [`Dimensions::new`](crate::Dimensions::new)
//! - [`Error`]: faults of a constructed [`Display`](crate::Display), from
//!   buffer provisioning to bus failures
//! - [`InterfaceError`](crate::interface::InterfaceError): bus or pin
//!   failures below the display core
//!
//! Drawing outside the panel is not an error: such pixels are logged and
//! dropped.
//!
//! ## Example
//!
//! ```
//! use axs15231::{Builder, BuilderError, Dimensions, MAX_ROWS};
//!
//! assert!(matches!(Builder::new().build(), Err(BuilderError::MissingDimensions)));
//! assert_eq!(
//!     Dimensions::new(320, MAX_ROWS + 1),
//!     Err(BuilderError::InvalidDimensions { width: 320, height: 481 })
//! );
//! ```

use crate::interface::DisplayInterface;

/// Columns of the AXS15231 frame memory
pub const MAX_COLUMNS: u16 = 320;

/// Rows of the AXS15231 frame memory
pub const MAX_ROWS: u16 = 480;

/// Display faults
///
/// Carries the interface's own error type in [`Error::Interface`].
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Bus or pin failure, returned as is and never retried
    Interface(I::Error),
    /// Pixel storage shorter than `dimensions.buffer_size()`
    BufferTooSmall {
        /// Bytes needed for every pixel
        required: usize,
        /// Bytes handed over
        provided: usize,
    },
    /// The allocator could not provide the pixel buffer
    AllocationFailed {
        /// Bytes requested
        bytes: usize,
    },
    /// Refresh requested before setup completed, or after setup failed
    NotReady,
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::BufferTooSmall { required, provided } => write!(
                f,
                "Pixel buffer holds {provided} bytes, {required} needed"
            ),
            Self::AllocationFailed { bytes } => {
                write!(f, "Failed to allocate {bytes} byte pixel buffer")
            }
            Self::NotReady => write!(f, "Display setup has not completed"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Rejected configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// [`Builder::dimensions`](crate::config::Builder::dimensions) was never called
    MissingDimensions,
    /// Width or height is zero or beyond [`MAX_COLUMNS`] x [`MAX_ROWS`]
    InvalidDimensions {
        /// Requested width in pixels
        width: u16,
        /// Requested height in pixels
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Display dimensions are required"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
