//! Panel orientation
//!
//! Orientation is applied once during setup by writing a single mode byte to
//! the memory access control register (MADCTL). It changes how the
//! controller walks its RAM; the framebuffer layout and per-update
//! addressing are unaffected.
//!
//! ## Axis swap
//!
//! Setting [`Orientation::swap_xy`] sets the MV bit, which is known to
//! produce incorrect output on AXS15231 panels driven over QSPI. The bit is
//! still sent so the driver matches hardware behavior, but
//! [`Orientation::is_fully_supported`] reports `false` and setup logs a
//! warning.
//!
//! ## Example
//!
//! ```
//! use axs15231::Orientation;
//!
//! let orientation = Orientation::new().mirror_x(true);
//! assert_eq!(orientation.madctl(), 0x40);
//! assert!(orientation.is_fully_supported());
//! ```

use crate::command::{MADCTL_MV, MADCTL_MX, MADCTL_MY, MADCTL_RGB};

/// Mirror and swap flags for the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Orientation {
    /// Mirror along the X axis (reverse column order)
    pub mirror_x: bool,
    /// Mirror along the Y axis (reverse row order)
    pub mirror_y: bool,
    /// Exchange rows and columns (known defect, see module docs)
    pub swap_xy: bool,
}

impl Orientation {
    /// Native orientation: no mirroring, no swap
    pub const fn new() -> Self {
        Self {
            mirror_x: false,
            mirror_y: false,
            swap_xy: false,
        }
    }

    /// Set X mirroring
    pub const fn mirror_x(mut self, value: bool) -> Self {
        self.mirror_x = value;
        self
    }

    /// Set Y mirroring
    pub const fn mirror_y(mut self, value: bool) -> Self {
        self.mirror_y = value;
        self
    }

    /// Set axis swap
    pub const fn swap_xy(mut self, value: bool) -> Self {
        self.swap_xy = value;
        self
    }

    /// Compose the MADCTL mode byte (RGB color order)
    pub const fn madctl(&self) -> u8 {
        let mut mad = MADCTL_RGB;
        if self.swap_xy {
            mad |= MADCTL_MV;
        }
        if self.mirror_x {
            mad |= MADCTL_MX;
        }
        if self.mirror_y {
            mad |= MADCTL_MY;
        }
        mad
    }

    /// Whether the controller renders this orientation correctly
    ///
    /// Returns `false` when [`swap_xy`](Self::swap_xy) is set.
    pub const fn is_fully_supported(&self) -> bool {
        !self.swap_xy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_orientation_is_rgb_only() {
        assert_eq!(Orientation::new().madctl(), MADCTL_RGB);
        assert_eq!(Orientation::default(), Orientation::new());
    }

    #[test]
    fn test_mirror_bits() {
        assert_eq!(Orientation::new().mirror_x(true).madctl(), 0x40);
        assert_eq!(Orientation::new().mirror_y(true).madctl(), 0x80);
        assert_eq!(
            Orientation::new().mirror_x(true).mirror_y(true).madctl(),
            0xC0
        );
    }

    #[test]
    fn test_swap_sets_mv_and_is_flagged() {
        let orientation = Orientation::new().swap_xy(true);
        assert_eq!(orientation.madctl(), 0x20);
        assert!(!orientation.is_fully_supported());
    }

    #[test]
    fn test_all_flags() {
        let orientation = Orientation::new()
            .mirror_x(true)
            .mirror_y(true)
            .swap_xy(true);
        assert_eq!(orientation.madctl(), 0xE0);
    }
}
