//! Dirty-rectangle tracking
//!
//! [`DamageTracker`] keeps the bounding box of every pixel that changed
//! since the last successful transfer. Only this rectangle is sent to the
//! panel on refresh.

/// Inclusive pixel rectangle, possibly empty
///
/// Empty when `x_low > x_high` or `y_low > y_high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirtyRect {
    /// Leftmost column
    pub x_low: u16,
    /// Topmost row
    pub y_low: u16,
    /// Rightmost column
    pub x_high: u16,
    /// Bottom row
    pub y_high: u16,
}

impl DirtyRect {
    /// Canonical empty rectangle for a `width x height` area
    pub const fn empty(width: u16, height: u16) -> Self {
        Self {
            x_low: width,
            y_low: height,
            x_high: 0,
            y_high: 0,
        }
    }

    /// Rectangle covering a whole `width x height` area
    ///
    /// Zero-sized areas yield an empty rectangle.
    pub const fn full(width: u16, height: u16) -> Self {
        if width == 0 || height == 0 {
            return Self::empty(width, height);
        }
        Self {
            x_low: 0,
            y_low: 0,
            x_high: width - 1,
            y_high: height - 1,
        }
    }

    /// Whether no pixel is covered
    pub const fn is_empty(&self) -> bool {
        self.x_low > self.x_high || self.y_low > self.y_high
    }

    /// Width in pixels, 0 when empty
    pub const fn width(&self) -> u16 {
        if self.is_empty() {
            0
        } else {
            self.x_high - self.x_low + 1
        }
    }

    /// Height in pixels, 0 when empty
    pub const fn height(&self) -> u16 {
        if self.is_empty() {
            0
        } else {
            self.y_high - self.y_low + 1
        }
    }

    /// Whether `(x, y)` lies inside
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x_low && x <= self.x_high && y >= self.y_low && y <= self.y_high
    }
}

/// Low/high watermarks of changed pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageTracker {
    /// Tracked area
    rect: DirtyRect,
    /// Width of the visible area
    width: u16,
    /// Height of the visible area
    height: u16,
}

impl DamageTracker {
    /// Start with no damage
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            rect: DirtyRect::empty(width, height),
            width,
            height,
        }
    }

    /// Grow the rectangle to include `(x, y)`
    pub fn mark(&mut self, x: u16, y: u16) {
        let rect = &mut self.rect;
        rect.x_low = rect.x_low.min(x);
        rect.y_low = rect.y_low.min(y);
        rect.x_high = rect.x_high.max(x);
        rect.y_high = rect.y_high.max(y);
    }

    /// Mark the whole visible area
    pub fn mark_all(&mut self) {
        self.rect = DirtyRect::full(self.width, self.height);
    }

    /// The tracked rectangle
    pub const fn current(&self) -> DirtyRect {
        self.rect
    }

    /// Whether anything needs to be sent
    pub const fn is_dirty(&self) -> bool {
        !self.rect.is_empty()
    }

    /// Forget all damage
    pub fn reset(&mut self) {
        self.rect = DirtyRect::empty(self.width, self.height);
    }
}
