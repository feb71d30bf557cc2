//! Refresh pass coordination
//!
//! A refresh may be requested again while one is running, typically by a
//! render hook that draws and then asks for another update. Such a request
//! does not recurse. It sets a pending flag, and the running refresh
//! repeats its render/transfer pass once more before it returns. Any number
//! of nested requests during one pass collapse into a single extra pass.

/// Refresh state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateState {
    /// No refresh running
    #[default]
    Idle,
    /// A refresh is running
    Refreshing,
}

/// Outcome of a refresh request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    /// The caller now owns the refresh and must run passes
    Run,
    /// A refresh is already running and will do one more pass
    Deferred,
}

/// Tracks whether a refresh is running and whether another pass is owed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateCoordinator {
    state: UpdateState,
    pending: bool,
    passes: u32,
}

impl UpdateCoordinator {
    /// Idle coordinator with nothing pending
    pub const fn new() -> Self {
        Self {
            state: UpdateState::Idle,
            pending: false,
            passes: 0,
        }
    }

    /// Ask for a refresh
    pub fn request(&mut self) -> Request {
        match self.state {
            UpdateState::Refreshing => {
                self.pending = true;
                Request::Deferred
            }
            UpdateState::Idle => {
                self.state = UpdateState::Refreshing;
                self.pending = false;
                Request::Run
            }
        }
    }

    /// Start a pass, clearing the pending flag
    pub fn begin_pass(&mut self) {
        self.pending = false;
        self.passes = self.passes.wrapping_add(1);
    }

    /// Whether another pass was requested since the current one began
    pub const fn needs_another_pass(&self) -> bool {
        self.pending
    }

    /// Return to idle
    ///
    /// Also called when a pass fails, so pending requests are dropped.
    pub fn finish(&mut self) {
        self.state = UpdateState::Idle;
        self.pending = false;
    }

    /// Current state
    pub const fn state(&self) -> UpdateState {
        self.state
    }

    /// Total passes started since creation
    pub const fn passes(&self) -> u32 {
        self.passes
    }
}
