//! Held-key input flags
//!
//! Edge events from the host set or clear two flags; `tick` samples them once.

use serde::{Deserialize, Serialize};

/// Which direction keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left_held: bool,
    pub right_held: bool,
}

impl InputState {
    pub fn on_left_down(&mut self) {
        self.left_held = true;
    }

    pub fn on_left_up(&mut self) {
        self.left_held = false;
    }

    pub fn on_right_down(&mut self) {
        self.right_held = true;
    }

    pub fn on_right_up(&mut self) {
        self.right_held = false;
    }

    /// Horizontal paddle direction: -1, 0 or +1.
    ///
    /// Right wins when both keys are held; left is only consulted otherwise.
    pub fn direction(&self) -> f32 {
        if self.right_held {
            1.0
        } else if self.left_held {
            -1.0
        } else {
            0.0
        }
    }

    /// Release both keys
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
