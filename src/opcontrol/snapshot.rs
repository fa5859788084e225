//! Per-cycle input snapshot.
//!
//! Everything the decision logic looks at in one cycle is read up front into
//! a [`CycleInputs`], so no decision can see a newer value than another.

use crate::peripherals::{ControllerAxis, ControllerButton, InputSource};

/// Controller axes and buttons as sampled at the start of a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlSnapshot {
    axes:    [i32; 4],
    buttons: [bool; 12],
}

impl ControlSnapshot {
    /// Refreshes `source` and reads every axis and button from it.
    pub fn sample(source: &mut dyn InputSource) -> Self {
        source.refresh();
        let mut snapshot = Self::default();
        for axis in ControllerAxis::ALL {
            snapshot.axes[axis.index()] = source.axis(axis).clamp(-100, 100);
        }
        for button in ControllerButton::ALL {
            snapshot.buttons[button.index()] = source.button(button);
        }
        snapshot
    }

    pub fn axis(&self, axis: ControllerAxis) -> i32 { self.axes[axis.index()] }

    pub fn pressed(&self, button: ControllerButton) -> bool { self.buttons[button.index()] }

    /// Returns a copy with `axis` set to `value` (clamped to `[-100, 100]`).
    pub fn with_axis(mut self, axis: ControllerAxis, value: i32) -> Self {
        self.axes[axis.index()] = value.clamp(-100, 100);
        self
    }

    /// Returns a copy with `button` held.
    pub fn with_button(mut self, button: ControllerButton) -> Self {
        self.buttons[button.index()] = true;
        self
    }
}

/// All readings one control cycle decides from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CycleInputs {
    pub controls:          ControlSnapshot,
    /// Measured shoulder position in degrees, `None` if unreadable.
    pub shoulder_position: Option<f64>,
    /// Measured elbow position in degrees, `None` if unreadable.
    pub elbow_position:    Option<f64>,
}
