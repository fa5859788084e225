//! Controller input sampling for operator control.
//!
//! This module reads the V5 controller into plain values the control loop can
//! reason about:
//!
//! - **Axes** are reported as whole percent in `[-100, 100]`.
//! - **Buttons** are reported as held / not held.
//! - **Disconnects** read as a neutral controller (sticks centred, nothing
//!   pressed), so a dropped link stops the robot instead of freezing the last
//!   command.
//!
//! # Example
//!
//! ```ignore
//! use brgos::peripherals::{InputSource, controller::{ControllerAxis, ControllerInput}};
//!
//! let mut input = ControllerInput::new(peripherals.primary_controller);
//! input.refresh();
//! let forward = input.axis(ControllerAxis::LeftY);
//! ```

use log::warn;
use vexide::{
    controller::{ButtonState, ControllerState, JoystickState},
    prelude::Controller,
};

use super::InputSource;

/// An [`InputSource`] backed by a V5 controller.
///
/// The controller state is read once per [`refresh`](InputSource::refresh)
/// and cached, so all queries in a cycle see the same reading.
pub struct ControllerInput {
    controller: Controller,
    state:      ControllerState,
}

impl ControllerInput {
    /// Wraps a controller. Until the first refresh it reads as neutral.
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            state: ControllerState::default(),
        }
    }
}

impl InputSource for ControllerInput {
    fn refresh(&mut self) { self.state = get_state(&self.controller); }

    fn axis(&self, axis: ControllerAxis) -> i32 {
        let stick = get_stick_state(self.state, axis);
        let value = match axis {
            ControllerAxis::LeftX | ControllerAxis::RightX => stick.x(),
            ControllerAxis::LeftY | ControllerAxis::RightY => stick.y(),
        };
        stick_percent(value)
    }

    fn button(&self, button: ControllerButton) -> bool {
        get_button_state(self.state, button).is_pressed()
    }
}

/// A list of Controller Buttons.
///
/// # Example
///
/// ```ignore
/// let attack_held = input.button(ControllerButton::ButtonY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerButton {
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
    ButtonUp,
    ButtonDown,
    ButtonLeft,
    ButtonRight,
    ButtonL1,
    ButtonL2,
    ButtonR1,
    ButtonR2,
}

impl ControllerButton {
    /// Every button, in declaration order.
    pub const ALL: [ControllerButton; 12] = [
        ControllerButton::ButtonA,
        ControllerButton::ButtonB,
        ControllerButton::ButtonX,
        ControllerButton::ButtonY,
        ControllerButton::ButtonUp,
        ControllerButton::ButtonDown,
        ControllerButton::ButtonLeft,
        ControllerButton::ButtonRight,
        ControllerButton::ButtonL1,
        ControllerButton::ButtonL2,
        ControllerButton::ButtonR1,
        ControllerButton::ButtonR2,
    ];

    /// Position of this button in [`ControllerButton::ALL`].
    pub const fn index(self) -> usize { self as usize }
}

/// A single joystick axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
}

impl ControllerAxis {
    /// Every axis, in declaration order.
    pub const ALL: [ControllerAxis; 4] = [
        ControllerAxis::LeftX,
        ControllerAxis::LeftY,
        ControllerAxis::RightX,
        ControllerAxis::RightY,
    ];

    /// Position of this axis in [`ControllerAxis::ALL`].
    pub const fn index(self) -> usize { self as usize }
}

/// Converts a stick reading in `[-1.0, 1.0]` to whole percent.
///
/// Out-of-range and non-finite readings are clamped (NaN reads as centred).
pub fn stick_percent(value: f64) -> i32 {
    if !value.is_finite() {
        return if value.is_nan() { 0 } else { 100 * value.signum() as i32 };
    }
    (value * 100.0).round().clamp(-100.0, 100.0) as i32
}

fn get_stick_state(state: ControllerState, axis: ControllerAxis) -> JoystickState {
    match axis {
        ControllerAxis::LeftX | ControllerAxis::LeftY => state.left_stick,
        ControllerAxis::RightX | ControllerAxis::RightY => state.right_stick,
    }
}

fn get_button_state(state: ControllerState, button: ControllerButton) -> ButtonState {
    match button {
        ControllerButton::ButtonA => state.button_a,
        ControllerButton::ButtonB => state.button_b,
        ControllerButton::ButtonX => state.button_x,
        ControllerButton::ButtonY => state.button_y,
        ControllerButton::ButtonUp => state.button_up,
        ControllerButton::ButtonDown => state.button_down,
        ControllerButton::ButtonLeft => state.button_left,
        ControllerButton::ButtonRight => state.button_right,
        ControllerButton::ButtonL1 => state.button_l1,
        ControllerButton::ButtonL2 => state.button_l2,
        ControllerButton::ButtonR1 => state.button_r1,
        ControllerButton::ButtonR2 => state.button_r2,
    }
}

fn get_state(controller: &Controller) -> ControllerState {
    controller.state().unwrap_or_else(|e| {
        warn!("Controller State Error: {}", e);
        ControllerState::default()
    })
}
