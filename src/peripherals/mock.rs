//! Recording fakes for the peripheral traits.
//!
//! Each fake keeps its state behind an `Rc<RefCell<..>>` so a test can hand a
//! clone to the code under test and inspect the other clone afterwards.

use std::{cell::RefCell, rc::Rc};

use embedded_graphics::pixelcolor::Rgb888;

use super::{
    ControllerAxis, ControllerButton, DigitalOutput, InputSource, MotorGroup, StatusDisplay,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotorCall {
    Velocity(f64),
    MoveTo { degrees: f64, speed: f64 },
    Reset,
}

#[derive(Debug, Default)]
pub struct MotorLog {
    pub position: Option<f64>,
    pub calls:    Vec<MotorCall>,
}

#[derive(Clone, Default)]
pub struct MockMotor(pub Rc<RefCell<MotorLog>>);

impl MockMotor {
    pub fn at(position: f64) -> Self {
        let motor = Self::default();
        motor.0.borrow_mut().position = Some(position);
        motor
    }

    pub fn calls(&self) -> Vec<MotorCall> { self.0.borrow().calls.clone() }

    pub fn last_call(&self) -> Option<MotorCall> { self.0.borrow().calls.last().copied() }
}

impl MotorGroup for MockMotor {
    fn set_velocity(&mut self, percent: f64) {
        self.0.borrow_mut().calls.push(MotorCall::Velocity(percent));
    }

    fn move_to_position(&mut self, degrees: f64, speed: f64) {
        self.0
            .borrow_mut()
            .calls
            .push(MotorCall::MoveTo { degrees, speed });
    }

    fn position(&mut self) -> Option<f64> { self.0.borrow().position }

    fn reset_position(&mut self) {
        let mut log = self.0.borrow_mut();
        log.position = log.position.map(|_| 0.0);
        log.calls.push(MotorCall::Reset);
    }
}

#[derive(Clone, Default)]
pub struct MockOutput(pub Rc<RefCell<Vec<bool>>>);

impl MockOutput {
    pub fn writes(&self) -> Vec<bool> { self.0.borrow().clone() }
}

impl DigitalOutput for MockOutput {
    fn set_output(&mut self, high: bool) { self.0.borrow_mut().push(high); }

    fn output(&self) -> Option<bool> { Some(self.0.borrow().last().copied().unwrap_or(false)) }
}

#[derive(Clone, Default)]
pub struct MockDisplay(pub Rc<RefCell<Vec<Rgb888>>>);

impl MockDisplay {
    pub fn colors(&self) -> Vec<Rgb888> { self.0.borrow().clone() }
}

impl StatusDisplay for MockDisplay {
    fn set_background_color(&mut self, color: Rgb888) { self.0.borrow_mut().push(color); }
}

#[derive(Debug, Default)]
pub struct InputLog {
    pub axes:         [i32; 4],
    pub buttons:      [bool; 12],
    pub refreshes:    usize,
    /// While set, the next refresh reads as a dropped controller.
    pub disconnected: bool,
    stale:            bool,
}

#[derive(Clone, Default)]
pub struct MockInput(pub Rc<RefCell<InputLog>>);

impl MockInput {
    pub fn set_axis(&self, axis: ControllerAxis, value: i32) {
        self.0.borrow_mut().axes[axis.index()] = value;
    }

    pub fn set_button(&self, button: ControllerButton, pressed: bool) {
        self.0.borrow_mut().buttons[button.index()] = pressed;
    }

    pub fn set_disconnected(&self, disconnected: bool) {
        self.0.borrow_mut().disconnected = disconnected;
    }

    pub fn refreshes(&self) -> usize { self.0.borrow().refreshes }
}

impl InputSource for MockInput {
    fn refresh(&mut self) {
        let mut log = self.0.borrow_mut();
        log.refreshes += 1;
        log.stale = log.disconnected;
    }

    fn axis(&self, axis: ControllerAxis) -> i32 {
        let log = self.0.borrow();
        if log.stale { 0 } else { log.axes[axis.index()] }
    }

    fn button(&self, button: ControllerButton) -> bool {
        let log = self.0.borrow();
        !log.stale && log.buttons[button.index()]
    }
}
