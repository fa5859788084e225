//! Differential drivetrain control.
//!
//! This module turns the operator's forward and turn axes into left/right
//! motor commands using arcade mixing, scaled by the active
//! [`SpeedProfile`].
//!
//! # Mixing
//!
//! ```text
//! forward = y * drive% / 100
//! turn    = x * turn% / 100
//! left    = forward - turn
//! right   = forward + turn
//! ```
//!
//! Both sides are clamped to `[-100, 100]`.
//!
//! # Attack Turning
//!
//! In attack mode the turn percent shrinks as forward speed grows
//! (`100 / (|forward| / 2)`). This keeps the robot from spinning out at full
//! speed. It is capped at the regular turn percent, and standing still uses
//! the regular turn percent.
//!
//! # Example
//!
//! ```ignore
//! use brgos::{config::DriveSpeeds, drivetrain, opcontrol::mode::SpeedProfile};
//!
//! let command = drivetrain::arcade(80, -20, SpeedProfile::Normal, &DriveSpeeds::DEFAULT);
//! drivetrain.drive(command);
//! ```

use crate::{config::DriveSpeeds, opcontrol::mode::SpeedProfile, peripherals::MotorGroup};

/// Velocity commands for both sides of the drivetrain, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DriveCommand {
    pub left:  f64,
    pub right: f64,
}

/// Mixes forward and turn axes (`[-100, 100]`) into a [`DriveCommand`].
pub fn arcade(
    forward_axis: i32,
    turn_axis: i32,
    profile: SpeedProfile,
    speeds: &DriveSpeeds,
) -> DriveCommand {
    let forward = forward_axis as f64 * profile.drive_percent(speeds) / 100.0;
    let turn = turn_axis as f64 * turn_percent(profile, forward, speeds) / 100.0;

    DriveCommand {
        left:  (forward - turn).clamp(-100.0, 100.0),
        right: (forward + turn).clamp(-100.0, 100.0),
    }
}

/// Turn percent for `profile` given the already-scaled forward command.
pub fn turn_percent(profile: SpeedProfile, forward: f64, speeds: &DriveSpeeds) -> f64 {
    match profile {
        SpeedProfile::Precision => speeds.precision_turn,
        SpeedProfile::Normal => speeds.regular_turn,
        SpeedProfile::Attack if forward == 0.0 => speeds.regular_turn,
        SpeedProfile::Attack => (100.0 / (forward.abs() / 2.0)).min(speeds.regular_turn),
    }
}

/// A differential drivetrain.
///
/// Motors on opposite sides usually spin in opposite directions to move the
/// robot forward. Set the motor directions when creating the motors, so that
/// a positive command drives both sides forward.
pub struct Differential {
    /// The left motor group.
    pub left:  Box<dyn MotorGroup>,
    /// The right motor group.
    pub right: Box<dyn MotorGroup>,
}

impl Differential {
    /// Creates a new drivetrain with the provided left/right motors.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let drivetrain = Differential::new(
    ///     [Motor::new(peripherals.port_1, Gearset::Green, Direction::Reverse)],
    ///     [Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward)],
    /// );
    /// ```
    pub fn new<L: MotorGroup + 'static, R: MotorGroup + 'static>(left: L, right: R) -> Self {
        Self {
            left:  Box::new(left),
            right: Box::new(right),
        }
    }

    /// Sends one velocity command to each side.
    pub fn drive(&mut self, command: DriveCommand) {
        self.left.set_velocity(command.left);
        self.right.set_velocity(command.right);
    }

    /// Stops both sides.
    pub fn stop(&mut self) { self.drive(DriveCommand::default()); }
}
