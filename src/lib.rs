//! # BRGOS
//!
//! Driver-control software for a VEX V5 competition robot, built on top of
//! [Vexide](https://vexide.dev). The robot has a differential drivetrain, a
//! two-joint arm (shoulder and elbow) and two pneumatic pistons.
//!
//! Every 20 ms the control loop samples the controller and does the following:
//!
//! - **Drive**: arcade mixing with precision, normal and attack speed profiles.
//! - **Arm**: jogs each joint inside its soft limits and holds position when
//!   the stick is centred. An override button allows jogging past the limits,
//!   and a tare button re-zeroes the encoders.
//! - **Presets**: modifier + D-pad sends the arm to canned positions.
//! - **Pistons**: each press of a bumper toggles one piston.
//! - **Status**: the Brain screen blinks red while attack mode is on.
//!
//! ## Quick Start
//!
//! ```ignore
//! use brgos::{config::TeleopConfig, opcontrol::{self, Teleop, TeleopIo}};
//! use vexide::prelude::*;
//!
//! impl Compete for Robot {
//!     async fn driver(&mut self) {
//!         let mut teleop = Teleop::new(TeleopConfig::default());
//!         opcontrol::run(&mut teleop, &mut self.io).await;
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`opcontrol`]: The driver-control loop and its components.
//! - [`drivetrain`]: Arcade mixing and the differential drivetrain.
//! - [`peripherals`]: Hardware traits and their vexide implementations.
//! - [`config`]: Speeds, limits, presets and button bindings.
//! - [`fs`]: Filesystem utilities including logging.

/// Robot tuning constants and button bindings.
pub mod config;

/// Differential drivetrain control module.
///
/// Provides [`arcade`](drivetrain::arcade) mixing and the
/// [`Differential`](drivetrain::Differential) drivetrain.
pub mod drivetrain;

/// Filesystem utilities module.
///
/// Contains logging functionality for recording robot telemetry and debug
/// information to files on the V5 Brain's SD card.
pub mod fs;

/// Operator control module.
///
/// Runs the per-cycle sample → decide → apply loop during driver control.
pub mod opcontrol;

/// Hardware seams.
///
/// Traits for motors, pistons, the controller and the display, implemented
/// for the matching vexide devices.
pub mod peripherals;
