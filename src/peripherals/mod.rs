//! Hardware seams used by the driver-control loop.
//!
//! The control loop never talks to vexide devices directly. Instead it goes
//! through the small traits defined here, which are implemented for the
//! vexide device types in the submodules:
//!
//! - [`MotorGroup`]: motor groups (`[Motor; N]`), see [`motor`].
//! - [`DigitalOutput`]: pneumatic solenoids (`AdiDigitalOut`), see [`adi`].
//! - [`InputSource`]: the operator's controller, see [`controller`].
//! - [`StatusDisplay`]: the Brain screen, see [`display`].
//!
//! Device errors never reach the caller. Implementations log them with
//! `warn!` and carry on with a neutral value, so one bad read cannot stop the
//! loop.

use embedded_graphics::pixelcolor::Rgb888;

/// Digital output mapping for ADI solenoids.
pub mod adi;

/// Controller input sampling.
///
/// Provides [`ControllerInput`](controller::ControllerInput), the
/// [`InputSource`] backed by a V5 controller.
pub mod controller;

/// Background colour output on the V5 Brain display.
pub mod display;

/// Motor group control in percent units.
pub mod motor;

#[cfg(test)]
pub(crate) mod mock;

pub use controller::{ControllerAxis, ControllerButton};

/// A set of motors driven together as one mechanism.
pub trait MotorGroup {
    /// Spins the group at `percent` of full power, in `[-100, 100]`.
    fn set_velocity(&mut self, percent: f64);

    /// Moves the group to an absolute position in degrees at `speed` percent
    /// of the gearset's free speed.
    fn move_to_position(&mut self, degrees: f64, speed: f64);

    /// The measured position in degrees, or `None` if it could not be read.
    fn position(&mut self) -> Option<f64>;

    /// Makes the current physical position read as zero.
    fn reset_position(&mut self);
}

/// A single on/off output such as a pneumatic solenoid.
pub trait DigitalOutput {
    /// Drives the output high (`true`) or low (`false`).
    fn set_output(&mut self, high: bool);

    /// The current output level, or `None` if it could not be read.
    fn output(&self) -> Option<bool>;
}

/// A source of operator input.
///
/// `refresh` is called once at the start of every cycle. Every `axis` and
/// `button` query after that answers from the same reading. When the input
/// is unavailable, axes must read `0` and buttons `false`.
pub trait InputSource {
    /// Takes a new reading from the device.
    fn refresh(&mut self) {}

    /// The axis position in `[-100, 100]`.
    fn axis(&self, axis: ControllerAxis) -> i32;

    /// Whether the button is currently held.
    fn button(&self, button: ControllerButton) -> bool;
}

/// A display whose background colour can be set.
pub trait StatusDisplay {
    fn set_background_color(&mut self, color: Rgb888);
}
