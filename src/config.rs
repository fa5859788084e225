//! Robot tuning constants.
//!
//! Everything here is fixed at compile time. [`TeleopConfig::default`] is the
//! configuration the robot runs with. Tests build their own.

use std::time::Duration;

use crate::peripherals::{ControllerAxis, ControllerButton};

/// Period of the driver-control loop.
pub const CYCLE_PERIOD: Duration = Duration::from_millis(20);

/// Cycles per half blink of the attack-mode indicator (~5 Hz at 20 ms).
pub const BLINK_HALF_PERIOD: u32 = 5;

/// Speed (percent) used to hold a joint at its target.
pub const HOLD_SPEED: f64 = 100.0;

/// Speed (percent) used when moving to a preset.
pub const PRESET_SPEED: f64 = 100.0;

/// Most presets the dispatcher can hold.
pub const MAX_PRESETS: usize = 4;

/// Drive and turn speeds in percent for each speed profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveSpeeds {
    pub regular_drive:   f64,
    pub regular_turn:    f64,
    pub precision_drive: f64,
    pub precision_turn:  f64,
    pub attack_drive:    f64,
}

impl DriveSpeeds {
    pub const DEFAULT: Self = Self {
        regular_drive:   70.0,
        regular_turn:    70.0,
        precision_drive: 30.0,
        precision_turn:  30.0,
        attack_drive:    100.0,
    };
}

/// Speed and soft limits for one arm joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointConfig {
    /// Jog speed in percent.
    pub speed: f64,
    /// Lower soft limit in degrees.
    pub min:   f64,
    /// Upper soft limit in degrees.
    pub max:   f64,
}

pub const SHOULDER: JointConfig = JointConfig {
    speed: 65.0,
    min:   0.0,
    max:   100.0,
};

pub const ELBOW: JointConfig = JointConfig {
    speed: 100.0,
    min:   0.0,
    max:   100.0,
};

/// How the precision button engages precision mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionTrigger {
    /// Precision is on exactly while the button is held.
    Held,
    /// Each press turns precision on or off.
    Toggled,
}

/// A canned arm position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name:     &'static str,
    pub trigger:  ControllerButton,
    /// Shoulder target in degrees.
    pub shoulder: f64,
    /// Elbow target in degrees.
    pub elbow:    f64,
}

pub const PRESETS: [Preset; MAX_PRESETS] = [
    Preset {
        name:     "Tower",
        trigger:  ControllerButton::ButtonUp,
        shoulder: 50.0,
        elbow:    30.0,
    },
    Preset {
        name:     "Climb",
        trigger:  ControllerButton::ButtonDown,
        shoulder: 90.0,
        elbow:    10.0,
    },
    Preset {
        name:     "Pickup",
        trigger:  ControllerButton::ButtonLeft,
        shoulder: 5.0,
        elbow:    60.0,
    },
    Preset {
        name:     "Sweep",
        trigger:  ControllerButton::ButtonRight,
        shoulder: 20.0,
        elbow:    0.0,
    },
];

/// Which controller inputs drive which function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bindings {
    pub drive_forward:   ControllerAxis,
    pub drive_turn:      ControllerAxis,
    pub shoulder:        ControllerAxis,
    pub elbow:           ControllerAxis,
    pub inner_piston:    ControllerButton,
    pub outer_piston:    ControllerButton,
    pub precision:       ControllerButton,
    pub attack:          ControllerButton,
    pub override_limits: ControllerButton,
    pub tare:            ControllerButton,
    pub preset_modifier: ControllerButton,
}

impl Bindings {
    pub const DEFAULT: Self = Self {
        drive_forward:   ControllerAxis::LeftY,
        drive_turn:      ControllerAxis::LeftX,
        shoulder:        ControllerAxis::RightY,
        elbow:           ControllerAxis::RightX,
        inner_piston:    ControllerButton::ButtonL1,
        outer_piston:    ControllerButton::ButtonL2,
        precision:       ControllerButton::ButtonR1,
        attack:          ControllerButton::ButtonY,
        override_limits: ControllerButton::ButtonR2,
        tare:            ControllerButton::ButtonB,
        preset_modifier: ControllerButton::ButtonX,
    };
}

/// Everything the driver-control loop needs to know about the robot.
#[derive(Debug, Clone, PartialEq)]
pub struct TeleopConfig {
    pub drive:             DriveSpeeds,
    pub shoulder:          JointConfig,
    pub elbow:             JointConfig,
    pub hold_speed:        f64,
    pub preset_speed:      f64,
    pub blink_half_period: u32,
    pub precision_trigger: PrecisionTrigger,
    pub bindings:          Bindings,
    pub presets:           heapless::Vec<Preset, MAX_PRESETS>,
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self {
            drive:             DriveSpeeds::DEFAULT,
            shoulder:          SHOULDER,
            elbow:             ELBOW,
            hold_speed:        HOLD_SPEED,
            preset_speed:      PRESET_SPEED,
            blink_half_period: BLINK_HALF_PERIOD,
            precision_trigger: PrecisionTrigger::Held,
            bindings:          Bindings::DEFAULT,
            presets:           heapless::Vec::from_array(PRESETS),
        }
    }
}
