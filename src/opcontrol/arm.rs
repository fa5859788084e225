//! Two-joint arm control.
//!
//! Each joint (shoulder, elbow) is either **jogging** or **holding** on any
//! given cycle:
//!
//! - **Jogging**: the joint's stick is off centre and the move is allowed.
//!   The joint gets a velocity command and its hold target follows the
//!   measured position.
//! - **Holding**: the stick is centred, or the move would leave the soft
//!   limits. The joint is sent to its hold target every cycle, so pushes from
//!   outside get corrected.
//!
//! A move is allowed when it heads back inside `[min, max]`, or when the
//! override button is held. The override is how the operator recovers a joint
//! whose encoder has drifted past a limit.
//!
//! Tare zeroes both encoders and both hold targets while its button is held.

use log::info;

use super::{latch::EdgeLatch, mode::SpeedProfile};
use crate::config::{JointConfig, Preset};

/// What a joint should do this cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JointCommand {
    /// Spin at this velocity percent.
    Velocity(f64),
    /// Move to `position` degrees at `speed` percent.
    MoveTo { position: f64, speed: f64 },
}

/// Commands for the whole arm this cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmCommand {
    /// Zero both encoders before the joint commands are sent.
    pub tare:     bool,
    pub shoulder: JointCommand,
    pub elbow:    JointCommand,
}

/// The arm inputs for one cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArmInputs {
    pub shoulder_axis:     i32,
    pub elbow_axis:        i32,
    pub shoulder_position: Option<f64>,
    pub elbow_position:    Option<f64>,
    pub override_limits:   bool,
    pub tare:              bool,
}

/// A single arm joint and its hold target.
#[derive(Debug, Clone)]
pub struct Joint {
    config:        JointConfig,
    held_position: f64,
}

impl Joint {
    pub fn new(config: JointConfig) -> Self {
        Self {
            config,
            held_position: 0.0,
        }
    }

    /// The position the joint returns to when not jogging.
    pub fn held_position(&self) -> f64 { self.held_position }

    /// Holds wherever the joint was measured, kept inside the soft limits.
    /// An unreadable position leaves the hold target alone.
    pub fn sync(&mut self, position: Option<f64>) {
        if let Some(position) = position {
            self.held_position = position.clamp(self.config.min, self.config.max);
        }
    }

    /// Whether moving in the direction of `axis` from `position` stays inside
    /// the soft limits.
    pub fn within_limits(&self, axis: i32, position: f64) -> bool {
        (axis > 0 && position < self.config.max) || (axis < 0 && position > self.config.min)
    }

    /// Decides this cycle's command for the joint.
    pub fn update(
        &mut self,
        axis: i32,
        position: Option<f64>,
        override_limits: bool,
        profile: SpeedProfile,
        hold_speed: f64,
    ) -> JointCommand {
        let allowed = match position {
            _ if override_limits => true,
            Some(position) => self.within_limits(axis, position),
            None => false,
        };

        if axis == 0 || !allowed {
            return JointCommand::MoveTo {
                position: self.held_position,
                speed:    hold_speed,
            };
        }

        if let Some(position) = position {
            self.held_position = if override_limits {
                position
            } else {
                position.clamp(self.config.min, self.config.max)
            };
        }

        let speed = match profile {
            SpeedProfile::Attack => 100.0,
            _ => self.config.speed,
        };
        JointCommand::Velocity(axis as f64 * speed / 100.0)
    }

    /// Replaces the hold target, returning the one-shot move to it.
    pub fn retarget(&mut self, position: f64, speed: f64) -> JointCommand {
        self.held_position = position;
        JointCommand::MoveTo { position, speed }
    }

    fn tare(&mut self) { self.held_position = 0.0; }
}

/// Shoulder and elbow control.
#[derive(Debug, Clone)]
pub struct ArmController {
    pub shoulder: Joint,
    pub elbow:    Joint,
    hold_speed:   f64,
    tare_latch:   EdgeLatch,
}

impl ArmController {
    pub fn new(shoulder: JointConfig, elbow: JointConfig, hold_speed: f64) -> Self {
        Self {
            shoulder:   Joint::new(shoulder),
            elbow:      Joint::new(elbow),
            hold_speed,
            tare_latch: EdgeLatch::new(),
        }
    }

    /// Takes both hold targets from measured positions. See [`Joint::sync`].
    pub fn sync(&mut self, shoulder: Option<f64>, elbow: Option<f64>) {
        self.shoulder.sync(shoulder);
        self.elbow.sync(elbow);
    }

    /// Zeroes both hold targets while `held`. Returns `true` only on the
    /// cycle the tare button goes down.
    pub fn tare(&mut self, held: bool) -> bool {
        let fresh = self.tare_latch.rising_edge(held);
        if held {
            self.shoulder.tare();
            self.elbow.tare();
        }
        if fresh {
            info!("Tare: arm encoders reset");
        }
        fresh
    }

    /// Decides this cycle's arm commands.
    ///
    /// A tare this cycle makes both joints read as zero, since the encoders
    /// are reset before the joint commands go out.
    pub fn update(&mut self, inputs: &ArmInputs, profile: SpeedProfile) -> ArmCommand {
        self.tare(inputs.tare);
        let (shoulder_position, elbow_position) = if inputs.tare {
            (Some(0.0), Some(0.0))
        } else {
            (inputs.shoulder_position, inputs.elbow_position)
        };

        ArmCommand {
            tare:     inputs.tare,
            shoulder: self.shoulder.update(
                inputs.shoulder_axis,
                shoulder_position,
                inputs.override_limits,
                profile,
                self.hold_speed,
            ),
            elbow:    self.elbow.update(
                inputs.elbow_axis,
                elbow_position,
                inputs.override_limits,
                profile,
                self.hold_speed,
            ),
        }
    }

    /// Sends both joints to `preset` and makes it the new hold target.
    pub fn apply_preset(&mut self, preset: &Preset, speed: f64, tare: bool) -> ArmCommand {
        ArmCommand {
            tare,
            shoulder: self.shoulder.retarget(preset.shoulder, speed),
            elbow:    self.elbow.retarget(preset.elbow, speed),
        }
    }
}
