//! Speed profile selection.
//!
//! - **Precision** slows driving and turning for fine positioning.
//! - **Attack** trades turn authority for full drive speed.
//! - **Normal** is everything else.
//!
//! Attack is a latched mode toggled by its button. Precision is either held
//! or toggled depending on [`PrecisionTrigger`]. When both are on, precision
//! wins.

use log::info;

use super::latch::EdgeLatch;
use crate::config::{DriveSpeeds, PrecisionTrigger};

/// The drive speed profile in effect for a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedProfile {
    Precision,
    Normal,
    Attack,
}

impl SpeedProfile {
    /// Percent of full speed applied to the forward axis.
    pub fn drive_percent(self, speeds: &DriveSpeeds) -> f64 {
        match self {
            SpeedProfile::Precision => speeds.precision_drive,
            SpeedProfile::Normal => speeds.regular_drive,
            SpeedProfile::Attack => speeds.attack_drive,
        }
    }
}

/// Tracks the mode buttons and picks the [`SpeedProfile`] each cycle.
#[derive(Debug, Clone)]
pub struct ModeArbiter {
    trigger:         PrecisionTrigger,
    attack:          bool,
    precision:       bool,
    attack_latch:    EdgeLatch,
    precision_latch: EdgeLatch,
}

impl ModeArbiter {
    pub fn new(trigger: PrecisionTrigger) -> Self {
        Self {
            trigger,
            attack:          false,
            precision:       false,
            attack_latch:    EdgeLatch::new(),
            precision_latch: EdgeLatch::new(),
        }
    }

    /// Updates the modes from this cycle's buttons and returns the profile.
    pub fn update(&mut self, precision_button: bool, attack_button: bool) -> SpeedProfile {
        if self.attack_latch.rising_edge(attack_button) {
            self.attack = !self.attack;
            info!("Attack mode {}", if self.attack { "enabled" } else { "disabled" });
        }

        let precision_edge = self.precision_latch.rising_edge(precision_button);
        self.precision = match self.trigger {
            PrecisionTrigger::Held => precision_button,
            PrecisionTrigger::Toggled if precision_edge => {
                info!("Precision mode {}", if self.precision { "disabled" } else { "enabled" });
                !self.precision
            }
            PrecisionTrigger::Toggled => self.precision,
        };

        self.profile()
    }

    pub fn profile(&self) -> SpeedProfile {
        if self.precision {
            SpeedProfile::Precision
        } else if self.attack {
            SpeedProfile::Attack
        } else {
            SpeedProfile::Normal
        }
    }

    /// Whether attack mode is latched on, even if precision currently wins.
    pub fn attack_active(&self) -> bool { self.attack }
}
