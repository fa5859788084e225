//! [`MotorGroup`] for arrays of V5 smart motors.
//!
//! Commands are given in percent and translated here:
//!
//! - velocity percent → voltage, as a share of [`Motor::V5_MAX_VOLTAGE`]
//! - position speed percent → RPM, as a share of the gearset's free speed
//!
//! A multi-motor group reports the average position of the motors that could
//! be read. Motors that fail are left out and logged.

use log::warn;
use vexide::{
    math::Angle,
    prelude::{Gearset, Motor},
};

use super::MotorGroup;

impl<const N: usize> MotorGroup for [Motor; N] {
    fn set_velocity(&mut self, percent: f64) {
        let voltage = percent_to_voltage(percent);
        for motor in self.iter_mut() {
            motor.set_voltage(voltage).unwrap_or_else(|e| {
                warn!("Motor Set Voltage Error: {}", e);
            });
        }
    }

    fn move_to_position(&mut self, degrees: f64, speed: f64) {
        for motor in self.iter_mut() {
            let gearset = motor.gearset().unwrap_or_else(|e| {
                warn!("Motor Gearset Error: {}", e);
                Gearset::Green
            });
            let rpm = percent_to_rpm(speed, gearset);
            motor
                .set_position_target(Angle::from_degrees(degrees), rpm)
                .unwrap_or_else(|e| {
                    warn!("Motor Position Target Error: {}", e);
                });
        }
    }

    fn position(&mut self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0;
        for motor in self.iter() {
            match motor.position() {
                Ok(angle) => {
                    sum += angle.as_degrees();
                    count += 1;
                }
                Err(e) => warn!("Error Getting Motor Encoder Position: {}", e),
            }
        }
        (count > 0).then(|| sum / count as f64)
    }

    fn reset_position(&mut self) {
        for motor in self.iter_mut() {
            motor.reset_position().unwrap_or_else(|e| {
                warn!("Motor Reset Position Error: {}", e);
            });
        }
    }
}

/// Converts a velocity percent to motor voltage.
pub fn percent_to_voltage(percent: f64) -> f64 {
    percent.clamp(-100.0, 100.0) / 100.0 * Motor::V5_MAX_VOLTAGE
}

/// Converts a speed percent to RPM for the given gearset.
///
/// Position moves take an unsigned speed, so the sign of `percent` is dropped.
pub fn percent_to_rpm(percent: f64, gearset: Gearset) -> i32 {
    let free_rpm = match gearset {
        Gearset::Red => 100.0,
        Gearset::Green => 200.0,
        Gearset::Blue => 600.0,
    };
    (percent.abs().min(100.0) / 100.0 * free_rpm).round() as i32
}
