use log::debug;

use super::latch::EdgeLatch;

/// Press-to-toggle control for one pneumatic actuator.
#[derive(Debug, Clone)]
pub struct ActuatorToggler {
    name:     &'static str,
    extended: bool,
    latch:    EdgeLatch,
}

impl ActuatorToggler {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            extended: false,
            latch:    EdgeLatch::new(),
        }
    }

    /// Takes on the actuator's real state without issuing a command.
    pub fn sync(&mut self, extended: bool) { self.extended = extended; }

    /// Returns the new output level on the cycle the button is pressed, and
    /// `None` on every other cycle.
    pub fn update(&mut self, pressed: bool) -> Option<bool> {
        if !self.latch.rising_edge(pressed) {
            return None;
        }
        self.extended = !self.extended;
        debug!("{} actuator {}", self.name, if self.extended { "extended" } else { "retracted" });
        Some(self.extended)
    }
}
