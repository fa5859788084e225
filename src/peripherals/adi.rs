use log::warn;
use vexide::prelude::AdiDigitalOut;

use super::DigitalOutput;

impl DigitalOutput for AdiDigitalOut {
    fn set_output(&mut self, high: bool) {
        let result = if high { self.set_high() } else { self.set_low() };
        result.unwrap_or_else(|e| {
            warn!("ADI Set Output Error: {}", e);
        });
    }

    fn output(&self) -> Option<bool> {
        self.is_high()
            .inspect_err(|e| warn!("ADI Read Output Error: {}", e))
            .ok()
    }
}
