use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Background shown while attack mode blinks on.
pub const ALERT_COLOR: Rgb888 = Rgb888::RED;

/// Background shown otherwise.
pub const NEUTRAL_COLOR: Rgb888 = Rgb888::BLACK;

/// Blinks the display while attack mode is on.
#[derive(Debug, Clone)]
pub struct StatusIndicator {
    flash_counter: u32,
    half_period:   u32,
    shown:         Option<Rgb888>,
}

impl StatusIndicator {
    /// `half_period` is the number of cycles each blink phase lasts.
    pub fn new(half_period: u32) -> Self {
        Self {
            flash_counter: 0,
            half_period:   half_period.max(1),
            shown:         None,
        }
    }

    /// The colour this cycle calls for.
    pub fn color(&self, attack: bool) -> Rgb888 {
        if attack && (self.flash_counter / self.half_period) % 2 == 0 {
            ALERT_COLOR
        } else {
            NEUTRAL_COLOR
        }
    }

    /// Returns the colour to draw, or `None` if the screen already shows it.
    pub fn update(&mut self, attack: bool) -> Option<Rgb888> {
        let color = self.color(attack);
        if attack {
            self.flash_counter = self.flash_counter.wrapping_add(1);
        }
        if self.shown == Some(color) {
            return None;
        }
        self.shown = Some(color);
        Some(color)
    }
}
