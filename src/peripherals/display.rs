use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use vexide::{
    color::Color,
    display::{Display, Rect},
};

use super::StatusDisplay;

impl StatusDisplay for Display {
    /// Fills the whole screen with `color`.
    fn set_background_color(&mut self, color: Rgb888) {
        let screen = Rect::new(
            [0_i16, 0],
            [Display::HORIZONTAL_RESOLUTION, Display::VERTICAL_RESOLUTION],
        );
        self.fill(&screen, Color::new(color.r(), color.g(), color.b()));
    }
}
