/// Rising-edge detector for a single button.
///
/// Feed it the button's state once per cycle. [`rising_edge`](Self::rising_edge)
/// reports `true` only on the cycle the button goes from released to
/// pressed, so holding a button for many cycles fires once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeLatch {
    was_pressed: bool,
}

impl EdgeLatch {
    pub const fn new() -> Self { Self { was_pressed: false } }

    /// Records this cycle's state and reports whether it is a fresh press.
    pub fn rising_edge(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        edge
    }
}
