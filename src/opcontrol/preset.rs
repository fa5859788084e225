//! Preset arm positions.
//!
//! While the preset modifier is held, pressing a preset's trigger button sends
//! the arm to that preset once. The arm controller then holds there.
//! Triggers are edge-latched every cycle, including cycles where the modifier
//! is up. A trigger already held when the modifier goes down therefore does
//! not fire.

use log::{info, warn};

use super::{latch::EdgeLatch, snapshot::ControlSnapshot};
use crate::{
    config::{MAX_PRESETS, Preset},
    peripherals::ControllerButton,
};

/// Fixed table of presets, at most [`MAX_PRESETS`] entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetTable {
    presets: heapless::Vec<Preset, MAX_PRESETS>,
}

impl PresetTable {
    /// Builds a table from `presets`, dropping any beyond [`MAX_PRESETS`].
    pub fn new(presets: &[Preset]) -> Self {
        if presets.len() > MAX_PRESETS {
            warn!(
                "Preset table holds {} entries, ignoring {}",
                MAX_PRESETS,
                presets.len() - MAX_PRESETS
            );
        }
        Self {
            presets: presets.iter().take(MAX_PRESETS).copied().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> { self.presets.iter() }
}

/// Turns modifier + trigger presses into one-shot preset requests.
#[derive(Debug, Clone)]
pub struct PresetDispatcher {
    table:    PresetTable,
    modifier: ControllerButton,
    latches:  [EdgeLatch; MAX_PRESETS],
}

impl PresetDispatcher {
    pub fn new(table: PresetTable, modifier: ControllerButton) -> Self {
        Self {
            table,
            modifier,
            latches: [EdgeLatch::new(); MAX_PRESETS],
        }
    }

    /// Returns the preset fired this cycle, if any.
    ///
    /// If several triggers go down on the same cycle, the first in table
    /// order wins.
    pub fn update(&mut self, controls: &ControlSnapshot) -> Option<Preset> {
        let enabled = controls.pressed(self.modifier);
        let mut fired = None;
        for (preset, latch) in self.table.iter().zip(self.latches.iter_mut()) {
            let edge = latch.rising_edge(controls.pressed(preset.trigger));
            if enabled && edge && fired.is_none() {
                fired = Some(*preset);
            }
        }
        if let Some(preset) = &fired {
            info!(
                "Preset {}: shoulder {} deg, elbow {} deg",
                preset.name, preset.shoulder, preset.elbow
            );
        }
        fired
    }
}
