//! Switch, pot and slider legality
//!
//! Read-only queries against the current control layout, used to list the
//! switches and analogs a user may pick.
//!
//! Switch positions use a signed index: 0 means "always", `3 * slot + 1 +
//! position` selects up/mid/down of a slot, and a negative index selects
//! the inverted condition of the same position.

use crate::config::{PotConfig, RadioSettings, SwitchConfig};
use crate::traits::{BoardCapabilities, Capability};

/// Positions encoded per switch slot
pub const POSITIONS_PER_SWITCH: usize = 3;

/// Position index of the middle position within a slot
const MID_POSITION: usize = 1;

impl RadioSettings {
    /// Check if switch position `index` can be used as a condition
    pub fn is_switch_position_allowed(&self, index: i32) -> bool {
        if index == 0 {
            return true;
        }

        let raw = index.unsigned_abs() as usize - 1;
        let slot = raw / POSITIONS_PER_SWITCH;
        let position = raw % POSITIONS_PER_SWITCH;

        let Some(&config) = self.switch_config.get(slot) else {
            return false;
        };

        if index < 0 && config != SwitchConfig::ThreePos {
            false
        } else if position == MID_POSITION {
            config == SwitchConfig::ThreePos
        } else {
            config != SwitchConfig::NotAvailable
        }
    }

    /// Check if the switch in `slot` can be used as a source
    pub fn is_switch_source_allowed(&self, slot: usize) -> bool {
        self.switch_config
            .get(slot)
            .is_some_and(|config| *config != SwitchConfig::NotAvailable)
    }

    /// Check if pot `index` exists on the current board and is fitted
    pub fn is_pot_available(&self, caps: &impl BoardCapabilities, index: usize) -> bool {
        index < caps.capability(self.board, Capability::Pots)
            && self
                .pot_config
                .get(index)
                .is_some_and(|config| *config != PotConfig::None)
    }

    /// Check if slider `index` exists on the current board and is fitted
    pub fn is_slider_available(&self, caps: &impl BoardCapabilities, index: usize) -> bool {
        index < caps.capability(self.board, Capability::Sliders)
            && self
                .slider_config
                .get(index)
                .is_some_and(|config| *config != PotConfig::None)
    }

    /// Iterate over every usable signed switch position index
    pub fn allowed_switch_positions(&self) -> impl Iterator<Item = i32> + '_ {
        let limit = (self.switch_config.len() * POSITIONS_PER_SWITCH) as i32;
        (-limit..=limit).filter(move |&index| self.is_switch_position_allowed(index))
    }
}
