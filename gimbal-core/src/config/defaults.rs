//! Factory defaults
//!
//! Switch, pot and slider types for a fresh profile, plus the per-family
//! tables for battery thresholds, bluetooth name and backlight. Every
//! table is keyed by [`BoardFamily`] and has a fallback entry, so every
//! board gets a fully defined value.

use crate::board::{Board, BoardFamily};
use crate::traits::{BoardCapabilities, Capability};

use super::settings::RadioSettings;
use super::types::{
    PotConfig, SliderConfig, SwitchConfig, MAX_POTS, MAX_SLIDERS, MAX_SWITCHES,
};

/// Battery thresholds in the on-radio encoding
///
/// `warn` is in 100mV. `min` is in 100mV with a -9V offset, `max` in 100mV
/// with a -12V offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryDefaults {
    pub warn: u8,
    pub min: i8,
    pub max: i8,
}

impl BatteryDefaults {
    /// Thresholds for the pack a family ships with
    pub const fn for_family(family: BoardFamily) -> Self {
        match family {
            // NiMH 9.6V: 8.5V .. 11.5V
            BoardFamily::TaranisX9e | BoardFamily::HorusX12s => Self {
                warn: 87,
                min: -5,
                max: -5,
            },
            // LiPo 2S: 6.7V .. 8.3V
            BoardFamily::TaranisXLite | BoardFamily::HorusX10 | BoardFamily::T16 => Self {
                warn: 66,
                min: -23,
                max: -37,
            },
            // Li-Ion 1S: 3.0V .. 4.2V
            BoardFamily::TLite => Self {
                warn: 32,
                min: -60,
                max: -78,
            },
            // NiMH 7.2V: 6V .. 8V
            BoardFamily::TaranisX9
            | BoardFamily::TaranisX9Lite
            | BoardFamily::TaranisX7
            | BoardFamily::T12 => Self {
                warn: 65,
                min: -30,
                max: -40,
            },
            BoardFamily::Sky9x | BoardFamily::Nv14 => Self {
                warn: 90,
                min: 0,
                max: 0,
            },
        }
    }
}

/// Default bluetooth device name
pub const fn bluetooth_name(board: Board) -> &'static str {
    if matches!(board, Board::JumperT16) {
        return "t16";
    }
    match board.family() {
        BoardFamily::Nv14 => "nv14",
        BoardFamily::HorusX10 | BoardFamily::HorusX12s | BoardFamily::T16 => "horus",
        BoardFamily::TaranisX9e
        | BoardFamily::TaranisX9Lite
        | BoardFamily::TaranisX7
        | BoardFamily::TaranisXLite
        | BoardFamily::T12
        | BoardFamily::TLite => "taranis",
        BoardFamily::TaranisX9 | BoardFamily::Sky9x => "",
    }
}

/// Backlight level while the light is "off"
pub const fn backlight_off_bright(family: BoardFamily) -> u8 {
    if family.is_horus_or_t16() {
        20
    } else {
        0
    }
}

/// Factory pot types, slot by slot
pub const fn pot_pattern(family: BoardFamily) -> &'static [PotConfig] {
    use PotConfig::*;
    match family {
        // S1, 6-position switch, S2
        BoardFamily::HorusX10 | BoardFamily::HorusX12s | BoardFamily::T16 => {
            &[WithDetent, MultiposSwitch, WithDetent]
        }
        BoardFamily::Nv14 | BoardFamily::TaranisXLite => &[WithoutDetent, WithoutDetent],
        BoardFamily::TaranisX7 => &[WithoutDetent, WithDetent],
        BoardFamily::T12
        | BoardFamily::TaranisX9
        | BoardFamily::TaranisX9e
        | BoardFamily::TaranisX9Lite => &[WithDetent, WithDetent],
        BoardFamily::TLite => &[],
        BoardFamily::Sky9x => &[WithoutDetent, WithoutDetent, WithoutDetent],
    }
}

/// Factory slider types, slot by slot
pub const fn slider_pattern(family: BoardFamily) -> &'static [SliderConfig] {
    use PotConfig::*;
    match family {
        // Two aux sliders, then LS and RS
        BoardFamily::HorusX12s | BoardFamily::TaranisX9e => {
            &[WithDetent, WithDetent, WithDetent, WithDetent]
        }
        BoardFamily::TaranisX9 | BoardFamily::HorusX10 | BoardFamily::T16 => {
            &[WithDetent, WithDetent]
        }
        _ => &[],
    }
}

/// Factory switch, pot and slider types of one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlDefaults {
    pub switches: [SwitchConfig; MAX_SWITCHES],
    pub pots: [PotConfig; MAX_POTS],
    pub sliders: [SliderConfig; MAX_SLIDERS],
}

impl ControlDefaults {
    /// Synthesize the factory control types of `board`
    ///
    /// Slots at or beyond the board's capability are left as
    /// `NotAvailable`/`None`.
    pub fn for_board(board: Board, caps: &impl BoardCapabilities) -> Self {
        let mut defaults = Self {
            switches: [SwitchConfig::NotAvailable; MAX_SWITCHES],
            pots: [PotConfig::None; MAX_POTS],
            sliders: [PotConfig::None; MAX_SLIDERS],
        };

        trace!("control defaults for {:?}", board);
        let switch_count = caps.capability(board, Capability::FactoryInstalledSwitches);
        for (index, slot) in defaults.switches.iter_mut().take(switch_count).enumerate() {
            *slot = caps.switch_info(board, index).config;
        }

        let pot_count = caps.capability(board, Capability::Pots);
        let slider_count = caps.capability(board, Capability::Sliders);
        if pot_count == 0 && slider_count == 0 {
            debug!("{:?} has no pots or sliders", board);
            return defaults;
        }

        let family = board.family();
        fill(&mut defaults.pots, pot_pattern(family), pot_count);
        fill(&mut defaults.sliders, slider_pattern(family), slider_count);

        defaults
    }
}

fn fill(slots: &mut [PotConfig], pattern: &[PotConfig], count: usize) {
    for (slot, config) in slots.iter_mut().zip(pattern).take(count) {
        *slot = *config;
    }
}

impl RadioSettings {
    /// Reset switch, pot and slider types to the factory defaults of `board`
    ///
    /// Labels are not touched.
    pub fn set_default_control_types(&mut self, board: Board, caps: &impl BoardCapabilities) {
        let defaults = ControlDefaults::for_board(board, caps);
        self.switch_config = defaults.switches;
        self.pot_config = defaults.pots;
        self.slider_config = defaults.sliders;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::FakeBoards;

    #[test]
    fn test_switches_follow_switch_info() {
        let caps = FakeBoards::x9d();
        let defaults = ControlDefaults::for_board(Board::TaranisX9d, &caps);
        assert_eq!(defaults.switches[0], SwitchConfig::ThreePos);
        assert_eq!(defaults.switches[5], SwitchConfig::TwoPos);
        assert_eq!(defaults.switches[8], SwitchConfig::NotAvailable);
    }

    #[test]
    fn test_horus_pot_pattern() {
        let caps = FakeBoards::horus();
        let defaults = ControlDefaults::for_board(Board::HorusX10, &caps);
        assert_eq!(
            defaults.pots[..3],
            [PotConfig::WithDetent, PotConfig::MultiposSwitch, PotConfig::WithDetent]
        );
        assert_eq!(defaults.sliders[..2], [PotConfig::WithDetent; 2]);
        assert_eq!(defaults.sliders[2], PotConfig::None);
    }

    #[test]
    fn test_x9e_fills_wide_slider_bank() {
        let caps = FakeBoards::x9e();
        let defaults = ControlDefaults::for_board(Board::TaranisX9e, &caps);
        assert_eq!(defaults.sliders, [PotConfig::WithDetent; MAX_SLIDERS]);
        // Two factory pots, the S3/S4 slots stay empty
        assert_eq!(defaults.pots[2], PotConfig::None);
        assert_eq!(defaults.pots[3], PotConfig::None);
    }

    #[test]
    fn test_bare_board_has_no_pots() {
        let caps = FakeBoards::bare();
        let defaults = ControlDefaults::for_board(Board::JumperTLite, &caps);
        assert!(defaults.pots.iter().all(|p| *p == PotConfig::None));
        assert!(defaults.sliders.iter().all(|s| *s == PotConfig::None));
    }

    #[test]
    fn test_pattern_clipped_to_capability() {
        // Sky9x pattern has three pots, capability says one
        let mut caps = FakeBoards::x9d();
        caps.pots = 1;
        caps.sliders = 0;
        let defaults = ControlDefaults::for_board(Board::Sky9x, &caps);
        assert_eq!(defaults.pots[0], PotConfig::WithoutDetent);
        assert_eq!(defaults.pots[1], PotConfig::None);
    }

    #[test]
    fn test_battery_tables() {
        assert_eq!(BatteryDefaults::for_family(BoardFamily::TLite).warn, 32);
        assert_eq!(BatteryDefaults::for_family(BoardFamily::TaranisX7).min, -30);
        assert_eq!(BatteryDefaults::for_family(BoardFamily::Nv14).warn, 90);
    }

    #[test]
    fn test_bluetooth_names() {
        assert_eq!(bluetooth_name(Board::JumperT16), "t16");
        assert_eq!(bluetooth_name(Board::RadiomasterTx16s), "horus");
        assert_eq!(bluetooth_name(Board::FlyskyNv14), "nv14");
        assert_eq!(bluetooth_name(Board::TaranisX7), "taranis");
        assert_eq!(bluetooth_name(Board::TaranisX9d), "");
    }
}
