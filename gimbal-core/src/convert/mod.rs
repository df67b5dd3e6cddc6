//! Cross-board conversion
//!
//! Migrates an existing [`RadioSettings`] to a different board in place.
//! Fields no step touches (calibration, audio, unrelated labels) keep
//! their values.
//!
//! Steps, in order:
//! 1. Reset switch, pot and slider types to the destination defaults
//! 2. Relocate labels with the family rules in [`rules`]
//! 3. Compact pot labels around the Horus 6-position switch slot
//! 4. Clamp contrast to the destination firmware range
//! 5. Hand every special function to the function converter

pub mod rules;

use heapless::Vec;

use crate::board::Board;
use crate::config::{FieldRange, LabelBank, RadioSettings};
use crate::traits::{BoardCapabilities, Capability, FirmwareCapabilities, FunctionConverter};

pub use rules::{LabelMove, RemapRule, LABEL_REMAP_RULES, MAX_RELOCATIONS};

/// Pot slot of the 6-position switch on Horus-class radios
const MULTIPOS_POT_SLOT: usize = 1;

/// Pot slot that only exists when three pots are fitted
const THIRD_POT_SLOT: usize = 2;

/// Factory pots on a board without the third pot
const TWO_POTS: usize = 2;

/// Source and destination of a conversion
///
/// Passed to the function converter with `component_index` set to the
/// position of the function being converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConversionState {
    pub from: Board,
    pub to: Board,
    pub component_index: Option<usize>,
}

impl ConversionState {
    pub const fn new(from: Board, to: Board) -> Self {
        Self {
            from,
            to,
            component_index: None,
        }
    }

    /// Same conversion, scoped to one component
    pub const fn with_component_index(&self, index: usize) -> Self {
        Self {
            component_index: Some(index),
            ..*self
        }
    }
}

/// What a conversion changed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConversionReport {
    /// Label copies, in the order they were made
    pub relocated: Vec<LabelMove, MAX_RELOCATIONS>,
    /// Label blanked after its content was moved away
    pub cleared: Option<(LabelBank, usize)>,
    /// Contrast before and after clamping, if it had to change
    pub contrast: Option<(i16, i16)>,
    pub functions_converted: usize,
}

impl RadioSettings {
    /// Migrate these settings from `state.from` to `state.to`
    ///
    /// Total over every board pair: pairs no rule knows about only get
    /// their control types reset. `boards` must describe both boards,
    /// `firmware` the firmware of the destination.
    pub fn convert(
        &mut self,
        state: &ConversionState,
        boards: &impl BoardCapabilities,
        firmware: &impl FirmwareCapabilities,
        functions: &mut impl FunctionConverter,
    ) -> ConversionReport {
        if self.board != state.from {
            warn!(
                "converting from {:?} but settings belong to {:?}",
                state.from, self.board
            );
        }

        let mut report = ConversionReport::default();
        let from = state.from.family();
        let to = state.to.family();

        self.set_default_control_types(state.to, boards);

        rules::apply_label_rules(self, from, to, &mut report.relocated);
        self.compact_pot_labels(state, boards, &mut report);

        if to.has_adjustable_contrast() {
            let range = FieldRange::contrast(firmware);
            let clamped = saturate_i16(range.clamp(i32::from(self.contrast)));
            if clamped != self.contrast {
                debug!("contrast {} clamped to {}", self.contrast, clamped);
                report.contrast = Some((self.contrast, clamped));
                self.contrast = clamped;
            }
        }

        for (index, function) in self.custom_functions.iter_mut().enumerate() {
            functions.convert_function(function, &state.with_component_index(index));
            report.functions_converted += 1;
        }

        self.board = state.to;
        info!("converted settings {:?} -> {:?}", state.from, state.to);
        report
    }

    /// Move the S2 label around the slot Horus boards give to the
    /// 6-position switch
    fn compact_pot_labels(
        &mut self,
        state: &ConversionState,
        boards: &impl BoardCapabilities,
        report: &mut ConversionReport,
    ) {
        let from_pots = boards.capability(state.from, Capability::FactoryInstalledPots);
        let to_pots = boards.capability(state.to, Capability::FactoryInstalledPots);
        let to = state.to.family();

        if to.is_horus_or_t16() && from_pots == TWO_POTS && to_pots > TWO_POTS {
            self.relocate_pot_label(MULTIPOS_POT_SLOT, THIRD_POT_SLOT, report);
            self.pot_name[MULTIPOS_POT_SLOT].clear();
            report.cleared = Some((LabelBank::Pot, MULTIPOS_POT_SLOT));
        } else if to.is_taranis() && from_pots > TWO_POTS && to_pots <= TWO_POTS {
            self.relocate_pot_label(THIRD_POT_SLOT, MULTIPOS_POT_SLOT, report);
        }
    }

    fn relocate_pot_label(&mut self, from: usize, to: usize, report: &mut ConversionReport) {
        if rules::copy_label(self, LabelBank::Pot, from, to) {
            let _ = report.relocated.push(LabelMove {
                bank: LabelBank::Pot,
                from,
                to,
            });
        }
    }
}

/// Narrow a clamped value, saturating when the firmware range exceeds `i16`
fn saturate_i16(value: i32) -> i16 {
    i16::try_from(value).unwrap_or(if value < 0 { i16::MIN } else { i16::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::{FakeBoards, FakeFirmware, FakePair};
    use crate::config::{CustomFunction, PotConfig, SwitchConfig, MAX_CUSTOM_FUNCTIONS};
    use crate::legacy::StoredProfile;
    use crate::traits::KeepFunctions;
    use proptest::prelude::*;

    const TARANIS_FIRMWARE: FakeFirmware = FakeFirmware {
        min_contrast: 10,
        max_contrast: 30,
    };

    fn settings_for(board: Board, caps: &FakeBoards) -> RadioSettings {
        RadioSettings::new(board, caps, &StoredProfile::default())
    }

    fn pair(from: (Board, FakeBoards), to: (Board, FakeBoards)) -> FakePair {
        FakePair { from, to }
    }

    fn pot_names(settings: &RadioSettings) -> [&str; 3] {
        [
            settings.pot_name[0].as_str(),
            settings.pot_name[1].as_str(),
            settings.pot_name[2].as_str(),
        ]
    }

    #[test]
    fn test_same_board_resets_types_and_keeps_labels() {
        let caps = FakeBoards::x9d();
        let mut settings = settings_for(Board::TaranisX9d, &caps);
        settings.switch_config[0] = SwitchConfig::NotAvailable;
        settings.pot_config[2] = PotConfig::MultiposSwitch;
        for (slot, name) in ["SE", "SF", "SG", "SH"].iter().enumerate() {
            settings.set_label(LabelBank::Switch, slot + 4, name);
        }
        settings.set_label(LabelBank::Pot, 2, "S3");
        settings.set_label(LabelBank::Slider, 0, "LS");
        let labels_before = (
            settings.switch_name.clone(),
            settings.pot_name.clone(),
            settings.slider_name.clone(),
        );

        let state = ConversionState::new(Board::TaranisX9d, Board::TaranisX9d);
        let report = settings.convert(&state, &caps, &TARANIS_FIRMWARE, &mut KeepFunctions);

        assert_eq!(settings.switch_config[0], SwitchConfig::ThreePos);
        assert_eq!(settings.pot_config[2], PotConfig::None);
        assert_eq!(
            labels_before,
            (settings.switch_name.clone(), settings.pot_name.clone(), settings.slider_name.clone())
        );
        assert!(report.relocated.is_empty());
        assert_eq!(report.cleared, None);
        assert_eq!(report.functions_converted, MAX_CUSTOM_FUNCTIONS);
    }

    #[test]
    fn test_functions_converted_once_in_order() {
        let caps = FakeBoards::x9d();
        let mut settings = settings_for(Board::TaranisX9d, &caps);
        let mut seen = std::vec::Vec::new();
        let mut converter = |function: &mut CustomFunction, state: &ConversionState| {
            assert_eq!(state.from, Board::TaranisX9d);
            assert_eq!(state.to, Board::HorusX10);
            let index = state.component_index.unwrap();
            function.param += index as i32;
            seen.push(index);
        };

        let state = ConversionState::new(Board::TaranisX9d, Board::HorusX10);
        let boards = pair((Board::TaranisX9d, caps), (Board::HorusX10, FakeBoards::horus()));
        let report = settings.convert(&state, &boards, &TARANIS_FIRMWARE, &mut converter);

        assert_eq!(seen, (0..MAX_CUSTOM_FUNCTIONS).collect::<std::vec::Vec<_>>());
        assert_eq!(report.functions_converted, MAX_CUSTOM_FUNCTIONS);
        for (index, function) in settings.custom_functions.iter().enumerate() {
            assert_eq!(function.param, index as i32);
        }
    }

    #[test]
    fn test_x9d_to_x7() {
        let mut settings = settings_for(Board::TaranisX9d, &FakeBoards::x9d());
        for (slot, name) in ["SE", "SF", "SG", "SH"].iter().enumerate() {
            settings.set_label(LabelBank::Switch, slot + 4, name);
        }

        let state = ConversionState::new(Board::TaranisX9d, Board::TaranisX7);
        let boards = pair(
            (Board::TaranisX9d, FakeBoards::x9d()),
            (Board::TaranisX7, FakeBoards::x7()),
        );
        let report = settings.convert(&state, &boards, &TARANIS_FIRMWARE, &mut KeepFunctions);

        assert_eq!(settings.board, Board::TaranisX7);
        assert_eq!(settings.switch_name[4].as_str(), "SF");
        assert_eq!(settings.switch_name[5].as_str(), "SH");
        assert_eq!(settings.switch_config[5], SwitchConfig::TwoPos);
        assert_eq!(settings.switch_config[6], SwitchConfig::NotAvailable);
        assert_eq!(settings.slider_config[0], PotConfig::None);
        assert_eq!(report.relocated.len(), 2);
    }

    #[test]
    fn test_x7_round_trip_keeps_leading_switches() {
        let mut settings = settings_for(Board::TaranisX7, &FakeBoards::x7());
        for (slot, name) in ["SA", "SB", "SC", "SD", "SF", "SH"].iter().enumerate() {
            settings.set_label(LabelBank::Switch, slot, name);
        }

        let state = ConversionState::new(Board::TaranisX7, Board::TaranisX9d);
        let boards = pair(
            (Board::TaranisX7, FakeBoards::x7()),
            (Board::TaranisX9d, FakeBoards::x9d()),
        );
        settings.convert(&state, &boards, &TARANIS_FIRMWARE, &mut KeepFunctions);

        // SF lands in slot 5, then the new slot 5 is copied to slot 7
        assert_eq!(settings.switch_name[5].as_str(), "SF");
        assert_eq!(settings.switch_name[7].as_str(), "SF");
        assert_eq!(settings.switch_name[0].as_str(), "SA");
    }

    #[test]
    fn test_x9d_to_horus_makes_room_for_multipos() {
        let mut settings = settings_for(Board::TaranisX9d, &FakeBoards::x9d());
        settings.set_label(LabelBank::Pot, 0, "S1");
        settings.set_label(LabelBank::Pot, 1, "S2");

        let state = ConversionState::new(Board::TaranisX9d, Board::HorusX10);
        let boards = pair(
            (Board::TaranisX9d, FakeBoards::x9d()),
            (Board::HorusX10, FakeBoards::horus()),
        );
        let report = settings.convert(&state, &boards, &TARANIS_FIRMWARE, &mut KeepFunctions);

        assert_eq!(pot_names(&settings), ["S1", "", "S2"]);
        assert_eq!(settings.pot_config[1], PotConfig::MultiposSwitch);
        assert_eq!(report.cleared, Some((LabelBank::Pot, 1)));
        assert_eq!(
            report.relocated.as_slice(),
            &[LabelMove {
                bank: LabelBank::Pot,
                from: 1,
                to: 2
            }]
        );
    }

    #[test]
    fn test_horus_to_x9d_drops_multipos() {
        let mut settings = settings_for(Board::HorusX10, &FakeBoards::horus());
        settings.set_label(LabelBank::Pot, 0, "S1");
        settings.set_label(LabelBank::Pot, 1, "6P");
        settings.set_label(LabelBank::Pot, 2, "S2");

        let state = ConversionState::new(Board::HorusX10, Board::TaranisX9d);
        let boards = pair(
            (Board::HorusX10, FakeBoards::horus()),
            (Board::TaranisX9d, FakeBoards::x9d()),
        );
        settings.convert(&state, &boards, &TARANIS_FIRMWARE, &mut KeepFunctions);

        assert_eq!(pot_names(&settings), ["S1", "S2", "S2"]);
        assert_eq!(settings.pot_config[2], PotConfig::None);
    }

    #[test]
    fn test_horus_to_horus_keeps_pot_labels() {
        let caps = FakeBoards::horus();
        let mut settings = settings_for(Board::HorusX10, &caps);
        settings.set_label(LabelBank::Pot, 1, "6P");
        settings.set_label(LabelBank::Pot, 2, "S2");

        let state = ConversionState::new(Board::HorusX10, Board::JumperT16);
        settings.convert(&state, &caps, &TARANIS_FIRMWARE, &mut KeepFunctions);
        assert_eq!(pot_names(&settings), ["", "6P", "S2"]);
    }

    #[test]
    fn test_sliders_to_wide_bank() {
        let mut settings = settings_for(Board::HorusX10, &FakeBoards::horus());
        for (slot, name) in ["LS", "RS", "L3", "R3"].iter().enumerate() {
            settings.set_label(LabelBank::Slider, slot, name);
        }

        let state = ConversionState::new(Board::HorusX10, Board::HorusX12s);
        let boards = pair(
            (Board::HorusX10, FakeBoards::horus()),
            (Board::HorusX12s, FakeBoards::x12s()),
        );
        settings.convert(&state, &boards, &TARANIS_FIRMWARE, &mut KeepFunctions);

        let sliders: std::vec::Vec<&str> = settings.slider_name.iter().map(|n| n.as_str()).collect();
        assert_eq!(sliders, ["L3", "R3", "L3", "R3"]);
        assert_eq!(settings.slider_config, [PotConfig::WithDetent; 4]);
    }

    #[test]
    fn test_contrast_untouched_on_colour_screen() {
        let caps = FakeBoards::horus();
        let mut settings = settings_for(Board::HorusX10, &caps);
        settings.contrast = 255;

        let state = ConversionState::new(Board::HorusX10, Board::HorusX10);
        let report = settings.convert(&state, &caps, &TARANIS_FIRMWARE, &mut KeepFunctions);
        assert_eq!(settings.contrast, 255);
        assert_eq!(report.contrast, None);
    }

    #[test]
    fn test_contrast_saturates_outside_i16() {
        let caps = FakeBoards::x9d();
        let state = ConversionState::new(Board::TaranisX9d, Board::TaranisX9d);

        let mut settings = settings_for(Board::TaranisX9d, &caps);
        let high = FakeFirmware {
            min_contrast: 40_000,
            max_contrast: 50_000,
        };
        let report = settings.convert(&state, &caps, &high, &mut KeepFunctions);
        assert_eq!(settings.contrast, i16::MAX);
        assert!(matches!(report.contrast, Some((_, i16::MAX))));

        let low = FakeFirmware {
            min_contrast: -100_000,
            max_contrast: -50_000,
        };
        settings.convert(&state, &caps, &low, &mut KeepFunctions);
        assert_eq!(settings.contrast, i16::MIN);
    }

    #[test]
    fn test_every_board_pair_converts() {
        let caps = FakeBoards::x9d();
        for from in Board::ALL {
            for to in Board::ALL {
                let mut settings = settings_for(from, &caps);
                let state = ConversionState::new(from, to);
                let report = settings.convert(&state, &caps, &TARANIS_FIRMWARE, &mut KeepFunctions);
                assert_eq!(settings.board, to);
                assert!(report.relocated.len() <= 5);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_contrast_lands_in_firmware_range(contrast in -50i16..=255) {
            let caps = FakeBoards::x9d();
            let mut settings = settings_for(Board::TaranisX9d, &caps);
            settings.contrast = contrast;

            let state = ConversionState::new(Board::TaranisX9d, Board::TaranisX9dPlus);
            let report = settings.convert(&state, &caps, &TARANIS_FIRMWARE, &mut KeepFunctions);

            prop_assert!((10..=30).contains(&settings.contrast));
            if (10..=30).contains(&contrast) {
                prop_assert_eq!(settings.contrast, contrast);
                prop_assert_eq!(report.contrast, None);
            } else {
                prop_assert_eq!(report.contrast, Some((contrast, settings.contrast)));
            }
        }
    }
}
