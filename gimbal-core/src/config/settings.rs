//! Radio settings
//!
//! [`RadioSettings`] is the root of the board-dependent global settings of
//! one radio profile. It is built once per profile by [`RadioSettings::new`]
//! and later migrated in place by
//! [`RadioSettings::convert`](crate::convert).

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::legacy::StoredProfile;
use crate::template::TemplateSetup;
use crate::traits::BoardCapabilities;

use super::calibration::Calibration;
use super::defaults::{backlight_off_bright, bluetooth_name, BatteryDefaults};
use super::types::{
    AntennaMode, AuxSerialMode, BacklightMode, BeeperMode, BluetoothMode, CustomFunction,
    HardwareName, PotConfig, SliderConfig, StickMode, SwitchConfig, TelemetryBaudrate,
    TrainerMix, TrainerMixMode, TrainerSettings, BLUETOOTH_NAME_LEN, MAX_CUSTOM_FUNCTIONS,
    MAX_POTS, MAX_SLIDERS, MAX_SWITCHES,
};

/// Default LCD contrast
pub const CONTRAST_DEFAULT: i16 = 25;

/// Default trainer mix weight in percent
pub const TRAINER_WEIGHT_DEFAULT: i16 = 100;

/// Global settings of one radio profile
///
/// Slot arrays are sized for the largest board. Only the first
/// `capability(board, kind)` slots are meaningful for the current board.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadioSettings {
    /// Board these settings currently describe
    pub board: Board,

    /// Switch type per physical slot
    pub switch_config: [SwitchConfig; MAX_SWITCHES],
    pub switch_name: [HardwareName; MAX_SWITCHES],
    /// Pot type per physical slot
    pub pot_config: [PotConfig; MAX_POTS],
    pub pot_name: [HardwareName; MAX_POTS],
    /// Slider type per physical slot
    pub slider_config: [SliderConfig; MAX_SLIDERS],
    pub slider_name: [HardwareName; MAX_SLIDERS],

    /// Analog calibration (sticks, then pots, sliders, mouse)
    pub calibration: Calibration,
    pub stick_mode: StickMode,
    /// Stick order used when creating new models
    pub template_setup: TemplateSetup,
    pub trainer: TrainerSettings,

    /// Battery warning in 100mV
    pub vbat_warn: u8,
    /// Battery gauge minimum, 100mV with -9V offset
    pub vbat_min: i8,
    /// Battery gauge maximum, 100mV with -12V offset
    pub vbat_max: i8,
    pub tx_voltage_calibration: i8,
    pub tx_current_calibration: i8,
    /// See [`FieldRange::ppm_multiplier`](super::FieldRange::ppm_multiplier)
    pub ppm_multiplier: i8,

    // Display
    pub contrast: i16,
    pub optrex_display: bool,
    pub backlight_mode: BacklightMode,
    /// Backlight timeout in 5s units
    pub backlight_delay: u8,
    /// 0 = full brightness
    pub backlight_bright: u8,
    pub backlight_off_bright: u8,
    /// Minutes
    pub inactivity_timer: u8,

    // Audio and haptic
    pub speaker_volume: u8,
    pub wav_volume: u8,
    pub background_volume: u8,
    pub beeper_mode: BeeperMode,
    pub beeper_length: i8,
    pub haptic_mode: BeeperMode,
    pub haptic_strength: i8,
    pub haptic_length: i8,
    pub speaker_mode: u8,
    pub speaker_pitch: u8,

    // Locale
    pub country_code: u8,
    pub imperial: u8,
    /// Two-letter voice language code, raw bytes
    pub tts_language: [u8; 2],

    // Radio links
    pub antenna_mode: AntennaMode,
    pub bluetooth_mode: BluetoothMode,
    pub bluetooth_name: String<BLUETOOTH_NAME_LEN>,
    pub aux_serial_mode: AuxSerialMode,
    pub telemetry_baudrate: TelemetryBaudrate,

    /// Global special functions, always `MAX_CUSTOM_FUNCTIONS` long
    pub custom_functions: Vec<CustomFunction, MAX_CUSTOM_FUNCTIONS>,
}

impl RadioSettings {
    /// All-zero settings for `board`, before any defaults are applied
    pub fn zeroed(board: Board) -> Self {
        let mut custom_functions = Vec::new();
        // Capacity equals the fill count, so this cannot fail
        let _ = custom_functions.resize(MAX_CUSTOM_FUNCTIONS, CustomFunction::default());

        Self {
            board,
            switch_config: [SwitchConfig::NotAvailable; MAX_SWITCHES],
            switch_name: core::array::from_fn(|_| HardwareName::new()),
            pot_config: [PotConfig::None; MAX_POTS],
            pot_name: core::array::from_fn(|_| HardwareName::new()),
            slider_config: [PotConfig::None; MAX_SLIDERS],
            slider_name: core::array::from_fn(|_| HardwareName::new()),
            calibration: Calibration::zeroed(),
            stick_mode: StickMode::default(),
            template_setup: TemplateSetup::default(),
            trainer: TrainerSettings::default(),
            vbat_warn: 0,
            vbat_min: 0,
            vbat_max: 0,
            tx_voltage_calibration: 0,
            tx_current_calibration: 0,
            ppm_multiplier: 0,
            contrast: 0,
            optrex_display: false,
            backlight_mode: BacklightMode::Off,
            backlight_delay: 0,
            backlight_bright: 0,
            backlight_off_bright: 0,
            inactivity_timer: 0,
            speaker_volume: 0,
            wav_volume: 0,
            background_volume: 0,
            beeper_mode: BeeperMode::NoKeys,
            beeper_length: 0,
            haptic_mode: BeeperMode::NoKeys,
            haptic_strength: 0,
            haptic_length: 0,
            speaker_mode: 0,
            speaker_pitch: 0,
            country_code: 0,
            imperial: 0,
            tts_language: [0; 2],
            antenna_mode: AntennaMode::default(),
            bluetooth_mode: BluetoothMode::default(),
            bluetooth_name: String::new(),
            aux_serial_mode: AuxSerialMode::default(),
            telemetry_baudrate: TelemetryBaudrate::default(),
            custom_functions,
        }
    }

    /// Build the settings of a fresh profile for `board`
    ///
    /// Applies the factory defaults of the board, then the stick order and
    /// mode of `profile`, then any legacy calibration and settings strings
    /// the profile carries.
    pub fn new(board: Board, caps: &impl BoardCapabilities, profile: &StoredProfile<'_>) -> Self {
        let mut settings = Self::zeroed(board);
        let family = board.family();

        settings.contrast = CONTRAST_DEFAULT;
        settings.calibration = Calibration::new();

        let battery = BatteryDefaults::for_family(family);
        settings.vbat_warn = battery.warn;
        settings.vbat_min = battery.min;
        settings.vbat_max = battery.max;

        settings.set_default_control_types(board, caps);

        settings.backlight_mode = BacklightMode::KeysAndSticks;
        settings.backlight_delay = 2;
        settings.inactivity_timer = 10;
        settings.backlight_off_bright = backlight_off_bright(family);

        settings.speaker_volume = 12;
        settings.wav_volume = 2;
        settings.background_volume = 1;

        // Names in the table are all shorter than the buffer
        let _ = settings.bluetooth_name.push_str(bluetooth_name(board));

        for (index, mix) in settings.trainer.mix.iter_mut().enumerate() {
            *mix = TrainerMix {
                mode: TrainerMixMode::Replace,
                src: index as u8,
                weight: TRAINER_WEIGHT_DEFAULT,
            };
        }

        settings.template_setup = match TemplateSetup::new(profile.channel_order) {
            Some(template) => template,
            None => {
                warn!(
                    "channel order {} out of range, using template 0",
                    profile.channel_order
                );
                TemplateSetup::default()
            }
        };
        settings.stick_mode = StickMode::from_raw(profile.default_mode).unwrap_or_default();

        let report = settings.import_legacy(caps, profile);
        debug!("legacy import: {:?}", report);

        info!("created settings for {:?}", board);
        settings
    }

    /// Labels of one control bank
    pub fn labels(&self, bank: LabelBank) -> &[HardwareName] {
        match bank {
            LabelBank::Switch => &self.switch_name,
            LabelBank::Pot => &self.pot_name,
            LabelBank::Slider => &self.slider_name,
        }
    }

    /// Mutable labels of one control bank
    pub fn labels_mut(&mut self, bank: LabelBank) -> &mut [HardwareName] {
        match bank {
            LabelBank::Switch => &mut self.switch_name,
            LabelBank::Pot => &mut self.pot_name,
            LabelBank::Slider => &mut self.slider_name,
        }
    }

    /// Set the label of a slot, truncating to [`HARDWARE_NAME_LEN`](super::HARDWARE_NAME_LEN)
    ///
    /// Returns `false` if the slot does not exist.
    pub fn set_label(&mut self, bank: LabelBank, slot: usize, label: &str) -> bool {
        let Some(name) = self.labels_mut(bank).get_mut(slot) else {
            return false;
        };
        name.clear();
        for c in label.chars() {
            if name.push(c).is_err() {
                break;
            }
        }
        true
    }
}

/// Which label array a slot index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LabelBank {
    Switch,
    Pot,
    Slider,
}
