//! Legacy profile import
//!
//! Older companion profiles stored radio calibration and a handful of
//! settings as fixed-width hex strings. There is no version or checksum:
//! the length of each string is the only format check.
//!
//! ```text
//! calibration  per analog: MMMM NNNN PPPP   (mid, span-, span+)
//! trainer      4 x CCCC
//! display      OO CC BB                     (optrex, contrast, backlight)
//! beeper       MM LL                        (mode, length)
//! haptic       MM SS LL                     (mode, strength, length)
//! speaker      MM PP VV                     (mode, pitch, volume)
//! country      CC II TT                     (country, imperial, 2 ASCII chars)
//! ```

pub mod decoder;
pub mod hex;

pub use decoder::{
    BlockError, BlockOutcome, ImportReport, LegacyBlock, ANALOG_ENTRY_LEN, TRAINER_CALIB_LEN,
};
pub use hex::HexError;

/// Profile fields a new [`RadioSettings`](crate::RadioSettings) is seeded from
///
/// Empty strings mean "not stored". The legacy import only runs when
/// `stick_pot_calib` is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoredProfile<'a> {
    /// Stick order template index
    pub channel_order: u8,
    /// Stick mode for new settings (0..=3)
    pub default_mode: u8,

    /// Per-analog calibration block
    pub stick_pot_calib: &'a str,
    /// Trainer input calibration block
    pub trainer_calib: &'a str,
    pub tx_voltage_calibration: i8,
    pub tx_current_calibration: i8,
    pub ppm_multiplier: i8,
    /// Stick mode recorded alongside the calibration
    pub stick_mode: u8,
    pub vbat_warn: u8,

    pub display: &'a str,
    pub beeper: &'a str,
    pub haptic: &'a str,
    pub speaker: &'a str,
    pub country_code: &'a str,
}
