//! Legacy string decoder
//!
//! Each block is gated on its exact length: a block of the wrong length is
//! ignored as a whole. Inside an accepted block every field is parsed on
//! its own and a field that fails to parse keeps its previous value.
//! Decoded values are stored without range checks.

use crate::config::{BeeperMode, RadioSettings, StickMode, MAX_ANALOGS};
use crate::traits::{BoardCapabilities, Capability};

use super::hex::{parse_i16, parse_i8, parse_u8, HexError, BYTE_DIGITS, WORD_DIGITS};
use super::StoredProfile;

/// Characters per analog in the calibration block
pub const ANALOG_ENTRY_LEN: usize = 3 * WORD_DIGITS;

/// Characters in the trainer calibration block
pub const TRAINER_CALIB_LEN: usize = 4 * WORD_DIGITS;

const DISPLAY_LEN: usize = 3 * BYTE_DIGITS;
const BEEPER_LEN: usize = 2 * BYTE_DIGITS;
const HAPTIC_LEN: usize = 3 * BYTE_DIGITS;
const SPEAKER_LEN: usize = 3 * BYTE_DIGITS;
const COUNTRY_LEN: usize = 3 * BYTE_DIGITS;

/// Encoded strings of a legacy profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LegacyBlock {
    Calibration,
    Trainer,
    Display,
    Beeper,
    Haptic,
    Speaker,
    Country,
}

/// Why a whole block was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlockError {
    LengthMismatch {
        block: LegacyBlock,
        expected: usize,
        actual: usize,
    },
}

/// What happened to one group of blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlockOutcome {
    /// Nothing stored for this group
    #[default]
    Absent,
    /// Length check passed, fields applied (minus skipped ones)
    Applied,
    /// Length check failed, nothing applied
    Rejected(BlockError),
}

/// Summary of a legacy import
///
/// Informational only: the import never fails, it keeps whatever it could
/// not decode at its previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImportReport {
    /// Calibration and trainer blocks
    pub calibration: BlockOutcome,
    /// Display, beeper, haptic and speaker blocks
    pub settings: BlockOutcome,
    /// Country block, only looked at when `settings` was applied
    pub country: BlockOutcome,
    /// Fields left unchanged because they did not decode
    pub skipped_fields: u16,
}

impl ImportReport {
    /// Check that nothing was rejected or skipped
    pub fn is_clean(&self) -> bool {
        self.skipped_fields == 0
            && ![self.calibration, self.settings, self.country]
                .iter()
                .any(|outcome| matches!(outcome, BlockOutcome::Rejected(_)))
    }
}

/// Reasons a single field is skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldError {
    Hex(HexError),
    /// Decoded fine but names no known value
    UnknownValue(i16),
    /// Raw character field outside ASCII
    NotAscii,
}

impl From<HexError> for FieldError {
    fn from(e: HexError) -> Self {
        FieldError::Hex(e)
    }
}

/// Applies decoded fields and counts the ones that failed
struct FieldWriter {
    skipped: u16,
}

impl FieldWriter {
    fn set<T, E>(&mut self, name: &'static str, target: &mut T, value: Result<T, E>)
    where
        E: Into<FieldError>,
    {
        match value {
            Ok(value) => *target = value,
            Err(e) => {
                let e: FieldError = e.into();
                self.skipped = self.skipped.saturating_add(1);
                debug!("legacy field {} skipped: {:?}", name, e);
            }
        }
    }
}

/// Lengths are in characters, not UTF-8 bytes
fn check_length(block: LegacyBlock, value: &str, expected: usize) -> Result<(), BlockError> {
    let actual = value.chars().count();
    if actual == expected {
        Ok(())
    } else {
        Err(BlockError::LengthMismatch {
            block,
            expected,
            actual,
        })
    }
}

/// Bytes of the `index`-th field of `width` characters
///
/// A field holding a multi-byte character comes back longer than `width`
/// and fails the fixed-width parsers on its own.
fn field(value: &str, index: usize, width: usize) -> &[u8] {
    let mut bounds = value
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(core::iter::once(value.len()));
    let Some(start) = bounds.nth(index * width) else {
        return &[];
    };
    let Some(end) = width.checked_sub(1).and_then(|skip| bounds.nth(skip)) else {
        return &[];
    };
    value.as_bytes().get(start..end).unwrap_or(&[])
}

fn word(value: &str, index: usize) -> &[u8] {
    field(value, index, WORD_DIGITS)
}

fn byte(value: &str, index: usize) -> &[u8] {
    field(value, index, BYTE_DIGITS)
}

fn ascii_pair(bytes: &[u8]) -> Result<[u8; 2], FieldError> {
    match *bytes {
        [first, second] if first.is_ascii() && second.is_ascii() => Ok([first, second]),
        _ => Err(FieldError::NotAscii),
    }
}

fn beeper_mode(bytes: &[u8]) -> Result<BeeperMode, FieldError> {
    let raw = parse_i8(bytes)?;
    BeeperMode::from_raw(raw).ok_or(FieldError::UnknownValue(raw.into()))
}

impl RadioSettings {
    /// Import calibration and settings stored by an older profile format
    ///
    /// Does nothing unless `profile.stick_pot_calib` is non-empty.
    pub fn import_legacy(
        &mut self,
        caps: &impl BoardCapabilities,
        profile: &StoredProfile<'_>,
    ) -> ImportReport {
        let mut report = ImportReport::default();
        if profile.stick_pot_calib.is_empty() {
            return report;
        }

        let mut writer = FieldWriter { skipped: 0 };
        report.calibration = self.import_calibration(caps, profile, &mut writer);
        report.settings = self.import_settings(profile, &mut writer);
        if report.settings == BlockOutcome::Applied {
            report.country = self.import_country(profile, &mut writer);
        }
        report.skipped_fields = writer.skipped;
        report
    }

    fn import_calibration(
        &mut self,
        caps: &impl BoardCapabilities,
        profile: &StoredProfile<'_>,
        writer: &mut FieldWriter,
    ) -> BlockOutcome {
        let analogs = caps.capability(self.board, Capability::Sticks)
            + caps.capability(self.board, Capability::Pots);

        let gate = check_length(
            LegacyBlock::Calibration,
            profile.stick_pot_calib,
            analogs * ANALOG_ENTRY_LEN,
        )
        .and_then(|()| check_length(LegacyBlock::Trainer, profile.trainer_calib, TRAINER_CALIB_LEN));
        if let Err(e) = gate {
            warn!("legacy calibration ignored: {:?}", e);
            return BlockOutcome::Rejected(e);
        }

        let calib = profile.stick_pot_calib;
        let calibration = &mut self.calibration;
        for index in 0..analogs.min(MAX_ANALOGS) {
            let first = 3 * index;
            writer.set("calib mid", &mut calibration.mid[index], parse_i16(word(calib, first)));
            writer.set(
                "calib span-",
                &mut calibration.span_neg[index],
                parse_i16(word(calib, first + 1)),
            );
            writer.set(
                "calib span+",
                &mut calibration.span_pos[index],
                parse_i16(word(calib, first + 2)),
            );
        }

        for (index, slot) in self.trainer.calib.iter_mut().enumerate() {
            writer.set("trainer calib", slot, parse_i16(word(profile.trainer_calib, index)));
        }

        self.tx_current_calibration = profile.tx_current_calibration;
        self.tx_voltage_calibration = profile.tx_voltage_calibration;
        self.vbat_warn = profile.vbat_warn;
        self.ppm_multiplier = profile.ppm_multiplier;
        writer.set(
            "stick mode",
            &mut self.stick_mode,
            StickMode::from_raw(profile.stick_mode)
                .ok_or(FieldError::UnknownValue(profile.stick_mode.into())),
        );

        BlockOutcome::Applied
    }

    fn import_settings(
        &mut self,
        profile: &StoredProfile<'_>,
        writer: &mut FieldWriter,
    ) -> BlockOutcome {
        let gates = [
            (LegacyBlock::Display, profile.display, DISPLAY_LEN),
            (LegacyBlock::Beeper, profile.beeper, BEEPER_LEN),
            (LegacyBlock::Haptic, profile.haptic, HAPTIC_LEN),
            (LegacyBlock::Speaker, profile.speaker, SPEAKER_LEN),
        ];
        for (block, value, expected) in gates {
            if let Err(e) = check_length(block, value, expected) {
                warn!("legacy settings ignored: {:?}", e);
                return BlockOutcome::Rejected(e);
            }
        }

        let display = profile.display;
        writer.set("optrex", &mut self.optrex_display, parse_i8(byte(display, 0)).map(|v| v == 1));
        writer.set("contrast", &mut self.contrast, parse_u8(byte(display, 1)).map(i16::from));
        writer.set("backlight", &mut self.backlight_bright, parse_u8(byte(display, 2)));

        let beeper = profile.beeper;
        writer.set("beeper mode", &mut self.beeper_mode, beeper_mode(byte(beeper, 0)));
        writer.set("beeper length", &mut self.beeper_length, parse_i8(byte(beeper, 1)));

        let haptic = profile.haptic;
        writer.set("haptic mode", &mut self.haptic_mode, beeper_mode(byte(haptic, 0)));
        writer.set("haptic strength", &mut self.haptic_strength, parse_i8(byte(haptic, 1)));
        writer.set("haptic length", &mut self.haptic_length, parse_i8(byte(haptic, 2)));

        let speaker = profile.speaker;
        writer.set("speaker mode", &mut self.speaker_mode, parse_u8(byte(speaker, 0)));
        writer.set("speaker pitch", &mut self.speaker_pitch, parse_u8(byte(speaker, 1)));
        writer.set("speaker volume", &mut self.speaker_volume, parse_u8(byte(speaker, 2)));

        BlockOutcome::Applied
    }

    fn import_country(
        &mut self,
        profile: &StoredProfile<'_>,
        writer: &mut FieldWriter,
    ) -> BlockOutcome {
        if profile.country_code.is_empty() {
            return BlockOutcome::Absent;
        }
        if let Err(e) = check_length(LegacyBlock::Country, profile.country_code, COUNTRY_LEN) {
            warn!("legacy country ignored: {:?}", e);
            return BlockOutcome::Rejected(e);
        }

        let country = profile.country_code;
        writer.set("country", &mut self.country_code, parse_u8(byte(country, 0)));
        writer.set("imperial", &mut self.imperial, parse_u8(byte(country, 1)));
        // Language code is stored as two raw characters, not hex
        writer.set("tts language", &mut self.tts_language, ascii_pair(byte(country, 2)));

        BlockOutcome::Applied
    }
}
