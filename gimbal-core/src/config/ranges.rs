//! Legal ranges of editable settings fields

use crate::traits::{FirmwareCapabilities, FirmwareCapability};

/// Inclusive range of a numeric settings field
///
/// `offset` is added to the stored value for display, `step` and
/// `decimals` describe the displayed resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldRange {
    pub min: i32,
    pub max: i32,
    pub decimals: u8,
    pub step: f32,
    pub offset: i32,
    pub unit: &'static str,
}

impl Default for FieldRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: 0,
            decimals: 0,
            step: 1.0,
            offset: 0,
            unit: "",
        }
    }
}

impl FieldRange {
    /// Plain integer range
    pub const fn new(min: i32, max: i32) -> Self {
        Self {
            min,
            max,
            decimals: 0,
            step: 1.0,
            offset: 0,
            unit: "",
        }
    }

    /// PPM multiplier, shown as 1.0..1.5
    pub const fn ppm_multiplier() -> Self {
        Self {
            min: 0,
            max: 5,
            decimals: 1,
            step: 0.1,
            offset: 10,
            unit: "",
        }
    }

    /// Transmitter current sensor offset
    pub const fn tx_current_calibration() -> Self {
        Self {
            min: -49,
            max: 49,
            decimals: 0,
            step: 1.0,
            offset: 0,
            unit: "mA",
        }
    }

    /// Trainer mix weight in percent
    pub const fn trainer_weight() -> Self {
        Self::new(-125, 125)
    }

    /// LCD contrast supported by a firmware
    pub fn contrast(firmware: &impl FirmwareCapabilities) -> Self {
        Self::new(
            firmware.capability(FirmwareCapability::MinContrast),
            firmware.capability(FirmwareCapability::MaxContrast),
        )
    }

    pub const fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into the range
    ///
    /// An inverted range (min > max) resolves to `min`.
    pub fn clamp(&self, value: i32) -> i32 {
        if value > self.max {
            self.max.max(self.min)
        } else if value < self.min {
            self.min
        } else {
            value
        }
    }
}
