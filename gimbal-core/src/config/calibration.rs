//! Analog input calibration
//!
//! One center point and two deflection spans per analog input, indexed
//! sticks first, then pots, sliders and mouse axes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{MAX_ANALOGS, MAX_POTS, MAX_SLIDERS, MAX_STICKS};

/// Factory center point for an uncalibrated input
pub const CALIB_MID_DEFAULT: i16 = 0x200;

/// Factory span on each side of the center
pub const CALIB_SPAN_DEFAULT: i16 = 0x180;

/// Calibration for every analog input
///
/// Spans are expected to be non-negative, but nothing here enforces it.
/// Imported data is stored as decoded and consumers validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calibration {
    pub mid: [i16; MAX_ANALOGS],
    pub span_neg: [i16; MAX_ANALOGS],
    pub span_pos: [i16; MAX_ANALOGS],
}

impl Default for Calibration {
    fn default() -> Self {
        Self::new()
    }
}

impl Calibration {
    /// Factory calibration on every input
    pub const fn new() -> Self {
        Self {
            mid: [CALIB_MID_DEFAULT; MAX_ANALOGS],
            span_neg: [CALIB_SPAN_DEFAULT; MAX_ANALOGS],
            span_pos: [CALIB_SPAN_DEFAULT; MAX_ANALOGS],
        }
    }

    /// All-zero calibration, the state before defaults are applied
    pub const fn zeroed() -> Self {
        Self {
            mid: [0; MAX_ANALOGS],
            span_neg: [0; MAX_ANALOGS],
            span_pos: [0; MAX_ANALOGS],
        }
    }

    /// Calibration of analog `index` as `(mid, span_neg, span_pos)`
    pub fn get(&self, index: usize) -> Option<(i16, i16, i16)> {
        Some((
            *self.mid.get(index)?,
            *self.span_neg.get(index)?,
            *self.span_pos.get(index)?,
        ))
    }

    /// Index of pot `pot` in the analog arrays
    pub const fn pot_index(pot: usize) -> Option<usize> {
        if pot < MAX_POTS {
            Some(MAX_STICKS + pot)
        } else {
            None
        }
    }

    /// Index of slider `slider` in the analog arrays
    pub const fn slider_index(slider: usize) -> Option<usize> {
        if slider < MAX_SLIDERS {
            Some(MAX_STICKS + MAX_POTS + slider)
        } else {
            None
        }
    }

    /// Check that no span is negative
    pub fn spans_valid(&self) -> bool {
        self.span_neg.iter().chain(self.span_pos.iter()).all(|&s| s >= 0)
    }
}
