//! Firmware limits per board

use gimbal_core::config::FieldRange;
use gimbal_core::traits::{FirmwareCapabilities, FirmwareCapability};
use gimbal_core::Board;

/// Contrast limits of the firmware built for one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FirmwareProfile {
    pub board: Board,
    pub min_contrast: i32,
    pub max_contrast: i32,
}

impl FirmwareProfile {
    pub const fn for_board(board: Board) -> Self {
        let family = board.family();
        let min_contrast = if family.is_taranis_x9() { 0 } else { 10 };
        let max_contrast = if family.is_taranis_small() { 30 } else { 45 };
        Self {
            board,
            min_contrast,
            max_contrast,
        }
    }

    pub fn contrast_range(&self) -> FieldRange {
        FieldRange::contrast(self)
    }
}

impl FirmwareCapabilities for FirmwareProfile {
    fn capability(&self, kind: FirmwareCapability) -> i32 {
        match kind {
            FirmwareCapability::MinContrast => self.min_contrast,
            FirmwareCapability::MaxContrast => self.max_contrast,
        }
    }
}
