//! Board and firmware capability queries

use crate::board::Board;
use crate::config::SwitchConfig;

/// Hardware counts a board can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Capability {
    /// Gimbal axes
    Sticks,
    /// Pot slots, including optional ones
    Pots,
    /// Slider slots
    Sliders,
    /// Switch slots populated at the factory
    FactoryInstalledSwitches,
    /// Pots populated at the factory
    FactoryInstalledPots,
}

/// Factory description of one switch slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchInfo {
    /// Silkscreen name, e.g. "SA"
    pub name: &'static str,
    /// Factory switch type
    pub config: SwitchConfig,
}

impl SwitchInfo {
    /// Slot with no switch fitted
    pub const NONE: SwitchInfo = SwitchInfo {
        name: "",
        config: SwitchConfig::NotAvailable,
    };

    pub const fn new(name: &'static str, config: SwitchConfig) -> Self {
        Self { name, config }
    }
}

/// Read-only board capability database
///
/// Implementations must be total: unknown slots report [`SwitchInfo::NONE`]
/// and unsupported capabilities report zero.
pub trait BoardCapabilities {
    /// Number of items of `kind` on `board`
    fn capability(&self, board: Board, kind: Capability) -> usize;

    /// Factory description of switch slot `index` on `board`
    fn switch_info(&self, board: Board, index: usize) -> SwitchInfo;
}

/// Limits reported by the firmware built for the destination board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FirmwareCapability {
    MinContrast,
    MaxContrast,
}

/// Firmware capability query
pub trait FirmwareCapabilities {
    fn capability(&self, kind: FirmwareCapability) -> i32;
}

impl<T: BoardCapabilities + ?Sized> BoardCapabilities for &T {
    fn capability(&self, board: Board, kind: Capability) -> usize {
        (**self).capability(board, kind)
    }

    fn switch_info(&self, board: Board, index: usize) -> SwitchInfo {
        (**self).switch_info(board, index)
    }
}

impl<T: FirmwareCapabilities + ?Sized> FirmwareCapabilities for &T {
    fn capability(&self, kind: FirmwareCapability) -> i32 {
        (**self).capability(kind)
    }
}
