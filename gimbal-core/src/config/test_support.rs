//! Capability fakes for unit tests

use crate::board::Board;
use crate::traits::{
    BoardCapabilities, Capability, FirmwareCapabilities, FirmwareCapability, SwitchInfo,
};

use super::types::{SwitchConfig, MAX_STICKS};

use SwitchConfig::{ThreePos, TwoPos};

const X9D_SWITCHES: &[SwitchConfig] = &[
    ThreePos, ThreePos, ThreePos, ThreePos, ThreePos, TwoPos, ThreePos, TwoPos,
];
const X7_SWITCHES: &[SwitchConfig] = &[ThreePos, ThreePos, ThreePos, ThreePos, TwoPos, TwoPos];
const TLITE_SWITCHES: &[SwitchConfig] = &[ThreePos, ThreePos, TwoPos, TwoPos];

/// Single board layout reported for any board identity
#[derive(Debug, Clone, Copy)]
pub(crate) struct FakeBoards {
    pub pots: usize,
    pub sliders: usize,
    pub factory_pots: usize,
    pub switches: &'static [SwitchConfig],
}

impl FakeBoards {
    pub fn x9d() -> Self {
        Self {
            pots: 3,
            sliders: 2,
            factory_pots: 2,
            switches: X9D_SWITCHES,
        }
    }

    pub fn x9e() -> Self {
        Self {
            pots: 4,
            sliders: 4,
            factory_pots: 2,
            switches: X9D_SWITCHES,
        }
    }

    pub fn x7() -> Self {
        Self {
            pots: 2,
            sliders: 0,
            factory_pots: 2,
            switches: X7_SWITCHES,
        }
    }

    pub fn horus() -> Self {
        Self {
            pots: 3,
            sliders: 2,
            factory_pots: 3,
            switches: X9D_SWITCHES,
        }
    }

    pub fn x12s() -> Self {
        Self {
            pots: 3,
            sliders: 4,
            factory_pots: 3,
            switches: X9D_SWITCHES,
        }
    }

    pub fn bare() -> Self {
        Self {
            pots: 0,
            sliders: 0,
            factory_pots: 0,
            switches: TLITE_SWITCHES,
        }
    }
}

impl BoardCapabilities for FakeBoards {
    fn capability(&self, _board: Board, kind: Capability) -> usize {
        match kind {
            Capability::Sticks => MAX_STICKS,
            Capability::Pots => self.pots,
            Capability::Sliders => self.sliders,
            Capability::FactoryInstalledSwitches => self.switches.len(),
            Capability::FactoryInstalledPots => self.factory_pots,
        }
    }

    fn switch_info(&self, _board: Board, index: usize) -> SwitchInfo {
        match self.switches.get(index) {
            Some(config) => SwitchInfo::new("S?", *config),
            None => SwitchInfo::NONE,
        }
    }
}

/// Two layouts, chosen by board identity
#[derive(Debug, Clone, Copy)]
pub(crate) struct FakePair {
    pub from: (Board, FakeBoards),
    pub to: (Board, FakeBoards),
}

impl FakePair {
    fn layout(&self, board: Board) -> &FakeBoards {
        if board == self.from.0 {
            &self.from.1
        } else {
            &self.to.1
        }
    }
}

impl BoardCapabilities for FakePair {
    fn capability(&self, board: Board, kind: Capability) -> usize {
        self.layout(board).capability(board, kind)
    }

    fn switch_info(&self, board: Board, index: usize) -> SwitchInfo {
        self.layout(board).switch_info(board, index)
    }
}

/// Firmware with a fixed contrast range
#[derive(Debug, Clone, Copy)]
pub(crate) struct FakeFirmware {
    pub min_contrast: i32,
    pub max_contrast: i32,
}

impl FirmwareCapabilities for FakeFirmware {
    fn capability(&self, kind: FirmwareCapability) -> i32 {
        match kind {
            FirmwareCapability::MinContrast => self.min_contrast,
            FirmwareCapability::MaxContrast => self.max_contrast,
        }
    }
}
