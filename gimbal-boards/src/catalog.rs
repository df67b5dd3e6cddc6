//! Board capability catalog
//!
//! Static layout of every supported board: analog counts and the factory
//! switch bank. Boards sharing a layout share one table entry.

use gimbal_core::config::{SwitchConfig, MAX_STICKS};
use gimbal_core::traits::{BoardCapabilities, Capability, SwitchInfo};
use gimbal_core::Board;

use SwitchConfig::{ThreePos, TwoPos};

/// Physical control layout of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardLayout {
    /// Pot slots, including optional ones
    pub pots: usize,
    /// Pots fitted at the factory
    pub factory_pots: usize,
    pub sliders: usize,
    /// Factory switch bank, slot order
    pub switches: &'static [SwitchInfo],
}

const fn sw(name: &'static str, config: SwitchConfig) -> SwitchInfo {
    SwitchInfo::new(name, config)
}

const SKY9X_SWITCHES: &[SwitchInfo] = &[
    sw("THR", TwoPos),
    sw("RUD", TwoPos),
    sw("ELE", TwoPos),
    sw("ID", ThreePos),
    sw("AIL", TwoPos),
    sw("GEA", TwoPos),
    sw("TRN", TwoPos),
];

// SA..SH, shared by X9D and the Horus-class radios
const X9D_SWITCHES: &[SwitchInfo] = &[
    sw("SA", ThreePos),
    sw("SB", ThreePos),
    sw("SC", ThreePos),
    sw("SD", ThreePos),
    sw("SE", ThreePos),
    sw("SF", TwoPos),
    sw("SG", ThreePos),
    sw("SH", TwoPos),
];

const X9E_SWITCHES: &[SwitchInfo] = &[
    sw("SA", ThreePos),
    sw("SB", ThreePos),
    sw("SC", ThreePos),
    sw("SD", ThreePos),
    sw("SE", ThreePos),
    sw("SF", TwoPos),
    sw("SG", ThreePos),
    sw("SH", TwoPos),
    sw("SI", ThreePos),
    sw("SJ", ThreePos),
    sw("SK", ThreePos),
    sw("SL", ThreePos),
    sw("SM", ThreePos),
    sw("SN", ThreePos),
    sw("SO", ThreePos),
    sw("SP", ThreePos),
    sw("SQ", ThreePos),
    sw("SR", ThreePos),
];

const X9LITE_SWITCHES: &[SwitchInfo] = &[
    sw("SA", ThreePos),
    sw("SB", ThreePos),
    sw("SC", ThreePos),
    sw("SD", TwoPos),
    sw("SE", TwoPos),
];

// No SE/SG: SF and SH move down to slots 4 and 5
const X7_SWITCHES: &[SwitchInfo] = &[
    sw("SA", ThreePos),
    sw("SB", ThreePos),
    sw("SC", ThreePos),
    sw("SD", ThreePos),
    sw("SF", TwoPos),
    sw("SH", TwoPos),
];

const XLITE_SWITCHES: &[SwitchInfo] = &[
    sw("SA", ThreePos),
    sw("SB", ThreePos),
    sw("SC", TwoPos),
    sw("SD", TwoPos),
];

const XLITES_SWITCHES: &[SwitchInfo] = &[
    sw("SA", ThreePos),
    sw("SB", ThreePos),
    sw("SC", TwoPos),
    sw("SD", TwoPos),
    sw("SE", TwoPos),
    sw("SF", TwoPos),
];

const T12_SWITCHES: &[SwitchInfo] = &[
    sw("SA", ThreePos),
    sw("SB", ThreePos),
    sw("SC", ThreePos),
    sw("SD", ThreePos),
    sw("SG", TwoPos),
    sw("SH", TwoPos),
];

const TX12_SWITCHES: &[SwitchInfo] = &[
    sw("SA", TwoPos),
    sw("SB", ThreePos),
    sw("SC", ThreePos),
    sw("SD", TwoPos),
    sw("SE", TwoPos),
    sw("SF", TwoPos),
];

const T8_SWITCHES: &[SwitchInfo] = &[
    sw("SA", TwoPos),
    sw("SB", ThreePos),
    sw("SC", ThreePos),
    sw("SD", TwoPos),
];

const TLITE_SWITCHES: &[SwitchInfo] = &[
    sw("SA", ThreePos),
    sw("SB", ThreePos),
    sw("SC", TwoPos),
    sw("SD", TwoPos),
];

const NV14_SWITCHES: &[SwitchInfo] = &[
    sw("SA", TwoPos),
    sw("SB", ThreePos),
    sw("SC", ThreePos),
    sw("SD", TwoPos),
    sw("SE", ThreePos),
    sw("SF", TwoPos),
    sw("SG", ThreePos),
    sw("SH", TwoPos),
];

const fn layout(
    pots: usize,
    factory_pots: usize,
    sliders: usize,
    switches: &'static [SwitchInfo],
) -> BoardLayout {
    BoardLayout {
        pots,
        factory_pots,
        sliders,
        switches,
    }
}

impl BoardLayout {
    /// Layout of `board`
    pub const fn of(board: Board) -> Self {
        match board {
            Board::Sky9x | Board::NineXrPro => layout(3, 3, 0, SKY9X_SWITCHES),
            // S3 is an optional extra
            Board::TaranisX9d | Board::TaranisX9dPlus | Board::TaranisX9dPlus2019 => {
                layout(3, 2, 2, X9D_SWITCHES)
            }
            Board::TaranisX9e => layout(4, 2, 4, X9E_SWITCHES),
            Board::TaranisX9Lite => layout(1, 1, 0, X9LITE_SWITCHES),
            Board::TaranisX7 | Board::TaranisX7Access => layout(2, 2, 0, X7_SWITCHES),
            Board::TaranisXLite => layout(2, 2, 0, XLITE_SWITCHES),
            Board::TaranisXLiteS => layout(2, 2, 0, XLITES_SWITCHES),
            Board::JumperT12 => layout(2, 2, 0, T12_SWITCHES),
            Board::RadiomasterTx12 => layout(2, 2, 0, TX12_SWITCHES),
            Board::RadiomasterT8 => layout(0, 0, 0, T8_SWITCHES),
            Board::JumperTLite => layout(0, 0, 0, TLITE_SWITCHES),
            // S1, 6POS, S2 plus two optional external pots
            Board::HorusX10 | Board::HorusX10Express => layout(5, 3, 2, X9D_SWITCHES),
            Board::HorusX12s => layout(3, 3, 4, X9D_SWITCHES),
            Board::JumperT16 | Board::JumperT18 | Board::RadiomasterTx16s => {
                layout(5, 3, 2, X9D_SWITCHES)
            }
            Board::FlyskyNv14 => layout(2, 2, 0, NV14_SWITCHES),
        }
    }
}

/// Capability database covering every [`Board`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardCatalog;

impl BoardCapabilities for BoardCatalog {
    fn capability(&self, board: Board, kind: Capability) -> usize {
        let layout = BoardLayout::of(board);
        match kind {
            Capability::Sticks => MAX_STICKS,
            Capability::Pots => layout.pots,
            Capability::Sliders => layout.sliders,
            Capability::FactoryInstalledSwitches => layout.switches.len(),
            Capability::FactoryInstalledPots => layout.factory_pots,
        }
    }

    fn switch_info(&self, board: Board, index: usize) -> SwitchInfo {
        BoardLayout::of(board)
            .switches
            .get(index)
            .copied()
            .unwrap_or(SwitchInfo::NONE)
    }
}
