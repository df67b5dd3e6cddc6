//! Board identities and family taxonomy
//!
//! Every rule that depends on "what kind of radio is this" goes through
//! [`BoardFamily`]. The family is derived once from a [`Board`] and then
//! passed around as an opaque tag.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A specific transmitter hardware variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Board {
    Sky9x,
    NineXrPro,
    TaranisX9d,
    TaranisX9dPlus,
    TaranisX9dPlus2019,
    TaranisX9e,
    TaranisX9Lite,
    TaranisX7,
    TaranisX7Access,
    TaranisXLite,
    TaranisXLiteS,
    JumperT12,
    RadiomasterTx12,
    RadiomasterT8,
    JumperTLite,
    HorusX10,
    HorusX10Express,
    HorusX12s,
    JumperT16,
    JumperT18,
    RadiomasterTx16s,
    FlyskyNv14,
}

impl Board {
    /// Every known board, in declaration order
    pub const ALL: [Board; 22] = [
        Board::Sky9x,
        Board::NineXrPro,
        Board::TaranisX9d,
        Board::TaranisX9dPlus,
        Board::TaranisX9dPlus2019,
        Board::TaranisX9e,
        Board::TaranisX9Lite,
        Board::TaranisX7,
        Board::TaranisX7Access,
        Board::TaranisXLite,
        Board::TaranisXLiteS,
        Board::JumperT12,
        Board::RadiomasterTx12,
        Board::RadiomasterT8,
        Board::JumperTLite,
        Board::HorusX10,
        Board::HorusX10Express,
        Board::HorusX12s,
        Board::JumperT16,
        Board::JumperT18,
        Board::RadiomasterTx16s,
        Board::FlyskyNv14,
    ];

    /// Family this board belongs to
    pub const fn family(self) -> BoardFamily {
        BoardFamily::of(self)
    }
}

/// Group of boards sharing a physical layout and migration rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoardFamily {
    /// 9x-derived radios with fixed THR/RUD/ELE style switches
    Sky9x,
    /// Taranis X9D, X9D+ and X9D+ 2019
    TaranisX9,
    /// Taranis X9E (four sliders, extra switches)
    TaranisX9e,
    /// Taranis X9 Lite
    TaranisX9Lite,
    /// Taranis X7 and X7 Access (SE and SG absent)
    TaranisX7,
    /// Taranis X-Lite and X-Lite S
    TaranisXLite,
    /// Jumper T12, Radiomaster TX12 and T8
    T12,
    /// Jumper T-Lite (no pots or sliders)
    TLite,
    /// Horus X10 and X10 Express
    HorusX10,
    /// Horus X12S (four sliders)
    HorusX12s,
    /// Jumper T16, T18 and Radiomaster TX16S
    T16,
    /// FlySky NV14
    Nv14,
}

impl BoardFamily {
    /// Classify a board
    pub const fn of(board: Board) -> Self {
        match board {
            Board::Sky9x | Board::NineXrPro => BoardFamily::Sky9x,
            Board::TaranisX9d | Board::TaranisX9dPlus | Board::TaranisX9dPlus2019 => {
                BoardFamily::TaranisX9
            }
            Board::TaranisX9e => BoardFamily::TaranisX9e,
            Board::TaranisX9Lite => BoardFamily::TaranisX9Lite,
            Board::TaranisX7 | Board::TaranisX7Access => BoardFamily::TaranisX7,
            Board::TaranisXLite | Board::TaranisXLiteS => BoardFamily::TaranisXLite,
            Board::JumperT12 | Board::RadiomasterTx12 | Board::RadiomasterT8 => BoardFamily::T12,
            Board::JumperTLite => BoardFamily::TLite,
            Board::HorusX10 | Board::HorusX10Express => BoardFamily::HorusX10,
            Board::HorusX12s => BoardFamily::HorusX12s,
            Board::JumperT16 | Board::JumperT18 | Board::RadiomasterTx16s => BoardFamily::T16,
            Board::FlyskyNv14 => BoardFamily::Nv14,
        }
    }

    /// Monochrome Taranis-class radios, including the small form factors
    pub const fn is_taranis(self) -> bool {
        matches!(
            self,
            BoardFamily::TaranisX9
                | BoardFamily::TaranisX9e
                | BoardFamily::TaranisX9Lite
                | BoardFamily::TaranisX7
                | BoardFamily::TaranisXLite
                | BoardFamily::T12
                | BoardFamily::TLite
        )
    }

    /// Full-size Taranis X9 layout (eight switches SA..SH)
    pub const fn is_taranis_x9(self) -> bool {
        matches!(self, BoardFamily::TaranisX9 | BoardFamily::TaranisX9e)
    }

    /// Compact Taranis-class radios
    pub const fn is_taranis_small(self) -> bool {
        matches!(
            self,
            BoardFamily::TaranisX9Lite
                | BoardFamily::TaranisX7
                | BoardFamily::TaranisXLite
                | BoardFamily::T12
                | BoardFamily::TLite
        )
    }

    pub const fn is_taranis_x7(self) -> bool {
        matches!(self, BoardFamily::TaranisX7)
    }

    /// T12-style layout: SA..SD followed by SF and SH in slots 4 and 5
    ///
    /// The T-Lite only has four switch slots and is kept out of this group.
    pub const fn is_t12(self) -> bool {
        matches!(self, BoardFamily::T12)
    }

    /// Colour-screen Horus-class radios
    pub const fn is_horus_or_t16(self) -> bool {
        matches!(
            self,
            BoardFamily::HorusX10 | BoardFamily::HorusX12s | BoardFamily::T16 | BoardFamily::Nv14
        )
    }

    /// Full eight-switch layout shared by X9 and Horus-class radios
    pub const fn has_full_switch_bank(self) -> bool {
        self.is_taranis_x9() || self.is_horus_or_t16()
    }

    /// Two auxiliary sliders precede the LS/RS sliders
    pub const fn has_wide_slider_bank(self) -> bool {
        matches!(self, BoardFamily::TaranisX9e | BoardFamily::HorusX12s)
    }

    /// LCD contrast is user adjustable and bounded by the firmware
    pub const fn has_adjustable_contrast(self) -> bool {
        self.is_taranis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_classification() {
        assert_eq!(Board::TaranisX9dPlus.family(), BoardFamily::TaranisX9);
        assert_eq!(Board::TaranisX7Access.family(), BoardFamily::TaranisX7);
        assert_eq!(Board::RadiomasterTx16s.family(), BoardFamily::T16);
        assert_eq!(Board::HorusX10Express.family(), BoardFamily::HorusX10);
    }

    #[test]
    fn test_family_predicates_are_consistent() {
        for board in Board::ALL {
            let family = board.family();
            // Small Taranis radios are always Taranis
            if family.is_taranis_small() {
                assert!(family.is_taranis());
                assert!(!family.is_taranis_x9());
            }
            // Nothing is both a Taranis and a colour-screen radio
            assert!(!(family.is_taranis() && family.is_horus_or_t16()));
            if family.has_wide_slider_bank() {
                assert!(family.has_full_switch_bank());
            }
        }
    }

    #[test]
    fn test_sky9x_is_unclassified() {
        let family = Board::NineXrPro.family();
        assert!(!family.is_taranis());
        assert!(!family.is_horus_or_t16());
        assert!(!family.has_adjustable_contrast());
    }
}
