//! Label relocation rules
//!
//! When a profile moves to a board with a different switch or slider
//! layout, user labels follow the physical control they were given to.
//! Each rule is gated on the source and destination family and copies
//! labels slot by slot, in table order. A later move sees the result of
//! an earlier one.

use heapless::Vec;

use crate::board::BoardFamily;
use crate::config::{LabelBank, RadioSettings};

/// Relocations a single conversion can record
pub const MAX_RELOCATIONS: usize = 8;

/// One label copied from slot `from` to slot `to` of `bank`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelMove {
    pub bank: LabelBank,
    pub from: usize,
    pub to: usize,
}

/// Family-gated label relocation
#[derive(Debug, Clone, Copy)]
pub struct RemapRule {
    pub name: &'static str,
    /// Gate on the family being converted from
    pub source: fn(BoardFamily) -> bool,
    /// Gate on the family being converted to
    pub destination: fn(BoardFamily) -> bool,
    pub bank: LabelBank,
    /// `(from, to)` slot pairs, applied in order
    pub moves: &'static [(usize, usize)],
}

// X7 and T12 have no SE/SG: SF and SH sit in slots 4 and 5
const DROP_SE_SG: &[(usize, usize)] = &[(5, 4), (7, 5)];
const RESTORE_SE_SG: &[(usize, usize)] = &[(4, 5), (5, 7)];

// Two aux sliders come before LS/RS on the wide bank
const TO_WIDE_SLIDERS: &[(usize, usize)] = &[(2, 0), (3, 1)];
const FROM_WIDE_SLIDERS: &[(usize, usize)] = &[(0, 2), (1, 3)];

fn narrow_slider_bank(family: BoardFamily) -> bool {
    !family.has_wide_slider_bank()
}

/// Every relocation rule, in application order
pub static LABEL_REMAP_RULES: [RemapRule; 6] = [
    RemapRule {
        name: "full switch bank to X7",
        source: BoardFamily::has_full_switch_bank,
        destination: BoardFamily::is_taranis_x7,
        bank: LabelBank::Switch,
        moves: DROP_SE_SG,
    },
    RemapRule {
        name: "X7 to full switch bank",
        source: BoardFamily::is_taranis_x7,
        destination: BoardFamily::has_full_switch_bank,
        bank: LabelBank::Switch,
        moves: RESTORE_SE_SG,
    },
    RemapRule {
        name: "full switch bank to T12",
        source: BoardFamily::has_full_switch_bank,
        destination: BoardFamily::is_t12,
        bank: LabelBank::Switch,
        moves: DROP_SE_SG,
    },
    RemapRule {
        name: "T12 to full switch bank",
        source: BoardFamily::is_t12,
        destination: BoardFamily::has_full_switch_bank,
        bank: LabelBank::Switch,
        moves: RESTORE_SE_SG,
    },
    RemapRule {
        name: "to wide slider bank",
        source: narrow_slider_bank,
        destination: BoardFamily::has_wide_slider_bank,
        bank: LabelBank::Slider,
        moves: TO_WIDE_SLIDERS,
    },
    RemapRule {
        name: "from wide slider bank",
        source: BoardFamily::has_wide_slider_bank,
        destination: narrow_slider_bank,
        bank: LabelBank::Slider,
        moves: FROM_WIDE_SLIDERS,
    },
];

impl RemapRule {
    /// Check if this rule fires for a conversion between two families
    pub fn matches(&self, from: BoardFamily, to: BoardFamily) -> bool {
        (self.source)(from) && (self.destination)(to)
    }

    /// Copy the labels of this rule, recording each move
    ///
    /// Moves naming a slot outside the bank are skipped.
    pub fn apply(
        &self,
        settings: &mut RadioSettings,
        relocated: &mut Vec<LabelMove, MAX_RELOCATIONS>,
    ) {
        for &(from, to) in self.moves {
            if copy_label(settings, self.bank, from, to) {
                let _ = relocated.push(LabelMove {
                    bank: self.bank,
                    from,
                    to,
                });
            }
        }
    }
}

/// Copy the label in slot `from` over slot `to`
pub(crate) fn copy_label(
    settings: &mut RadioSettings,
    bank: LabelBank,
    from: usize,
    to: usize,
) -> bool {
    let labels = settings.labels_mut(bank);
    let Some(label) = labels.get(from).cloned() else {
        return false;
    };
    match labels.get_mut(to) {
        Some(slot) => {
            *slot = label;
            true
        }
        None => false,
    }
}

/// Apply every matching rule in table order
pub fn apply_label_rules(
    settings: &mut RadioSettings,
    from: BoardFamily,
    to: BoardFamily,
    relocated: &mut Vec<LabelMove, MAX_RELOCATIONS>,
) {
    for rule in LABEL_REMAP_RULES.iter().filter(|rule| rule.matches(from, to)) {
        trace!("label rule: {}", rule.name);
        rule.apply(settings, relocated);
    }
}
