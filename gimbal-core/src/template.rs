//! Stick/channel templates
//!
//! A template is one of the 24 orderings of the four sticks. Template `t`
//! assigns physical stick `CHANNEL_ORDERS[t][c] - 1` to logical channel `c`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{RadioSettings, RawSource, MAX_STICKS};

/// Number of stick orderings
pub const TEMPLATE_COUNT: usize = 24;

/// One-based stick numbers per template and channel
#[rustfmt::skip]
const CHANNEL_ORDERS: [[u8; MAX_STICKS]; TEMPLATE_COUNT] = [
    [1, 2, 3, 4], [1, 2, 4, 3], [1, 3, 2, 4], [1, 3, 4, 2], [1, 4, 2, 3], [1, 4, 3, 2],
    [2, 1, 3, 4], [2, 1, 4, 3], [2, 3, 1, 4], [2, 3, 4, 1], [2, 4, 1, 3], [2, 4, 3, 1],
    [3, 1, 2, 4], [3, 1, 4, 2], [3, 2, 1, 4], [3, 2, 4, 1], [3, 4, 1, 2], [3, 4, 2, 1],
    [4, 1, 2, 3], [4, 1, 3, 2], [4, 2, 1, 3], [4, 2, 3, 1], [4, 3, 1, 2], [4, 3, 2, 1],
];

/// Index of a stick ordering, always below [`TEMPLATE_COUNT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemplateSetup(u8);

impl TemplateSetup {
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < TEMPLATE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Zero-based physical stick for logical `channel`
    pub fn stick_for(self, channel: usize) -> Option<usize> {
        let order = CHANNEL_ORDERS.get(self.0 as usize)?;
        order.get(channel).map(|stick| usize::from(*stick) - 1)
    }

    /// Logical channel fed by physical `stick`
    pub fn channel_for(self, stick: usize) -> Option<usize> {
        (0..MAX_STICKS).find(|&channel| self.stick_for(channel) == Some(stick))
    }

    /// Every template, in table order
    pub fn all() -> impl Iterator<Item = TemplateSetup> {
        (0..TEMPLATE_COUNT as u8).map(TemplateSetup)
    }
}

impl RadioSettings {
    /// Physical stick assigned to logical `channel` by the current template
    ///
    /// `None` for channels beyond the four sticks.
    pub fn default_stick(&self, channel: usize) -> Option<usize> {
        self.template_setup.stick_for(channel)
    }

    /// Source feeding logical `channel` in a new model
    pub fn default_source(&self, channel: usize) -> RawSource {
        match self.default_stick(channel) {
            Some(stick) => RawSource::Stick(stick as u8),
            None => RawSource::None,
        }
    }

    /// Logical channel fed by physical `stick`
    pub fn default_channel(&self, stick: usize) -> Option<usize> {
        self.template_setup.channel_for(stick)
    }
}
