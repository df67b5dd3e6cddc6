//! Settings type definitions
//!
//! Enumerations and small records stored in [`RadioSettings`](super::RadioSettings).

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum gimbal axes
pub const MAX_STICKS: usize = 4;

/// Maximum pot slots on any board
pub const MAX_POTS: usize = 8;

/// Maximum slider slots on any board
pub const MAX_SLIDERS: usize = 4;

/// Mouse/joystick analogs carried after sticks, pots and sliders
pub const MAX_MOUSE_ANALOGS: usize = 2;

/// Maximum calibrated analog inputs
pub const MAX_ANALOGS: usize = MAX_STICKS + MAX_POTS + MAX_SLIDERS + MAX_MOUSE_ANALOGS;

/// Maximum switch slots on any board
pub const MAX_SWITCHES: usize = 32;

/// Global special functions per profile
pub const MAX_CUSTOM_FUNCTIONS: usize = 64;

/// Trainer input mixes
pub const MAX_TRAINER_MIXES: usize = 4;

/// Length of a user-assigned hardware label
pub const HARDWARE_NAME_LEN: usize = 3;

/// Length of the bluetooth device name
pub const BLUETOOTH_NAME_LEN: usize = 10;

/// User label for a switch, pot or slider
pub type HardwareName = String<HARDWARE_NAME_LEN>;

/// Physical switch type fitted in a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SwitchConfig {
    #[default]
    NotAvailable,
    TwoPos,
    ThreePos,
}

/// Physical type of a pot or slider slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PotConfig {
    #[default]
    None,
    WithDetent,
    WithoutDetent,
    MultiposSwitch,
}

/// Sliders share the pot type set
pub type SliderConfig = PotConfig;

/// Physical-to-logical stick layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StickMode {
    #[default]
    Mode1,
    Mode2,
    Mode3,
    Mode4,
}

impl StickMode {
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(StickMode::Mode1),
            1 => Some(StickMode::Mode2),
            2 => Some(StickMode::Mode3),
            3 => Some(StickMode::Mode4),
            _ => None,
        }
    }
}

/// Beeper and haptic verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BeeperMode {
    Quiet,
    AlarmsOnly,
    #[default]
    NoKeys,
    All,
}

impl BeeperMode {
    /// Decode the signed on-radio encoding (-2..=1)
    pub const fn from_raw(value: i8) -> Option<Self> {
        match value {
            -2 => Some(BeeperMode::Quiet),
            -1 => Some(BeeperMode::AlarmsOnly),
            0 => Some(BeeperMode::NoKeys),
            1 => Some(BeeperMode::All),
            _ => None,
        }
    }

    pub const fn to_raw(self) -> i8 {
        match self {
            BeeperMode::Quiet => -2,
            BeeperMode::AlarmsOnly => -1,
            BeeperMode::NoKeys => 0,
            BeeperMode::All => 1,
        }
    }
}

/// What wakes the backlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BacklightMode {
    #[default]
    Off,
    Keys,
    Sticks,
    KeysAndSticks,
    On,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AntennaMode {
    Internal,
    Ask,
    #[default]
    PerModel,
    /// Internal + external on the X12S
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BluetoothMode {
    #[default]
    Off,
    /// Telemetry, shown as "Enabled" on the X9E
    Telemetry,
    Trainer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AuxSerialMode {
    #[default]
    Off,
    TelemetryMirror,
    TelemetryIn,
    SbusTrainer,
    Lua,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TelemetryBaudrate {
    #[default]
    Baud400000,
    Baud115200,
}

impl TelemetryBaudrate {
    pub const fn bits_per_second(self) -> u32 {
        match self {
            TelemetryBaudrate::Baud400000 => 400_000,
            TelemetryBaudrate::Baud115200 => 115_200,
        }
    }
}

/// How a trainer channel is combined with the local stick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrainerMixMode {
    #[default]
    Off,
    /// Added to the local input
    Add,
    /// Replaces the local input
    Replace,
}

/// One trainer input mix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainerMix {
    pub mode: TrainerMixMode,
    /// Trainer channel index
    pub src: u8,
    /// Weight in percent, see [`FieldRange::trainer_weight`](super::FieldRange::trainer_weight)
    pub weight: i16,
}

/// Trainer port configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainerSettings {
    pub mix: [TrainerMix; MAX_TRAINER_MIXES],
    /// Center offsets of the incoming trainer channels
    pub calib: [i16; MAX_TRAINER_MIXES],
}

/// Source a logical input reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RawSource {
    #[default]
    None,
    /// Physical stick index
    Stick(u8),
}

/// Global special-function binding
///
/// The core only stores these and hands each one to a
/// [`FunctionConverter`](crate::traits::FunctionConverter) on migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomFunction {
    /// Signed switch position index (0 = always on)
    pub switch: i16,
    /// Function identifier
    pub function: u8,
    /// Function parameter
    pub param: i32,
    /// Repeat interval, -1 = on change only
    pub repeat: i8,
    pub enabled: bool,
}
