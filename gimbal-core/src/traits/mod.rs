//! Collaborator traits
//!
//! These traits define the interface between the settings core and the
//! services it consumes: the board capability database, the firmware
//! capability query and the per-function converter.

pub mod capabilities;
pub mod functions;

pub use capabilities::{
    BoardCapabilities, Capability, FirmwareCapabilities, FirmwareCapability, SwitchInfo,
};
pub use functions::{FunctionConverter, KeepFunctions};
