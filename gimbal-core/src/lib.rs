//! Board-agnostic radio settings core
//!
//! This crate holds the hardware-dependent global settings of a
//! multi-variant RC transmitter and everything needed to keep them valid
//! when the hardware changes:
//!
//! - Board identities and the board family taxonomy
//! - Stick/channel template table
//! - Factory default synthesis (switch, pot and slider types)
//! - Legacy profile import (hex-encoded calibration and settings)
//! - Switch, pot and slider legality queries
//! - Cross-board conversion of an existing settings value
//!
//! Board capabilities and per-function conversion are supplied by the
//! caller through the traits in [`traits`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod board;
pub mod config;
pub mod convert;
pub mod legacy;
pub mod template;
pub mod traits;
pub mod validate;

pub use board::{Board, BoardFamily};
pub use config::RadioSettings;
pub use convert::{ConversionReport, ConversionState};
pub use legacy::{ImportReport, StoredProfile};
