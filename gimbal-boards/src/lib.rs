//! Board and firmware capability database
//!
//! Concrete implementations of the capability traits defined in
//! gimbal-core:
//!
//! - [`BoardCatalog`]: pot, slider and switch layout of every known board
//! - [`FirmwareProfile`]: limits of the firmware built for a board

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod firmware;

pub use catalog::{BoardCatalog, BoardLayout};
pub use firmware::FirmwareProfile;
