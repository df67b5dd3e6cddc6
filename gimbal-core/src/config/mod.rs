//! Radio settings types
//!
//! Board-dependent global settings of one radio profile, plus the factory
//! defaults they are built from.

pub mod calibration;
pub mod defaults;
pub mod ranges;
pub mod settings;
pub mod types;

pub use calibration::*;
pub use defaults::*;
pub use ranges::*;
pub use settings::*;
pub use types::*;

#[cfg(test)]
pub(crate) mod test_support;
