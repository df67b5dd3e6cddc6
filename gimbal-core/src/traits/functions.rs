//! Per-function conversion hook

use crate::config::CustomFunction;
use crate::convert::ConversionState;

/// Converts one special-function binding between boards
///
/// Called exactly once per function, in list order, after the hardware
/// layout of the settings has been migrated. `state.component_index`
/// holds the position of the function in the list.
pub trait FunctionConverter {
    fn convert_function(&mut self, function: &mut CustomFunction, state: &ConversionState);
}

/// Leaves every function untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepFunctions;

impl FunctionConverter for KeepFunctions {
    fn convert_function(&mut self, _function: &mut CustomFunction, _state: &ConversionState) {}
}

impl<F> FunctionConverter for F
where
    F: FnMut(&mut CustomFunction, &ConversionState),
{
    fn convert_function(&mut self, function: &mut CustomFunction, state: &ConversionState) {
        self(function, state)
    }
}
