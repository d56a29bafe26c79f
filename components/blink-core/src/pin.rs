use embedded_hal::digital::OutputPin;

use crate::error::PinError;

/// An unconfigured GPIO line that can be turned into a digital output.
///
/// Configuration consumes `self`, so a line is configured at most once.
pub trait OutputConfig {
    type Pin: OutputPin;

    fn configure_output(self) -> Result<Self::Pin, PinError>;
}
