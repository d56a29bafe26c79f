/// Failure reported by a [`TaskDelay`](crate::delay::TaskDelay) implementation.
///
/// [`ExecutorDelay`](crate::delay::ExecutorDelay) only produces `InvalidParameter`;
/// the other variants are for back ends whose wait can be refused or cut short
/// (an RTOS delay call, a timeout-bounded wait).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DelayError {
    /// The requested duration is not accepted by the executor (zero ticks).
    InvalidParameter,
    /// No time driver / kernel context to suspend in.
    KernelUnavailable,
    /// The wait ended before the requested duration elapsed.
    Interrupted,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    Configure,
    Write,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    Format,
    Write,
}

impl From<core::fmt::Error> for SinkError {
    fn from(_: core::fmt::Error) -> Self {
        SinkError::Format
    }
}

/// Error that ends (or, under [`ErrorPolicy::Skip`](crate::config::ErrorPolicy), is counted by) the blink task.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BlinkError {
    Delay(DelayError),
    Pin(PinError),
}

#[cfg(feature = "defmt")]
impl defmt::Format for BlinkError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            BlinkError::Delay(e) => defmt::write!(f, "Delay({:?})", e),
            BlinkError::Pin(e) => defmt::write!(f, "Pin({:?})", e),
        }
    }
}

impl From<DelayError> for BlinkError {
    fn from(err: DelayError) -> Self {
        BlinkError::Delay(err)
    }
}

impl From<PinError> for BlinkError {
    fn from(err: PinError) -> Self {
        BlinkError::Pin(err)
    }
}
