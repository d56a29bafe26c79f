use embassy_time::Duration;
use embedded_hal::digital::PinState;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/consts.rs"));
}

pub use generated::{BLINK_ACTIVE_LOW, BLINK_HALT_ON_ERROR, BLINK_INTERVAL_MS, BLINK_PIN};

pub const DEFAULT_PIN: u8 = 13;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);
/// Shortest interval the task accepts; a zero wait would never suspend.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);
pub const MAX_INTERVAL_MS: u64 = 24 * 60 * 60 * 1000;

const _: () = assert!(
    BLINK_INTERVAL_MS >= 1 && BLINK_INTERVAL_MS <= MAX_INTERVAL_MS,
    "BLINK_INTERVAL_MS out of range"
);

pub const BANNER: &str = const_format::formatcp!(
    "blink: pin {} every {} ms (active {}, {} on error)",
    BLINK_PIN,
    BLINK_INTERVAL_MS,
    if BLINK_ACTIVE_LOW { "low" } else { "high" },
    if BLINK_HALT_ON_ERROR { "halt" } else { "skip" },
);

/// What the blink loop does when a delay or pin write fails.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorPolicy {
    /// Log, count the failure and carry on with the cycle.
    #[default]
    Skip,
    /// Log and return the error from the task.
    Halt,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    pub pin: u8,
    pub interval: Duration,
    pub active_level: PinState,
    pub policy: ErrorPolicy,
}

impl BlinkConfig {
    /// Configuration baked in by `build.rs` from the `BLINK_*` environment variables.
    pub const fn from_build() -> Self {
        BlinkConfig {
            pin: BLINK_PIN,
            interval: Duration::from_millis(BLINK_INTERVAL_MS),
            active_level: if BLINK_ACTIVE_LOW { PinState::Low } else { PinState::High },
            policy: if BLINK_HALT_ON_ERROR { ErrorPolicy::Halt } else { ErrorPolicy::Skip },
        }
    }

    /// Sets the half-cycle interval, raised to [`MIN_INTERVAL`] if shorter.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = clamp_interval(interval);
        self
    }

    pub fn with_active_level(mut self, active_level: PinState) -> Self {
        self.active_level = active_level;
        self
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn inactive_level(&self) -> PinState {
        !self.active_level
    }
}

pub(crate) fn clamp_interval(interval: Duration) -> Duration {
    if interval < MIN_INTERVAL {
        warn!("Blink> interval of {} ticks raised to {} ms", interval.as_ticks(), MIN_INTERVAL.as_millis());
        MIN_INTERVAL
    } else {
        interval
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        BlinkConfig {
            pin: DEFAULT_PIN,
            interval: DEFAULT_INTERVAL,
            active_level: PinState::High,
            policy: ErrorPolicy::Skip,
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BlinkConfig::default();
        assert_eq!(config.pin, 13);
        assert_eq!(config.interval, Duration::from_millis(3000));
        assert_eq!(config.active_level, PinState::High);
        assert_eq!(config.inactive_level(), PinState::Low);
        assert_eq!(config.policy, ErrorPolicy::Skip);
    }

    #[test]
    fn active_low_inverts_inactive_level() {
        let config = BlinkConfig::default().with_active_level(PinState::Low);
        assert_eq!(config.inactive_level(), PinState::High);
    }

    #[test]
    fn from_build_follows_generated_consts() {
        let config = BlinkConfig::from_build();
        assert_eq!(config.pin, BLINK_PIN);
        assert_eq!(config.interval.as_millis(), BLINK_INTERVAL_MS);
        assert_eq!(config.active_level == PinState::Low, BLINK_ACTIVE_LOW);
        assert_eq!(config.policy == ErrorPolicy::Halt, BLINK_HALT_ON_ERROR);
    }

    #[test]
    fn from_build_interval_is_never_zero() {
        let interval = BlinkConfig::from_build().interval;
        assert!(interval >= MIN_INTERVAL);
        assert!(interval.as_millis() <= MAX_INTERVAL_MS);
    }

    #[test]
    fn zero_interval_is_raised_to_minimum() {
        let config = BlinkConfig::default().with_interval(Duration::from_ticks(0));
        assert_eq!(config.interval, MIN_INTERVAL);
        let config = BlinkConfig::default().with_interval(Duration::from_millis(5));
        assert_eq!(config.interval, Duration::from_millis(5));
    }

    #[test]
    fn banner_names_pin_and_interval() {
        assert!(BANNER.contains(&std::format!("pin {}", BLINK_PIN)));
        assert!(BANNER.contains(&std::format!("every {} ms", BLINK_INTERVAL_MS)));
    }
}
