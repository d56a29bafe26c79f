use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

use crate::{
    config::{BlinkConfig, ErrorPolicy, clamp_interval},
    delay::TaskDelay,
    diag::DiagnosticSink,
    error::{BlinkError, PinError},
    pin::OutputConfig,
};

/// The blink task before its pin has been configured.
pub struct BlinkTask<C: OutputConfig, D: TaskDelay, S: DiagnosticSink> {
    output: C,
    delay: D,
    sink: S,
    config: BlinkConfig,
}

impl<C: OutputConfig, D: TaskDelay, S: DiagnosticSink> BlinkTask<C, D, S> {
    pub fn new(output: C, delay: D, sink: S, mut config: BlinkConfig) -> Self {
        config.interval = clamp_interval(config.interval);
        BlinkTask {
            output,
            delay,
            sink,
            config,
        }
    }

    /// Configures the output pin and hands over the running state.
    pub fn start(self) -> Result<Blinker<C::Pin, D, S>, BlinkError> {
        info!("Blink> configuring pin {} as output", self.config.pin);
        let pin = self.output.configure_output().inspect_err(|e| error!("Blink> pin {} configuration failed: {:?}", self.config.pin, e))?;
        Ok(Blinker {
            pin,
            delay: self.delay,
            sink: self.sink,
            config: self.config,
            counter: 0,
            failures: 0,
        })
    }

    /// Configures the pin and blinks forever; returns only when [`ErrorPolicy::Halt`] stops the loop.
    pub async fn run(self) -> Result<Infallible, BlinkError> {
        self.start()?.run().await
    }
}

pub struct Blinker<P: OutputPin, D: TaskDelay, S: DiagnosticSink> {
    pin: P,
    delay: D,
    sink: S,
    config: BlinkConfig,
    counter: u32,
    failures: u32,
}

impl<P: OutputPin, D: TaskDelay, S: DiagnosticSink> Blinker<P, D, S> {
    pub async fn run(mut self) -> Result<Infallible, BlinkError> {
        loop {
            self.cycle_once().await?;
        }
    }

    /// One on/off period followed by the counter report. Returns the value reported.
    pub async fn cycle_once(&mut self) -> Result<u32, BlinkError> {
        self.set_level(self.config.active_level)?;
        self.sleep().await?;
        self.set_level(self.config.inactive_level())?;
        self.sleep().await?;

        let counter = self.counter;
        if let Err(e) = self.sink.emit(counter).await {
            warn!("Blink> diagnostic output of {} failed: {:?}", counter, e);
        }
        self.counter = self.counter.wrapping_add(1);
        Ok(counter)
    }

    /// Value the next cycle reports.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Errors swallowed so far under [`ErrorPolicy::Skip`].
    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn pin_id(&self) -> u8 {
        self.config.pin
    }

    fn set_level(&mut self, level: PinState) -> Result<(), BlinkError> {
        trace!("Blink> pin {} => {:?}", self.config.pin, level);
        let result = self.pin.set_state(level).map_err(|_| BlinkError::Pin(PinError::Write));
        self.apply_policy(result)
    }

    async fn sleep(&mut self) -> Result<(), BlinkError> {
        let result = self.delay.delay(self.config.interval).await.map_err(BlinkError::from);
        self.apply_policy(result)
    }

    fn apply_policy(&mut self, result: Result<(), BlinkError>) -> Result<(), BlinkError> {
        let Err(e) = result else {
            return Ok(());
        };
        match self.config.policy {
            ErrorPolicy::Skip => {
                self.failures = self.failures.wrapping_add(1);
                warn!("Blink> {:?} skipped ({} failures so far)", e, self.failures);
                Ok(())
            }
            ErrorPolicy::Halt => {
                error!("Blink> {:?} => halting after {} cycles", e, self.counter);
                Err(e)
            }
        }
    }

    #[cfg(test)]
    fn set_counter(&mut self, counter: u32) {
        self.counter = counter;
    }
}
