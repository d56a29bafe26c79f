#![no_std]
#![no_main]

use blink_core::{
    blink::BlinkTask,
    config::{BANNER, BlinkConfig},
    delay::ExecutorDelay,
    diag::{LogSink, SerialSink},
    error::PinError,
    pin::OutputConfig,
};
use defmt::*;
use embassy_executor::Spawner;
use embassy_nrf::{
    Peri, bind_interrupts,
    buffered_uarte::{self, BufferedUarte},
    gpio::{Level, Output, OutputDrive},
    peripherals, uarte,
};
use embassy_time::Timer;
use embedded_hal::digital::PinState;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    UARTE0 => buffered_uarte::InterruptHandler<peripherals::UARTE0>;
});

struct LedPin<'d> {
    pin: Peri<'d, peripherals::P1_12>,
    initial: PinState,
}

impl<'d> OutputConfig for LedPin<'d> {
    type Pin = Output<'d>;

    fn configure_output(self) -> Result<Output<'d>, PinError> {
        let initial = match self.initial {
            PinState::High => Level::High,
            PinState::Low => Level::Low,
        };
        Ok(Output::new(self.pin, initial, OutputDrive::Standard))
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    let config = BlinkConfig::from_build();
    info!("{}", BANNER);

    let led = LedPin {
        pin: p.P1_12,
        initial: config.inactive_level(),
    };

    let mut uart_config = uarte::Config::default();
    uart_config.parity = uarte::Parity::EXCLUDED;
    uart_config.baudrate = uarte::Baudrate::BAUD115200;
    let mut uart_tx_buffer = [0u8; 256];
    let mut uart_rx_buffer = [0u8; 64];
    let uart = BufferedUarte::new(
        p.UARTE0,
        p.TIMER0,
        p.PPI_CH0,
        p.PPI_CH1,
        p.PPI_GROUP0,
        p.P0_08,
        p.P0_06,
        Irqs,
        uart_config,
        &mut uart_rx_buffer,
        &mut uart_tx_buffer,
    );

    let sink = (LogSink, SerialSink::new(uart));
    let task = BlinkTask::new(led, ExecutorDelay, sink, config);

    match task.run().await {
        Ok(never) => match never {},
        Err(e) => error!("blink task stopped: {:?}", e),
    }

    loop {
        Timer::after_secs(60).await;
    }
}
