use core::fmt::Write as _;

use embedded_io_async::Write;
use heapless::String;

use crate::error::SinkError;

const LINE_SIZE: usize = 24;

/// Text channel the blink counter is reported on.
pub trait DiagnosticSink {
    async fn emit(&mut self, counter: u32) -> Result<(), SinkError>;
}

/// Reports through the logging backend (defmt on target).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    async fn emit(&mut self, counter: u32) -> Result<(), SinkError> {
        info!("Hello : {}", counter);
        Ok(())
    }
}

/// Writes `Hello : <counter>\n` to a byte stream, typically a UART.
pub struct SerialSink<W: Write> {
    writer: W,
}

impl<W: Write> SerialSink<W> {
    pub fn new(writer: W) -> Self {
        SerialSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for SerialSink<W> {
    async fn emit(&mut self, counter: u32) -> Result<(), SinkError> {
        let mut line = String::<LINE_SIZE>::new();
        writeln!(line, "Hello : {}", counter)?;
        self.writer.write_all(line.as_bytes()).await.map_err(|_| SinkError::Write)?;
        self.writer.flush().await.map_err(|_| SinkError::Write)
    }
}

/// Emits to both sinks; the second one is still tried when the first fails.
impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for (A, B) {
    async fn emit(&mut self, counter: u32) -> Result<(), SinkError> {
        let first = self.0.emit(counter).await;
        let second = self.1.emit(counter).await;
        first.and(second)
    }
}
