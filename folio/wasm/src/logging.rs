//! `tracing` output routed to the browser console.
//!
//! Each formatted event is buffered and handed to the console method that
//! matches its level, so the devtools level filter keeps working.

use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install the global subscriber. A second call is a no-op.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_env_filter(filter)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
    Log,
}

impl ConsoleMethod {
    pub(crate) fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            Level::DEBUG => ConsoleMethod::Debug,
            _ => ConsoleMethod::Log,
        }
    }

    fn emit(self, line: &str) {
        let msg = JsValue::from_str(line);
        match self {
            ConsoleMethod::Error => web_sys::console::error_1(&msg),
            ConsoleMethod::Warn => web_sys::console::warn_1(&msg),
            ConsoleMethod::Info => web_sys::console::info_1(&msg),
            ConsoleMethod::Debug => web_sys::console::debug_1(&msg),
            ConsoleMethod::Log => web_sys::console::log_1(&msg),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one event; the line is emitted on drop.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            method: ConsoleMethod::for_level(level),
            buf: Vec::new(),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        self.method.emit(line.trim_end());
    }
}
