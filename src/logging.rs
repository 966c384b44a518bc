//! `tracing` setup for the browser.
//!
//! Events are formatted by `tracing_subscriber::fmt` and each finished line
//! is handed to `console.log`.

use std::io;

use tracing_subscriber::EnvFilter;

/// Buffers one formatted event and flushes it to the console on drop.
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn take_line(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();
        Some(line)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            web_sys::console::log_1(&line.into());
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

/// Install the global subscriber. Invalid directives fall back to "info".
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleWriter::default)
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&format!("Logging already initialized: {}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_writer_buffers_until_flush() {
        let mut writer = ConsoleWriter::default();
        writer.write_all(b" INFO mediplant: image accepted\n").unwrap();
        assert_eq!(writer.take_line().as_deref(), Some(" INFO mediplant: image accepted"));
        assert_eq!(writer.take_line(), None);
    }
}
