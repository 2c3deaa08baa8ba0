use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::SecondsFormat;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

use crate::errors::file_operation_error;

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warning,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug, info, warning, and error messages
    Debug,
    /// Trace, debug, info, warning, and error messages
    Trace,
}

impl LogLevel {
    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Get the verbosity level from the number of occurrences of a flag
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Info,  // Default
            1 => LogLevel::Debug, // -v
            _ => LogLevel::Trace, // -vv or more
        }
    }
}

/// In-memory accumulator for trace lines
///
/// Every record routed to the trace chain of the logger ends up here, already
/// formatted. Nothing touches the disk until the owning [`TraceGuard`] flushes.
#[derive(Debug, Clone, Default)]
pub struct TraceBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl TraceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line to the buffer
    pub fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }

    /// Snapshot of the buffered lines
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn take(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|mut lines| std::mem::take(&mut *lines))
            .unwrap_or_default()
    }
}

/// Scoped owner of the trace file
///
/// The buffered lines are written to the trace file exactly once, either by an
/// explicit [`TraceGuard::finalise`] or when the guard is dropped on an early
/// return or unwinding.
#[derive(Debug)]
pub struct TraceGuard {
    buffer: TraceBuffer,
    path: PathBuf,
    flushed: bool,
}

impl TraceGuard {
    pub fn new(buffer: TraceBuffer, path: impl Into<PathBuf>) -> Self {
        TraceGuard {
            buffer,
            path: path.into(),
            flushed: false,
        }
    }

    /// Write the trace file and consume the guard
    pub fn finalise(mut self) -> crate::errors::Result<()> {
        self.flush()
    }

    fn flush(&mut self) -> crate::errors::Result<()> {
        if self.flushed {
            return Ok(());
        }
        self.flushed = true;

        let mut lines = self.buffer.take();
        lines.push(format_trace_line("INFO", module_path!(), "Trace finalised"));

        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&self.path, content)
            .map_err(|e| file_operation_error(e, self.path.clone(), "write trace"))
    }
}

impl Drop for TraceGuard {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("{e}");
        }
    }
}

fn format_trace_line(level: &str, target: &str, message: &str) -> String {
    format!(
        "[{} {} {}] {}",
        chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        level,
        target,
        message
    )
}

/// Initialise the logger with the specified verbosity level
///
/// Console output honours `verbosity`. The trace buffer always receives at
/// least debug records so the trace file documents every step of the run.
pub fn init_logger(verbosity: LogLevel, trace: &TraceBuffer) -> Result<()> {
    let console_level = verbosity.to_level_filter();
    let trace_level = console_level.max(LevelFilter::Debug);

    let base_logger = Dispatch::new().level(trace_level);

    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    let output_logger = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "\x1B[{}m{}\x1B[0m",
                colors_line.get_color(&record.level()).to_fg_str(),
                message
            ))
        })
        .level(console_level)
        .chain(std::io::stdout());

    let sink = trace.clone();
    let trace_logger = Dispatch::new()
        .level(trace_level)
        .chain(fern::Output::call(move |record| {
            sink.push(format_trace_line(
                record.level().as_str(),
                record.target(),
                &record.args().to_string(),
            ))
        }));

    base_logger
        .chain(trace_logger)
        .chain(output_logger)
        .apply()?;

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");

    Ok(())
}

/// Format a message with colour support
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}
