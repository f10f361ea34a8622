/// Output formatting: JSON rendering, error reporting, debug timing.
use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::args::{ErrorFormat, OutputFormat};
use crate::types::ErrorOutput;

/// Indentation unit for pretty output.
pub const INDENT: &[u8] = b"    ";

/// Output context passed to all commands.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub error_format: ErrorFormat,
    /// When true, print notes and timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(format: OutputFormat, error_format: ErrorFormat, debug: bool) -> Self {
        Self {
            format,
            error_format,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Print a `[debug]` line to stderr when `--debug` is set.
    pub fn note(&self, message: &str) {
        if self.debug {
            eprintln!("[debug] {message}");
        }
    }
}

// --- JSON rendering ---

/// Render a value as JSON text in the requested layout.
///
/// Serialization runs through `serde_stacker`, which grows the stack on the
/// heap as nesting deepens.
///
/// # Errors
///
/// Returns `serde_json::Error` if the value cannot be serialized.
pub fn render_json<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut buf = Vec::with_capacity(128);
    match format {
        OutputFormat::Compact => {
            let mut ser = Serializer::new(&mut buf);
            value.serialize(serde_stacker::Serializer::new(&mut ser))?;
        }
        OutputFormat::Pretty => {
            let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
            value.serialize(serde_stacker::Serializer::new(&mut ser))?;
        }
    }
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: ErrorFormat) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match format {
        ErrorFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        ErrorFormat::Text => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
