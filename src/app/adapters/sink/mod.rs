//! Rendering sinks for query results
//!
//! A [`ResultSink`] receives finished results and displays them. Sinks own
//! all presentation: number formatting, the trend chart and colours. The core
//! never formats output itself.
//!
//! Every sink shows data-derived and error strings as plain text. The text
//! sink additionally replaces control characters so a crafted CSV cell
//! cannot smuggle terminal escape sequences into the output.

use std::borrow::Cow;

use crate::Result;
use crate::app::models::{AggregationResult, SelectOption};

pub mod csv;
pub mod json;
pub mod text;

pub use self::csv::CsvSink;
pub use self::json::JsonSink;
pub use self::text::TextSink;

/// Capability to display query results
pub trait ResultSink {
    /// Display a successful query result
    fn render(&mut self, result: &AggregationResult) -> Result<()>;

    /// Display a failure message as plain text
    fn render_error(&mut self, message: &str) -> Result<()>;

    /// Display the category and location selection lists
    fn render_options(
        &mut self,
        categories: &[SelectOption],
        locations: &[SelectOption],
    ) -> Result<()>;
}

/// Replace control characters with U+FFFD
///
/// Covers C0 (including ESC), DEL and C1 (including CSI), which is everything
/// a terminal could interpret as a command.
pub fn sanitize_text(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_control) {
        Cow::Owned(
            text.chars()
                .map(|c| if c.is_control() { '\u{FFFD}' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

/// Label for the trend series, e.g. "Average Length of Stay (days)"
pub fn series_label(units: &str) -> String {
    format!("Average Length of Stay ({})", units)
}

pub(crate) fn write_failed(e: std::io::Error) -> crate::Error {
    crate::Error::io("Failed to write output", e)
}
