//! CSV sink for data analysis
//!
//! Writes the trend series as `year,average` rows so it can be charted by an
//! external tool.

use std::io::Write;

use super::ResultSink;
use crate::app::models::{AggregationResult, SelectOption};
use crate::{Error, Result};

/// Sink writing CSV tables
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: ::csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: ::csv::Writer::from_writer(writer),
        }
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::output(format!("Failed to flush CSV output: {}", e.error())))
    }

    fn write_row<I, T>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer
            .write_record(row)
            .map_err(|e| Error::output(format!("Failed to write CSV row: {}", e)))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::io("Failed to flush CSV output", e))
    }
}

impl<W: Write> ResultSink for CsvSink<W> {
    fn render(&mut self, result: &AggregationResult) -> Result<()> {
        self.write_row(["year", "average"])?;
        for point in &result.chart_data {
            self.write_row([point.year.clone(), point.average.to_string()])?;
        }
        self.flush()
    }

    fn render_error(&mut self, message: &str) -> Result<()> {
        self.write_row(["error"])?;
        self.write_row([message])?;
        self.flush()
    }

    fn render_options(
        &mut self,
        categories: &[SelectOption],
        locations: &[SelectOption],
    ) -> Result<()> {
        self.write_row(["list", "value", "label"])?;
        for (list, options) in [("category", categories), ("location", locations)] {
            for option in options {
                self.write_row([list, option.value.as_str(), option.label.as_str()])?;
            }
        }
        self.flush()
    }
}
