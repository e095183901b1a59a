//! JSON sink for scripting

use serde_json::json;
use std::io::Write;

use super::{ResultSink, write_failed};
use crate::Result;
use crate::app::models::{AggregationResult, SelectOption};

/// Sink writing one pretty-printed JSON document per call
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_value<T: serde::Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer).map_err(write_failed)?;
        self.writer.flush().map_err(write_failed)
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn render(&mut self, result: &AggregationResult) -> Result<()> {
        self.write_value(result)
    }

    fn render_error(&mut self, message: &str) -> Result<()> {
        self.write_value(&json!({ "error": message }))
    }

    fn render_options(
        &mut self,
        categories: &[SelectOption],
        locations: &[SelectOption],
    ) -> Result<()> {
        self.write_value(&json!({
            "categories": categories,
            "locations": locations,
        }))
    }
}
