//! Human-readable text sink

use colored::Colorize;
use std::io::Write;

use super::{ResultSink, sanitize_text, series_label, write_failed};
use crate::Result;
use crate::app::models::{AggregationResult, ChartPoint, Extreme, SelectOption};

/// Width of the longest trend bar in characters
const BAR_WIDTH: usize = 40;

/// Text sink writing a results card and a bar-chart trend
#[derive(Debug)]
pub struct TextSink<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> TextSink<W> {
    /// Create a sink with coloured headings
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            color: true,
        }
    }

    /// Create a sink without colour codes
    pub fn plain(writer: W) -> Self {
        Self {
            writer,
            color: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bright_green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn highlight(&self, text: &str) -> String {
        if self.color {
            text.bright_cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn detail(extreme: &Extreme) -> String {
        format!(
            "{} — {}",
            sanitize_text(&extreme.year),
            sanitize_text(&extreme.location)
        )
    }

    fn write_chart(&mut self, units: &str, points: &[ChartPoint]) -> Result<()> {
        let heading = self.heading(&series_label(&sanitize_text(units)));
        writeln!(self.writer, "{}", heading).map_err(write_failed)?;

        let peak = points.iter().map(|p| p.average).fold(0.0_f64, f64::max);

        for point in points {
            let bar_len = if peak > 0.0 && point.average > 0.0 {
                ((point.average / peak) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            writeln!(
                self.writer,
                "  {} │{:<width$} {:.2}",
                sanitize_text(&point.year),
                "█".repeat(bar_len),
                point.average,
                width = BAR_WIDTH
            )
            .map_err(write_failed)?;
        }

        Ok(())
    }
}

impl<W: Write> ResultSink for TextSink<W> {
    fn render(&mut self, result: &AggregationResult) -> Result<()> {
        let stats = &result.statistics;
        let units = sanitize_text(&result.units).into_owned();

        let title = self.heading("Length of Stay Results");
        let average = self.highlight(&format!("{:.2}", stats.average));

        writeln!(self.writer, "{}", title).map_err(write_failed)?;
        writeln!(self.writer, "  Category:    {}", sanitize_text(&result.category))
            .map_err(write_failed)?;
        writeln!(self.writer, "  Location:    {}", sanitize_text(&result.location))
            .map_err(write_failed)?;
        writeln!(self.writer, "  Average:     {} {}", average, units).map_err(write_failed)?;
        writeln!(
            self.writer,
            "  Minimum:     {:.2} {} ({})",
            stats.min.value,
            units,
            Self::detail(&stats.min)
        )
        .map_err(write_failed)?;
        writeln!(
            self.writer,
            "  Maximum:     {:.2} {} ({})",
            stats.max.value,
            units,
            Self::detail(&stats.max)
        )
        .map_err(write_failed)?;
        writeln!(self.writer, "  Data points: {}", stats.data_points).map_err(write_failed)?;
        writeln!(self.writer).map_err(write_failed)?;

        self.write_chart(&units, &result.chart_data)?;
        self.writer.flush().map_err(write_failed)
    }

    fn render_error(&mut self, message: &str) -> Result<()> {
        let label = if self.color {
            "Error:".bright_red().bold().to_string()
        } else {
            "Error:".to_string()
        };
        writeln!(self.writer, "{} {}", label, sanitize_text(message)).map_err(write_failed)?;
        self.writer.flush().map_err(write_failed)
    }

    fn render_options(
        &mut self,
        categories: &[SelectOption],
        locations: &[SelectOption],
    ) -> Result<()> {
        for (title, options) in [("Categories", categories), ("Locations", locations)] {
            let heading = self.heading(title);
            writeln!(self.writer, "{}", heading).map_err(write_failed)?;
            for option in options {
                writeln!(self.writer, "  {}", sanitize_text(&option.label))
                    .map_err(write_failed)?;
            }
        }
        self.writer.flush().map_err(write_failed)
    }
}
