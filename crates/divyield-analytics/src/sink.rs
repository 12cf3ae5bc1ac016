//! Rendering sinks for finished series.

use std::io;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::series::ChartSeries;

/// Receives a finished series for display.
pub trait SeriesSink {
    /// Renders `series`.
    fn render(&mut self, series: &ChartSeries) -> AnalyticsResult<()>;
}

/// Keeps the last rendered series in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    last: Option<ChartSeries>,
    renders: usize,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered series.
    #[must_use]
    pub fn last(&self) -> Option<&ChartSeries> {
        self.last.as_ref()
    }

    /// Number of renders received.
    #[must_use]
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl SeriesSink for MemorySink {
    fn render(&mut self, series: &ChartSeries) -> AnalyticsResult<()> {
        self.last = Some(series.clone());
        self.renders += 1;
        Ok(())
    }
}

/// Writes series as `date,value` CSV rows.
///
/// The header is written once, before the first rendered series. Later
/// renders append their rows to the same table.
pub struct CsvSink<W: io::Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

impl<W: io::Write> CsvSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            header_written: false,
        }
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> AnalyticsResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| AnalyticsError::sink(e.to_string()))
    }
}

impl<W: io::Write> SeriesSink for CsvSink<W> {
    fn render(&mut self, series: &ChartSeries) -> AnalyticsResult<()> {
        if series.dates.len() != series.values.len() {
            return Err(AnalyticsError::sink(format!(
                "{} dates but {} values",
                series.dates.len(),
                series.values.len()
            )));
        }

        if !self.header_written {
            self.writer.write_record(["date", "value"])?;
            self.header_written = true;
        }
        for (date, value) in series.dates.iter().zip(&series.values) {
            self.writer.write_record([
                date.date_naive().format("%Y-%m-%d").to_string(),
                value.to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use divyield_core::types::Date;

    fn chart() -> ChartSeries {
        ChartSeries {
            dates: vec![
                Date::from_ymd(2023, 6, 1).unwrap().to_timeline(),
                Date::from_ymd(2023, 6, 2).unwrap().to_timeline(),
            ],
            values: vec![1.0, 0.5],
        }
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        assert!(sink.last().is_none());
        sink.render(&chart()).unwrap();
        sink.render(&chart()).unwrap();
        assert_eq!(sink.renders(), 2);
        assert_eq!(sink.last(), Some(&chart()));
    }

    #[test]
    fn test_csv_sink() {
        let mut sink = CsvSink::new(Vec::new());
        sink.render(&chart()).unwrap();
        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(out, "date,value\n2023-06-01,1\n2023-06-02,0.5\n");
    }

    #[test]
    fn test_csv_sink_writes_header_once() {
        let mut sink = CsvSink::new(Vec::new());
        sink.render(&chart()).unwrap();
        sink.render(&chart()).unwrap();
        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(out.matches("date,value").count(), 1);
        assert_eq!(
            out,
            "date,value\n2023-06-01,1\n2023-06-02,0.5\n2023-06-01,1\n2023-06-02,0.5\n"
        );
    }

    #[test]
    fn test_csv_sink_rejects_misaligned() {
        let mut series = chart();
        series.values.pop();
        let mut sink = CsvSink::new(Vec::new());
        assert!(matches!(
            sink.render(&series),
            Err(AnalyticsError::Sink { .. })
        ));
    }
}
