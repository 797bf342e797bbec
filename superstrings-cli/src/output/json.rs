//! JSON output formatter

use super::OutputFormatter;
use crate::report::Report;
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs the whole report as one object
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, report)?;
        } else {
            serde_json::to_writer(&mut self.writer, report)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn test_json_contains_report_fields() {
        let report = sample_report(false);
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true);
            formatter.format_report(&report).unwrap();
            formatter.finish().unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["superstring"], report.superstring.as_str());
        assert_eq!(value["solver"], "greedy");
        assert_eq!(value["input"]["words"], 8);
        assert_eq!(value["table"]["offsets"].as_array().unwrap().len(), 8);
        assert!(value.get("histogram").is_none());
    }

    #[test]
    fn test_compact_json_is_one_line() {
        let report = sample_report(false);
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter.format_report(&report).unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
