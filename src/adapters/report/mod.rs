//! Report adapters - Render a sorting outcome for humans or machines.

mod json;
mod text;

pub use json::JsonReportWriter;
pub use text::TextReportWriter;

use crate::config::{OutputConfig, OutputFormat};
use crate::ports::ReportWriter;

/// Picks the writer selected by the output configuration.
pub fn writer_for(config: &OutputConfig) -> Box<dyn ReportWriter> {
    match (config.format, config.pretty) {
        (OutputFormat::Text, _) => Box::new(TextReportWriter::new()),
        (OutputFormat::Json, true) => Box::new(JsonReportWriter::new()),
        (OutputFormat::Json, false) => Box::new(JsonReportWriter::compact()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: &OutputConfig) -> String {
        let mut buffer = Vec::new();
        writer_for(config)
            .write(&test_support::three_tier_outcome(), &mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn writer_for_text_ignores_pretty_flag() {
        let config = OutputConfig {
            format: OutputFormat::Text,
            pretty: false,
        };
        assert!(render(&config).starts_with("Results of the pessimistic sorting:"));
    }

    #[test]
    fn writer_for_json_honours_pretty_flag() {
        let pretty = render(&OutputConfig {
            format: OutputFormat::Json,
            pretty: true,
        });
        let compact = render(&OutputConfig {
            format: OutputFormat::Json,
            pretty: false,
        });

        assert!(pretty.lines().count() > 1);
        assert_eq!(compact.lines().count(), 1);
        let a: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        let b: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(a, b);
    }
}
