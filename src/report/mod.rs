//! Report rendering for analysis results
//!
//! Renders an analysis mapping either as a hierarchical Markdown document or
//! as pretty-printed JSON. Rendering is pure; writing the document anywhere is
//! the caller's job.

mod markdown;

pub use markdown::{humanize_key, render_markdown, REPORT_TITLE};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Errors from the report entry points
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Unsupported format '{0}'. Use 'markdown' or 'json'")]
    UnsupportedFormat(String),

    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Output format of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
        }
    }

    /// File extension for reports in this format
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ReportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Render `analysis` in the given format.
pub fn render(analysis: &Value, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Markdown => Ok(render_markdown(analysis)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
    }
}

/// Render `analysis` in a format given by name, e.g. `"markdown"` or `"json"`.
pub fn render_as(analysis: &Value, format: &str) -> Result<String, ReportError> {
    render(analysis, format.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_parsing() {
        assert_eq!("markdown".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("MD".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
    }

    #[test]
    fn test_unsupported_format() {
        let err = render_as(&json!({}), "pdf").unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedFormat(ref f) if f == "pdf"));
        assert_eq!(err.to_string(), "Unsupported format 'pdf'. Use 'markdown' or 'json'");
    }

    #[test]
    fn test_json_render_is_parseable() {
        let analysis = json!({"basic_stats": {"business_count": 2}});
        let text = render(&analysis, ReportFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, analysis);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::Json.extension(), "json");
    }
}
