//! Built-in defaults (layer 1)
//!
//! Hardcoded defaults for all configuration values.

use serde::{Deserialize, Serialize};

use crate::report::ReportFormat;

/// Built-in default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Agent display name (default: "CreatorAnalyst v1.0")
    pub agent_name: String,

    /// Agent role description
    pub agent_role: String,

    /// Report format (default: markdown)
    pub report_format: ReportFormat,

    /// Directory reports are written into (default: "reports")
    pub output_dir: String,

    /// Validate merged sources against the schema before analysis (default: false)
    pub validate_sources: bool,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            agent_name: "CreatorAnalyst v1.0".to_string(),
            agent_role: "Comprehensive YouTube Creator Analysis System".to_string(),
            report_format: ReportFormat::Markdown,
            output_dir: "reports".to_string(),
            validate_sources: false,
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "agent": {
                "name": self.agent_name,
                "role": self.agent_role
            },
            "report": {
                "format": self.report_format,
                "output_dir": self.output_dir
            },
            "validate_sources": self.validate_sources
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = BuiltinDefaults::default();
        assert_eq!(defaults.agent_name, "CreatorAnalyst v1.0");
        assert_eq!(defaults.report_format, ReportFormat::Markdown);
        assert_eq!(defaults.output_dir, "reports");
        assert!(!defaults.validate_sources);
    }

    #[test]
    fn test_to_value() {
        let value = BuiltinDefaults::default().to_value();

        assert_eq!(value["agent"]["name"], "CreatorAnalyst v1.0");
        assert_eq!(value["report"]["format"], "markdown");
        assert_eq!(value["validate_sources"], false);
    }
}
