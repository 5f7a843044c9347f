//! Content analysis agent
//!
//! Ties the core together for an application: merges data sources, runs the
//! analysis, keeps a per-agent history and writes reports to disk. This is
//! the only layer that performs file output or logging.

use chrono::{DateTime, Local, Utc};
use creator_schema::{CreatorRecord, SchemaContext, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::analysis::{AnalysisError, AnalysisResult, Analyzer};
use crate::config::{AgentSettings, ConfigError};
use crate::merge::merge_sources;
use crate::report::{render, ReportError, ReportFormat};
use crate::source::{LoadedSource, SourceError};

/// Prefix of generated report file names
pub const REPORT_FILE_PREFIX: &str = "creator_report";

/// Agent identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Name of the analysis agent
    pub name: String,

    /// Agent's purpose and capabilities
    pub role: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<DateTime<Utc>>,
}

impl AgentConfig {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            last_active: None,
        }
    }
}

impl From<&AgentSettings> for AgentConfig {
    fn from(settings: &AgentSettings) -> Self {
        Self::new(settings.name.clone(), settings.role.clone())
    }
}

/// Errors surfaced to the application
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write report {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Analyses creator data and produces reports
#[derive(Debug)]
pub struct ContentAnalysisAgent {
    config: AgentConfig,
    analyzer: Analyzer,
    history: Vec<AnalysisResult>,
}

impl ContentAnalysisAgent {
    pub fn new(config: AgentConfig) -> Self {
        Self::with_analyzer(config, Analyzer::new())
    }

    /// Agent using a specific analyzer, e.g. one pinned to a year.
    pub fn with_analyzer(mut config: AgentConfig, analyzer: Analyzer) -> Self {
        config.last_active = Some(Utc::now());
        Self {
            config,
            analyzer,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn last_active(&self) -> Option<DateTime<Utc>> {
        self.config.last_active
    }

    /// Results of every successful analysis, oldest first.
    pub fn history(&self) -> &[AnalysisResult] {
        &self.history
    }

    fn update_activity(&mut self) {
        self.config.last_active = Some(Utc::now());
    }

    /// Merge data sources pairwise in the given order.
    pub fn merge_data_sources<I>(&mut self, sources: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        self.update_activity();
        merge_sources(sources)
    }

    /// Analyse raw (possibly partial) creator data.
    pub fn analyze_creator(&mut self, data: &Value) -> Result<AnalysisResult, AgentError> {
        self.update_activity();
        let result = self.analyzer.analyze(data)?;
        self.record(&result);
        Ok(result)
    }

    /// Analyse a validated record.
    pub fn analyze_record(&mut self, record: &CreatorRecord) -> Result<AnalysisResult, AgentError> {
        self.update_activity();
        let result = self.analyzer.analyze_record(record)?;
        self.record(&result);
        Ok(result)
    }

    /// Merge loaded sources and analyse the result, validating first when asked.
    pub fn analyze_sources(
        &mut self,
        sources: Vec<LoadedSource>,
        validate: Option<&SchemaContext>,
    ) -> Result<AnalysisResult, AgentError> {
        for source in &sources {
            tracing::info!(path = %source.provenance.path, digest = %source.provenance.digest, "merging source");
        }
        let merged = self.merge_data_sources(sources.into_iter().map(|s| s.value));

        match validate {
            Some(ctx) => {
                let record = CreatorRecord::from_value_with(&merged, ctx)?;
                self.analyze_record(&record)
            }
            None => self.analyze_creator(&merged),
        }
    }

    fn record(&mut self, result: &AnalysisResult) {
        tracing::debug!(
            agent = %self.config.name,
            life_events = result.basic_stats.total_life_events,
            businesses = result.business_analysis.total_businesses,
            "analysis complete"
        );
        self.history.push(result.clone());
    }

    /// Render `analysis` and write it to `<output_dir>/creator_report_<timestamp>.<ext>`.
    ///
    /// Returns the absolute path of the written file. Reports generated within
    /// the same minute share a name; the later one replaces the earlier.
    pub fn generate_report(
        &mut self,
        analysis: &AnalysisResult,
        format: ReportFormat,
        output_dir: &Path,
    ) -> Result<PathBuf, AgentError> {
        self.update_activity();

        let document = render(&analysis.to_value().map_err(ReportError::from)?, format)?;

        let filename = format!(
            "{}_{}.{}",
            REPORT_FILE_PREFIX,
            Local::now().format("%Y%m%d%H%M"),
            format.extension()
        );
        let path = output_dir.join(filename);

        let write_err = |source: io::Error| AgentError::Write {
            path: path.display().to_string(),
            source,
        };
        fs::create_dir_all(output_dir).map_err(write_err)?;
        fs::write(&path, document).map_err(write_err)?;
        let absolute = fs::canonicalize(&path).map_err(write_err)?;

        tracing::info!(path = %absolute.display(), format = %format, "report written");
        Ok(absolute)
    }
}
