//! Creator Analyst - content creator profile analysis
//!
//! Validates creator records, deep-merges partial records from several
//! sources, computes derived statistics and renders them as a report.
//!
//! The core (`merge`, `analysis`, `report` and the `creator-schema` crate) is
//! pure and never logs. `agent`, `source`, `config` and `draft` form the thin
//! application layer around it.

pub mod agent;
pub mod analysis;
pub mod config;
pub mod draft;
pub mod merge;
pub mod report;
pub mod source;

pub use agent::{AgentConfig, AgentError, ContentAnalysisAgent};
pub use analysis::{analyze, AnalysisError, AnalysisResult, Analyzer};
pub use config::{AppConfig, EffectiveConfig};
pub use draft::{build_record, FormDraft};
pub use merge::{merge, merge_sources, merge_validated};
pub use report::{render, render_as, render_markdown, ReportError, ReportFormat};
pub use source::{LoadedSource, SourceError};

pub use creator_schema::{CreatorRecord, Rule, SchemaContext, ValidationError};
