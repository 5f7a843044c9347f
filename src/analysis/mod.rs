//! Derived statistics over a creator record
//!
//! Analysis reads the raw mapping form of a record so that merged partial
//! sources can be analysed before (or without) full validation. Every
//! operation is pure: the input is only borrowed and a fresh result returned.

mod business;
mod timeline;

pub use business::BusinessAnalysis;
pub use timeline::{sorted_life_events, TimelineAnalysis};

use chrono::{Datelike, Local};
use creator_schema::CreatorRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structurally incompatible analysis input.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("type error at '{path}': expected {expected}")]
    TypeError { path: String, expected: &'static str },

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AnalysisError {
    pub(crate) fn type_error(path: impl Into<String>, expected: &'static str) -> Self {
        AnalysisError::TypeError {
            path: path.into(),
            expected,
        }
    }
}

/// Record counts per section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub total_life_events: usize,
    pub total_challenges: usize,
    pub total_achievements: usize,
    pub business_count: usize,
}

/// Core values and the consistency heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuesAssessment {
    /// Value names in input order
    pub core_values: Vec<String>,

    /// `core_values.len() / 10`, deliberately uncapped: more than ten values
    /// scores above 1.0
    pub value_consistency_score: f64,
}

/// Full analysis output; field order is the report section order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub basic_stats: BasicStats,
    pub business_analysis: BusinessAnalysis,
    pub values_assessment: ValuesAssessment,
    pub timeline_analysis: TimelineAnalysis,
}

impl AnalysisResult {
    /// Mapping form with the stable top-level keys.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Computes analysis results relative to a fixed current year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analyzer {
    current_year: i64,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer for the local calendar year.
    pub fn new() -> Self {
        Self::for_year(i64::from(Local::now().year()))
    }

    pub fn for_year(current_year: i64) -> Self {
        Self { current_year }
    }

    pub fn current_year(&self) -> i64 {
        self.current_year
    }

    /// Analyse the raw mapping form of a (possibly partial) creator record.
    pub fn analyze(&self, data: &Value) -> Result<AnalysisResult, AnalysisError> {
        let root = data
            .as_object()
            .ok_or_else(|| AnalysisError::type_error("<root>", "object"))?;

        Ok(AnalysisResult {
            basic_stats: basic_stats(root)?,
            business_analysis: business::analyze(root)?,
            values_assessment: assess_values(root)?,
            timeline_analysis: timeline::analyze(root, self.current_year)?,
        })
    }

    /// Analyse a validated record.
    pub fn analyze_record(&self, record: &CreatorRecord) -> Result<AnalysisResult, AnalysisError> {
        self.analyze(&record.to_value()?)
    }
}

/// Analyse `data` relative to the local calendar year.
pub fn analyze(data: &Value) -> Result<AnalysisResult, AnalysisError> {
    Analyzer::new().analyze(data)
}

/// Sequence at `key`; absent or null means empty.
pub(crate) fn list<'a>(root: &'a Map<String, Value>, key: &str) -> Result<&'a [Value], AnalysisError> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(AnalysisError::type_error(key, "array")),
    }
}

/// Item `index` of the list at `key` as a mapping.
pub(crate) fn entry<'a>(
    item: &'a Value,
    key: &str,
    index: usize,
) -> Result<&'a Map<String, Value>, AnalysisError> {
    item.as_object()
        .ok_or_else(|| AnalysisError::type_error(format!("{}[{}]", key, index), "object"))
}

pub fn basic_stats(root: &Map<String, Value>) -> Result<BasicStats, AnalysisError> {
    Ok(BasicStats {
        total_life_events: list(root, "life_events")?.len(),
        total_challenges: list(root, "challenges")?.len(),
        total_achievements: list(root, "achievements")?.len(),
        business_count: list(root, "businesses")?.len(),
    })
}

pub fn assess_values(root: &Map<String, Value>) -> Result<ValuesAssessment, AnalysisError> {
    let values = list(root, "values")?;

    let core_values = values
        .iter()
        .enumerate()
        .map(|(i, item)| {
            entry(item, "values", i)?
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| AnalysisError::type_error(format!("values[{}].name", i), "string"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValuesAssessment {
        value_consistency_score: core_values.len() as f64 / 10.0,
        core_values,
    })
}
