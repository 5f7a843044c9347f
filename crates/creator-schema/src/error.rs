//! Validation error types.

use serde::Serialize;
use std::fmt;

/// The constraint a field violated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "detail")]
pub enum Rule {
    /// Field is missing or null.
    #[serde(rename = "REQUIRED")]
    Required,

    /// Field has the wrong JSON shape.
    #[serde(rename = "TYPE")]
    Type { expected: &'static str },

    /// String is shorter than allowed.
    #[serde(rename = "MIN_LENGTH")]
    MinLength { min: usize, actual: usize },

    /// String is longer than allowed.
    #[serde(rename = "MAX_LENGTH")]
    MaxLength { max: usize, actual: usize },

    /// Integer outside an inclusive range.
    #[serde(rename = "RANGE")]
    Range { min: i64, max: i64, actual: i64 },

    /// Number below an inclusive lower bound.
    #[serde(rename = "MINIMUM")]
    Minimum { min: f64, actual: f64 },

    /// String does not match the field pattern.
    #[serde(rename = "PATTERN")]
    Pattern { pattern: &'static str },

    /// String is not one of the allowed values.
    #[serde(rename = "ONE_OF")]
    OneOf {
        allowed: &'static [&'static str],
        actual: String,
    },

    /// Year lies after the current year.
    #[serde(rename = "NOT_IN_FUTURE")]
    NotInFuture { year: i64, current_year: i64 },
}

impl Rule {
    /// Stable machine-readable code for this rule.
    pub fn code(&self) -> &'static str {
        match self {
            Rule::Required => "REQUIRED",
            Rule::Type { .. } => "TYPE",
            Rule::MinLength { .. } => "MIN_LENGTH",
            Rule::MaxLength { .. } => "MAX_LENGTH",
            Rule::Range { .. } => "RANGE",
            Rule::Minimum { .. } => "MINIMUM",
            Rule::Pattern { .. } => "PATTERN",
            Rule::OneOf { .. } => "ONE_OF",
            Rule::NotInFuture { .. } => "NOT_IN_FUTURE",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "field is required"),
            Rule::Type { expected } => write!(f, "expected {}", expected),
            Rule::MinLength { min, actual } => {
                write!(f, "must be at least {} characters (got {})", min, actual)
            }
            Rule::MaxLength { max, actual } => {
                write!(f, "must be at most {} characters (got {})", max, actual)
            }
            Rule::Range { min, max, actual } => {
                write!(f, "must be between {} and {} (got {})", min, max, actual)
            }
            Rule::Minimum { min, actual } => {
                write!(f, "must be at least {} (got {})", min, actual)
            }
            Rule::Pattern { pattern } => write!(f, "must match pattern {}", pattern),
            Rule::OneOf { allowed, actual } => {
                write!(f, "'{}' is not one of: {}", actual, allowed.join(", "))
            }
            Rule::NotInFuture { year, current_year } => {
                write!(f, "{} is in the future (current year {})", year, current_year)
            }
        }
    }
}

/// A record field violated a declared constraint.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("invalid field '{field}': {rule}")]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `challenges[1].year`.
    pub field: String,

    /// The violated constraint.
    pub rule: Rule,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }

    /// Machine-readable form, e.g. `RANGE:challenges[0].year`.
    pub fn to_code(&self) -> String {
        format!("{}:{}", self.rule.code(), self.field)
    }
}
