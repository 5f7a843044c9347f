//! Core values held by the creator.

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::fields::Fields;
use crate::SchemaContext;

/// Default origin when none is supplied.
const DEFAULT_ORIGIN: &str = "Personal belief";

/// A core value of the creator, e.g. "Authenticity".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueRecord {
    pub name: String,

    /// Where this value came from
    pub origin: String,

    /// How the value shapes current work
    pub impact_today: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ValueRecord {
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_with(value, &SchemaContext::now())
    }

    /// Values carry no year bounds; `ctx` keeps the record API uniform.
    pub fn from_value_with(value: &Value, ctx: &SchemaContext) -> Result<Self, ValidationError> {
        Self::parse(value, "", ctx)
    }

    pub(crate) fn parse(value: &Value, path: &str, _ctx: &SchemaContext) -> Result<Self, ValidationError> {
        let fields = Fields::open(value, path)?;
        Ok(Self {
            name: fields.required_str("name", 2, 50)?,
            origin: fields.str_or("origin", DEFAULT_ORIGIN)?,
            impact_today: fields.required_str("impact_today", 0, usize::MAX)?,
            description: fields.optional_str("description", 0, 500)?,
        })
    }
}
