//! Life events that shaped the creator's career.

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::fields::{Choice, Fields};
use crate::{SchemaContext, LIFE_EVENT_FIRST_YEAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeEventCategory {
    Personal,
    Professional,
    Financial,
}

impl Choice for LifeEventCategory {
    const ALL: &'static [Self] = &[Self::Personal, Self::Professional, Self::Financial];
    const NAMES: &'static [&'static str] = &["personal", "professional", "financial"];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Professional => "professional",
            Self::Financial => "financial",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeEventRecord {
    pub name: String,
    pub year: i64,
    pub description: String,

    /// How it influenced content creation
    pub impact: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<LifeEventCategory>,
}

impl LifeEventRecord {
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_with(value, &SchemaContext::now())
    }

    pub fn from_value_with(value: &Value, ctx: &SchemaContext) -> Result<Self, ValidationError> {
        Self::parse(value, "", ctx)
    }

    pub(crate) fn parse(value: &Value, path: &str, ctx: &SchemaContext) -> Result<Self, ValidationError> {
        let fields = Fields::open(value, path)?;
        Ok(Self {
            name: fields.required_str("name", 2, 100)?,
            year: fields.required_int("year", LIFE_EVENT_FIRST_YEAR, ctx.current_year)?,
            description: fields.required_str("description", 10, 500)?,
            impact: fields.required_str("impact", 10, 500)?,
            category: fields.optional_choice("category")?,
        })
    }
}
