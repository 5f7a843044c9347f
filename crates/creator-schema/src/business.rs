//! Business ventures associated with the creator.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Rule, ValidationError};
use crate::fields::{Choice, Fields};
use crate::{SchemaContext, PLATFORM_FIRST_YEAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Merchandise,
    Courses,
    Sponsorships,
    Production,
    Other,
}

impl Choice for BusinessType {
    const ALL: &'static [Self] = &[
        Self::Merchandise,
        Self::Courses,
        Self::Sponsorships,
        Self::Production,
        Self::Other,
    ];
    const NAMES: &'static [&'static str] =
        &["merchandise", "courses", "sponsorships", "production", "other"];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Merchandise => "merchandise",
            Self::Courses => "courses",
            Self::Sponsorships => "sponsorships",
            Self::Production => "production",
            Self::Other => "other",
        }
    }
}

/// Operational status of a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStatus {
    #[default]
    Active,
    Inactive,
    Sold,
    Acquired,
}

impl Choice for BusinessStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive, Self::Sold, Self::Acquired];
    const NAMES: &'static [&'static str] = &["active", "inactive", "sold", "acquired"];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Sold => "sold",
            Self::Acquired => "acquired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessRecord {
    pub name: String,
    pub description: String,

    /// Launch year
    pub year_started: i64,

    /// Estimated yearly revenue (USD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_revenue: Option<f64>,

    pub business_type: BusinessType,

    pub status: BusinessStatus,
}

impl BusinessRecord {
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_with(value, &SchemaContext::now())
    }

    pub fn from_value_with(value: &Value, ctx: &SchemaContext) -> Result<Self, ValidationError> {
        Self::parse(value, "", ctx)
    }

    pub(crate) fn parse(value: &Value, path: &str, ctx: &SchemaContext) -> Result<Self, ValidationError> {
        let fields = Fields::open(value, path)?;

        let year_started = fields.required_int("year_started", i64::MIN, i64::MAX)?;
        if year_started > ctx.current_year {
            return Err(ValidationError::new(
                fields.path("year_started"),
                Rule::NotInFuture {
                    year: year_started,
                    current_year: ctx.current_year,
                },
            ));
        }
        if year_started < PLATFORM_FIRST_YEAR {
            return Err(ValidationError::new(
                fields.path("year_started"),
                Rule::Range {
                    min: PLATFORM_FIRST_YEAR,
                    max: ctx.current_year,
                    actual: year_started,
                },
            ));
        }

        Ok(Self {
            name: fields.required_str("name", 2, 100)?,
            description: fields.required_str("description", 10, 500)?,
            year_started,
            annual_revenue: fields.optional_number("annual_revenue", 0.0)?,
            business_type: fields.required_choice("business_type")?,
            status: fields.optional_choice("status")?.unwrap_or_default(),
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == BusinessStatus::Active
    }
}
