//! Significant challenges the creator faced.

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::fields::Fields;
use crate::{SchemaContext, PLATFORM_FIRST_YEAR};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeRecord {
    pub description: String,
    pub year: i64,

    /// Key takeaways from overcoming the challenge
    pub learnings: String,

    /// How long it lasted, in months
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

impl ChallengeRecord {
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_with(value, &SchemaContext::now())
    }

    pub fn from_value_with(value: &Value, ctx: &SchemaContext) -> Result<Self, ValidationError> {
        Self::parse(value, "", ctx)
    }

    pub(crate) fn parse(value: &Value, path: &str, ctx: &SchemaContext) -> Result<Self, ValidationError> {
        let fields = Fields::open(value, path)?;
        Ok(Self {
            description: fields.required_str("description", 10, 200)?,
            year: fields.required_int("year", PLATFORM_FIRST_YEAR, ctx.current_year)?,
            learnings: fields.required_str("learnings", 10, 500)?,
            duration: fields.optional_int("duration", 1, 120)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rule;
    use serde_json::json;

    fn input(year: i64) -> Value {
        json!({
            "description": "Burnout after daily uploads",
            "year": year,
            "learnings": "Consistency beats intensity",
            "duration": 6
        })
    }

    #[test]
    fn test_year_outside_platform_range_rejected() {
        let ctx = SchemaContext::at_year(2024);
        for year in [1999, 2004, 2025, 3000] {
            let err = ChallengeRecord::from_value_with(&input(year), &ctx).unwrap_err();
            assert_eq!(err.field, "year");
            assert_eq!(
                err.rule,
                Rule::Range {
                    min: 2005,
                    max: 2024,
                    actual: year
                }
            );
        }
        for year in [2005, 2015, 2024] {
            assert!(ChallengeRecord::from_value_with(&input(year), &ctx).is_ok());
        }
    }

    #[test]
    fn test_duration_bounds() {
        let ctx = SchemaContext::at_year(2024);
        let mut value = input(2020);
        value["duration"] = json!(121);
        let err = ChallengeRecord::from_value_with(&value, &ctx).unwrap_err();
        assert_eq!(err.field, "duration");

        value["duration"] = json!(null);
        let record = ChallengeRecord::from_value_with(&value, &ctx).unwrap();
        assert_eq!(record.duration, None);
    }

    #[test]
    fn test_short_learnings_rejected() {
        let mut value = input(2020);
        value["learnings"] = json!("meh");
        let err = ChallengeRecord::from_value_with(&value, &SchemaContext::at_year(2024)).unwrap_err();
        assert_eq!(err.rule, Rule::MinLength { min: 10, actual: 3 });
    }
}
