//! Notable achievements with their quantitative metrics.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Rule, ValidationError};
use crate::fields::Fields;
use crate::{SchemaContext, PLATFORM_FIRST_YEAR};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementRecord {
    pub description: String,
    pub year: i64,

    /// Effect on the creator's career
    pub impact: String,

    /// Named measures of success, e.g. `subscribers_gained`
    pub metrics: Map<String, Value>,
}

impl AchievementRecord {
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_with(value, &SchemaContext::now())
    }

    pub fn from_value_with(value: &Value, ctx: &SchemaContext) -> Result<Self, ValidationError> {
        Self::parse(value, "", ctx)
    }

    pub(crate) fn parse(value: &Value, path: &str, ctx: &SchemaContext) -> Result<Self, ValidationError> {
        let fields = Fields::open(value, path)?;

        let mut metrics = Map::new();
        if let Some(raw) = fields.object("metrics")? {
            for (name, metric) in raw {
                if !metric.is_number() {
                    return Err(ValidationError::new(
                        format!("{}.{}", fields.path("metrics"), name),
                        Rule::Type { expected: "number" },
                    ));
                }
                metrics.insert(name.clone(), metric.clone());
            }
        }

        Ok(Self {
            description: fields.required_str("description", 10, 200)?,
            year: fields.required_int("year", PLATFORM_FIRST_YEAR, ctx.current_year)?,
            impact: fields.required_str("impact", 10, 500)?,
            metrics,
        })
    }

    /// Metric value as a float, if present.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).and_then(Value::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metrics_parsed() {
        let record = AchievementRecord::from_value_with(
            &json!({
                "description": "Reached 100k subscribers",
                "year": 2020,
                "impact": "Unlocked brand partnerships",
                "metrics": {"subscribers_gained": 100000, "revenue_increase": 45.5}
            }),
            &SchemaContext::at_year(2024),
        )
        .unwrap();
        assert_eq!(record.metric("subscribers_gained"), Some(100000.0));
        assert_eq!(record.metric("revenue_increase"), Some(45.5));
        assert_eq!(record.metric("views"), None);
    }

    #[test]
    fn test_non_numeric_metric_rejected() {
        let err = AchievementRecord::from_value_with(
            &json!({
                "description": "Reached 100k subscribers",
                "year": 2020,
                "impact": "Unlocked brand partnerships",
                "metrics": {"subscribers_gained": "lots"}
            }),
            &SchemaContext::at_year(2024),
        )
        .unwrap_err();
        assert_eq!(err.field, "metrics.subscribers_gained");
    }

    #[test]
    fn test_metrics_default_empty() {
        let record = AchievementRecord::from_value_with(
            &json!({
                "description": "First viral video",
                "year": 2019,
                "impact": "Doubled the audience overnight"
            }),
            &SchemaContext::at_year(2024),
        )
        .unwrap();
        assert!(record.metrics.is_empty());
    }
}
