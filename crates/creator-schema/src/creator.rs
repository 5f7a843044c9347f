//! The aggregate creator record.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::achievement::AchievementRecord;
use crate::business::BusinessRecord;
use crate::challenge::ChallengeRecord;
use crate::error::{Rule, ValidationError};
use crate::fields::{item_path, Fields};
use crate::life_event::LifeEventRecord;
use crate::personal::PersonalInfo;
use crate::values::ValueRecord;
use crate::SchemaContext;

/// Version tag written into `analysis_metadata` when absent.
pub const ANALYSIS_VERSION: &str = "1.0";

/// Everything known about one content creator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatorRecord {
    pub personal_info: PersonalInfo,
    pub values: Vec<ValueRecord>,
    pub challenges: Vec<ChallengeRecord>,
    pub achievements: Vec<AchievementRecord>,
    pub life_events: Vec<LifeEventRecord>,
    pub businesses: Vec<BusinessRecord>,

    /// Free-form metadata; always carries `last_updated` and `analysis_version`
    pub analysis_metadata: Map<String, Value>,
}

impl CreatorRecord {
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_with(value, &SchemaContext::now())
    }

    pub fn from_value_with(value: &Value, ctx: &SchemaContext) -> Result<Self, ValidationError> {
        let fields = Fields::open(value, "")?;

        let personal_info = match fields.raw("personal_info") {
            Some(raw) => PersonalInfo::parse(raw, "personal_info", ctx)?,
            None => return Err(ValidationError::new("personal_info", Rule::Required)),
        };

        let mut analysis_metadata = fields.object("analysis_metadata")?.cloned().unwrap_or_default();
        analysis_metadata
            .entry("last_updated")
            .or_insert_with(|| Value::String(ctx.now.to_rfc3339()));
        analysis_metadata
            .entry("analysis_version")
            .or_insert_with(|| Value::String(ANALYSIS_VERSION.to_string()));

        Ok(Self {
            personal_info,
            values: parse_list(&fields, "values", ctx, ValueRecord::parse)?,
            challenges: parse_list(&fields, "challenges", ctx, ChallengeRecord::parse)?,
            achievements: parse_list(&fields, "achievements", ctx, AchievementRecord::parse)?,
            life_events: parse_list(&fields, "life_events", ctx, LifeEventRecord::parse)?,
            businesses: parse_list(&fields, "businesses", ctx, BusinessRecord::parse)?,
            analysis_metadata,
        })
    }

    /// Raw mapping form, suitable for merging or analysis.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl TryFrom<&Value> for CreatorRecord {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

fn parse_list<T>(
    fields: &Fields<'_>,
    key: &str,
    ctx: &SchemaContext,
    parse: fn(&Value, &str, &SchemaContext) -> Result<T, ValidationError>,
) -> Result<Vec<T>, ValidationError> {
    let list_path = fields.path(key);
    fields
        .list(key)?
        .iter()
        .enumerate()
        .map(|(i, item)| parse(item, &item_path(&list_path, i), ctx))
        .collect()
}
