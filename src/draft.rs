//! Form drafts
//!
//! A `FormDraft` is the serializable state of a partially filled creator
//! form. It is passed explicitly into [`build_record`]; nothing about the
//! form lives in process-wide state. Blank strings mean "not filled in".

use creator_schema::{CreatorRecord, SchemaContext, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Form fields that must be filled before a record can be built.
pub const REQUIRED_FIELDS: &[&str] = &["creator_name", "channel_url", "niche"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueDraft {
    pub name: String,
    pub origin: String,
    pub impact_today: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeDraft {
    pub description: String,
    pub year: Option<i64>,
    pub learnings: String,
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementDraft {
    pub description: String,
    pub year: Option<i64>,
    pub impact: String,
    pub metrics: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeEventDraft {
    pub name: String,
    pub year: Option<i64>,
    pub description: String,
    pub impact: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessDraft {
    pub name: String,
    pub description: String,
    pub year_started: Option<i64>,
    pub annual_revenue: Option<f64>,
    pub business_type: String,
    pub status: String,
}

/// The full creator form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDraft {
    /// Full channel name or personal name
    pub creator_name: String,

    /// Falls back to `creator_name` when blank
    pub channel_name: String,
    pub channel_url: String,
    pub niche: String,
    pub start_year: Option<i64>,
    pub country: String,
    pub team_size: Option<i64>,

    pub values: Vec<ValueDraft>,
    pub challenges: Vec<ChallengeDraft>,
    pub achievements: Vec<AchievementDraft>,
    pub life_events: Vec<LifeEventDraft>,
    pub businesses: Vec<BusinessDraft>,
}

impl FormDraft {
    /// Required form fields that are still blank.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let filled = [&self.creator_name, &self.channel_url, &self.niche];
        REQUIRED_FIELDS
            .iter()
            .zip(filled)
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Raw record mapping, with blank fields left out.
    pub fn to_value(&self) -> Value {
        let mut personal = Map::new();
        put_str(&mut personal, "full_name", &self.creator_name);
        put_str(&mut personal, "channel_name", &self.channel_name);
        put_str(&mut personal, "channel_url", &self.channel_url);
        put_str(&mut personal, "niche", &self.niche);
        put(&mut personal, "start_year", self.start_year);
        put_str(&mut personal, "country", &self.country);
        put(&mut personal, "team_size", self.team_size);

        let mut root = Map::new();
        root.insert("personal_info".to_string(), Value::Object(personal));
        root.insert(
            "values".to_string(),
            self.values.iter().map(ValueDraft::to_value).collect(),
        );
        root.insert(
            "challenges".to_string(),
            self.challenges.iter().map(ChallengeDraft::to_value).collect(),
        );
        root.insert(
            "achievements".to_string(),
            self.achievements.iter().map(AchievementDraft::to_value).collect(),
        );
        root.insert(
            "life_events".to_string(),
            self.life_events.iter().map(LifeEventDraft::to_value).collect(),
        );
        root.insert(
            "businesses".to_string(),
            self.businesses.iter().map(BusinessDraft::to_value).collect(),
        );
        Value::Object(root)
    }
}

impl ValueDraft {
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        put_str(&mut map, "name", &self.name);
        put_str(&mut map, "origin", &self.origin);
        put_str(&mut map, "impact_today", &self.impact_today);
        put_str(&mut map, "description", &self.description);
        Value::Object(map)
    }
}

impl ChallengeDraft {
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        put_str(&mut map, "description", &self.description);
        put(&mut map, "year", self.year);
        put_str(&mut map, "learnings", &self.learnings);
        put(&mut map, "duration", self.duration);
        Value::Object(map)
    }
}

impl AchievementDraft {
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        put_str(&mut map, "description", &self.description);
        put(&mut map, "year", self.year);
        put_str(&mut map, "impact", &self.impact);
        if !self.metrics.is_empty() {
            map.insert("metrics".to_string(), Value::Object(self.metrics.clone()));
        }
        Value::Object(map)
    }
}

impl LifeEventDraft {
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        put_str(&mut map, "name", &self.name);
        put(&mut map, "year", self.year);
        put_str(&mut map, "description", &self.description);
        put_str(&mut map, "impact", &self.impact);
        put_str(&mut map, "category", &self.category);
        Value::Object(map)
    }
}

impl BusinessDraft {
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        put_str(&mut map, "name", &self.name);
        put_str(&mut map, "description", &self.description);
        put(&mut map, "year_started", self.year_started);
        put(&mut map, "annual_revenue", self.annual_revenue);
        put_str(&mut map, "business_type", &self.business_type);
        put_str(&mut map, "status", &self.status);
        Value::Object(map)
    }
}

/// Build a validated record from a form draft.
pub fn build_record(draft: &FormDraft, ctx: &SchemaContext) -> Result<CreatorRecord, ValidationError> {
    CreatorRecord::from_value_with(&draft.to_value(), ctx)
}

fn put_str(map: &mut Map<String, Value>, key: &str, value: &str) {
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        map.insert(key.to_string(), Value::String(trimmed.to_string()));
    }
}

fn put<T: Into<Value>>(map: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(v) = value {
        map.insert(key.to_string(), v.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creator_schema::Rule;

    fn filled() -> FormDraft {
        FormDraft {
            creator_name: "John Creator".to_string(),
            channel_url: "https://youtube.com/@john".to_string(),
            niche: "Tech".to_string(),
            start_year: Some(2018),
            country: "Unknown".to_string(),
            values: vec![ValueDraft {
                name: "Transparency".to_string(),
                impact_today: "Drives open communication".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_required_fields() {
        let draft = FormDraft {
            channel_url: "  ".to_string(),
            niche: "Tech".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.missing_required_fields(), vec!["creator_name", "channel_url"]);
        assert!(filled().missing_required_fields().is_empty());
    }

    #[test]
    fn test_build_record_from_draft() {
        let record = build_record(&filled(), &SchemaContext::at_year(2024)).unwrap();
        assert_eq!(record.personal_info.full_name, "John Creator");
        assert_eq!(record.personal_info.channel_name, "John Creator");
        assert_eq!(record.personal_info.team_size, 1);
        assert_eq!(record.values.len(), 1);
        assert_eq!(record.values[0].origin, "Personal belief");
        assert!(record.values[0].description.is_none());
    }

    #[test]
    fn test_blank_required_field_reported_by_schema() {
        let mut draft = filled();
        draft.niche = "   ".to_string();
        let err = build_record(&draft, &SchemaContext::at_year(2024)).unwrap_err();
        assert_eq!(err.field, "personal_info.niche");
        assert_eq!(err.rule, Rule::Required);
    }

    #[test]
    fn test_entry_errors_are_indexed() {
        let mut draft = filled();
        draft.businesses.push(BusinessDraft {
            name: "Merch Store".to_string(),
            description: "Hoodies for the community".to_string(),
            year_started: Some(2019),
            business_type: "nft".to_string(),
            ..Default::default()
        });
        let err = build_record(&draft, &SchemaContext::at_year(2024)).unwrap_err();
        assert_eq!(err.field, "businesses[0].business_type");
    }

    #[test]
    fn test_draft_deserializes_partially() {
        let draft: FormDraft = serde_json::from_str(r#"{"creator_name": "Ana"}"#).unwrap();
        assert_eq!(draft.creator_name, "Ana");
        assert!(draft.values.is_empty());
        assert_eq!(draft.start_year, None);
    }
}
