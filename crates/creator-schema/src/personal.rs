//! Core personal and channel information.

use std::sync::OnceLock;

use regex_lite::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Rule, ValidationError};
use crate::fields::Fields;
use crate::{SchemaContext, PLATFORM_FIRST_YEAR};

/// Accepted shape of a YouTube channel URL.
pub const CHANNEL_URL_PATTERN: &str = r"^(https?://)?(www\.)?(youtube\.com|youtu\.?be)/.+";

fn channel_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CHANNEL_URL_PATTERN).expect("channel URL pattern is valid"))
}

/// Core personal information about the creator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalInfo {
    /// Creator's full name (input alias: `name`)
    pub full_name: String,

    /// Channel name; falls back to `full_name` when not given
    pub channel_name: String,

    /// YouTube channel URL
    pub channel_url: String,

    /// Primary content category
    pub niche: String,

    /// Year the channel was created
    pub start_year: i64,

    /// Base country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// People in the production team
    pub team_size: i64,
}

impl PersonalInfo {
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_with(value, &SchemaContext::now())
    }

    pub fn from_value_with(value: &Value, ctx: &SchemaContext) -> Result<Self, ValidationError> {
        Self::parse(value, "", ctx)
    }

    pub(crate) fn parse(value: &Value, path: &str, ctx: &SchemaContext) -> Result<Self, ValidationError> {
        let fields = Fields::open(value, path)?;

        let full_name = match fields.optional_str("full_name", 2, 100)? {
            Some(name) => name,
            None => fields
                .optional_str("name", 2, 100)?
                .ok_or_else(|| ValidationError::new(fields.path("full_name"), Rule::Required))?,
        };
        let channel_name = fields
            .optional_str("channel_name", 2, 100)?
            .unwrap_or_else(|| full_name.clone());

        let channel_url = fields.required_str("channel_url", 1, usize::MAX)?;
        if !channel_url_regex().is_match(&channel_url) {
            return Err(ValidationError::new(
                fields.path("channel_url"),
                Rule::Pattern {
                    pattern: CHANNEL_URL_PATTERN,
                },
            ));
        }

        Ok(Self {
            full_name,
            channel_name,
            channel_url,
            niche: fields.required_str("niche", 2, 50)?,
            start_year: fields.required_int("start_year", PLATFORM_FIRST_YEAR, ctx.current_year)?,
            country: fields.optional_str("country", 2, 56)?,
            team_size: fields.optional_int("team_size", 1, 1000)?.unwrap_or(1),
        })
    }
}
