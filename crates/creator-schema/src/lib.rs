//! Validated record types for content creator profiles.
//!
//! Every record is built from untyped key-value input (`serde_json::Value`)
//! and checked field by field at construction. A record that exists has
//! passed its constraints; there is no way to relax them afterwards.

mod achievement;
mod business;
mod challenge;
mod creator;
mod error;
mod fields;
mod life_event;
mod personal;
mod values;

pub use achievement::AchievementRecord;
pub use business::{BusinessRecord, BusinessStatus, BusinessType};
pub use challenge::ChallengeRecord;
pub use creator::{CreatorRecord, ANALYSIS_VERSION};
pub use error::{Rule, ValidationError};
pub use fields::Choice;
pub use life_event::{LifeEventCategory, LifeEventRecord};
pub use personal::{PersonalInfo, CHANNEL_URL_PATTERN};
pub use values::ValueRecord;

use chrono::{DateTime, Datelike, Local, Utc};

/// Earliest year a channel, challenge, achievement or business may date from.
pub const PLATFORM_FIRST_YEAR: i64 = 2005;

/// Earliest year a life event may date from.
pub const LIFE_EVENT_FIRST_YEAR: i64 = 1900;

/// Clock inputs for validation.
///
/// Upper year bounds follow the current year, so they are pinned here rather
/// than read from the clock inside each check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaContext {
    /// Inclusive upper bound for every year field.
    pub current_year: i64,

    /// Timestamp used for defaulted metadata.
    pub now: DateTime<Utc>,
}

impl SchemaContext {
    /// Context for the local calendar year at this instant.
    pub fn now() -> Self {
        Self {
            current_year: i64::from(Local::now().year()),
            now: Utc::now(),
        }
    }

    /// Context pinned to a specific year.
    pub fn at_year(current_year: i64) -> Self {
        Self {
            current_year,
            now: Utc::now(),
        }
    }
}

impl Default for SchemaContext {
    fn default() -> Self {
        Self::now()
    }
}
