//! Career timeline statistics.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{entry, list, AnalysisError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineAnalysis {
    /// Earliest life event year; `None` without events
    pub career_start: Option<i64>,

    /// Events per elapsed year since `career_start`
    pub milestone_frequency: f64,
}

/// Life events ordered by year, paired with their year.
///
/// The sort is stable. A missing or null year counts as 0 and sorts first.
pub fn sorted_life_events(root: &Map<String, Value>) -> Result<Vec<(i64, &Map<String, Value>)>, AnalysisError> {
    let mut events = list(root, "life_events")?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let event = entry(item, "life_events", i)?;
            Ok((event_year(event, i)?, event))
        })
        .collect::<Result<Vec<_>, AnalysisError>>()?;

    events.sort_by_key(|(year, _)| *year);
    Ok(events)
}

pub(crate) fn analyze(root: &Map<String, Value>, current_year: i64) -> Result<TimelineAnalysis, AnalysisError> {
    let events = sorted_life_events(root)?;

    let Some(&(earliest, _)) = events.first() else {
        return Ok(TimelineAnalysis {
            career_start: None,
            milestone_frequency: 0.0,
        });
    };

    // Floor of one year: an earliest event in the current year (or later)
    // divides by 1 instead of 0. Saturates for extreme raw years.
    let elapsed = current_year.saturating_sub(earliest).max(1);

    Ok(TimelineAnalysis {
        career_start: Some(earliest),
        milestone_frequency: events.len() as f64 / elapsed as f64,
    })
}

fn event_year(event: &Map<String, Value>, index: usize) -> Result<i64, AnalysisError> {
    match event.get("year") {
        None | Some(Value::Null) => Ok(0),
        Some(raw) => raw
            .as_i64()
            .or_else(|| raw.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .ok_or_else(|| AnalysisError::type_error(format!("life_events[{}].year", index), "integer")),
    }
}
