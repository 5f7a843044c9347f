//! Business venture statistics.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{entry, list, AnalysisError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessAnalysis {
    pub total_businesses: usize,
    pub active_businesses: usize,

    /// Mean revenue across all businesses; 0 when there are none
    pub average_revenue: f64,
}

pub(crate) fn analyze(root: &Map<String, Value>) -> Result<BusinessAnalysis, AnalysisError> {
    let businesses = list(root, "businesses")?;

    let mut active = 0;
    let mut revenue_total = 0.0;
    for (i, item) in businesses.iter().enumerate() {
        let business = entry(item, "businesses", i)?;
        if is_active(business) {
            active += 1;
        }
        revenue_total += revenue(business, i)?;
    }

    let average_revenue = if businesses.is_empty() {
        0.0
    } else {
        revenue_total / businesses.len() as f64
    };

    Ok(BusinessAnalysis {
        total_businesses: businesses.len(),
        active_businesses: active,
        average_revenue,
    })
}

/// `status` decides when present, then the legacy `is_active` flag;
/// otherwise the record default (active) applies.
fn is_active(business: &Map<String, Value>) -> bool {
    if let Some(status) = business.get("status").and_then(Value::as_str) {
        return status == "active";
    }
    match business.get("is_active") {
        Some(Value::Bool(flag)) => *flag,
        _ => true,
    }
}

/// `annual_revenue`, falling back to the legacy `revenue` key; missing is 0.
fn revenue(business: &Map<String, Value>, index: usize) -> Result<f64, AnalysisError> {
    let (key, raw) = match business.get("annual_revenue").filter(|v| !v.is_null()) {
        Some(v) => ("annual_revenue", v),
        None => match business.get("revenue").filter(|v| !v.is_null()) {
            Some(v) => ("revenue", v),
            None => return Ok(0.0),
        },
    };
    raw.as_f64()
        .ok_or_else(|| AnalysisError::type_error(format!("businesses[{}].{}", index, key), "number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(data: Value) -> BusinessAnalysis {
        analyze(data.as_object().unwrap()).unwrap()
    }

    #[test]
    fn test_empty_list_average_is_zero() {
        let result = run(json!({"businesses": []}));
        assert_eq!(result.total_businesses, 0);
        assert_eq!(result.active_businesses, 0);
        assert_eq!(result.average_revenue, 0.0);

        let result = run(json!({}));
        assert_eq!(result.average_revenue, 0.0);
    }

    #[test]
    fn test_average_counts_missing_revenue_as_zero() {
        let result = run(json!({
            "businesses": [
                {"name": "Merch", "annual_revenue": 5000, "status": "active"},
                {"name": "Course", "annual_revenue": 3000.5, "status": "sold"},
                {"name": "Studio", "status": "inactive"}
            ]
        }));
        assert_eq!(result.total_businesses, 3);
        assert_eq!(result.active_businesses, 1);
        assert_eq!(result.average_revenue, 8000.5 / 3.0);
    }

    #[test]
    fn test_legacy_keys() {
        let result = run(json!({
            "businesses": [
                {"name": "Merch Store", "revenue": 5000, "is_active": true},
                {"name": "Old Shop", "revenue": 1000, "is_active": false}
            ]
        }));
        assert_eq!(result.active_businesses, 1);
        assert_eq!(result.average_revenue, 3000.0);
    }

    #[test]
    fn test_status_defaults_to_active() {
        let result = run(json!({"businesses": [{"name": "Merch"}]}));
        assert_eq!(result.active_businesses, 1);
    }

    #[test]
    fn test_non_numeric_revenue() {
        let data = json!({"businesses": [{"annual_revenue": "a lot"}]});
        let err = analyze(data.as_object().unwrap()).unwrap_err();
        assert!(err.to_string().contains("businesses[0].annual_revenue"));
    }
}
