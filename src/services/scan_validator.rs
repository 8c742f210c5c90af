use serde_json::Value;
use crate::errors::{GapAnalyzerError, GapResult};
use crate::structs::scan_result::ScanResult;

const REQUIRED_ARRAYS: [&str; 2] = ["issues", "pullRequests"];
const HEALTH_SCORE: &str = "healthScore";

/// Structural checks run before any analysis; failures never produce partial output.
pub struct ScanValidator;

impl ScanValidator {
    pub fn from_json_str(payload: &str) -> GapResult<ScanResult> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| GapAnalyzerError::invalid_scan_result("<payload>", &format!("is not valid JSON: {e}")))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> GapResult<ScanResult> {
        let object = value
            .as_object()
            .ok_or_else(|| GapAnalyzerError::invalid_scan_result("<payload>", "must be a JSON object"))?;

        for field in REQUIRED_ARRAYS {
            match object.get(field) {
                None | Some(Value::Null) => return Err(GapAnalyzerError::invalid_scan_result(field, "is missing")),
                Some(Value::Array(_)) => {}
                Some(_) => return Err(GapAnalyzerError::invalid_scan_result(field, "must be an array")),
            }
        }

        match object.get(HEALTH_SCORE) {
            None | Some(Value::Null) => return Err(GapAnalyzerError::invalid_scan_result(HEALTH_SCORE, "is missing")),
            Some(Value::Number(_)) => {}
            Some(_) => return Err(GapAnalyzerError::invalid_scan_result(HEALTH_SCORE, "must be a number")),
        }

        Self::check_elements(object, "issues")?;
        Self::check_elements(object, "pullRequests")?;

        let scan_result: ScanResult = serde_json::from_value(value)
            .map_err(|e| GapAnalyzerError::invalid_scan_result("<payload>", &e.to_string()))?;

        Self::validate(&scan_result)?;
        Ok(scan_result)
    }

    /// Invariants serde cannot express.
    pub fn validate(scan_result: &ScanResult) -> GapResult<()> {
        let score = scan_result.health_score;
        if !score.is_finite() || !(0.0..=100.0).contains(&score) {
            return Err(GapAnalyzerError::invalid_scan_result(
                HEALTH_SCORE,
                &format!("must be between 0 and 100, got {score}"),
            ));
        }
        Ok(())
    }

    fn check_elements(object: &serde_json::Map<String, Value>, field: &str) -> GapResult<()> {
        let Some(Value::Array(items)) = object.get(field) else {
            return Ok(());
        };

        for (index, item) in items.iter().enumerate() {
            let Some(element) = item.as_object() else {
                return Err(GapAnalyzerError::invalid_scan_result(
                    &format!("{field}[{index}]"),
                    "must be an object",
                ));
            };
            for key in ["number", "title"] {
                if element.get(key).map_or(true, Value::is_null) {
                    return Err(GapAnalyzerError::invalid_scan_result(
                        &format!("{field}[{index}].{key}"),
                        "is missing",
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    fn field_of(error: GapAnalyzerError) -> String {
        match error {
            GapAnalyzerError::InvalidScanResultError { field, .. } => field,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn accepts_a_minimal_scan() {
        let scan = ScanValidator::from_value(json!({
            "issues": [],
            "pullRequests": [],
            "healthScore": 88
        }))
        .unwrap();
        assert!(scan.issues.is_empty());
        assert!((scan.health_score - 88.0).abs() < f64::EPSILON);
        assert!(scan.last_scan_time.is_none());
    }

    #[test]
    fn missing_fields_are_named() {
        let error = ScanValidator::from_value(json!({ "issues": [], "healthScore": 50 })).unwrap_err();
        assert_eq!(field_of(error), "pullRequests");

        let error = ScanValidator::from_value(json!({ "issues": [], "pullRequests": [] })).unwrap_err();
        assert_eq!(field_of(error), "healthScore");

        let error = ScanValidator::from_value(json!({ "issues": null, "pullRequests": [], "healthScore": 1 })).unwrap_err();
        assert_eq!(field_of(error), "issues");
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        assert!(ScanValidator::from_value(json!([1, 2])).is_err());
        let error = ScanValidator::from_value(json!({
            "issues": {}, "pullRequests": [], "healthScore": 1
        }))
        .unwrap_err();
        assert_eq!(field_of(error), "issues");

        let error = ScanValidator::from_value(json!({
            "issues": [], "pullRequests": [], "healthScore": "high"
        }))
        .unwrap_err();
        assert_eq!(field_of(error), "healthScore");
    }

    #[test]
    fn issue_elements_need_number_and_title() {
        let error = ScanValidator::from_value(json!({
            "issues": [{ "number": 1, "title": "ok", "state": "open" }, { "number": 2, "state": "open" }],
            "pullRequests": [],
            "healthScore": 70
        }))
        .unwrap_err();
        assert_eq!(field_of(error), "issues[1].title");
    }

    #[test]
    fn unknown_issue_state_is_invalid() {
        let error = ScanValidator::from_value(json!({
            "issues": [{ "number": 1, "title": "x", "state": "merged" }],
            "pullRequests": [],
            "healthScore": 70
        }))
        .unwrap_err();
        assert!(matches!(error, GapAnalyzerError::InvalidScanResultError { .. }));
    }

    #[test]
    fn health_score_must_be_in_range() {
        let error = ScanValidator::from_value(json!({
            "issues": [], "pullRequests": [], "healthScore": 140
        }))
        .unwrap_err();
        assert_eq!(field_of(error), "healthScore");
        assert!(ScanValidator::validate(&ScanResult::new(vec![], vec![], f64::NAN)).is_err());
    }

    #[test]
    fn garbage_text_is_invalid() {
        let error = ScanValidator::from_json_str("{ not json").unwrap_err();
        assert_eq!(field_of(error), "<payload>");
    }
}
