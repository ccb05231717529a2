use serde::Deserialize;

/// Request body for submitting a career assessment. `results` is an
/// opaque payload stored as given, with no schema validation.
#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub answers: Vec<String>,
    #[serde(default)]
    pub results: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_default_to_null_when_absent() {
        let req: SubmitAssessmentRequest =
            serde_json::from_str(r#"{"answers":["a","b"]}"#).unwrap();
        assert_eq!(req.answers, vec!["a", "b"]);
        assert!(req.results.is_null());
    }

    #[test]
    fn results_accept_arbitrary_shape() {
        let req: SubmitAssessmentRequest = serde_json::from_str(
            r#"{"answers":[],"results":{"scores":{"analytical":9},"tags":["stem",3]}}"#,
        )
        .unwrap();
        assert_eq!(req.results["scores"]["analytical"], 9);
        assert_eq!(req.results["tags"][1], 3);
    }
}
