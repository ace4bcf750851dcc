use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

/// Structured description of a processed video, as returned by the analysis endpoint.
///
/// Every field is optional; the renderer omits whatever is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_moments: Option<Vec<KeyMoment>>,
    /// Carried for the backend's response shape; not rendered.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub quiz: Option<Quiz>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<String>,
    /// Not rendered either; a value of the wrong type is dropped.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMoment {
    pub timestamp: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub answer_key: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct: usize,
}

/// Body of a successful response.
#[derive(Debug, Deserialize)]
pub struct AnalysisEnvelope {
    #[serde(default)]
    pub analysis: Option<AnalysisResult>,
}

/// Body of a failed response.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<String>,
}

// An unrendered field we can't read should not take the rest of the analysis down with it.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_fields() {
        let json = r#"{
            "summary": "S",
            "visualDescription": "V",
            "keyMoments": [{"timestamp": "00:10", "description": "Intro"}],
            "processingTime": "4.2s",
            "confidence": 0.87
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.summary.as_deref(), Some("S"));
        assert_eq!(result.visual_description.as_deref(), Some("V"));
        assert_eq!(result.processing_time.as_deref(), Some("4.2s"));
        assert_eq!(result.confidence, Some(0.87));
        assert_eq!(result.key_moments.unwrap()[0].timestamp, "00:10");
        assert!(result.transcription.is_none());
    }

    #[test]
    fn keeps_a_well_formed_quiz() {
        let json = r#"{"quiz": {
            "questions": [{"question": "Q1", "options": ["a", "b"], "correct": 1}],
            "answerKey": ["b"]
        }}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        let quiz = result.quiz.unwrap();
        assert_eq!(quiz.questions[0].correct, 1);
        assert_eq!(quiz.answer_key, vec!["b".to_string()]);
    }

    #[test]
    fn tolerates_a_malformed_quiz() {
        let json = r#"{"summary": "S", "quiz": {"questions": "not a list"}}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.summary.as_deref(), Some("S"));
        assert!(result.quiz.is_none());
    }

    #[test]
    fn tolerates_a_wrong_typed_confidence() {
        let json = r#"{"summary": "S", "confidence": "high"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.summary.as_deref(), Some("S"));
        assert!(result.confidence.is_none());
    }

    #[test]
    fn ignores_unknown_fields_and_missing_analysis() {
        let envelope: AnalysisEnvelope = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(envelope.analysis.is_none());

        let envelope: AnalysisEnvelope =
            serde_json::from_str(r#"{"analysis": {"summary": "S", "extra": 1}}"#).unwrap();
        assert_eq!(envelope.analysis.unwrap().summary.as_deref(), Some("S"));
    }
}
