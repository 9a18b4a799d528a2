//! Response normalization: the single branch point of the request pipeline.
//!
//! The model is asked for JSON but replies with free text. A strict parse
//! decides the outcome: valid JSON is passed through exactly as decoded,
//! anything else becomes a fixed error envelope carrying the raw text for
//! client-side diagnosis. Both outcomes ship with HTTP 200.

use serde_json::{Value, json};
use tracing::warn;

use crate::prompts;

const PARSE_ERROR: &str = "Could not parse GPT output as JSON";
const SCHEMA_ERROR: &str = "Model output did not match the expected schema";

#[derive(Debug, Clone, Copy)]
pub enum AnalysisKind {
    Symptoms,
    Emotions,
}

impl AnalysisKind {
    pub fn system_prompt(&self) -> &'static str {
        match self {
            AnalysisKind::Symptoms => prompts::SYMPTOM_SYSTEM_PROMPT,
            AnalysisKind::Emotions => prompts::EMOTION_SYSTEM_PROMPT,
        }
    }

    pub fn user_prompt(&self, text: &str, language: &str) -> String {
        match self {
            AnalysisKind::Symptoms => prompts::symptom_user_prompt(text, language),
            AnalysisKind::Emotions => prompts::emotion_user_prompt(text, language),
        }
    }

    /// Top-level keys the prompt asks the model for. Only consulted by the
    /// opt-in schema check; the default path never looks at them.
    fn expected_keys(&self) -> &'static [&'static str] {
        match self {
            AnalysisKind::Symptoms => &["conditions", "homeCare", "seekHelp"],
            AnalysisKind::Emotions => &["primaryEmotion", "confidence", "insights", "copingTips"],
        }
    }
}

/// Turn the model's raw text into the response body.
///
/// With `schema_check` off this reproduces the stock contract: decoded JSON
/// passes through unmodified, non-JSON yields the parse envelope. With it on,
/// parsed output missing any expected key is flagged instead of passed
/// through.
pub fn normalize_output(kind: AnalysisKind, raw: &str, schema_check: bool) -> Value {
    let parsed = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(_) => {
            return json!({
                "error": PARSE_ERROR,
                "raw_output": raw,
            });
        }
    };

    if schema_check {
        let missing: Vec<&str> = kind
            .expected_keys()
            .iter()
            .copied()
            .filter(|key| parsed.get(key).is_none())
            .collect();

        if !missing.is_empty() {
            warn!(?missing, "model output missing expected keys");
            return json!({
                "error": SCHEMA_ERROR,
                "missing_keys": missing,
                "raw_output": raw,
            });
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_passes_through_exactly() {
        let raw = r#"{"conditions":["flu"],"homeCare":["rest"],"seekHelp":"if fever persists"}"#;
        let out = normalize_output(AnalysisKind::Symptoms, raw, false);
        assert_eq!(out, serde_json::from_str::<Value>(raw).unwrap());
    }

    #[test]
    fn unexpected_keys_still_pass_through_by_default() {
        let raw = r#"{"something":"else"}"#;
        let out = normalize_output(AnalysisKind::Symptoms, raw, false);
        assert_eq!(out, json!({"something": "else"}));
    }

    #[test]
    fn prose_becomes_the_parse_envelope() {
        let raw = "Sorry, I cannot help with that.";
        let out = normalize_output(AnalysisKind::Emotions, raw, false);
        assert_eq!(
            out,
            json!({
                "error": "Could not parse GPT output as JSON",
                "raw_output": "Sorry, I cannot help with that.",
            })
        );
    }

    #[test]
    fn truncated_json_becomes_the_parse_envelope() {
        let raw = r#"{"conditions": ["flu""#;
        let out = normalize_output(AnalysisKind::Symptoms, raw, false);
        assert_eq!(out["error"], "Could not parse GPT output as JSON");
        assert_eq!(out["raw_output"], raw);
    }

    #[test]
    fn schema_check_flags_missing_keys() {
        let raw = r#"{"conditions":["flu"]}"#;
        let out = normalize_output(AnalysisKind::Symptoms, raw, true);
        assert_eq!(out["error"], "Model output did not match the expected schema");
        assert_eq!(out["missing_keys"], json!(["homeCare", "seekHelp"]));
        assert_eq!(out["raw_output"], raw);
    }

    #[test]
    fn schema_check_accepts_a_complete_shape() {
        let raw = r#"{
            "primaryEmotion": "stress",
            "confidence": 85,
            "insights": "You sound stretched thin.",
            "copingTips": [{"tip": "take a walk", "color": "orange", "icon": "😮‍💨"}]
        }"#;
        let out = normalize_output(AnalysisKind::Emotions, raw, true);
        assert_eq!(out["primaryEmotion"], "stress");
        assert_eq!(out["confidence"], 85);
    }
}
