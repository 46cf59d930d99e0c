// src/grading/parser.rs — Parse grading responses into normalized feedback

use serde::Deserialize;

use super::normalize::normalize_score;
use crate::core::types::{snippet, FeedbackMetric, SessionFeedback};
use crate::infra::errors::CoachError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFeedback {
    overall_score: Option<RawScore>,
    #[serde(default)]
    summary: String,
    clarity: Option<RawMetric>,
    content: Option<RawMetric>,
    confidence: Option<RawMetric>,
    transcript_snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMetric {
    score: RawScore,
    #[serde(default)]
    analysis: String,
    #[serde(default)]
    tips: Vec<String>,
}

/// Models occasionally quote numbers; accept both forms.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

impl RawScore {
    fn value(&self, field: &str) -> Result<f64, CoachError> {
        match self {
            RawScore::Number(n) => Ok(*n),
            RawScore::Text(s) => s.trim().parse().map_err(|_| {
                CoachError::MalformedResponse(format!("`{field}` is not a number: {s:?}"))
            }),
        }
    }
}

impl RawMetric {
    fn normalize(self, field: &str) -> Result<FeedbackMetric, CoachError> {
        let score = normalize_score(self.score.value(field)?);
        Ok(FeedbackMetric {
            score,
            analysis: self.analysis,
            tips: self.tips,
        })
    }
}

/// Strip Markdown code fences and any chatter around the JSON object.
pub fn extract_json(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```") {
        // Drop the info string (```json) up to the first newline.
        body = rest.split_once('\n').map(|(_, b)| b).unwrap_or(rest);
        body = body.trim_end();
        body = body.strip_suffix("```").unwrap_or(body).trim();
    }

    match (body.find('{'), body.rfind('}')) {
        (Some(start), Some(end)) if start < end => &body[start..=end],
        _ => body,
    }
}

/// Parse a grading response. Every score is normalized; text fields pass
/// through untouched. `transcript` fills the snippet when the service
/// omits one.
pub fn parse_feedback(text: &str, transcript: &str) -> Result<SessionFeedback, CoachError> {
    let json = extract_json(text);
    let raw: RawFeedback = serde_json::from_str(json)
        .map_err(|e| CoachError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let missing = |field: &str| CoachError::MalformedResponse(format!("missing field `{field}`"));

    let overall = raw.overall_score.ok_or_else(|| missing("overallScore"))?;
    let clarity = raw.clarity.ok_or_else(|| missing("clarity"))?;
    let content = raw.content.ok_or_else(|| missing("content"))?;
    let confidence = raw.confidence.ok_or_else(|| missing("confidence"))?;

    Ok(SessionFeedback {
        overall_score: normalize_score(overall.value("overallScore")?),
        summary: raw.summary,
        clarity: clarity.normalize("clarity.score")?,
        content: content.normalize("content.score")?,
        confidence: confidence.normalize("confidence.score")?,
        transcript_snippet: raw
            .transcript_snippet
            .unwrap_or_else(|| snippet(transcript)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GOOD: &str = r#"{
        "overallScore": 78.4,
        "summary": "Solid answer with a clear result.",
        "clarity": { "score": 80, "analysis": "Well paced.", "tips": ["Pause less"] },
        "content": { "score": 120, "analysis": "Specific.", "tips": [] },
        "confidence": { "score": -3, "analysis": "Hesitant.", "tips": ["Own the result", "Slow down"] }
    }"#;

    // ─── extract_json tests ─────────────────────────────────────

    #[test]
    fn test_extract_plain_json() {
        assert_eq!(extract_json("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_extract_fenced_json() {
        let fenced = "```json\n{\"a\":1}\n```";
        assert_eq!(extract_json(fenced), "{\"a\":1}");
    }

    #[test]
    fn test_extract_fence_without_language() {
        assert_eq!(extract_json("```\n{\"a\":2}\n```\n"), "{\"a\":2}");
    }

    #[test]
    fn test_extract_with_surrounding_prose() {
        let text = "Here is the evaluation:\n{\"a\":3}\nHope this helps!";
        assert_eq!(extract_json(text), "{\"a\":3}");
    }

    #[test]
    fn test_extract_no_braces_returns_input() {
        assert_eq!(extract_json("not json"), "not json");
    }

    // ─── parse_feedback tests ───────────────────────────────────

    #[test]
    fn test_parse_normalizes_all_scores() {
        let fb = parse_feedback(GOOD, "I shipped the feature").unwrap();
        assert_eq!(fb.overall_score, 78);
        assert_eq!(fb.clarity.score, 80);
        assert_eq!(fb.content.score, 100);
        assert_eq!(fb.confidence.score, 0);
    }

    #[test]
    fn test_parse_passes_text_through() {
        let fb = parse_feedback(GOOD, "I shipped the feature").unwrap();
        assert_eq!(fb.summary, "Solid answer with a clear result.");
        assert_eq!(fb.clarity.analysis, "Well paced.");
        assert_eq!(fb.confidence.tips, vec!["Own the result", "Slow down"]);
        assert_eq!(fb.transcript_snippet, "I shipped the feature");
    }

    #[test]
    fn test_parse_keeps_service_snippet() {
        let text = GOOD.replacen('{', "{\"transcriptSnippet\": \"from service\",", 1);
        let fb = parse_feedback(&text, "local transcript").unwrap();
        assert_eq!(fb.transcript_snippet, "from service");
    }

    #[test]
    fn test_parse_fenced_response() {
        let fenced = format!("```json\n{GOOD}\n```");
        assert_eq!(parse_feedback(&fenced, "x").unwrap().overall_score, 78);
    }

    #[test]
    fn test_parse_string_scores() {
        let text = r#"{"overallScore": "64",
            "clarity": {"score": "70"}, "content": {"score": 60}, "confidence": {"score": 61.5}}"#;
        let fb = parse_feedback(text, "x").unwrap();
        assert_eq!(fb.overall_score, 64);
        assert_eq!(fb.clarity.score, 70);
        assert_eq!(fb.confidence.score, 62);
        assert!(fb.summary.is_empty());
        assert!(fb.content.tips.is_empty());
    }

    #[test]
    fn test_parse_missing_overall_score() {
        let text = r#"{"clarity": {"score": 1}, "content": {"score": 1}, "confidence": {"score": 1}}"#;
        let err = parse_feedback(text, "x").unwrap_err();
        assert!(matches!(err, CoachError::MalformedResponse(ref m) if m.contains("overallScore")));
    }

    #[test]
    fn test_parse_missing_metric() {
        let text = r#"{"overallScore": 50, "clarity": {"score": 1}, "content": {"score": 1}}"#;
        let err = parse_feedback(text, "x").unwrap_err();
        assert!(matches!(err, CoachError::MalformedResponse(ref m) if m.contains("confidence")));
    }

    #[test]
    fn test_parse_metric_without_score() {
        let text = r#"{"overallScore": 50, "clarity": {"analysis": "?"},
            "content": {"score": 1}, "confidence": {"score": 1}}"#;
        assert!(matches!(
            parse_feedback(text, "x"),
            Err(CoachError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_non_numeric_score() {
        let text = r#"{"overallScore": "great", "clarity": {"score": 1},
            "content": {"score": 1}, "confidence": {"score": 1}}"#;
        let err = parse_feedback(text, "x").unwrap_err();
        assert!(err.to_string().contains("overallScore"));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_feedback("{\"overallScore\": ", "x"),
            Err(CoachError::MalformedResponse(_))
        ));
    }
}
