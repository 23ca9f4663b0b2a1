use serde::{Deserialize, Serialize};

/// One decoder outcome for one input file.
///
/// The shape is decoder-dependent: greedy decoding yields bare text, beam
/// search yields a scored hypothesis, and external decoders hand back
/// arbitrary JSON. [`RawResult::into_text`] flattens all of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawResult {
    /// A hypothesis with a decoder score.
    Hypothesis { text: String, score: f32 },
    /// Plain transcript text.
    Text(String),
    /// Anything else a decoder might emit.
    Value(serde_json::Value),
}

impl RawResult {
    /// Extract the transcript text.
    ///
    /// Known shapes are probed in priority order — a `text` field, then a
    /// `hypothesis` field — with the value's generic string rendering as the
    /// fallback. Never fails; a shape we don't recognize still produces
    /// something printable.
    pub fn into_text(self) -> String {
        match self {
            RawResult::Hypothesis { text, .. } => text,
            RawResult::Text(text) => text,
            RawResult::Value(value) => {
                let probed = value
                    .get("text")
                    .or_else(|| value.get("hypothesis"))
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned);
                probed.unwrap_or_else(|| match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_variant() {
        let r = RawResult::Text("hello".into());
        assert_eq!(r.into_text(), "hello");
    }

    #[test]
    fn test_hypothesis_variant_ignores_score() {
        let r = RawResult::Hypothesis {
            text: "guten tag".into(),
            score: -1.25,
        };
        assert_eq!(r.into_text(), "guten tag");
    }

    #[test]
    fn test_value_with_text_field() {
        let r = RawResult::Value(json!({ "text": "bonjour", "lang": "fr" }));
        assert_eq!(r.into_text(), "bonjour");
    }

    #[test]
    fn test_value_prefers_text_over_hypothesis() {
        let r = RawResult::Value(json!({ "text": "first", "hypothesis": "second" }));
        assert_eq!(r.into_text(), "first");
    }

    #[test]
    fn test_value_with_hypothesis_field() {
        let r = RawResult::Value(json!({ "hypothesis": "hola" }));
        assert_eq!(r.into_text(), "hola");
    }

    #[test]
    fn test_value_bare_string() {
        let r = RawResult::Value(json!("plain"));
        assert_eq!(r.into_text(), "plain");
    }

    #[test]
    fn test_value_fallback_to_string_rendering() {
        // Neither text nor hypothesis present — fall back to the rendering.
        let r = RawResult::Value(json!({ "tokens": [1, 2, 3] }));
        let text = r.into_text();
        assert!(text.contains("tokens"));
    }

    #[test]
    fn test_deserialize_scored_hypothesis() {
        let r: RawResult =
            serde_json::from_str(r#"{ "text": "hi", "score": -0.5 }"#).unwrap();
        assert!(matches!(r, RawResult::Hypothesis { .. }));
        assert_eq!(r.into_text(), "hi");
    }

    #[test]
    fn test_deserialize_bare_string_as_text() {
        let r: RawResult = serde_json::from_str(r#""hi there""#).unwrap();
        assert!(matches!(r, RawResult::Text(_)));
    }
}
