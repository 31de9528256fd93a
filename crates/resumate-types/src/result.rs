use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Response body of the analysis service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub best_match: String,
    pub scores: Scores,
    pub extracted_text: String,
    pub filtered_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Label to percentage, in the order the service sent them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scores(Vec<(String, f64)>);

impl Scores {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, score)| (label.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for Scores {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(l, s)| (l.into(), s)).collect())
    }
}

impl Serialize for Scores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, score) in &self.0 {
            map.serialize_entry(label, score)?;
        }
        map.end()
    }
}

struct ScoresVisitor;

impl<'de> Visitor<'de> for ScoresVisitor {
    type Value = Scores;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping labels to numbers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Scores, A::Error> {
        let mut entries: Vec<(String, f64)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((label, score)) = access.next_entry::<String, f64>()? {
            // Later duplicates win, like a JSON object lookup
            if let Some(existing) = entries.iter_mut().find(|(l, _)| *l == label) {
                existing.1 = score;
            } else {
                entries.push((label, score));
            }
        }
        Ok(Scores(entries))
    }
}

impl<'de> Deserialize<'de> for Scores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ScoresVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "filename": "resume.pdf",
        "role": "it_support",
        "best_match": "it_support",
        "scores": {"it_support": 87, "general": 42.5},
        "extracted_text": "Jane Doe...",
        "filtered_text": "SQL and Python..."
    }"#;

    #[test]
    fn parses_service_body() {
        let result: AnalysisResult = serde_json::from_str(BODY).unwrap();
        assert_eq!(result.best_match, "it_support");
        assert_eq!(result.scores.get("it_support"), Some(87.0));
        assert_eq!(result.scores.get("general"), Some(42.5));
        assert_eq!(result.filename.as_deref(), Some("resume.pdf"));
        assert_eq!(result.extracted_text, "Jane Doe...");
    }

    #[test]
    fn keeps_score_order() {
        let result: AnalysisResult = serde_json::from_str(BODY).unwrap();
        let labels: Vec<&str> = result.scores.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["it_support", "general"]);
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let body = r#"{"best_match":"x","scores":{},"extracted_text":"","filtered_text":""}"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert!(result.scores.is_empty());
        assert_eq!(result.role, None);
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let body = r#"{"best_match":"x","scores":{},"extracted_text":""}"#;
        assert!(serde_json::from_str::<AnalysisResult>(body).is_err());
    }

    #[test]
    fn non_numeric_score_is_an_error() {
        let body = r#"{"best_match":"x","scores":{"a":"high"},"extracted_text":"","filtered_text":""}"#;
        assert!(serde_json::from_str::<AnalysisResult>(body).is_err());
    }

    #[test]
    fn duplicate_labels_keep_last_value() {
        let scores: Scores = serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get("a"), Some(3.0));
    }
}
