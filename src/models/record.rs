//! Annotated message record: one classified chat message in the session log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::SessionError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub text: String,
    pub label: String,
    pub score: f64,
}

impl Record {
    pub fn new(text: impl Into<String>, label: impl Into<String>, score: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            text: text.into(),
            label: label.into(),
            score,
        }
    }

    /// Check the record against the log's admission rules: non-blank text and
    /// a score inside [0.0, 1.0]. The label is opaque and not inspected.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.text.trim().is_empty() {
            return Err(SessionError::Validation(
                "message text is empty".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.score) {
            return Err(SessionError::Validation(format!(
                "score {} is outside [0.0, 1.0]",
                self.score
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_record() {
        let record = Record::new("shipping was quick", "positive", 0.91);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn rejects_blank_text() {
        let record = Record::new("   \t\n", "neutral", 0.5);
        assert!(matches!(
            record.validate(),
            Err(SessionError::Validation(_))
        ));
    }

    #[test]
    fn rejects_scores_outside_unit_interval() {
        let too_high = Record::new("great", "positive", 1.2);
        assert!(matches!(
            too_high.validate(),
            Err(SessionError::Validation(_))
        ));

        let negative = Record::new("bad", "negative", -0.1);
        assert!(matches!(
            negative.validate(),
            Err(SessionError::Validation(_))
        ));
    }

    #[test]
    fn accepts_boundary_scores() {
        assert!(Record::new("meh", "neutral", 0.0).validate().is_ok());
        assert!(Record::new("wow", "positive", 1.0).validate().is_ok());
    }

    #[test]
    fn serializes_every_field_for_the_ui() {
        let record = Record::new("love it", "positive", 0.98);
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("id").is_some());
        assert!(json.get("timestamp").is_some());
        assert_eq!(json["text"], "love it");
        assert_eq!(json["label"], "positive");
        assert_eq!(json["score"], 0.98);
    }

    #[test]
    fn ids_are_unique_per_record() {
        let a = Record::new("first", "neutral", 0.4);
        let b = Record::new("second", "neutral", 0.4);
        assert_ne!(a.id, b.id);
    }
}
