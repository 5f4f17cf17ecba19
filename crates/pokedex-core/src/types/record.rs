//! Record types
//!
//! `RecordDraft` is the form-shaped input (everything arrives as text, the
//! way a browser form posts it). Validation turns it into `RecordFields`
//! exactly once, at the boundary; adapters and the HTTP layer never parse
//! field values themselves.

use crate::error::{PokedexError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A cataloged Pokémon entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    /// The domain "type" (Electric, Water, ...)
    pub category: String,
    pub level: i64,
    pub capture_date: NaiveDate,
    pub evolution: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Overwrites the mutable fields from a validated field set.
    /// `id` and `created_at` are never touched.
    pub fn apply(&mut self, fields: &RecordFields) {
        self.name = fields.name.clone();
        self.category = fields.category.clone();
        self.level = fields.level;
        self.capture_date = fields.capture_date;
        self.evolution = fields.evolution.clone();
        self.description = fields.description.clone();
    }
}

/// Raw create/update input, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "level_as_string")]
    pub level: String,
    #[serde(default)]
    pub capture_date: String,
    #[serde(default)]
    pub evolution: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Validated, fully-typed field set shared by create and update
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    pub name: String,
    pub category: String,
    pub level: i64,
    pub capture_date: NaiveDate,
    pub evolution: Option<String>,
    pub description: Option<String>,
}

impl RecordDraft {
    /// Checks required fields and coerces `level`/`capture_date` to their
    /// canonical types. Missing fields are all reported together so the
    /// caller can correct the whole submission in one pass.
    pub fn validate(&self) -> Result<RecordFields> {
        let mut missing = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("level", &self.level),
            ("capture_date", &self.capture_date),
        ] {
            if value.trim().is_empty() {
                missing.push(field.to_string());
            }
        }
        if !missing.is_empty() {
            return Err(PokedexError::MissingFields { fields: missing });
        }

        let level: i64 = self
            .level
            .trim()
            .parse()
            .map_err(|_| PokedexError::InvalidField {
                field: "level".to_string(),
                reason: format!("'{}' is not an integer", self.level.trim()),
            })?;

        let capture_date = NaiveDate::parse_from_str(self.capture_date.trim(), "%Y-%m-%d")
            .map_err(|_| PokedexError::InvalidField {
                field: "capture_date".to_string(),
                reason: format!("'{}' is not a YYYY-MM-DD date", self.capture_date.trim()),
            })?;

        Ok(RecordFields {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            level,
            capture_date,
            evolution: none_if_blank(&self.evolution),
            description: none_if_blank(&self.description),
        })
    }
}

// Form posts send the level as text; JSON clients tend to send a number.
// Both collapse to text here and get parsed once in `validate`.
fn level_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

fn none_if_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RecordDraft {
        RecordDraft {
            name: "Pikachu".to_string(),
            category: "Electric".to_string(),
            level: "5".to_string(),
            capture_date: "2024-01-01".to_string(),
            evolution: Some("Raichu".to_string()),
            description: None,
        }
    }

    #[test]
    fn valid_draft_produces_typed_fields() {
        let fields = draft().validate().unwrap();
        assert_eq!(fields.name, "Pikachu");
        assert_eq!(fields.level, 5);
        assert_eq!(
            fields.capture_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(fields.evolution.as_deref(), Some("Raichu"));
        assert_eq!(fields.description, None);
    }

    #[test]
    fn all_missing_fields_are_reported_together() {
        let empty = RecordDraft {
            evolution: Some("Raichu".to_string()),
            ..Default::default()
        };
        let err = empty.validate().unwrap_err();
        assert_eq!(
            err,
            PokedexError::MissingFields {
                fields: vec![
                    "name".to_string(),
                    "category".to_string(),
                    "level".to_string(),
                    "capture_date".to_string(),
                ]
            }
        );
        assert!(err.is_validation());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut d = draft();
        d.name = "   ".to_string();
        let err = d.validate().unwrap_err();
        assert_eq!(
            err,
            PokedexError::MissingFields {
                fields: vec!["name".to_string()]
            }
        );
    }

    #[test]
    fn non_numeric_level_is_rejected() {
        let mut d = draft();
        d.level = "over 9000".to_string();
        match d.validate().unwrap_err() {
            PokedexError::InvalidField { field, .. } => assert_eq!(field, "level"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut d = draft();
        d.capture_date = "01/01/2024".to_string();
        match d.validate().unwrap_err() {
            PokedexError::InvalidField { field, .. } => assert_eq!(field, "capture_date"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let mut d = draft();
        d.evolution = Some("  ".to_string());
        d.description = Some(String::new());
        let fields = d.validate().unwrap();
        assert_eq!(fields.evolution, None);
        assert_eq!(fields.description, None);
    }

    #[test]
    fn draft_accepts_numeric_and_text_levels() {
        let from_number: RecordDraft =
            serde_json::from_value(serde_json::json!({ "name": "Pikachu", "level": 5 })).unwrap();
        assert_eq!(from_number.level, "5");

        let from_text: RecordDraft =
            serde_json::from_value(serde_json::json!({ "name": "Pikachu", "level": "5" })).unwrap();
        assert_eq!(from_text.level, "5");

        let absent: RecordDraft = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(absent.level, "");
    }

    #[test]
    fn apply_leaves_id_and_created_at_untouched() {
        let created_at = Utc::now();
        let mut record = Record {
            id: 7,
            name: "Pikachu".to_string(),
            category: "Electric".to_string(),
            level: 5,
            capture_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            evolution: None,
            description: None,
            created_at,
        };

        let mut d = draft();
        d.name = "Raichu".to_string();
        d.level = "20".to_string();
        record.apply(&d.validate().unwrap());

        assert_eq!(record.id, 7);
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.name, "Raichu");
        assert_eq!(record.level, 20);
    }
}
