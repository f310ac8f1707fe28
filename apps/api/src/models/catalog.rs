use std::fmt;

use serde::{Deserialize, Serialize};

/// One facet of artistic inclination. Closed set: unknown tags fail deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    Conceptual,
    Commercial,
    FineArt,
    Design,
    Tech,
    Fashion,
}

impl Trait {
    #[cfg(test)]
    pub const ALL: [Trait; 6] = [
        Trait::Conceptual,
        Trait::Commercial,
        Trait::FineArt,
        Trait::Design,
        Trait::Tech,
        Trait::Fashion,
    ];

    /// Wire tag, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trait::Conceptual => "conceptual",
            Trait::Commercial => "commercial",
            Trait::FineArt => "fine_art",
            Trait::Design => "design",
            Trait::Tech => "tech",
            Trait::Fashion => "fashion",
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub traits: Vec<Trait>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<AnswerOption>,
}

/// A catalog school. `color`, `text_color` and `bg_accent` are UI styling
/// hints passed through untouched; matching only reads `tags`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub location: String,
    pub description: String,
    pub tags: Vec<Trait>,
    pub color: String,
    pub text_color: String,
    pub bg_accent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_serializes_snake_case() {
        let json = serde_json::to_string(&Trait::FineArt).unwrap();
        assert_eq!(json, "\"fine_art\"");
    }

    #[test]
    fn test_as_str_matches_serde_tag() {
        for t in Trait::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_unknown_trait_is_rejected() {
        let result: Result<Trait, _> = serde_json::from_str("\"sculpture\"");
        assert!(result.is_err(), "traits outside the closed set must not parse");
    }

    #[test]
    fn test_school_uses_camel_case_fields() {
        let json = serde_json::json!({
            "id": "risd",
            "name": "Rhode Island School of Design",
            "shortName": "RISD",
            "location": "Providence, USA",
            "description": "Studio-heavy.",
            "tags": ["fine_art", "design"],
            "color": "bg-blue-600",
            "textColor": "text-blue-600",
            "bgAccent": "bg-blue-50"
        });
        let school: School = serde_json::from_value(json).unwrap();
        assert_eq!(school.short_name, "RISD");
        assert_eq!(school.tags, vec![Trait::FineArt, Trait::Design]);
    }
}
