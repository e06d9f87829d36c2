//! Wire types for the blog collection REST API.
//!
//! The backend names its fields after its own persistence model
//! (`categoryId`, `systemCreatedDate`, ...). These structs keep those names on
//! the wire and expose plain Rust field names to callers.

use std::{
    convert::Infallible,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the remote collection. Emitted either as a JSON
/// number or as a JSON string depending on the backend.
///
/// Equality and hashing follow the displayed form, so `5` and `"5"` name the
/// same record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(number), Self::Text(text)) | (Self::Text(text), Self::Number(number)) => {
                *text == number.to_string()
            }
        }
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(number) => number.to_string().hash(state),
            Self::Text(text) => text.hash(state),
        }
    }
}

impl FromStr for RecordId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<i64>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(trimmed.to_string()),
        })
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "categoryId")]
    pub id: RecordId,
    #[serde(rename = "categoryName", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "systemCreatedDate", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWriteRequest {
    #[serde(rename = "categoryName")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(rename = "blogId")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub header: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(rename = "categoryId", default)]
    pub category_id: Option<RecordId>,
    #[serde(rename = "systemCreatedDate", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWriteRequest {
    pub header: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<RecordId>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_accepts_numbers_and_strings() {
        let numeric: RecordId = serde_json::from_str("42").expect("numeric id");
        let textual: RecordId = serde_json::from_str(r#""c-7""#).expect("text id");
        assert_eq!(numeric, RecordId::Number(42));
        assert_eq!(textual, RecordId::Text("c-7".into()));
        assert_eq!(numeric.to_string(), "42");
    }

    #[test]
    fn record_id_parses_user_input() {
        assert_eq!("17".parse::<RecordId>(), Ok(RecordId::Number(17)));
        assert_eq!(
            " abc ".parse::<RecordId>(),
            Ok(RecordId::Text("abc".into()))
        );
    }

    #[test]
    fn numeric_text_id_matches_number() {
        use std::collections::HashSet;

        let from_server: RecordId = serde_json::from_str(r#""5""#).expect("text id");
        let from_user: RecordId = "5".parse().expect("parsed id");
        assert_eq!(from_server, RecordId::Text("5".into()));
        assert_eq!(from_server, from_user);
        assert_ne!(RecordId::Text("05".into()), RecordId::Number(5));

        let mut seen = HashSet::new();
        assert!(seen.insert(from_server));
        assert!(!seen.insert(from_user));
    }

    #[test]
    fn category_tolerates_missing_and_null_fields() {
        let record: CategoryRecord =
            serde_json::from_str(r#"{"categoryId":3,"categoryName":null}"#).expect("category");
        assert_eq!(record.id, RecordId::Number(3));
        assert_eq!(record.name, "");
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn post_request_omits_absent_category() {
        let request = PostWriteRequest {
            header: "H".into(),
            title: "T".into(),
            content: "C".into(),
            category_id: None,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert!(json.get("categoryId").is_none());
        assert_eq!(json["header"], "H");
    }
}
