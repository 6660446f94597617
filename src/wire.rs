//! Helpers for reading backend-shaped records

use serde::{Deserialize, Deserializer};

/// Backend ids arrive as strings or integers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Required id, string or number
pub(crate) fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Optional id, string, number or null
pub(crate) fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

/// List of ids, a missing or null list reads as empty
pub(crate) fn id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RawId>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Record {
        #[serde(deserialize_with = "id")]
        id: String,
        #[serde(default, deserialize_with = "optional_id")]
        owner: Option<String>,
        #[serde(default, deserialize_with = "id_list")]
        members: Vec<String>,
    }

    #[test]
    fn test_numeric_and_text_ids() {
        let record: Record =
            serde_json::from_value(json!({ "id": 7, "owner": "u1", "members": [1, "2"] })).unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.owner.as_deref(), Some("u1"));
        assert_eq!(record.members, vec!["1", "2"]);
    }

    #[test]
    fn test_null_and_missing_fields() {
        let record: Record =
            serde_json::from_value(json!({ "id": "a", "owner": null, "members": null })).unwrap();
        assert!(record.owner.is_none());
        assert!(record.members.is_empty());

        let record: Record = serde_json::from_value(json!({ "id": "a" })).unwrap();
        assert!(record.members.is_empty());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(serde_json::from_value::<Record>(json!({ "owner": "u1" })).is_err());
    }
}
