//! Deserializers for the loosely typed values Wish sends.

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

/// Reads a string, number or boolean as `Option<String>`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!("expected a scalar, got {other}"))),
    }
}

/// Reads `true`, `"True"`, `"false"`, `1`, `"0"` and the like as `Option<bool>`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b)),
        Value::Number(n) => Ok(Some(n.as_f64().is_some_and(|f| f != 0.0))),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            other => Err(D::Error::custom(format!("invalid boolean '{other}'"))),
        },
        other => Err(D::Error::custom(format!("expected a boolean, got {other}"))),
    }
}

/// Reads a list whose items may each be wrapped as `{"<Type>": {...}}`.
///
/// `null` reads as an empty list.
pub fn wrapped_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => return Err(D::Error::custom(format!("expected a list, got {other}"))),
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(unwrap_any(item)).map_err(D::Error::custom))
        .collect()
}

fn unwrap_any(item: Value) -> Value {
    match item {
        Value::Object(map) if map.len() == 1 && map.values().all(Value::is_object) => {
            map.into_iter().next().map_or(Value::Null, |(_, inner)| inner)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_string")]
        amount: Option<String>,
        #[serde(default, deserialize_with = "lenient_bool")]
        enabled: Option<bool>,
        #[serde(default, deserialize_with = "wrapped_list")]
        tags: Vec<Inner>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Inner {
        name: String,
    }

    #[test]
    fn test_lenient_string_accepts_numbers_and_strings() {
        let probe: Probe = serde_json::from_value(json!({"amount": 10.5})).unwrap();
        assert_eq!(probe.amount.as_deref(), Some("10.5"));

        let probe: Probe = serde_json::from_value(json!({"amount": "7"})).unwrap();
        assert_eq!(probe.amount.as_deref(), Some("7"));

        let probe: Probe = serde_json::from_value(json!({})).unwrap();
        assert!(probe.amount.is_none());
    }

    #[test]
    fn test_lenient_bool_variants() {
        for (raw, expected) in [
            (json!("True"), Some(true)),
            (json!("False"), Some(false)),
            (json!(true), Some(true)),
            (json!(0), Some(false)),
            (json!(""), None),
            (json!(null), None),
        ] {
            let probe: Probe = serde_json::from_value(json!({ "enabled": raw })).unwrap();
            assert_eq!(probe.enabled, expected);
        }

        assert!(serde_json::from_value::<Probe>(json!({"enabled": "maybe"})).is_err());
    }

    #[test]
    fn test_wrapped_list_accepts_wrapped_and_bare_items() {
        let probe: Probe = serde_json::from_value(json!({
            "tags": [{"Tag": {"name": "red"}}, {"name": "blue"}]
        }))
        .unwrap();
        assert_eq!(
            probe.tags,
            vec![
                Inner { name: "red".into() },
                Inner {
                    name: "blue".into()
                }
            ]
        );

        let probe: Probe = serde_json::from_value(json!({"tags": null})).unwrap();
        assert!(probe.tags.is_empty());
    }
}
