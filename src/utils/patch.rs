//! Tri-state fields for partial updates.
//!
//! `None` means the field was omitted, `Some(None)` an explicit `null`,
//! `Some(Some(v))` a new value. Use with
//! `#[serde(default, deserialize_with = "nullable")]`.

use serde::{Deserialize, Deserializer};

use crate::error::{AppError, AppResult};

pub type Patch<T> = Option<Option<T>>;

pub fn nullable<'de, D, T>(deserializer: D) -> Result<Patch<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Unwraps a patch for a column that cannot hold `NULL`.
pub fn non_null<T>(field: &str, value: Patch<T>) -> AppResult<Option<T>> {
    match value {
        None => Ok(None),
        Some(Some(v)) => Ok(Some(v)),
        Some(None) => Err(AppError::invalid_input(format!("{field} cannot be null"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "nullable")]
        bio: Patch<String>,
        #[serde(default, deserialize_with = "nullable")]
        name: Patch<String>,
    }

    #[test]
    fn distinguishes_omitted_null_and_value() {
        let omitted: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(omitted.bio, None);

        let cleared: Sample = serde_json::from_str(r#"{"bio": null}"#).unwrap();
        assert_eq!(cleared.bio, Some(None));

        let set: Sample = serde_json::from_str(r#"{"bio": "hello", "name": "A"}"#).unwrap();
        assert_eq!(set.bio, Some(Some("hello".to_string())));
        assert_eq!(set.name, Some(Some("A".to_string())));
    }

    #[test]
    fn non_null_rejects_explicit_null() {
        assert_eq!(non_null::<String>("name", None).unwrap(), None);
        assert_eq!(
            non_null("name", Some(Some("x".to_string()))).unwrap(),
            Some("x".to_string())
        );
        let err = non_null::<String>("name", Some(None)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
