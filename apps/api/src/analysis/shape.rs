//! Explicit shape predicates over untrusted model JSON.
//!
//! A field is usable only if it has the expected JSON type. Truthy values of
//! the wrong type (a string where a list is expected, `"false"` where a bool
//! is expected) are treated as missing.

use serde_json::Value;

/// Follows a path of object keys. Any non-object along the way yields `None`.
pub fn field<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.as_object()?.get(*key))
}

pub fn sequence(value: Option<&Value>) -> Option<&Vec<Value>> {
    value.and_then(Value::as_array)
}

/// A JSON array as a list of strings. Non-string elements are dropped.
pub fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    sequence(value).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

pub fn boolean(value: Option<&Value>) -> Option<bool> {
    value.and_then(Value::as_bool)
}

/// A string with at least one non-whitespace character.
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// The first alias that holds a sequence, as a string list.
pub fn first_string_list(source: Option<&Value>, aliases: &[&str]) -> Option<Vec<String>> {
    let source = source?;
    aliases
        .iter()
        .find_map(|alias| string_list(field(source, &[*alias])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_walks_nested_objects() {
        let v = json!({"a": {"b": {"c": 1}}});
        assert_eq!(field(&v, &["a", "b", "c"]), Some(&json!(1)));
        assert!(field(&v, &["a", "x"]).is_none());
    }

    #[test]
    fn test_field_through_non_object_is_none() {
        let v = json!({"a": [1, 2]});
        assert!(field(&v, &["a", "b"]).is_none());
        assert!(field(&json!("text"), &["a"]).is_none());
    }

    #[test]
    fn test_string_list_rejects_string() {
        assert!(string_list(Some(&json!("one concern"))).is_none());
        assert!(string_list(None).is_none());
    }

    #[test]
    fn test_string_list_drops_non_strings() {
        let list = string_list(Some(&json!(["a", 1, null, "b"]))).unwrap();
        assert_eq!(list, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_boolean_requires_bool_type() {
        assert_eq!(boolean(Some(&json!(false))), Some(false));
        assert!(boolean(Some(&json!("false"))).is_none());
        assert!(boolean(Some(&json!(1))).is_none());
    }

    #[test]
    fn test_non_empty_str_rejects_blank() {
        assert_eq!(non_empty_str(Some(&json!("x"))), Some("x"));
        assert!(non_empty_str(Some(&json!("   "))).is_none());
        assert!(non_empty_str(Some(&json!(42))).is_none());
    }

    #[test]
    fn test_first_string_list_honors_alias_order() {
        let v = json!({"new_name": ["new"], "old_name": ["old"]});
        assert_eq!(
            first_string_list(Some(&v), &["old_name", "new_name"]),
            Some(vec!["old".to_string()])
        );
    }

    #[test]
    fn test_first_string_list_skips_wrong_typed_alias() {
        let v = json!({"old_name": "not a list", "new_name": ["new"]});
        assert_eq!(
            first_string_list(Some(&v), &["old_name", "new_name"]),
            Some(vec!["new".to_string()])
        );
    }
}
