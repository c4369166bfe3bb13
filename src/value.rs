//! Runtime inspection of JSON values: type names and deep lookup.

use serde_json::Value;

/// The JSON kinds [`is_data_type`] can test for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl DataType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => DataType::Null,
            Value::Bool(_) => DataType::Boolean,
            Value::Number(_) => DataType::Number,
            Value::String(_) => DataType::String,
            Value::Array(_) => DataType::Array,
            Value::Object(_) => DataType::Object,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::Null => "Null",
            DataType::Boolean => "Boolean",
            DataType::Number => "Number",
            DataType::String => "String",
            DataType::Array => "Array",
            DataType::Object => "Object",
        }
    }
}

/// Type name of `value`: `"Null"`, `"Boolean"`, `"Number"`, `"String"`,
/// `"Array"` or `"Object"`.
pub fn get_type_of(value: &Value) -> &'static str {
    DataType::of(value).name()
}

pub fn is_data_type(kind: DataType, value: &Value) -> bool {
    DataType::of(value) == kind
}

/// Look up a dot-separated path such as `"user.tags.0"`.
///
/// Object segments are keys; array segments must parse as an index.
/// Returns `None` as soon as a segment is missing.
pub fn get_in<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    get_in_path(value, path.split('.'))
}

/// [`get_in`] with pre-split segments, for keys that contain dots.
pub fn get_in_path<'a, I, S>(value: &'a Value, segments: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .try_fold(value, |current, segment| {
            let segment = segment.as_ref();
            match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_names() {
        assert_eq!(get_type_of(&json!("hello world")), "String");
        assert_eq!(get_type_of(&json!(1000)), "Number");
        assert_eq!(get_type_of(&json!(1.5)), "Number");
        assert_eq!(get_type_of(&json!(true)), "Boolean");
        assert_eq!(get_type_of(&Value::Null), "Null");
        assert_eq!(get_type_of(&json!({})), "Object");
        assert_eq!(get_type_of(&json!([])), "Array");
    }

    #[test]
    fn data_type_checks() {
        assert!(is_data_type(DataType::Array, &json!([1, 2])));
        assert!(!is_data_type(DataType::Object, &json!([1, 2])));
        assert!(is_data_type(DataType::Number, &json!(-3)));
    }

    #[test]
    fn deep_lookup() {
        let doc = json!({"user": {"name": "ada", "tags": ["x", "y"], "nick": null}});
        assert_eq!(get_in(&doc, "user.name"), Some(&json!("ada")));
        assert_eq!(get_in(&doc, "user.tags.1"), Some(&json!("y")));
        assert_eq!(get_in(&doc, "user.nick"), Some(&Value::Null));
    }

    #[test]
    fn missing_segments_are_none() {
        let doc = json!({"a": {"b": [1]}});
        assert_eq!(get_in(&doc, "a.c"), None);
        assert_eq!(get_in(&doc, "a.b.5"), None);
        assert_eq!(get_in(&doc, "a.b.first"), None);
        assert_eq!(get_in(&doc, "a.b.0.deeper"), None);
    }

    #[test]
    fn dotted_keys_via_segments() {
        let doc = json!({"a.b": {"c": 2}});
        assert_eq!(get_in(&doc, "a.b.c"), None);
        assert_eq!(get_in_path(&doc, ["a.b", "c"]), Some(&json!(2)));
    }
}
