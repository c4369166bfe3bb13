//! URL component encoding and query-string parsing.

use std::collections::BTreeMap;

use serde::Serialize;
use ::url::form_urlencoded;

/// Percent-encode `input` for use as a query component.
///
/// Only ASCII alphanumerics and `-_.` pass through, spaces become `+`, and
/// every other byte of the UTF-8 form is written as `%XX`.
pub fn encode_url(input: &str) -> String {
    // The form serializer leaves `*` alone.
    form_urlencoded::byte_serialize(input.as_bytes())
        .collect::<String>()
        .replace('*', "%2A")
}

/// One query parameter: a lone value, or every value of a repeated key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UrlParam {
    Single(String),
    Multiple(Vec<String>),
}

impl UrlParam {
    fn push(&mut self, value: String) {
        match self {
            UrlParam::Single(first) => {
                let first = std::mem::take(first);
                *self = UrlParam::Multiple(vec![first, value]);
            }
            UrlParam::Multiple(values) => values.push(value),
        }
    }

    /// All values in appearance order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            UrlParam::Single(v) => vec![v.as_str()],
            UrlParam::Multiple(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

/// Parse a query string (leading `?` optional) into a key → value map.
///
/// Every occurrence of a repeated key is kept, empty values included:
/// `"a=&a=x"` gives `Multiple(["", "x"])` rather than letting the later
/// non-empty value replace the empty one.
pub fn get_url_params(query: &str) -> BTreeMap<String, UrlParam> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params: BTreeMap<String, UrlParam> = BTreeMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.into_owned();
        match params.get_mut(key.as_ref()) {
            Some(existing) => existing.push(value),
            None => {
                params.insert(key.into_owned(), UrlParam::Single(value));
            }
        }
    }
    params
}
