//! URL query parameter encoding.
//!
//! App Store Connect uses bracketed parameter names such as `fields[apps]`,
//! `filter[bundleId]` and `limit[appStoreVersions]`. Query option structs
//! name their fields with `#[serde(rename = "...")]` and are flattened into
//! [`QueryParams`] through `serde_json`:
//!
//! - `null`, empty strings and empty arrays are skipped
//! - arrays become one comma-joined parameter
//! - numbers and booleans are stringified
//!
//! Keys are emitted verbatim and values are percent-encoded.

use serde::Serialize;
use serde_json::Value;

/// An ordered list of query parameters.
///
/// # Example
///
/// ```rust
/// use asc_api::clients::QueryParams;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Query {
///     #[serde(rename = "filter[id]")]
///     filter_id: Vec<String>,
///     limit: Option<u32>,
///     cursor: Option<String>,
/// }
///
/// let query = QueryParams::from_options(&Query {
///     filter_id: vec!["123".to_string()],
///     limit: Some(10),
///     cursor: None,
/// })
/// .unwrap();
/// assert_eq!(query.to_query_string(), "filter[id]=123&limit=10");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Flattens a serializable option struct into query parameters.
    ///
    /// Parameters come out sorted by key. Anything that does not serialize
    /// to a JSON object (for example `()`) yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `options` cannot be serialized.
    pub fn from_options<T: Serialize + ?Sized>(options: &T) -> Result<Self, serde_json::Error> {
        let Value::Object(map) = serde_json::to_value(options)? else {
            return Ok(Self::new());
        };

        let mut params = Self::new();
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => {
                    if !s.is_empty() {
                        params.push(key, s);
                    }
                }
                Value::Number(n) => params.push(key, n.to_string()),
                Value::Bool(b) => params.push(key, b.to_string()),
                Value::Array(items) => {
                    let values: Vec<String> = items.iter().filter_map(scalar_to_string).collect();
                    if !values.is_empty() {
                        params.push(key, values.join(","));
                    }
                }
                Value::Object(_) => params.push(key, value.to_string()),
            }
        }
        params.0.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(params)
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Returns the first value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the parameters as `key=value&...` without a leading `?`.
    ///
    /// Commas separating list values stay literal.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value).replace("%2C", ",")))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
