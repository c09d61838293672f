//! URL path templates for App Store Connect resources.
//!
//! Templates use `{name}` placeholders, e.g. `apps/{id}/inAppPurchases`.
//! Interpolated values are percent-encoded so an ID can never introduce
//! extra path segments or a query string.
//!
//! # Example
//!
//! ```rust
//! use asc_api::rest::build_path;
//!
//! let path = build_path("appScreenshotSets/{id}/relationships/appScreenshots", &[("id", "42")]);
//! assert_eq!(path, "appScreenshotSets/42/relationships/appScreenshots");
//! ```

/// Builds a path from a template by interpolating IDs.
///
/// Placeholders without a matching entry are left untouched.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}
