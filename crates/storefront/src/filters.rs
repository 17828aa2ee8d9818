//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the stylesheet path, fingerprinted when a hash was computed at build time.
///
/// Usage in templates: `{{ ""|stylesheet_path }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn stylesheet_path(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(css_path(env!("CSS_HASH")))
}

fn css_path(hash: &str) -> String {
    if hash.is_empty() {
        "/static/css/main.css".to_string()
    } else {
        format!("/static/css/derived/main.{hash}.css")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_path() {
        assert_eq!(css_path(""), "/static/css/main.css");
        assert_eq!(css_path("abcd1234"), "/static/css/derived/main.abcd1234.css");
    }
}
