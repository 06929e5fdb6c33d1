//! `{{name}}` placeholder substitution.

use std::{
    borrow::Cow,
    collections::{BTreeSet, HashMap},
    sync::LazyLock,
};

use regex::{Captures, Regex};

/// Values substituted into `{{name}}` placeholders.
pub type Variables = HashMap<String, String>;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").unwrap());

/// Replace each `{{name}}` with `variables[name]`.
///
/// Placeholders without a value are kept verbatim. Whitespace inside the
/// braces is ignored, so `{{ name }}` and `{{name}}` are the same.
pub fn interpolate<'a>(template: &'a str, variables: &Variables) -> Cow<'a, str> {
    if variables.is_empty() {
        return Cow::Borrowed(template);
    }
    PLACEHOLDER.replace_all(template, |caps: &Captures| match variables.get(&caps[1]) {
        Some(value) => value.clone(),
        None => caps[0].to_string(),
    })
}

/// Names of all placeholders in `template`.
pub fn placeholders(template: &str) -> BTreeSet<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
