//! URI template formatting
//!
//! Fills `{name}` placeholders from command data and splits the data into
//! the fields the path consumed and the leftovers that form the request body.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Outcome of formatting one template
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedUri {
    /// Template with every placeholder substituted
    pub path: String,
    /// Fields consumed by placeholders
    pub used: Map<String, Value>,
    /// Fields not referenced by the template
    pub unused: Map<String, Value>,
}

/// Render a value the way it appears inside a URI path
fn path_segment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Format `template` against `data`.
///
/// `{{` and `}}` stand for literal braces. Fails with [`Error::MissingKey`]
/// naming the first placeholder that `data` does not supply.
pub fn format_map(template: &str, data: Map<String, Value>) -> Result<FormattedUri> {
    let malformed = || Error::invalid_argument(format!("Malformed URI template '{}'", template));

    let mut path = String::with_capacity(template.len());
    let mut used_keys: HashSet<&str> = HashSet::new();
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        path.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            path.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            path.push('}');
            rest = &tail[2..];
        } else if tail.starts_with('}') {
            return Err(malformed());
        } else {
            let close = tail.find('}').ok_or_else(malformed)?;
            let key = &tail[1..close];
            if key.is_empty() || key.contains('{') {
                return Err(malformed());
            }
            let value = data.get(key).ok_or_else(|| {
                tracing::debug!("Endpoint {} is missing argument {}", template, key);
                Error::MissingKey {
                    template: template.to_string(),
                    key: key.to_string(),
                }
            })?;
            path.push_str(&path_segment(value));
            used_keys.insert(key);
            rest = &tail[close + 1..];
        }
    }
    path.push_str(rest);

    let (used, unused) = data
        .into_iter()
        .partition::<Vec<_>, _>(|(k, _)| used_keys.contains(k.as_str()));

    Ok(FormattedUri {
        path,
        used: used.into_iter().collect(),
        unused: unused.into_iter().collect(),
    })
}
