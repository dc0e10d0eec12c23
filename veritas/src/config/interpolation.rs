// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

use super::error::ConfigError;

/// Expand `${VAR_NAME}` references from the process environment.
///
/// An unset variable is an error. A `${` without a closing brace, or an empty
/// name, is kept literally.
pub fn resolve_variables(input: &str) -> Result<String, ConfigError> {
    resolve_with(input, |name| std::env::var(name).ok())
}

fn resolve_with(
    input: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if end > 0 => {
                let name = &after[..end];
                let value = lookup(name).ok_or_else(|| ConfigError::UndefinedVariable {
                    name: name.to_string(),
                })?;
                out.push_str(&value);
                rest = &after[end + 1..];
            }
            _ => {
                out.push_str("${");
                rest = after;
            }
        }
    }
    out.push_str(rest);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "HOST" => Some("scoring.internal".to_string()),
            "PORT" => Some("8443".to_string()),
            _ => None,
        }
    }

    #[test]
    fn expands_multiple_variables() {
        let out = resolve_with("https://${HOST}:${PORT}/v1/analyze", lookup).unwrap();
        assert_eq!(out, "https://scoring.internal:8443/v1/analyze");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(resolve_with("no vars $here", lookup).unwrap(), "no vars $here");
    }

    #[test]
    fn unset_variable_is_error() {
        let err = resolve_with("${MISSING}", lookup).unwrap_err();
        assert!(matches!(err, ConfigError::UndefinedVariable { name } if name == "MISSING"));
    }

    #[test]
    fn unterminated_and_empty_kept_literally() {
        assert_eq!(resolve_with("a${HOST", lookup).unwrap(), "a${HOST");
        assert_eq!(resolve_with("a${}b", lookup).unwrap(), "a${}b");
    }
}
