//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect duplicate route paths before the table is built
//! - Enforce path shape (URL-safe, static, no wildcard syntax)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use crate::config::schema::ServerConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A route has an empty path.
    EmptyPath { index: usize },

    /// A route path carries a character outside the URL-safe set or
    /// wildcard syntax; paths are static literals only.
    InvalidPath { path: String, character: char },

    /// Two routes share a path.
    DuplicatePath { path: String },

    /// A route names no resource.
    EmptyResource { path: String },

    /// Strict content mode requires a content directory.
    StrictWithoutContentDir,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyPath { index } => {
                write!(f, "route #{} has an empty path", index)
            }
            ValidationError::InvalidPath { path, character } => {
                write!(f, "route path {:?} contains {:?}", path, character)
            }
            ValidationError::DuplicatePath { path } => {
                write!(f, "route path {:?} is declared more than once", path)
            }
            ValidationError::EmptyResource { path } => {
                write!(f, "route {:?} names no resource", path)
            }
            ValidationError::StrictWithoutContentDir => {
                write!(f, "content.strict is set but content.dir is not")
            }
        }
    }
}

/// Characters allowed in a route path: RFC 3986 unreserved.
fn is_url_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.path.is_empty() {
            errors.push(ValidationError::EmptyPath { index });
            continue;
        }
        if let Some(character) = route.path.chars().find(|c| !is_url_safe(*c)) {
            errors.push(ValidationError::InvalidPath {
                path: route.path.clone(),
                character,
            });
        }
        if !seen.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicatePath {
                path: route.path.clone(),
            });
        }
        if route.resource.is_empty() {
            errors.push(ValidationError::EmptyResource {
                path: route.path.clone(),
            });
        }
    }

    if config.content.strict && config.content.dir.is_none() {
        errors.push(ValidationError::StrictWithoutContentDir);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    fn route(path: &str, resource: &str) -> RouteConfig {
        RouteConfig {
            path: path.into(),
            resource: resource.into(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_paths_are_rejected() {
        let mut config = ServerConfig::default();
        config.routes.push(route("one-line-a-day", "A"));
        config.routes.push(route("one-line-a-day", "B"));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicatePath {
                path: "one-line-a-day".into()
            }]
        );
    }

    #[test]
    fn test_wildcard_and_segment_syntax_is_rejected() {
        let mut config = ServerConfig::default();
        config.routes.push(route("blog/{slug}", "Article"));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidPath {
                path: "blog/{slug}".into(),
                character: '/'
            }]
        );
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = ServerConfig::default();
        config.routes.push(route("", "A"));
        config.routes.push(route("ok-path", ""));
        config.content.strict = true;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::EmptyPath { index: 0 }));
        assert!(errors.contains(&ValidationError::EmptyResource {
            path: "ok-path".into()
        }));
        assert!(errors.contains(&ValidationError::StrictWithoutContentDir));
    }
}
