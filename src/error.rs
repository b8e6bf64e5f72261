//! Error types for array-updater.
//!
//! The diff engine itself cannot fail. Everything around it (reading input
//! files, decoding JSON, loading configuration) reports problems through
//! [`UpdaterError`], which carries a chain of human-readable context.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for array-updater operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UpdaterError {
    /// Input could not be turned into sequences
    #[error("Invalid input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Expected a JSON array, found {found}")]
    NotAnArray { found: String },

    #[error("Expected an array of arrays (one per section)")]
    NotASectionList,

    #[error("Element {index} has no identity key '{key}'")]
    MissingIdentityKey { key: String, index: usize },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, UpdaterError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl UpdaterError {
    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create an input error for an element missing its identity key
    pub fn missing_identity_key(key: impl Into<String>, index: usize) -> Self {
        Self::input(
            "identity key lookup",
            InputErrorKind::MissingIdentityKey {
                key: key.into(),
                index,
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for UpdaterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for UpdaterError {
    fn from(err: serde_json::Error) -> Self {
        Self::input(
            "JSON deserialization",
            InputErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// # Example
///
/// ```ignore
/// use array_updater::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<Vec<Value>> {
///     let content = std::fs::read_to_string(path).context("reading input file")?;
///     parse_elements(&content).with_context(|| format!("parsing {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    ///
    /// The context string is prepended to the error's existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<UpdaterError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: UpdaterError, new_ctx: &str) -> UpdaterError {
    match err {
        UpdaterError::Input {
            context: existing,
            source,
        } => UpdaterError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        UpdaterError::Io {
            path,
            message,
            source,
        } => UpdaterError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        UpdaterError::Config(msg) => UpdaterError::Config(chain_context(new_ctx, &msg)),
        UpdaterError::Validation(msg) => UpdaterError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when there is nothing to chain.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UpdaterError::missing_identity_key("id", 3);
        let display = err.to_string();
        assert!(
            display.contains("Invalid input"),
            "Error message should mention input: {}",
            display
        );

        let err = UpdaterError::config("bad threshold");
        assert_eq!(err.to_string(), "Invalid configuration: bad threshold");
    }

    #[test]
    fn test_error_source_kind() {
        use std::error::Error as _;

        let err = UpdaterError::missing_identity_key("id", 3);
        let source = err.source().expect("input errors carry a kind");
        assert_eq!(source.to_string(), "Element 3 has no identity key 'id'");
    }

    #[test]
    fn test_error_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = UpdaterError::io("/path/to/old.json", io_err);

        assert!(err.to_string().contains("/path/to/old.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(UpdaterError::input("base", InputErrorKind::NotASectionList))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(UpdaterError::Input { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Input error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(UpdaterError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_from_serde_json() {
        let err: UpdaterError = serde_json::from_str::<serde_json::Value>("[1,")
            .expect_err("truncated JSON")
            .into();
        assert!(matches!(
            err,
            UpdaterError::Input {
                source: InputErrorKind::InvalidJson(_),
                ..
            }
        ));
    }
}
