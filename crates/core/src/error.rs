//! Standalone error types for the conversion core.
//!
//! Uses thiserror for clean, idiomatic Rust error definitions. Parse
//! failures are returned as data so that consumer adapters can aggregate
//! them; only setup errors are allowed to abort startup.

use thiserror::Error;

/// Result of parsing canonical temporal text.
pub type ParseOutcome<T> = Result<T, ParseFailure>;

// ============================================================================
// Parse Failures
// ============================================================================

/// A single failed attempt to parse canonical temporal text.
///
/// Carries a machine-stable `code`, a human-readable `detail`, the offending
/// input and, where a lower-level parser was involved, the originating error.
#[derive(Debug, Error)]
#[error("{detail} (input: `{text}`)")]
pub struct ParseFailure {
    code: &'static str,
    detail: String,
    text: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ParseFailure {
    /// Create a parse failure for the given input text.
    pub fn new(code: &'static str, text: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
            text: text.into(),
            cause: None,
        }
    }

    /// Attach the originating low-level parse error.
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Machine-stable failure code, e.g. `invalid-local-date`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Human-readable description of what the grammar expected.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// The text that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }
}

// ============================================================================
// Setup and Registry Errors
// ============================================================================

/// Configuration errors raised while the registry is being built.
///
/// These are fatal: a duplicate registration is a wiring bug and must be
/// surfaced at startup, never recovered silently.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The same value type was registered twice in one builder.
    #[error("a converter for `{type_name}` is already registered")]
    DuplicateRegistration {
        /// Converter name of the entry that was already present.
        type_name: &'static str,
    },
}

impl SetupError {
    /// Get error code for categorization.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateRegistration { .. } => "duplicate-registration",
        }
    }
}

/// Errors raised when resolving a converter from a built registry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// No converter is registered for the requested type. Unreachable for the
    /// built-in set once setup has run; reaching it is a programming error.
    #[error("no converter registered for `{type_name}`")]
    UnsupportedType {
        /// Rust type name of the requested value type.
        type_name: &'static str,
    },

    /// The stored codec does not downcast to the requested type. Only
    /// reachable if an entry was inserted through something other than the
    /// typed `register` path.
    #[error("registered converter for `{type_name}` has an unexpected codec type")]
    CodecMismatch {
        /// Converter name of the offending entry.
        type_name: &'static str,
    },
}

impl RegistryError {
    /// Get error code for categorization.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedType { .. } => "unsupported-type",
            Self::CodecMismatch { .. } => "codec-mismatch",
        }
    }
}

/// Combined error for the resolve-then-parse convenience path.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The registry had no converter for the requested type.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The converter rejected the input text.
    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

impl ConvertError {
    /// Get error code for categorization.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Registry(err) => err.code(),
            Self::Parse(err) => err.code(),
        }
    }
}
