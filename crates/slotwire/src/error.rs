//! Error types for slotwire.

use crate::selector::Wildcard;

/// Errors that can occur while building identifiers and wiring targets.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// More than one of `all`, `match` and `all_smaller` was requested.
    #[error("Only one of all, match, or all_smaller can be set (got {})", format_wildcards(.requested))]
    InvalidWildcardCombination {
        /// The wildcards that were requested together
        requested: Vec<Wildcard>,
    },

    /// No usable definition path could be derived from the caller.
    #[error("Cannot derive a component namespace: {context}")]
    EmptyNamespace {
        /// Where the namespace was being derived from
        context: String,
    },

    /// A wildcard tag the host framework does not define.
    #[error("Unknown wildcard tag: {tag}")]
    UnknownWildcard {
        /// The unrecognized tag
        tag: String,
    },

    /// A pattern identifier has no concrete DOM node to render.
    #[error("Cannot render a DOM id for wildcard selector {selector}")]
    WildcardInDomId {
        /// The wildcard that was present
        selector: Wildcard,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (reading configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience `Result` type alias for slotwire operations.
pub type Result<T> = std::result::Result<T, Error>;

fn format_wildcards(requested: &[Wildcard]) -> String {
    requested
        .iter()
        .map(Wildcard::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Returns whether the caller can recover by correcting its input.
    ///
    /// A missing namespace means the builder was used from a context it
    /// does not support, which is a usage bug rather than bad input.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::InvalidWildcardCombination { .. } => true,
            Error::EmptyNamespace { .. } => false,
            Error::UnknownWildcard { .. } => true,
            Error::WildcardInDomId { .. } => true,
            Error::Config { .. } => true,
            Error::Io(_) => true,
            Error::Serialization(_) => true,
            Error::Toml(_) => true,
        }
    }

    /// Creates a new wildcard combination error.
    pub fn invalid_wildcards(requested: Vec<Wildcard>) -> Self {
        Error::InvalidWildcardCombination { requested }
    }

    /// Creates a new empty namespace error.
    pub fn empty_namespace<S: Into<String>>(context: S) -> Self {
        Error::EmptyNamespace {
            context: context.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
