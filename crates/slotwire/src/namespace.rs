//! Definition namespaces.
//!
//! Every component definition lives in one source file. That file's path,
//! flattened so it contains no `.`, becomes the namespace token shared by
//! all instances of the definition. Two definitions can then both own a
//! child called `"button"` without their wiring identifiers colliding.
//!
//! Definitions usually declare their namespace with
//! [`namespace!`](crate::namespace!), which captures `file!()` at the
//! definition site. [`Namespace::caller`] and
//! [`IdBuilder`](crate::IdBuilder) derive it from the caller's location
//! instead, via `#[track_caller]`.
//!
//! All three resolve the compiler path against a [`BuilderConfig`], so one
//! file maps to one token as long as they are given the same config.
//! `namespace!()` uses the default config; pass the builder's config as
//! `namespace!(builder.config())` when a `source_root` is set.

use crate::config::BuilderConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Flattened source path identifying a component definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(String);

impl Namespace {
    /// Uses `token` verbatim as the namespace.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyNamespace`] if `token` is empty or only whitespace.
    pub fn new<S: Into<String>>(token: S) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::empty_namespace("namespace token is empty"));
        }
        Ok(Self(token))
    }

    /// Flattens a source path into a namespace, replacing `.` with `_`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyNamespace`] if `path` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotwire::Namespace;
    ///
    /// let ns = Namespace::from_path("/app/counter.rs").unwrap();
    /// assert_eq!(ns.as_str(), "/app/counter_rs");
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::empty_namespace("source path is empty"));
        }
        Ok(Self(flatten(&path.to_string_lossy())))
    }

    /// Expansion target of [`namespace!`](crate::namespace!).
    ///
    /// `file!()` never expands to an empty path, so this skips the
    /// `EmptyNamespace` check. Use [`Namespace::from_path`] elsewhere.
    #[doc(hidden)]
    pub fn from_source_file(file: &'static str, config: &BuilderConfig) -> Self {
        Self(flatten(
            &config.resolve_source_path(Path::new(file)).to_string_lossy(),
        ))
    }

    /// Namespace for a caller location, resolved against `config`.
    ///
    /// Relative compiler paths are joined onto `config.source_root` when one
    /// is set, so the token is an absolute filesystem path.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyNamespace`] if the location carries no file.
    pub fn from_location(location: &Location<'_>, config: &BuilderConfig) -> Result<Self> {
        let file = location.file();
        if file.is_empty() {
            return Err(Error::empty_namespace(format!(
                "caller location {}:{} has no file",
                location.line(),
                location.column()
            )));
        }
        Self::from_path(config.resolve_source_path(Path::new(file)))
    }

    /// Namespace of the first caller outside this crate.
    ///
    /// Every public entry point between the caller and this function is
    /// `#[track_caller]`, so internal frames never leak into the token.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyNamespace`] if the caller location carries no file.
    #[track_caller]
    pub fn caller(config: &BuilderConfig) -> Result<Self> {
        Self::from_location(Location::caller(), config)
    }

    /// Returns the namespace token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts to the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn flatten(path: &str) -> String {
    path.replace('.', "_")
}

/// Namespace of the source file this macro is expanded in.
///
/// `namespace!()` resolves `file!()` against the default [`BuilderConfig`].
/// `namespace!(config)` takes a `&BuilderConfig` and matches what an
/// [`IdBuilder`](crate::IdBuilder) with that config derives for the file.
///
/// ```
/// use slotwire::{namespace, BuilderConfig, IdBuilder, Namespace};
///
/// let ns: Namespace = namespace!();
/// assert!(!ns.as_str().contains('.'));
///
/// let builder = IdBuilder::default();
/// assert_eq!(namespace!(builder.config()), builder.definition_path().unwrap());
/// assert_eq!(namespace!(&BuilderConfig::default()), ns);
/// ```
#[macro_export]
macro_rules! namespace {
    () => {
        $crate::Namespace::from_source_file(
            ::core::file!(),
            &$crate::BuilderConfig::default(),
        )
    };
    ($config:expr) => {
        $crate::Namespace::from_source_file(::core::file!(), $config)
    };
}
