//! Component instance identities and the allocator that hands them out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a component instance.
///
/// Either chosen explicitly by the caller or auto-assigned by an
/// [`IdentityAllocator`]. Never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Creates a component ID from an explicit string.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotwire::ComponentId;
    ///
    /// let id = ComponentId::new("main-counter");
    /// assert_eq!(id.as_str(), "main-counter");
    /// ```
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts to the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Hands out component identities from a monotonically increasing counter.
///
/// Safe to share between threads; wrap it in an `Arc` or use
/// [`IdentityAllocator::global`] for the process-wide instance.
#[derive(Debug, Default)]
pub struct IdentityAllocator {
    next: AtomicU64,
}

impl IdentityAllocator {
    /// Creates an allocator whose first auto-assigned ID is `"0"`.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates an allocator whose first auto-assigned ID is `first`.
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Returns the process-wide allocator.
    pub fn global() -> &'static IdentityAllocator {
        static GLOBAL: IdentityAllocator = IdentityAllocator::starting_at(0);
        &GLOBAL
    }

    /// Allocates the next auto-assigned identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotwire::IdentityAllocator;
    ///
    /// let ids = IdentityAllocator::new();
    /// assert_eq!(ids.allocate().as_str(), "0");
    /// assert_eq!(ids.allocate().as_str(), "1");
    /// ```
    pub fn allocate(&self) -> ComponentId {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(id = n, "allocated component identity");
        ComponentId(n.to_string())
    }

    /// Returns `explicit` as the identity if given, otherwise allocates one.
    ///
    /// An explicit ID leaves the counter untouched.
    pub fn identity(&self, explicit: Option<&str>) -> ComponentId {
        match explicit {
            Some(id) => ComponentId::new(id),
            None => self.allocate(),
        }
    }

    /// The value the next call to [`allocate`](Self::allocate) will use.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}
