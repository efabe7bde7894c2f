//! Child slot identifiers.

use crate::namespace::Namespace;
use crate::selector::ParentSelector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a named child slot inside a component.
///
/// The triple (`path`, `child`, `id`) is unique per wiring target: the
/// namespace separates definitions, the child name separates slots within a
/// definition, and the selector separates instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChildId {
    /// Namespace of the defining component.
    pub path: Namespace,
    /// Logical name of the child slot.
    pub child: String,
    /// Owning instance, or a wildcard over instances.
    pub id: ParentSelector,
}

impl ChildId {
    /// Returns `true` if this identifier is a pattern rather than one node.
    pub fn is_pattern(&self) -> bool {
        self.id.is_wildcard()
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}[{}]", self.path, self.child, self.id)
    }
}

/// Builds the identifier of `child` inside a component of `namespace`.
///
/// A missing `parent` means "the current instance" and resolves to
/// [`Wildcard::Match`](crate::Wildcard::Match).
///
/// # Examples
///
/// ```
/// use slotwire::{build_child_id, ComponentId, Namespace, ParentSelector};
///
/// let ns = Namespace::from_path("/app/counter.rs").unwrap();
/// let id = build_child_id(&ns, "button", Some(ComponentId::new("0").into()));
/// assert_eq!(id.child, "button");
/// assert_eq!(id.id, ParentSelector::Concrete(ComponentId::new("0")));
/// ```
pub fn build_child_id(
    namespace: &Namespace,
    child: impl Into<String>,
    parent: Option<ParentSelector>,
) -> ChildId {
    let child = child.into();
    let id = parent.unwrap_or(ParentSelector::IMPLICIT);
    tracing::trace!(path = %namespace, child = %child, id = %id, "built child id");
    ChildId {
        path: namespace.clone(),
        child,
        id,
    }
}
