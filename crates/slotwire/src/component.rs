//! The [`Component`] trait: identifiers and wiring scoped to a definition.

use crate::child::{ChildId, build_child_id};
use crate::error::Result;
use crate::identity::ComponentId;
use crate::namespace::Namespace;
use crate::selector::{Wildcard, WildcardFlags};
use crate::wiring::{self, WiringTarget};

/// A reusable component definition whose instances carry an identity.
///
/// Implementors declare their namespace once, usually with
/// [`namespace!`](crate::namespace!), and get instance-scoped identifiers
/// and definition-scoped wiring helpers for free.
///
/// ```
/// use slotwire::{namespace, Component, ComponentId, IdentityAllocator, Namespace, WildcardFlags};
///
/// struct Counter {
///     id: ComponentId,
/// }
///
/// impl Component for Counter {
///     fn namespace() -> Namespace {
///         namespace!()
///     }
///
///     fn component_id(&self) -> &ComponentId {
///         &self.id
///     }
/// }
///
/// let ids = IdentityAllocator::new();
/// let first = Counter { id: ids.allocate() };
/// let second = Counter { id: ids.allocate() };
/// assert_ne!(first.child_id("button"), second.child_id("button"));
///
/// let trigger = Counter::child_input("button", "n_clicks", WildcardFlags::NONE).unwrap();
/// assert!(trigger.id.as_child().unwrap().is_pattern());
/// ```
pub trait Component {
    /// Namespace shared by every instance of this definition.
    fn namespace() -> Namespace
    where
        Self: Sized;

    /// Identity of this instance.
    fn component_id(&self) -> &ComponentId;

    /// Identifier of `child` owned by this instance.
    fn child_id(&self, child: impl Into<String>) -> ChildId
    where
        Self: Sized,
    {
        build_child_id(
            &Self::namespace(),
            child,
            Some(self.component_id().into()),
        )
    }

    /// Identifier of `child` across instances matched by `wildcard`.
    fn child_pattern(child: impl Into<String>, wildcard: Wildcard) -> ChildId
    where
        Self: Sized,
    {
        build_child_id(&Self::namespace(), child, Some(wildcard.into()))
    }

    /// Output on this instance's root element.
    fn output(&self, attribute: impl Into<String>) -> WiringTarget
    where
        Self: Sized,
    {
        wiring::root_output(self.component_id(), attribute)
    }

    /// Input on this instance's root element.
    fn input(&self, attribute: impl Into<String>) -> WiringTarget
    where
        Self: Sized,
    {
        wiring::root_input(self.component_id(), attribute)
    }

    /// State on this instance's root element.
    fn state(&self, attribute: impl Into<String>) -> WiringTarget
    where
        Self: Sized,
    {
        wiring::root_state(self.component_id(), attribute)
    }

    /// Output on `child` of the matched instance.
    fn child_output(child: impl Into<String>, attribute: impl Into<String>) -> WiringTarget
    where
        Self: Sized,
    {
        wiring::child_output(&Self::namespace(), child, attribute)
    }

    /// Input on `child`, selecting instances with `flags`.
    fn child_input(
        child: impl Into<String>,
        attribute: impl Into<String>,
        flags: WildcardFlags,
    ) -> Result<WiringTarget>
    where
        Self: Sized,
    {
        wiring::child_input(&Self::namespace(), child, attribute, flags)
    }

    /// State on `child`, selecting instances with `flags`.
    fn child_state(
        child: impl Into<String>,
        attribute: impl Into<String>,
        flags: WildcardFlags,
    ) -> Result<WiringTarget>
    where
        Self: Sized,
    {
        wiring::child_state(&Self::namespace(), child, attribute, flags)
    }
}
