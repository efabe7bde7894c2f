//! Wiring targets: what a reactive callback reads or writes.
//!
//! A [`WiringTarget`] pairs an identifier with a property name and the
//! role it plays in a callback. slotwire only builds these values; the host
//! framework registers and runs the callbacks.

use crate::child::{ChildId, build_child_id};
use crate::error::Result;
use crate::identity::ComponentId;
use crate::namespace::Namespace;
use crate::selector::WildcardFlags;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Role of a wiring target in a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Written by the callback.
    Output,
    /// Triggers the callback when it changes.
    Input,
    /// Read by the callback without triggering it.
    State,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Output => write!(f, "output"),
            Role::Input => write!(f, "input"),
            Role::State => write!(f, "state"),
        }
    }
}

/// The element a wiring target points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    /// A component's own root element.
    Root(ComponentId),
    /// A named child slot.
    Child(ChildId),
}

impl Target {
    /// Returns the child identifier, if this targets a child slot.
    pub fn as_child(&self) -> Option<&ChildId> {
        match self {
            Target::Child(child) => Some(child),
            Target::Root(_) => None,
        }
    }

    /// Returns the component ID, if this targets a root element.
    pub fn as_root(&self) -> Option<&ComponentId> {
        match self {
            Target::Root(id) => Some(id),
            Target::Child(_) => None,
        }
    }
}

impl From<ComponentId> for Target {
    fn from(id: ComponentId) -> Self {
        Target::Root(id)
    }
}

impl From<ChildId> for Target {
    fn from(child: ChildId) -> Self {
        Target::Child(child)
    }
}

/// Extra arguments forwarded untouched to the host framework.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WiringOptions {
    /// Allow several callbacks to write the same output.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_duplicate: bool,

    /// Host-specific keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WiringOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `allow_duplicate`.
    pub fn allow_duplicate(mut self) -> Self {
        self.allow_duplicate = true;
        self
    }

    /// Adds a host-specific key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if nothing is set.
    pub fn is_empty(&self) -> bool {
        !self.allow_duplicate && self.extra.is_empty()
    }
}

/// An identifier and property the host framework reads or writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WiringTarget {
    /// Element being wired.
    pub id: Target,
    /// Property of the element.
    pub attribute: String,
    /// Role in the callback.
    pub role: Role,
    /// Host-specific arguments.
    #[serde(default, skip_serializing_if = "WiringOptions::is_empty")]
    pub options: WiringOptions,
}

impl WiringTarget {
    /// Creates a target with no options.
    pub fn new(role: Role, id: impl Into<Target>, attribute: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attribute: attribute.into(),
            role,
            options: WiringOptions::default(),
        }
    }

    /// Replaces the options.
    pub fn with_options(mut self, options: WiringOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns `true` if this targets a component's root element.
    pub fn is_root(&self) -> bool {
        matches!(self.id, Target::Root(_))
    }
}

impl fmt::Display for WiringTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Target::Root(id) => write!(f, "{}({id}.{})", self.role, self.attribute),
            Target::Child(child) => write!(f, "{}({child}.{})", self.role, self.attribute),
        }
    }
}

/// Output on `child` of the current instance.
pub fn child_output(
    namespace: &Namespace,
    child: impl Into<String>,
    attribute: impl Into<String>,
) -> WiringTarget {
    WiringTarget::new(Role::Output, build_child_id(namespace, child, None), attribute)
}

/// Input on `child`, selecting instances according to `flags`.
///
/// # Errors
///
/// [`Error::InvalidWildcardCombination`](crate::Error::InvalidWildcardCombination)
/// if more than one flag is set. No identifier is built in that case.
pub fn child_input(
    namespace: &Namespace,
    child: impl Into<String>,
    attribute: impl Into<String>,
    flags: WildcardFlags,
) -> Result<WiringTarget> {
    child_target(Role::Input, namespace, child, attribute, flags)
}

/// State on `child`, selecting instances according to `flags`.
///
/// # Errors
///
/// Same as [`child_input`].
pub fn child_state(
    namespace: &Namespace,
    child: impl Into<String>,
    attribute: impl Into<String>,
    flags: WildcardFlags,
) -> Result<WiringTarget> {
    child_target(Role::State, namespace, child, attribute, flags)
}

fn child_target(
    role: Role,
    namespace: &Namespace,
    child: impl Into<String>,
    attribute: impl Into<String>,
    flags: WildcardFlags,
) -> Result<WiringTarget> {
    let parent = flags.selector()?.map(Into::into);
    Ok(WiringTarget::new(
        role,
        build_child_id(namespace, child, parent),
        attribute,
    ))
}

/// Output on the root element of `id`.
pub fn root_output(id: &ComponentId, attribute: impl Into<String>) -> WiringTarget {
    WiringTarget::new(Role::Output, id.clone(), attribute)
}

/// Input on the root element of `id`.
pub fn root_input(id: &ComponentId, attribute: impl Into<String>) -> WiringTarget {
    WiringTarget::new(Role::Input, id.clone(), attribute)
}

/// State on the root element of `id`.
pub fn root_state(id: &ComponentId, attribute: impl Into<String>) -> WiringTarget {
    WiringTarget::new(Role::State, id.clone(), attribute)
}
