//! Location-driven identifier builder.
//!
//! [`IdBuilder`] derives each identifier's namespace from the source file
//! that called it. All entry points are `#[track_caller]`, so the location
//! seen is the first frame outside slotwire, and component code can build
//! identifiers without declaring a namespace up front.

use crate::child::{ChildId, build_child_id};
use crate::config::BuilderConfig;
use crate::error::Result;
use crate::identity::{ComponentId, IdentityAllocator};
use crate::namespace::Namespace;
use crate::selector::{ParentSelector, WildcardFlags};
use crate::wiring::{Role, WiringTarget};
use std::panic::Location;
use std::sync::Arc;

/// Builds identities, child identifiers and wiring targets.
///
/// Cheap to clone; clones share the same allocator.
#[derive(Debug, Clone)]
pub struct IdBuilder {
    allocator: Arc<IdentityAllocator>,
    config: BuilderConfig,
}

impl Default for IdBuilder {
    fn default() -> Self {
        Self::from_config(BuilderConfig::default())
    }
}

impl IdBuilder {
    /// Creates a builder with default settings and its own allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose allocator starts at `config.first_id`.
    pub fn from_config(config: BuilderConfig) -> Self {
        let allocator = Arc::new(IdentityAllocator::starting_at(config.first_id));
        Self { allocator, config }
    }

    /// Creates a builder sharing an existing allocator.
    ///
    /// `config.first_id` is ignored.
    pub fn with_allocator(allocator: Arc<IdentityAllocator>, config: BuilderConfig) -> Self {
        Self { allocator, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The shared allocator.
    pub fn allocator(&self) -> &Arc<IdentityAllocator> {
        &self.allocator
    }

    /// Identity for a new component instance.
    pub fn new_identity(&self, explicit: Option<&str>) -> ComponentId {
        self.allocator.identity(explicit)
    }

    /// Namespace of the calling source file.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyNamespace`](crate::Error::EmptyNamespace) if the
    /// caller's location carries no file.
    #[track_caller]
    pub fn definition_path(&self) -> Result<Namespace> {
        Namespace::from_location(Location::caller(), &self.config)
    }

    /// Identifier of `child` in the calling file's component.
    ///
    /// `None` for `parent` resolves to `MATCH`.
    #[track_caller]
    pub fn child_id(
        &self,
        child: impl Into<String>,
        parent: Option<ParentSelector>,
    ) -> Result<ChildId> {
        Ok(build_child_id(&self.definition_path()?, child, parent))
    }

    /// Output on `child` of the matched instance.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyNamespace`](crate::Error::EmptyNamespace) if the
    /// caller's location carries no file.
    #[track_caller]
    pub fn child_output(
        &self,
        child: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Result<WiringTarget> {
        let id = self.child_id(child, None)?;
        Ok(WiringTarget::new(Role::Output, id, attribute))
    }

    /// Input on `child`, selecting instances with `flags`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWildcardCombination`](crate::Error::InvalidWildcardCombination)
    /// before any identifier is built, or a namespace error.
    #[track_caller]
    pub fn child_input(
        &self,
        child: impl Into<String>,
        attribute: impl Into<String>,
        flags: WildcardFlags,
    ) -> Result<WiringTarget> {
        self.child_target(Role::Input, child, attribute, flags)
    }

    /// State on `child`, selecting instances with `flags`.
    ///
    /// # Errors
    ///
    /// Same as [`IdBuilder::child_input`].
    #[track_caller]
    pub fn child_state(
        &self,
        child: impl Into<String>,
        attribute: impl Into<String>,
        flags: WildcardFlags,
    ) -> Result<WiringTarget> {
        self.child_target(Role::State, child, attribute, flags)
    }

    #[track_caller]
    fn child_target(
        &self,
        role: Role,
        child: impl Into<String>,
        attribute: impl Into<String>,
        flags: WildcardFlags,
    ) -> Result<WiringTarget> {
        let parent = flags.selector()?.map(Into::into);
        let id = self.child_id(child, parent)?;
        Ok(WiringTarget::new(role, id, attribute))
    }
}
