#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! slotwire
//!
//! Collision-free identifiers for nested, reusable UI components, and the
//! wiring targets a reactive host framework uses to connect callbacks to
//! them.

pub mod builder;
pub mod child;
pub mod component;
pub mod config;
pub mod error;
pub mod host;
pub mod identity;
pub mod namespace;
mod proptests;
pub mod selector;
pub mod wiring;

// Re-exports for convenience
pub use builder::IdBuilder;
pub use child::{ChildId, build_child_id};
pub use component::Component;
pub use config::BuilderConfig;
pub use error::{Error, Result};
pub use identity::{ComponentId, IdentityAllocator};
pub use namespace::Namespace;
pub use selector::{ParentSelector, Wildcard, WildcardFlags};
pub use wiring::{Role, Target, WiringOptions, WiringTarget};
