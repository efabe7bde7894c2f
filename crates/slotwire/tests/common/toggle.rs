//! An on/off toggle, also built around a child called "button".
//!
//! Unlike [`Counter`](super::counter::Counter) this one does not declare a
//! namespace; it asks an [`IdBuilder`] for ids built from this file.

use slotwire::{ChildId, ComponentId, IdBuilder, WildcardFlags, WiringTarget};

pub struct Toggle {
    pub id: ComponentId,
    pub button: ChildId,
}

impl Toggle {
    pub fn new(builder: &IdBuilder) -> slotwire::Result<Self> {
        let id = builder.new_identity(None);
        let button = builder.child_id("button", Some(id.clone().into()))?;
        Ok(Self { id, button })
    }

    /// Every toggle's button feeds one summary output.
    pub fn summary_wiring(builder: &IdBuilder) -> slotwire::Result<WiringTarget> {
        builder.child_input("button", "n_clicks", WildcardFlags::ALL)
    }
}
