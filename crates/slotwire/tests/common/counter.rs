//! A click counter: a button and a label showing the count.

use slotwire::{namespace, Component, ComponentId, IdentityAllocator, Namespace, WiringTarget};

pub struct Counter {
    id: ComponentId,
}

impl Counter {
    pub fn new(ids: &IdentityAllocator) -> Self {
        Self { id: ids.allocate() }
    }

    pub fn with_id(ids: &IdentityAllocator, id: &str) -> Self {
        Self {
            id: ids.identity(Some(id)),
        }
    }

    /// Output and input of the increment callback.
    pub fn increment_wiring() -> slotwire::Result<(WiringTarget, WiringTarget)> {
        Ok((
            Self::child_output("count", "children"),
            Self::child_input("button", "n_clicks", Default::default())?,
        ))
    }
}

impl Component for Counter {
    fn namespace() -> Namespace {
        namespace!()
    }

    fn component_id(&self) -> &ComponentId {
        &self.id
    }
}
