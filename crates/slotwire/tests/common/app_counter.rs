//! A counter pinned to the namespace of `/app.counter`, wherever it is compiled.

use slotwire::{Component, ComponentId, Namespace};

pub struct AppCounter {
    pub id: ComponentId,
}

impl Component for AppCounter {
    fn namespace() -> Namespace {
        Namespace::from_path("/app.counter").unwrap()
    }

    fn component_id(&self) -> &ComponentId {
        &self.id
    }
}
