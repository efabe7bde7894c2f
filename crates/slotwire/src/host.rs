//! Adapter to the host framework's identifier encoding.
//!
//! The host stores structured ids on rendered elements as compact JSON with
//! keys in sorted order, e.g. `{"child":"button","id":"0","path":"/app_counter"}`.
//! Only concrete identifiers have a rendered element; patterns exist solely
//! in callback declarations.

use crate::child::ChildId;
use crate::error::{Error, Result};
use crate::selector::ParentSelector;
use serde_json::Value;

/// Converts a child identifier to the host's JSON value.
pub fn to_value(id: &ChildId) -> Result<Value> {
    Ok(serde_json::to_value(id)?)
}

/// Renders the DOM attribute value for a concrete child identifier.
///
/// # Errors
///
/// [`Error::WildcardInDomId`] if the identifier is a pattern.
///
/// # Examples
///
/// ```
/// use slotwire::{build_child_id, host, ComponentId, Namespace};
///
/// let ns = Namespace::from_path("/app.counter").unwrap();
/// let id = build_child_id(&ns, "button", Some(ComponentId::new("0").into()));
/// assert_eq!(
///     host::dom_id(&id).unwrap(),
///     r#"{"child":"button","id":"0","path":"/app_counter"}"#
/// );
/// ```
pub fn dom_id(id: &ChildId) -> Result<String> {
    if let ParentSelector::Wildcard(selector) = &id.id {
        return Err(Error::WildcardInDomId {
            selector: *selector,
        });
    }
    // serde_json's default map keeps keys sorted
    Ok(to_value(id)?.to_string())
}

/// Parses a DOM attribute value produced by [`dom_id`].
pub fn parse_dom_id(raw: &str) -> Result<ChildId> {
    Ok(serde_json::from_str(raw)?)
}
