//! Parent selectors: concrete instance IDs and wildcard patterns.
//!
//! A [`ParentSelector`] fills the `id` slot of a [`ChildId`](crate::ChildId).
//! On the wire a concrete selector is a plain string and a wildcard is a
//! one-element array such as `["MATCH"]`, which is the shape the host
//! framework's pattern matcher recognizes.

use crate::error::{Error, Result};
use crate::identity::ComponentId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pattern that matches component instances instead of naming one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Wildcard {
    /// Every instance.
    All,
    /// The instance matched elsewhere in the same callback.
    Match,
    /// Instances below a matched ancestor.
    AllSmaller,
}

impl Wildcard {
    /// The host framework's tag for this wildcard.
    pub fn as_str(&self) -> &'static str {
        match self {
            Wildcard::All => "ALL",
            Wildcard::Match => "MATCH",
            Wildcard::AllSmaller => "ALLSMALLER",
        }
    }
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wildcard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ALL" => Ok(Wildcard::All),
            "MATCH" => Ok(Wildcard::Match),
            "ALLSMALLER" => Ok(Wildcard::AllSmaller),
            other => Err(Error::UnknownWildcard {
                tag: other.to_string(),
            }),
        }
    }
}

/// Which instance (or instances) a child identifier belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SelectorRepr", into = "SelectorRepr")]
pub enum ParentSelector {
    /// Exactly one instance.
    Concrete(ComponentId),
    /// A pattern over instances.
    Wildcard(Wildcard),
}

impl ParentSelector {
    /// Selector used when no parent is given.
    pub const IMPLICIT: ParentSelector = ParentSelector::Wildcard(Wildcard::Match);

    /// Returns the wildcard, if this selector is one.
    pub fn as_wildcard(&self) -> Option<Wildcard> {
        match self {
            ParentSelector::Wildcard(w) => Some(*w),
            ParentSelector::Concrete(_) => None,
        }
    }

    /// Returns the concrete component ID, if this selector names one.
    pub fn as_component(&self) -> Option<&ComponentId> {
        match self {
            ParentSelector::Concrete(id) => Some(id),
            ParentSelector::Wildcard(_) => None,
        }
    }

    /// Returns `true` for wildcard selectors.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, ParentSelector::Wildcard(_))
    }
}

impl Default for ParentSelector {
    fn default() -> Self {
        Self::IMPLICIT
    }
}

impl fmt::Display for ParentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentSelector::Concrete(id) => write!(f, "{id}"),
            ParentSelector::Wildcard(w) => write!(f, "{w}"),
        }
    }
}

impl From<ComponentId> for ParentSelector {
    fn from(id: ComponentId) -> Self {
        ParentSelector::Concrete(id)
    }
}

impl From<&ComponentId> for ParentSelector {
    fn from(id: &ComponentId) -> Self {
        ParentSelector::Concrete(id.clone())
    }
}

impl From<Wildcard> for ParentSelector {
    fn from(w: Wildcard) -> Self {
        ParentSelector::Wildcard(w)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum SelectorRepr {
    Id(String),
    Tag([String; 1]),
}

impl TryFrom<SelectorRepr> for ParentSelector {
    type Error = Error;

    fn try_from(repr: SelectorRepr) -> Result<Self> {
        match repr {
            SelectorRepr::Id(id) => Ok(ParentSelector::Concrete(ComponentId::new(id))),
            SelectorRepr::Tag([tag]) => Ok(ParentSelector::Wildcard(tag.parse()?)),
        }
    }
}

impl From<ParentSelector> for SelectorRepr {
    fn from(selector: ParentSelector) -> Self {
        match selector {
            ParentSelector::Concrete(id) => SelectorRepr::Id(id.into_string()),
            ParentSelector::Wildcard(w) => SelectorRepr::Tag([w.as_str().to_string()]),
        }
    }
}

/// The `all` / `match` / `all_smaller` switches accepted by the input and
/// state helpers. At most one may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WildcardFlags {
    /// Match every instance.
    pub all: bool,
    /// Match the instance matched elsewhere in the callback.
    pub matching: bool,
    /// Match instances below a matched ancestor.
    pub all_smaller: bool,
}

impl WildcardFlags {
    /// No flag set.
    pub const NONE: WildcardFlags = WildcardFlags {
        all: false,
        matching: false,
        all_smaller: false,
    };

    /// Only `all` set.
    pub const ALL: WildcardFlags = WildcardFlags {
        all: true,
        ..Self::NONE
    };

    /// Only `matching` set.
    pub const MATCH: WildcardFlags = WildcardFlags {
        matching: true,
        ..Self::NONE
    };

    /// Only `all_smaller` set.
    pub const ALL_SMALLER: WildcardFlags = WildcardFlags {
        all_smaller: true,
        ..Self::NONE
    };

    /// Resolves the flags to at most one wildcard.
    ///
    /// Returns `Ok(None)` when nothing is set, leaving the implicit
    /// selector to the caller.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWildcardCombination`] if more than one flag is set.
    pub fn selector(self) -> Result<Option<Wildcard>> {
        let requested: Vec<Wildcard> = [
            (self.all, Wildcard::All),
            (self.matching, Wildcard::Match),
            (self.all_smaller, Wildcard::AllSmaller),
        ]
        .into_iter()
        .filter_map(|(set, w)| set.then_some(w))
        .collect();

        match requested.as_slice() {
            [] => Ok(None),
            [one] => Ok(Some(*one)),
            _ => Err(Error::invalid_wildcards(requested)),
        }
    }
}

impl From<Wildcard> for WildcardFlags {
    fn from(w: Wildcard) -> Self {
        match w {
            Wildcard::All => Self::ALL,
            Wildcard::Match => Self::MATCH,
            Wildcard::AllSmaller => Self::ALL_SMALLER,
        }
    }
}
