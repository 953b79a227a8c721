//! Element locators

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strategy + value pair identifying one DOM element.
///
/// Locators are immutable and cheap to construct per call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locator {
    /// Match by element id
    Id(String),

    /// Match an anchor by its trimmed visible text
    LinkText(String),

    /// Match by tag + attribute value, e.g. `input[value='Transfer']`
    AttrValue {
        tag: String,
        attr: String,
        value: String,
    },
}

impl Locator {
    pub fn id(value: impl Into<String>) -> Self {
        Locator::Id(value.into())
    }

    pub fn link_text(value: impl Into<String>) -> Self {
        Locator::LinkText(value.into())
    }

    /// Shorthand for the common `input[value='...']` submit controls.
    pub fn input_value(value: impl Into<String>) -> Self {
        Locator::AttrValue {
            tag: "input".into(),
            attr: "value".into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "#{id}"),
            Locator::LinkText(text) => write!(f, "link:{text}"),
            Locator::AttrValue { tag, attr, value } => {
                write!(f, "{tag}[{attr}='{value}']")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(Locator::id("amount").to_string(), "#amount");
        assert_eq!(Locator::link_text("Log Out").to_string(), "link:Log Out");
        assert_eq!(
            Locator::input_value("Transfer").to_string(),
            "input[value='Transfer']"
        );
    }
}
