//! # Icons Helper Module
//!
//! Icons for attribute rows. Material Design codepoints for graphical front
//! ends, short text labels for the console.

use crate::app::state::AttributeKind;

/// Material Design Icons
pub mod material {
    /// Profile page
    pub const PERSON_PIN: &str = "\u{e55a}"; // person_pin
    /// Company / organisation
    pub const PEOPLE: &str = "\u{e7fb}"; // people
    /// Location
    pub const LOCATION: &str = "\u{e0c8}"; // location_on
    /// Blog / website
    pub const INSERT_LINK: &str = "\u{e250}"; // insert_link
}

/// Material glyph for a row kind.
pub fn glyph(kind: AttributeKind) -> &'static str {
    match kind {
        AttributeKind::ProfileUrl => material::PERSON_PIN,
        AttributeKind::Company => material::PEOPLE,
        AttributeKind::Location => material::LOCATION,
        AttributeKind::Link => material::INSERT_LINK,
    }
}

/// Fixed-width text label for terminals without icon fonts.
pub fn label(kind: AttributeKind) -> &'static str {
    match kind {
        AttributeKind::ProfileUrl => "[profile ]",
        AttributeKind::Company => "[company ]",
        AttributeKind::Location => "[location]",
        AttributeKind::Link => "[link    ]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_aligned() {
        let kinds = [
            AttributeKind::ProfileUrl,
            AttributeKind::Company,
            AttributeKind::Location,
            AttributeKind::Link,
        ];
        for kind in kinds {
            assert_eq!(label(kind).len(), 10);
            assert!(!glyph(kind).is_empty());
        }
    }
}
