//! Errors raised while turning records into shapes.

use std::fmt;

use crate::shape::ShapeKind;

/// Why a shape record could not become a [`Shape`](crate::Shape).
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// The kind tag is not `rect`, `circle` or `line`.
    UnknownKind(String),
    /// A field the declared kind needs is absent.
    MissingField { kind: ShapeKind, field: &'static str },
    /// Corner-radius lists take 1 to 4 entries.
    InvalidRadii(usize),
    /// The stroke colour is neither a CSS name nor a hex colour.
    UnknownColour(String),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(tag) => write!(f, "unknown shape kind \"{tag}\""),
            Self::MissingField { kind, field } => {
                write!(f, "{kind} is missing required field `{field}`")
            }
            Self::InvalidRadii(len) => {
                write!(f, "corner radii need 1 to 4 entries, got {len}")
            }
            Self::UnknownColour(c) => write!(f, "unknown colour \"{c}\""),
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = ShapeError::MissingField { kind: ShapeKind::Rect, field: "width" };
        assert_eq!(e.to_string(), "rect is missing required field `width`");
        assert_eq!(
            ShapeError::InvalidRadii(5).to_string(),
            "corner radii need 1 to 4 entries, got 5"
        );
    }
}
