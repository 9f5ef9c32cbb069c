//! Constraint data model
//!
//! The three constraint kinds derived from game feedback, with shape
//! validation at construction time: malformed constraints are rejected
//! before they reach the filter pipeline.

mod error;
mod exact;
mod excluded;
mod partial;
mod positioned;
mod request;
mod validate;

pub use error::ConstraintError;
pub use exact::ExactConstraints;
pub use excluded::ExcludedLetters;
pub use partial::PartialConstraints;
pub use positioned::PositionedLetter;
pub use request::ConstraintSet;
