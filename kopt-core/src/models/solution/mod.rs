//! Solution domain models.

mod tour;
pub use self::tour::*;
