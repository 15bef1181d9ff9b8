//! Common models.

mod bounding_box;
pub use self::bounding_box::*;

mod primitives;
pub use self::primitives::*;
