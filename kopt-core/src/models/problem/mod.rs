//! Problem domain models: a fixed set of points and distances between them.

mod lengths;
pub use self::lengths::*;

mod point_set;
pub use self::point_set::*;
