//! This module contains helper functionality.

mod error;
pub use self::error::*;

mod random;
pub use self::random::*;

mod time_quota;
pub use self::time_quota::*;

mod timing;
pub use self::timing::*;

mod types;
pub use self::types::*;
