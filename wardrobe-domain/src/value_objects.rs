// Domain value objects
pub mod color;
pub mod identifiers;
pub mod lock_kind;
pub mod property_keys;

pub use color::*;
pub use identifiers::*;
pub use lock_kind::*;
