// Domain services
pub mod catalog;
pub mod lock_manager;
pub mod outfit_diff;

pub use catalog::*;
pub use lock_manager::*;
pub use outfit_diff::*;
