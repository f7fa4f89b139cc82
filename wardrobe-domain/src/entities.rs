// Domain entities
pub mod catalog_entry;
pub mod character;
pub mod item_config;
pub mod lock;
pub mod outfit;
pub mod runtime_config;
pub mod settings;

pub use catalog_entry::*;
pub use character::*;
pub use item_config::*;
pub use lock::*;
pub use outfit::*;
pub use runtime_config::*;
pub use settings::*;
