pub mod catalog_files;
pub mod character_files;
pub mod kv_files;

pub use catalog_files::*;
pub use character_files::*;
pub use kv_files::*;
