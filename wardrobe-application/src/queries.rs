pub mod catalog_queries;
pub mod outfit_queries;

pub use catalog_queries::*;
pub use outfit_queries::*;
