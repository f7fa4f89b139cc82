// Repository and host port traits (interfaces)
// Define what the domain needs from infrastructure and from the host

pub mod host;
pub mod repositories;

pub use host::*;
pub use repositories::*;
