pub mod apply_commands;
pub mod outfit_commands;
pub mod session_commands;
pub mod store_commands;

pub use apply_commands::*;
pub use outfit_commands::*;
pub use session_commands::*;
pub use store_commands::*;
