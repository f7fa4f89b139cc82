pub mod cli;
pub mod context;
pub mod lifecycle;
pub mod telemetry;

pub use cli::{AddItemArgs, Cli, Command};
pub use context::AppContext;
pub use lifecycle::{execute, run};
