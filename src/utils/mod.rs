// Shared utilities module
pub mod env_flags;
pub mod errors;
pub mod logging;
pub mod ui;

pub use env_flags::*;
pub use errors::*;
pub use logging::*;
pub use ui::*;
