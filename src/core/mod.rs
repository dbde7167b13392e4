// Core domain layer
pub mod models;
pub mod pipeline;
pub mod plugin;
pub mod routing;

pub use models::*;
pub use pipeline::*;
pub use plugin::*;
pub use routing::*;
