pub mod api;
pub mod intent;
pub mod severity;

pub use api::*;
pub use intent::*;
pub use severity::*;
