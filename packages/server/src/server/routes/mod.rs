// HTTP routes
pub mod donations;
pub mod health;

pub use donations::*;
pub use health::*;
