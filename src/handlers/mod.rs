pub mod health;
pub mod portfolio;
pub mod skills;

pub use health::*;
pub use portfolio::*;
pub use skills::*;
