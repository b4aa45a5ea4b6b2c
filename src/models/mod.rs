pub mod contact;
pub mod project;
pub mod stats;

pub use contact::*;
pub use project::*;
pub use stats::*;
