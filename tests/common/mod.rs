pub mod fixtures;
pub mod rngs;

pub use fixtures::*;
pub use rngs::*;
