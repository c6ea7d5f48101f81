pub mod constraints;
pub mod tactics;

pub use constraints::*;
pub use tactics::*;
