mod style;
mod tactics;

pub use style::*;
pub use tactics::*;
