mod player;
mod positions;

pub use player::*;
pub use positions::*;
