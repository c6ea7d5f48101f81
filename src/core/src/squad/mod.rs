mod bench;
mod builder;
mod policy;
mod reasoning;
mod replacement;
mod selector;
mod slot;
mod squad;
mod statistics;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bench::*;
pub use builder::*;
pub use policy::*;
pub use reasoning::*;
pub use replacement::*;
pub use selector::*;
pub use slot::*;
pub use squad::*;
pub use statistics::*;

pub const BENCH_SIZE: usize = 7;
pub const RESERVE_SIZE: usize = 5;
pub const MAX_SQUAD_GOALKEEPERS: usize = 3;
