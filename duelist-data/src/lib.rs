extern crate alloc;

mod moves;
mod types;


pub use moves::*;
pub use types::*;
