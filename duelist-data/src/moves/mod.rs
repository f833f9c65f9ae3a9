mod catalog;
mod move_category;
mod move_data;
mod move_effect;

pub use catalog::MoveCatalog;
pub use move_category::MoveCategory;
pub use move_data::{
    Move,
    MoveId,
};
pub use move_effect::{
    MoveEffect,
    Stat,
};
