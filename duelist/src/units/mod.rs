mod unit;

pub use unit::{
    MAX_HP,
    MOVE_SLOTS,
    Unit,
    UnitData,
};
