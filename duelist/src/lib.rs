extern crate alloc;

pub mod battle;
pub mod error;
pub mod events;
pub mod units;

pub use battle::{
    Battle,
    BattleEngineOptions,
    BattleOptions,
    BattleView,
    Condition,
    Participant,
    RoundOutcome,
    Side,
};
pub use duelist_data::{
    Move,
    MoveCatalog,
    MoveCategory,
    MoveEffect,
    MoveId,
    Stat,
    Type,
    TypeChart,
    TypeEffectiveness,
};
pub use duelist_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
    rand_util,
};
pub use events::{
    EffectCategory,
    EventLog,
    OutcomeEvent,
};
pub use units::{
    MAX_HP,
    Unit,
    UnitData,
};
