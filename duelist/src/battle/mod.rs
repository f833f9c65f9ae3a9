mod battle;
mod battle_options;
pub mod calculations;
mod round;
mod side;
mod status;
mod turn;
mod view;

pub use battle::{
    Battle,
    ChosenMoves,
};
pub use battle_options::{
    BattleEngineOptions,
    BattleOptions,
};
pub(crate) use round::RoundController;
pub use round::{
    RoundOutcome,
    RoundState,
};
pub use side::{
    Participant,
    Side,
};
pub use status::{
    Condition,
    FlagChange,
    StatusFlags,
};
pub use turn::{
    TurnContext,
    TurnEffect,
    TurnResolution,
    resolve_turn,
};
pub use view::BattleView;
