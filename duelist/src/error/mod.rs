mod battle_error;
mod context;
mod error;
mod validation_error;

pub use battle_error::{
    BattleEndedError,
    GeneralError,
    MovesNotChosenError,
    general_error,
};
pub use error::{
    WrapError,
    WrapResultError,
};
pub use validation_error::ValidationError;
