use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

use crate::error::WrapError;

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    /// Constructs a new general error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A round was started without a fresh move selection.
///
/// Moves are consumed by every round, so each round must be preceded by exactly one call to
/// [`Battle::set_chosen_moves`][`crate::Battle::set_chosen_moves`].
#[derive(Error, Debug, Default)]
#[error("moves were not chosen for round {round}")]
pub struct MovesNotChosenError {
    round: u32,
}

impl MovesNotChosenError {
    pub fn new(round: u32) -> Self {
        Self { round }
    }
}

/// A round was started after a knockout ended the battle.
#[derive(Error, Debug, Default)]
#[error("battle already ended after round {round}")]
pub struct BattleEndedError {
    round: u32,
}

impl BattleEndedError {
    pub fn new(round: u32) -> Self {
        Self { round }
    }
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).wrap_error()
}
