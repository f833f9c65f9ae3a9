use serde::Serialize;

use crate::{
    MoveCatalog,
    MoveCategory,
    MoveEffect,
    Type,
};

/// Numeric identifier of a move in the [`MoveCatalog`].
pub type MoveId = u8;

/// A move a unit can use on its turn.
///
/// Moves are immutable values copied out of the [`MoveCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub id: MoveId,
    pub name: &'static str,
    /// Base power. Zero for status moves.
    pub power: u32,
    /// Chance to hit, as a percentage in `[1, 100]`.
    pub accuracy: u8,
    pub category: MoveCategory,
    #[serde(rename = "type")]
    pub primary_type: Type,
    /// Effect applied on hit. Present exactly when the move is a status move.
    pub effect: Option<MoveEffect>,
}

impl Move {
    pub(crate) const fn attack(
        id: MoveId,
        name: &'static str,
        power: u32,
        accuracy: u8,
        primary_type: Type,
    ) -> Self {
        Self {
            id,
            name,
            power,
            accuracy,
            category: MoveCategory::Attack,
            primary_type,
            effect: None,
        }
    }

    pub(crate) const fn status(
        id: MoveId,
        name: &'static str,
        accuracy: u8,
        primary_type: Type,
        effect: MoveEffect,
    ) -> Self {
        Self {
            id,
            name,
            power: 0,
            accuracy,
            category: MoveCategory::Status,
            primary_type,
            effect: Some(effect),
        }
    }

    /// Looks up a move by ID.
    pub fn lookup(id: MoveId) -> Option<Self> {
        MoveCatalog::get(id).copied()
    }

    /// Creates a move from its ID.
    ///
    /// Move IDs are internal data, so a broken reference degrades to the first catalog entry
    /// instead of failing.
    pub fn from_id(id: MoveId) -> Self {
        match Self::lookup(id) {
            Some(mov) => mov,
            None => {
                log::warn!("unknown move id {id}, substituting {}", MoveCatalog::fallback().name);
                *MoveCatalog::fallback()
            }
        }
    }

    /// Is this a damaging move?
    pub fn is_attack(&self) -> bool {
        self.category == MoveCategory::Attack
    }

    /// Is this a status move?
    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }
}

impl Default for Move {
    fn default() -> Self {
        *MoveCatalog::fallback()
    }
}
