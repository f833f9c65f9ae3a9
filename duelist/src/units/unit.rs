use anyhow::Error;
use duelist_data::{
    Move,
    MoveId,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::{
    ValidationError,
    WrapError,
    WrapResultError,
};

/// Number of move slots on every unit.
pub const MOVE_SLOTS: usize = 4;

/// Largest max HP a unit can have, so that any HP delta fits in an `i32`.
pub const MAX_HP: u32 = i32::MAX as u32;

/// Data for creating a [`Unit`].
///
/// Units are generated outside of the engine; this is the shape they arrive in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitData {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub primary_type: Type,
    /// Max HP. The unit starts at full health.
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub moves: [MoveId; MOVE_SLOTS],
}

impl UnitData {
    /// Parses unit data from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).wrap_error_with_message("invalid unit data")
    }
}

/// A combatant.
///
/// Stats are fixed at creation. Current HP only changes through [`Unit::modify_hp`] and
/// [`Unit::modify_hp_fraction`], and always stays within `[0, max_hp]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    name: String,
    #[serde(rename = "type")]
    primary_type: Type,
    hp: u32,
    max_hp: u32,
    attack: u32,
    defense: u32,
    moves: [Move; MOVE_SLOTS],
}

impl Unit {
    /// Creates a new unit at full health.
    pub fn new(data: UnitData) -> Result<Self, Error> {
        let mut problems = ValidationError::default();
        if data.hp == 0 {
            problems.add_problem("max HP must be positive");
        } else if data.hp > MAX_HP {
            problems.add_problem(format!("max HP must not exceed {MAX_HP}"));
        }
        if data.defense == 0 {
            problems.add_problem("defense must be positive");
        }
        problems.into_result().map_err(|error| {
            error.wrap_error_with_message(format!("cannot create unit \"{}\"", data.name))
        })?;

        Ok(Self {
            name: data.name,
            primary_type: data.primary_type,
            hp: data.hp,
            max_hp: data.hp,
            attack: data.attack,
            defense: data.defense,
            moves: data.moves.map(Move::from_id),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_type(&self) -> Type {
        self.primary_type
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn moves(&self) -> &[Move; MOVE_SLOTS] {
        &self.moves
    }

    /// Current HP as a fraction of max HP.
    pub fn hp_fraction(&self) -> f32 {
        self.hp as f32 / self.max_hp as f32
    }

    pub fn is_knocked_out(&self) -> bool {
        self.hp == 0
    }

    /// Returns the move in the given slot.
    ///
    /// Out-of-range slots resolve to slot 0.
    pub fn move_in_slot(&self, slot: usize) -> Move {
        self.moves[Self::clamp_slot(slot)]
    }

    fn clamp_slot(slot: usize) -> usize {
        if slot < MOVE_SLOTS {
            slot
        } else {
            log::warn!("move slot {slot} is out of range, using slot 0");
            0
        }
    }

    /// Replaces the move in the given slot.
    ///
    /// Only valid between battles. Out-of-range slots resolve to slot 0.
    pub fn swap_move(&mut self, slot: usize, id: MoveId) {
        self.moves[Self::clamp_slot(slot)] = Move::from_id(id);
    }

    /// Adds `delta` to current HP, clamping the result to `[0, max_hp]`.
    pub fn modify_hp(&mut self, delta: i32) {
        let hp = (self.hp as i64 + delta as i64).clamp(0, self.max_hp as i64);
        self.hp = hp as u32;
    }

    /// Converts a fraction of max HP into an HP delta.
    ///
    /// The fraction is clamped to `[-1.0, 1.0]` and the product is truncated toward zero.
    pub fn fraction_delta(&self, fraction: f32) -> i32 {
        let fraction = fraction.clamp(-1.0, 1.0);
        (self.max_hp as f64 * fraction as f64).trunc() as i32
    }

    /// Adds a fraction of max HP to current HP.
    pub fn modify_hp_fraction(&mut self, fraction: f32) {
        self.modify_hp(self.fraction_delta(fraction));
    }
}
