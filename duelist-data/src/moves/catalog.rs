use crate::{
    Move,
    MoveEffect,
    MoveId,
    Stat,
    Type,
};

static MOVES: [Move; 19] = [
    Move::attack(1, "Star Pulse", 75, 100, Type::Anima),
    Move::attack(2, "Water Jet", 75, 100, Type::Aqua),
    Move::attack(3, "Iron Strike", 75, 100, Type::Ferrum),
    Move::attack(4, "Frost Beam", 75, 100, Type::Frigid),
    Move::attack(5, "Lightning Bolt", 75, 100, Type::Fulmen),
    Move::attack(6, "Flamethrower", 75, 100, Type::Ignis),
    Move::attack(7, "Brain Hemorrhage", 75, 100, Type::Mentis),
    Move::attack(8, "Grave Killer", 75, 100, Type::Mortis),
    Move::attack(9, "Death Toll", 75, 100, Type::Sonus),
    Move::attack(10, "Earthquake", 75, 100, Type::Terra),
    Move::attack(11, "Toxic Bomb", 75, 100, Type::Virus),
    Move::status(12, "Burn", 75, Type::Burn, MoveEffect::Burn),
    Move::status(13, "Amp Attack", 100, Type::Buff, MoveEffect::Amp(Stat::Attack)),
    Move::status(14, "Amp Defense", 100, Type::Buff, MoveEffect::Amp(Stat::Defense)),
    Move::status(15, "Amp Accuracy", 100, Type::Buff, MoveEffect::Amp(Stat::Accuracy)),
    Move::status(16, "Decay Attack", 100, Type::Debuff, MoveEffect::Decay(Stat::Attack)),
    Move::status(17, "Decay Defense", 100, Type::Debuff, MoveEffect::Decay(Stat::Defense)),
    Move::status(18, "Decay Accuracy", 75, Type::Debuff, MoveEffect::Decay(Stat::Accuracy)),
    Move::status(19, "Restore", 100, Type::Heal, MoveEffect::Restore),
];

/// The fixed registry of every move in the game.
pub struct MoveCatalog;

impl MoveCatalog {
    /// Returns the move with the given ID.
    pub fn get(id: MoveId) -> Option<&'static Move> {
        MOVES.iter().find(|mov| mov.id == id)
    }

    /// The move substituted for unknown IDs.
    pub fn fallback() -> &'static Move {
        &MOVES[0]
    }

    /// All moves, in ID order.
    pub fn all() -> impl Iterator<Item = &'static Move> {
        MOVES.iter()
    }

    /// All damaging moves.
    pub fn attacks() -> impl Iterator<Item = &'static Move> {
        Self::all().filter(|mov| mov.is_attack())
    }

    /// All status moves.
    pub fn status_moves() -> impl Iterator<Item = &'static Move> {
        Self::all().filter(|mov| mov.is_status())
    }
}
