use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A side of the battle, by turn order.
///
/// Initiative is fixed for the whole battle: the unit with initiative always acts first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Side {
    #[string = "initiative"]
    Initiative,
    #[string = "other"]
    Other,
}

impl Side {
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Initiative => 0,
            Self::Other => 1,
        }
    }

    /// The opposing side.
    pub fn foe(&self) -> Self {
        match self {
            Self::Initiative => Self::Other,
            Self::Other => Self::Initiative,
        }
    }
}

/// A participant of the battle, by who controls it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Participant {
    #[string = "player"]
    Player,
    #[string = "opponent"]
    Opponent,
}

impl Participant {
    /// The opposing participant.
    pub fn foe(&self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }

    /// Display label, used when a unit has no name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Opponent => "Opponent",
        }
    }

    /// The side this participant is on.
    pub fn side(&self, player_has_initiative: bool) -> Side {
        match (self, player_has_initiative) {
            (Self::Player, true) | (Self::Opponent, false) => Side::Initiative,
            (Self::Player, false) | (Self::Opponent, true) => Side::Other,
        }
    }

    /// The participant on the given side.
    pub fn on_side(side: Side, player_has_initiative: bool) -> Self {
        match (side, player_has_initiative) {
            (Side::Initiative, true) | (Side::Other, false) => Self::Player,
            (Side::Initiative, false) | (Side::Other, true) => Self::Opponent,
        }
    }
}
