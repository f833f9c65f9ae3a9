use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A stat that can be amped or decayed.
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
pub enum Stat {
    #[string = "atk"]
    #[alias = "Attack"]
    Attack,
    #[string = "def"]
    #[alias = "Defense"]
    Defense,
    #[string = "acc"]
    #[alias = "Accuracy"]
    Accuracy,
}

/// The effect of a status move when it hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveEffect {
    /// Burns the target.
    Burn,
    /// Amps a stat of the user.
    Amp(Stat),
    /// Decays a stat of the target.
    Decay(Stat),
    /// Heals the user by half of its max HP.
    Restore,
}

impl MoveEffect {
    /// Does this effect land on the move's user rather than its target?
    pub fn targets_user(&self) -> bool {
        match self {
            Self::Amp(_) | Self::Restore => true,
            Self::Burn | Self::Decay(_) => false,
        }
    }
}
