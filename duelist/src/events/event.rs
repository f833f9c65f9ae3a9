use std::fmt::{
    self,
    Display,
};

use duelist_data::Type;
use itertools::Itertools;
use serde::Serialize;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::battle::Participant;

/// The kind of outcome an event presents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum EffectCategory {
    #[string = "damage"]
    Damage,
    #[string = "miss"]
    Miss,
    #[string = "buff"]
    Buff,
    #[string = "debuff"]
    Debuff,
    #[string = "burn"]
    Burn,
    #[string = "heal"]
    Heal,
}

/// A single finalized outcome of a turn, for sequential playback by a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeEvent {
    pub category: EffectCategory,
    /// The unit the effect landed on.
    pub target: Participant,
    /// HP lost or restored. Zero for misses and flag changes.
    pub magnitude: u32,
    /// Target's HP after the effect.
    pub hp: u32,
    pub max_hp: u32,
    /// Type whose visuals represent the effect.
    pub element: Type,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub critical: bool,
    pub description: String,
}

impl OutcomeEvent {
    /// Target's HP after the effect, as a fraction of max HP.
    pub fn hp_fraction(&self) -> f32 {
        self.hp as f32 / self.max_hp as f32
    }

    /// Compact pipe-separated form, as written to battle logs.
    pub fn log_line(&self) -> String {
        let mut parts = vec![
            self.category.to_string(),
            self.target.to_string(),
            self.magnitude.to_string(),
            format!("{}/{}", self.hp, self.max_hp),
        ];
        if self.critical {
            parts.push("crit".to_owned());
        }
        parts.into_iter().join("|")
    }
}

impl Display for OutcomeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}
