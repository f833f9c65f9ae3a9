use duelist_data::{
    MoveEffect,
    Stat,
};
use serde::Serialize;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::battle::Side;

/// A status condition that can be active on a side.
///
/// Conditions are boolean: reapplying an active condition changes nothing, and nothing expires
/// on its own.
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
pub enum Condition {
    #[string = "burn"]
    Burn,
    #[string = "atkamp"]
    AttackAmp,
    #[string = "defamp"]
    DefenseAmp,
    #[string = "accamp"]
    AccuracyAmp,
    #[string = "atkdecay"]
    AttackDecay,
    #[string = "defdecay"]
    DefenseDecay,
    #[string = "accdecay"]
    AccuracyDecay,
}

impl Condition {
    pub const ALL: [Condition; 7] = [
        Condition::Burn,
        Condition::AttackAmp,
        Condition::DefenseAmp,
        Condition::AccuracyAmp,
        Condition::AttackDecay,
        Condition::DefenseDecay,
        Condition::AccuracyDecay,
    ];

    fn index(&self) -> usize {
        match self {
            Self::Burn => 0,
            Self::AttackAmp => 1,
            Self::DefenseAmp => 2,
            Self::AccuracyAmp => 3,
            Self::AttackDecay => 4,
            Self::DefenseDecay => 5,
            Self::AccuracyDecay => 6,
        }
    }

    /// The amp condition for a stat.
    pub fn amp(stat: Stat) -> Self {
        match stat {
            Stat::Attack => Self::AttackAmp,
            Stat::Defense => Self::DefenseAmp,
            Stat::Accuracy => Self::AccuracyAmp,
        }
    }

    /// The decay condition for a stat.
    pub fn decay(stat: Stat) -> Self {
        match stat {
            Stat::Attack => Self::AttackDecay,
            Stat::Defense => Self::DefenseDecay,
            Stat::Accuracy => Self::AccuracyDecay,
        }
    }

    /// The condition this one cancels out, if any.
    ///
    /// An amp and a decay of the same stat are never active on the same side together.
    pub fn opposing(&self) -> Option<Self> {
        match self {
            Self::Burn => None,
            Self::AttackAmp => Some(Self::AttackDecay),
            Self::DefenseAmp => Some(Self::DefenseDecay),
            Self::AccuracyAmp => Some(Self::AccuracyDecay),
            Self::AttackDecay => Some(Self::AttackAmp),
            Self::DefenseDecay => Some(Self::DefenseAmp),
            Self::AccuracyDecay => Some(Self::AccuracyAmp),
        }
    }

    /// The condition a status move effect applies, if any.
    pub fn from_effect(effect: MoveEffect) -> Option<Self> {
        match effect {
            MoveEffect::Burn => Some(Self::Burn),
            MoveEffect::Amp(stat) => Some(Self::amp(stat)),
            MoveEffect::Decay(stat) => Some(Self::decay(stat)),
            MoveEffect::Restore => None,
        }
    }

    /// The stat this condition modifies. Burn modifies no stat.
    pub fn stat(&self) -> Option<Stat> {
        match self {
            Self::Burn => None,
            Self::AttackAmp | Self::AttackDecay => Some(Stat::Attack),
            Self::DefenseAmp | Self::DefenseDecay => Some(Stat::Defense),
            Self::AccuracyAmp | Self::AccuracyDecay => Some(Stat::Accuracy),
        }
    }

    pub fn is_amp(&self) -> bool {
        matches!(self, Self::AttackAmp | Self::DefenseAmp | Self::AccuracyAmp)
    }

    pub fn is_decay(&self) -> bool {
        matches!(
            self,
            Self::AttackDecay | Self::DefenseDecay | Self::AccuracyDecay
        )
    }
}

/// A change to status flags, decided before it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum FlagChange {
    /// The condition became (or stayed) active.
    Set { side: Side, condition: Condition },
    /// The opposing condition was active, so it was cleared instead.
    Cleared { side: Side, condition: Condition },
}

impl FlagChange {
    pub fn side(&self) -> Side {
        match self {
            Self::Set { side, .. } | Self::Cleared { side, .. } => *side,
        }
    }
}

/// The status flags of both sides, keyed by `(side, condition)`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusFlags {
    flags: [[bool; 2]; 7],
}

impl StatusFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the condition active on the side?
    pub fn get(&self, side: Side, condition: Condition) -> bool {
        self.flags[condition.index()][side.index()]
    }

    /// Sets or clears a condition on a side directly, with no cancellation.
    pub fn set(&mut self, side: Side, condition: Condition, value: bool) {
        self.flags[condition.index()][side.index()] = value;
    }

    /// The `(initiative, other)` pair for a condition.
    pub fn pair(&self, condition: Condition) -> (bool, bool) {
        let [initiative, other] = self.flags[condition.index()];
        (initiative, other)
    }

    /// Overwrites the `(initiative, other)` pair for a condition.
    pub fn set_pair(&mut self, condition: Condition, (initiative, other): (bool, bool)) {
        self.flags[condition.index()] = [initiative, other];
    }

    /// Decides what applying a condition to a side does.
    ///
    /// If the opposing condition is active on that side, it is cleared and the condition is not
    /// set. Otherwise the condition is set.
    pub fn plan(&self, side: Side, condition: Condition) -> FlagChange {
        match condition.opposing() {
            Some(opposing) if self.get(side, opposing) => FlagChange::Cleared {
                side,
                condition: opposing,
            },
            _ => FlagChange::Set { side, condition },
        }
    }

    /// Applies a planned change.
    pub fn commit(&mut self, change: FlagChange) {
        match change {
            FlagChange::Set { side, condition } => self.set(side, condition, true),
            FlagChange::Cleared { side, condition } => self.set(side, condition, false),
        }
    }

    /// Applies a condition to a side with cancellation, returning what happened.
    pub fn apply(&mut self, side: Side, condition: Condition) -> FlagChange {
        let change = self.plan(side, condition);
        self.commit(change);
        change
    }

    /// All active conditions, in `(side, condition)` order.
    pub fn active(&self) -> impl Iterator<Item = (Side, Condition)> + '_ {
        [Side::Initiative, Side::Other].into_iter().flat_map(move |side| {
            Condition::ALL
                .into_iter()
                .filter(move |condition| self.get(side, *condition))
                .map(move |condition| (side, condition))
        })
    }
}
