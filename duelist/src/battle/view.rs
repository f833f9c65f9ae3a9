use duelist_data::{
    Move,
    TypeChart,
    TypeEffectiveness,
};

use crate::{
    battle::{
        Battle,
        Condition,
        Participant,
    },
    units::{
        MOVE_SLOTS,
        Unit,
    },
};

/// Read-only view of a battle, for choosing moves outside of the engine.
///
/// Nothing reachable through a view can change the battle.
#[derive(Clone, Copy)]
pub struct BattleView<'b> {
    battle: &'b Battle,
}

impl<'b> BattleView<'b> {
    pub(crate) fn new(battle: &'b Battle) -> Self {
        Self { battle }
    }

    pub fn round(&self) -> u32 {
        self.battle.round()
    }

    pub fn ended(&self) -> bool {
        self.battle.ended()
    }

    pub fn player_has_initiative(&self) -> bool {
        self.battle.player_has_initiative()
    }

    pub fn unit(&self, participant: Participant) -> &'b Unit {
        self.battle.unit(participant)
    }

    pub fn moves(&self, participant: Participant) -> &'b [Move; MOVE_SLOTS] {
        self.unit(participant).moves()
    }

    /// Is the condition active on the participant's side?
    pub fn has_condition(&self, participant: Participant, condition: Condition) -> bool {
        self.battle
            .flags()
            .get(self.battle.side_of(participant), condition)
    }

    /// Every condition active on the participant's side.
    pub fn conditions(&self, participant: Participant) -> Vec<Condition> {
        Condition::ALL
            .into_iter()
            .filter(|condition| self.has_condition(participant, *condition))
            .collect()
    }

    /// Effectiveness of a move against the participant's unit.
    pub fn effectiveness_against(&self, mov: &Move, target: Participant) -> TypeEffectiveness {
        TypeChart::standard().lookup(mov.primary_type, self.unit(target).primary_type())
    }

    /// Slots of the participant's moves that are super effective against its foe.
    pub fn super_effective_slots(&self, participant: Participant) -> Vec<usize> {
        self.moves(participant)
            .iter()
            .enumerate()
            .filter(|(_, mov)| {
                mov.is_attack()
                    && self.effectiveness_against(mov, participant.foe())
                        == TypeEffectiveness::Strong
            })
            .map(|(slot, _)| slot)
            .collect()
    }
}
