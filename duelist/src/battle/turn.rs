use duelist_data::{
    Move,
    MoveEffect,
    Stat,
    Type,
    TypeChart,
    TypeEffectiveness,
};
use duelist_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde::Serialize;

use crate::{
    battle::{
        Battle,
        Condition,
        FlagChange,
        Side,
        StatusFlags,
        calculations::{
            self,
            BURN_FRACTION,
            CRITICAL_HIT_CHANCE,
            DamageCalculation,
            RANDOM_FACTOR_MAX,
            RANDOM_FACTOR_MIN,
            RESTORE_FRACTION,
        },
    },
    events::{
        EffectCategory,
        OutcomeEvent,
    },
    units::Unit,
};

/// Everything a single turn reads.
pub struct TurnContext<'a> {
    pub attacker: &'a Unit,
    pub defender: &'a Unit,
    pub mov: &'a Move,
    pub attacker_side: Side,
    pub flags: &'a StatusFlags,
}

/// A single effect of a turn, in the order it applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum TurnEffect {
    /// The move missed the defender.
    Miss,
    /// The move damaged the defender.
    Damage {
        damage: u32,
        critical: bool,
        effectiveness: TypeEffectiveness,
    },
    /// The move changed a status flag on either side.
    Flag(FlagChange),
    /// The attacker restored a fraction of its max HP.
    Restore { fraction: f32 },
    /// The attacker lost a fraction of its max HP to burn.
    BurnDamage { fraction: f32 },
}

/// The decided outcome of a turn, before it is applied to the battle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnResolution {
    pub attacker_side: Side,
    pub hit: bool,
    pub effects: Vec<TurnEffect>,
    /// Would applying the effects leave either unit knocked out?
    pub knockout: bool,
}

/// Decides the outcome of one unit using one move against the other.
///
/// Nothing is mutated besides the random number generator. Rolls are drawn in a fixed order:
/// accuracy, then the damage variance and critical hit rolls if an attack hit.
pub fn resolve_turn(
    context: &TurnContext<'_>,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> TurnResolution {
    let side = context.attacker_side;
    let foe = side.foe();
    let flags = context.flags;
    let mov = context.mov;

    // Scratch copies for projecting HP.
    let mut attacker = context.attacker.clone();
    let mut defender = context.defender.clone();
    let mut effects = Vec::new();

    let threshold = calculations::hit_threshold(
        mov.accuracy,
        flags.get(side, Condition::AccuracyAmp),
        flags.get(side, Condition::AccuracyDecay),
    );
    let roll = rand_util::roll(prng, 1, 100);
    let hit = calculations::roll_hits(roll, threshold);
    log::trace!(
        "{} accuracy roll {roll} against {threshold}: {}",
        mov.name,
        if hit { "hit" } else { "miss" },
    );

    if !hit {
        effects.push(TurnEffect::Miss);
    } else if mov.is_attack() {
        let random_factor =
            rand_util::roll(prng, RANDOM_FACTOR_MIN, RANDOM_FACTOR_MAX) as f64 / 100.0;
        let critical = rand_util::roll(prng, 1, CRITICAL_HIT_CHANCE) == 1;
        let effectiveness =
            TypeChart::standard().lookup(mov.primary_type, defender.primary_type());
        let damage = DamageCalculation {
            power: mov.power,
            attack: attacker.attack(),
            defense: defender.defense(),
            attack_amp: flags.get(side, Condition::AttackAmp),
            attack_decay: flags.get(side, Condition::AttackDecay),
            defense_amp: flags.get(foe, Condition::DefenseAmp),
            defense_decay: flags.get(foe, Condition::DefenseDecay),
            same_type: attacker.primary_type() == mov.primary_type,
            effectiveness: effectiveness.multiplier(),
            random_factor,
            critical,
        }
        .damage();
        defender.modify_hp(-hp_delta(damage));
        effects.push(TurnEffect::Damage {
            damage,
            critical,
            effectiveness,
        });
    } else if let Some(effect) = mov.effect {
        match effect {
            MoveEffect::Restore => {
                attacker.modify_hp_fraction(RESTORE_FRACTION);
                effects.push(TurnEffect::Restore {
                    fraction: RESTORE_FRACTION,
                });
            }
            effect => {
                if let Some(condition) = Condition::from_effect(effect) {
                    let target = if effect.targets_user() { side } else { foe };
                    effects.push(TurnEffect::Flag(flags.plan(target, condition)));
                }
            }
        }
    }

    // Burn ticks after the move whether it hit or not.
    if flags.get(side, Condition::Burn) {
        attacker.modify_hp_fraction(BURN_FRACTION);
        effects.push(TurnEffect::BurnDamage {
            fraction: BURN_FRACTION,
        });
    }

    TurnResolution {
        attacker_side: side,
        hit,
        effects,
        knockout: attacker.is_knocked_out() || defender.is_knocked_out(),
    }
}

/// Damage beyond `i32::MAX` still empties any unit, since max HP never exceeds it.
fn hp_delta(damage: u32) -> i32 {
    i32::try_from(damage).unwrap_or(i32::MAX)
}

fn stat_name(condition: Condition) -> &'static str {
    match condition.stat() {
        Some(Stat::Attack) => "attack",
        Some(Stat::Defense) => "defense",
        Some(Stat::Accuracy) => "accuracy",
        None => "burn",
    }
}

fn effectiveness_message(effectiveness: TypeEffectiveness) -> &'static str {
    match effectiveness {
        TypeEffectiveness::Strong => " It's super effective!",
        TypeEffectiveness::Normal => "",
        TypeEffectiveness::Weak => " It's not very effective...",
    }
}

impl Battle {
    /// Display name of the unit on a side.
    fn display_name(&self, side: Side) -> String {
        let unit = self.unit_on(side);
        if unit.name().is_empty() {
            self.participant_on(side).label().to_owned()
        } else {
            unit.name().to_owned()
        }
    }

    fn event(
        &self,
        category: EffectCategory,
        target: Side,
        magnitude: u32,
        element: Type,
        critical: bool,
        description: String,
    ) -> OutcomeEvent {
        let unit = self.unit_on(target);
        OutcomeEvent {
            category,
            target: self.participant_on(target),
            magnitude,
            hp: unit.hp(),
            max_hp: unit.max_hp(),
            element,
            critical,
            description,
        }
    }

    /// Resolves and applies one turn, returning its resolution and the events it produced.
    pub(crate) fn take_turn(
        &mut self,
        attacker_side: Side,
        mov: Move,
    ) -> (TurnResolution, Vec<OutcomeEvent>) {
        let resolution = {
            let (units, flags, prng) = self.turn_state_mut();
            let [initiative, other] = &*units;
            let (attacker, defender) = match attacker_side {
                Side::Initiative => (initiative, other),
                Side::Other => (other, initiative),
            };
            resolve_turn(
                &TurnContext {
                    attacker,
                    defender,
                    mov: &mov,
                    attacker_side,
                    flags,
                },
                prng,
            )
        };

        let attacker_name = self.display_name(attacker_side);
        let mut events = Vec::with_capacity(resolution.effects.len());
        for effect in &resolution.effects {
            let event = self.apply_effect(attacker_side, &attacker_name, &mov, *effect);
            log::debug!("{}", event.log_line());
            events.push(event);
        }

        debug_assert_eq!(
            resolution.knockout,
            !self.knocked_out().is_empty(),
            "projected knockout must match applied state",
        );
        (resolution, events)
    }

    fn apply_effect(
        &mut self,
        attacker_side: Side,
        attacker_name: &str,
        mov: &Move,
        effect: TurnEffect,
    ) -> OutcomeEvent {
        let defender_side = attacker_side.foe();
        match effect {
            TurnEffect::Miss => self.event(
                EffectCategory::Miss,
                defender_side,
                0,
                Type::None,
                false,
                format!("{attacker_name}'s {} missed!", mov.name),
            ),
            TurnEffect::Damage {
                damage,
                critical,
                effectiveness,
            } => {
                let lost = self.change_hp(defender_side, |unit| unit.modify_hp(-hp_delta(damage)));
                let defender_name = self.display_name(defender_side);
                let mut description = format!(
                    "{attacker_name}'s {} dealt {lost} damage to {defender_name}.",
                    mov.name,
                );
                if critical {
                    description.push_str(" A critical hit!");
                }
                description.push_str(effectiveness_message(effectiveness));
                self.event(
                    EffectCategory::Damage,
                    defender_side,
                    lost,
                    mov.primary_type,
                    critical,
                    description,
                )
            }
            TurnEffect::Flag(change) => {
                self.flags_mut().commit(change);
                let target = change.side();
                let target_name = self.display_name(target);
                let (category, description) = match change {
                    FlagChange::Set {
                        condition: Condition::Burn,
                        ..
                    } => (EffectCategory::Burn, format!("{target_name} was burned!")),
                    FlagChange::Set { condition, .. } if condition.is_amp() => (
                        EffectCategory::Buff,
                        format!("{target_name}'s {} rose!", stat_name(condition)),
                    ),
                    FlagChange::Set { condition, .. } => (
                        EffectCategory::Debuff,
                        format!("{target_name}'s {} fell!", stat_name(condition)),
                    ),
                    // Clearing a decay is an amp landing, and the other way around.
                    FlagChange::Cleared { condition, .. } if condition.is_decay() => (
                        EffectCategory::Buff,
                        format!("{target_name}'s {} decay was cleared!", stat_name(condition)),
                    ),
                    FlagChange::Cleared { condition, .. } => (
                        EffectCategory::Debuff,
                        format!("{target_name}'s {} amp was cleared!", stat_name(condition)),
                    ),
                };
                self.event(category, target, 0, mov.primary_type, false, description)
            }
            TurnEffect::Restore { fraction } => {
                let restored =
                    self.change_hp(attacker_side, |unit| unit.modify_hp_fraction(fraction));
                self.event(
                    EffectCategory::Heal,
                    attacker_side,
                    restored,
                    Type::Heal,
                    false,
                    format!("{attacker_name} restored {restored} HP!"),
                )
            }
            TurnEffect::BurnDamage { fraction } => {
                let lost = self.change_hp(attacker_side, |unit| unit.modify_hp_fraction(fraction));
                self.event(
                    EffectCategory::Burn,
                    attacker_side,
                    lost,
                    Type::Burn,
                    false,
                    format!("{attacker_name} was hurt by its burn!"),
                )
            }
        }
    }

    /// Applies an HP change to the unit on a side, returning how much HP changed.
    fn change_hp<F>(&mut self, side: Side, change: F) -> u32
    where
        F: FnOnce(&mut Unit),
    {
        let (units, _, _) = self.turn_state_mut();
        let unit = &mut units[side.index()];
        let before = unit.hp();
        change(unit);
        unit.hp().abs_diff(before)
    }

    fn flags_mut(&mut self) -> &mut StatusFlags {
        let (_, flags, _) = self.turn_state_mut();
        flags
    }
}
