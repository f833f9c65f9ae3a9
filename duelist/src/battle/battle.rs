use anyhow::Error;
use duelist_data::Move;
use duelist_prng::PseudoRandomNumberGenerator;

use crate::{
    battle::{
        BattleEngineOptions,
        BattleOptions,
        BattleView,
        Condition,
        Participant,
        RoundController,
        RoundOutcome,
        Side,
        StatusFlags,
    },
    error::{
        BattleEndedError,
        MovesNotChosenError,
        WrapError,
        general_error,
    },
    events::{
        EventLog,
        OutcomeEvent,
    },
    units::Unit,
};

/// The moves chosen for the next round, by turn order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChosenMoves {
    pub initiative: Move,
    pub other: Move,
}

impl ChosenMoves {
    pub fn for_side(&self, side: Side) -> Move {
        match side {
            Side::Initiative => self.initiative,
            Side::Other => self.other,
        }
    }
}

/// A one-on-one battle between the player's unit and the opponent's unit.
///
/// The battle owns both units for its whole duration. Each round, both participants choose a
/// move with [`Battle::set_chosen_moves`], and [`Battle::run_round`] resolves one turn for each
/// side, initiative first. The first round that ends with a unit knocked out ends the battle.
pub struct Battle {
    units: [Unit; 2],
    player_has_initiative: bool,
    chosen: Option<ChosenMoves>,
    flags: StatusFlags,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    log: EventLog,
    round: u32,
    ended: bool,
}

impl Battle {
    /// Creates a new battle.
    pub fn new(
        player: Unit,
        opponent: Unit,
        options: BattleOptions,
        engine_options: BattleEngineOptions,
    ) -> Result<Self, Error> {
        for (participant, unit) in [(Participant::Player, &player), (Participant::Opponent, &opponent)]
        {
            if unit.is_knocked_out() {
                return Err(general_error(format!(
                    "cannot start a battle: {} unit \"{}\" is knocked out",
                    participant,
                    unit.name(),
                )));
            }
        }

        let prng = (engine_options.rng_factory)(options.seed);
        let units = if options.player_has_initiative {
            [player, opponent]
        } else {
            [opponent, player]
        };
        log::debug!(
            "starting battle with seed {}, player has initiative: {}",
            prng.initial_seed(),
            options.player_has_initiative,
        );
        Ok(Self {
            units,
            player_has_initiative: options.player_has_initiative,
            chosen: None,
            flags: StatusFlags::new(),
            prng,
            log: EventLog::new(),
            round: 0,
            ended: false,
        })
    }

    /// Does the player act first every round?
    pub fn player_has_initiative(&self) -> bool {
        self.player_has_initiative
    }

    /// Number of rounds resolved so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Has a knockout ended the battle?
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// The seed the battle's random number generator started from.
    pub fn initial_seed(&self) -> u64 {
        self.prng.initial_seed()
    }

    /// The random number generator, for tests that need to inspect or steer it.
    pub fn prng_mut(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// Read-only view of the battle, for decision-making outside of the engine.
    pub fn view(&self) -> BattleView<'_> {
        BattleView::new(self)
    }

    pub(crate) fn side_of(&self, participant: Participant) -> Side {
        participant.side(self.player_has_initiative)
    }

    pub(crate) fn participant_on(&self, side: Side) -> Participant {
        Participant::on_side(side, self.player_has_initiative)
    }

    pub(crate) fn unit_on(&self, side: Side) -> &Unit {
        &self.units[side.index()]
    }

    pub fn unit(&self, participant: Participant) -> &Unit {
        self.unit_on(self.side_of(participant))
    }

    pub fn player(&self) -> &Unit {
        self.unit(Participant::Player)
    }

    pub fn opponent(&self) -> &Unit {
        self.unit(Participant::Opponent)
    }

    /// The unit that acts first every round.
    pub fn unit_with_initiative(&self) -> &Unit {
        self.unit_on(Side::Initiative)
    }

    /// The unit that acts second every round.
    pub fn other_unit(&self) -> &Unit {
        self.unit_on(Side::Other)
    }

    /// Participants whose units are knocked out.
    pub fn knocked_out(&self) -> Vec<Participant> {
        [Participant::Player, Participant::Opponent]
            .into_iter()
            .filter(|participant| self.unit(*participant).is_knocked_out())
            .collect()
    }

    /// Ends the battle, handing back `(player, opponent)`.
    pub fn into_units(self) -> (Unit, Unit) {
        let [initiative, other] = self.units;
        if self.player_has_initiative {
            (initiative, other)
        } else {
            (other, initiative)
        }
    }

    /// The `(initiative, other)` flag pair for a condition.
    pub fn flag(&self, condition: Condition) -> (bool, bool) {
        self.flags.pair(condition)
    }

    /// Overwrites the `(initiative, other)` flag pair for a condition, with no cancellation.
    pub fn set_flag(&mut self, condition: Condition, pair: (bool, bool)) {
        self.flags.set_pair(condition, pair);
    }

    pub fn flags(&self) -> &StatusFlags {
        &self.flags
    }

    /// Chooses moves for the next round, by move slot.
    ///
    /// Out-of-range slots resolve to slot 0. Choosing again before the round runs replaces the
    /// previous choice.
    pub fn set_chosen_moves(&mut self, player_slot: usize, opponent_slot: usize) {
        let player_move = self.player().move_in_slot(player_slot);
        let opponent_move = self.opponent().move_in_slot(opponent_slot);
        let chosen = if self.player_has_initiative {
            ChosenMoves {
                initiative: player_move,
                other: opponent_move,
            }
        } else {
            ChosenMoves {
                initiative: opponent_move,
                other: player_move,
            }
        };
        log::debug!(
            "round {} moves chosen: player uses {}, opponent uses {}",
            self.round + 1,
            player_move.name,
            opponent_move.name,
        );
        self.chosen = Some(chosen);
    }

    /// The moves chosen for the next round, if any.
    pub fn chosen_moves(&self) -> Option<&ChosenMoves> {
        self.chosen.as_ref()
    }

    /// Resolves one round: the initiative side's turn, then the other side's turn unless the first
    /// turn knocked a unit out.
    ///
    /// Chosen moves are consumed, so every round needs a fresh call to
    /// [`Battle::set_chosen_moves`].
    pub fn run_round(&mut self) -> Result<RoundOutcome, Error> {
        if self.ended {
            return Err(BattleEndedError::new(self.round).wrap_error());
        }
        let moves = self
            .chosen
            .take()
            .ok_or_else(|| MovesNotChosenError::new(self.round + 1).wrap_error())?;

        self.round += 1;
        let outcome = RoundController::new(self.round, moves).run(self);
        if outcome.knockout {
            log::debug!(
                "battle ended in round {}, knocked out: {:?}",
                self.round,
                self.knocked_out(),
            );
            self.ended = true;
        }
        self.log.push_extend(outcome.events.iter().cloned());
        Ok(outcome)
    }

    /// Does the event log have events that have not been read out yet?
    pub fn has_new_events(&self) -> bool {
        self.log.has_new_events()
    }

    /// Events since the last call, for sequential playback.
    pub fn new_events(&mut self) -> &[OutcomeEvent] {
        self.log.read_out()
    }

    /// Every event of the battle so far.
    pub fn all_events(&self) -> &[OutcomeEvent] {
        self.log.all()
    }

    /// Splits the battle into the state a single turn mutates.
    pub(crate) fn turn_state_mut(
        &mut self,
    ) -> (
        &mut [Unit; 2],
        &mut StatusFlags,
        &mut dyn PseudoRandomNumberGenerator,
    ) {
        (&mut self.units, &mut self.flags, self.prng.as_mut())
    }
}
