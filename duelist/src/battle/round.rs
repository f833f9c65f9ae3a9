use serde::Serialize;

use crate::{
    battle::{
        Battle,
        ChosenMoves,
        Side,
    },
    events::OutcomeEvent,
};

/// Where a round is in its resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    AwaitingMoves,
    FirstTurn,
    SecondTurn,
    Complete,
}

/// The result of a resolved round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundOutcome {
    pub round: u32,
    /// Did the round end with a unit knocked out?
    pub knockout: bool,
    /// Was the second turn skipped because the first turn knocked a unit out?
    pub second_turn_skipped: bool,
    /// Every event of the round, in order.
    pub events: Vec<OutcomeEvent>,
}

/// Drives a single round through its states.
///
/// The initiative side always takes the first turn. A knockout during the first turn completes
/// the round immediately.
pub(crate) struct RoundController {
    round: u32,
    state: RoundState,
    moves: ChosenMoves,
    knockout: bool,
    second_turn_skipped: bool,
    events: Vec<OutcomeEvent>,
}

impl RoundController {
    pub fn new(round: u32, moves: ChosenMoves) -> Self {
        Self {
            round,
            state: RoundState::AwaitingMoves,
            moves,
            knockout: false,
            second_turn_skipped: false,
            events: Vec::new(),
        }
    }

    /// Runs the round to completion.
    pub fn run(mut self, battle: &mut Battle) -> RoundOutcome {
        while self.state != RoundState::Complete {
            let next = self.step(battle);
            log::trace!(
                "round {}: {:?} -> {:?}",
                self.round,
                self.state,
                next,
            );
            self.state = next;
        }
        RoundOutcome {
            round: self.round,
            knockout: self.knockout,
            second_turn_skipped: self.second_turn_skipped,
            events: self.events,
        }
    }

    fn step(&mut self, battle: &mut Battle) -> RoundState {
        match self.state {
            // The controller is only created once moves are chosen.
            RoundState::AwaitingMoves => RoundState::FirstTurn,
            RoundState::FirstTurn => {
                if self.take_turn(battle, Side::Initiative) {
                    self.skip_second_turn()
                } else {
                    RoundState::SecondTurn
                }
            }
            RoundState::SecondTurn => {
                self.take_turn(battle, Side::Other);
                RoundState::Complete
            }
            RoundState::Complete => RoundState::Complete,
        }
    }

    /// Takes one side's turn, returning whether it ended in a knockout.
    fn take_turn(&mut self, battle: &mut Battle, side: Side) -> bool {
        let (resolution, events) = battle.take_turn(side, self.moves.for_side(side));
        self.events.extend(events);
        self.knockout |= resolution.knockout;
        resolution.knockout
    }

    fn skip_second_turn(&mut self) -> RoundState {
        log::debug!(
            "round {}: first turn ended in a knockout, skipping second turn",
            self.round,
        );
        self.second_turn_skipped = true;
        RoundState::Complete
    }
}
