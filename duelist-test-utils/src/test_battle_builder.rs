use anyhow::Result;
use duelist::{
    Battle,
    BattleEngineOptions,
    BattleOptions,
    MoveId,
    Type,
    Unit,
    UnitData,
};

use crate::ControlledRandomNumberGenerator;

/// Unit data for tests.
pub fn unit_data(
    name: &str,
    primary_type: Type,
    hp: u32,
    attack: u32,
    defense: u32,
    moves: [MoveId; 4],
) -> UnitData {
    UnitData {
        name: name.to_owned(),
        primary_type,
        hp,
        attack,
        defense,
        moves,
    }
}

/// Battle builder object for integration tests.
pub struct TestBattleBuilder {
    options: BattleOptions,
    engine_options: BattleEngineOptions,
    player: Option<UnitData>,
    opponent: Option<UnitData>,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            options: BattleOptions::default(),
            engine_options: BattleEngineOptions::default(),
            player: None,
            opponent: None,
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] from the battle builder.
    ///
    /// Missing units default to an identical pair of neutral units.
    pub fn build(mut self) -> Result<Battle> {
        if self.controlled_rng {
            self.engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        let player = Unit::new(
            self.player
                .unwrap_or_else(|| unit_data("Player", Type::None, 100, 100, 100, [1, 2, 3, 4])),
        )?;
        let opponent = Unit::new(
            self.opponent
                .unwrap_or_else(|| unit_data("Opponent", Type::None, 100, 100, 100, [1, 2, 3, 4])),
        )?;
        Battle::new(player, opponent, self.options, self.engine_options)
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn with_player_initiative(mut self, player_has_initiative: bool) -> Self {
        self.options.player_has_initiative = player_has_initiative;
        self
    }

    pub fn with_player(mut self, data: UnitData) -> Self {
        self.player = Some(data);
        self
    }

    pub fn with_opponent(mut self, data: UnitData) -> Self {
        self.opponent = Some(data);
        self
    }
}
