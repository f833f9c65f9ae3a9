use duelist_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
use serde::{
    Deserialize,
    Serialize,
};

fn default_true() -> bool {
    true
}

/// Options for a single battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOptions {
    /// Seed for the battle's random number generator.
    ///
    /// Battles with the same seed, units and move choices resolve identically. A random seed is
    /// used if none is given.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Does the player act first every round?
    #[serde(default = "default_true")]
    pub player_has_initiative: bool,
}

impl Default for BattleOptions {
    fn default() -> Self {
        Self {
            seed: None,
            player_has_initiative: true,
        }
    }
}

fn default_rng_factory(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

/// Options that change how the battle engine itself behaves, rather than any single battle.
#[derive(Debug)]
pub struct BattleEngineOptions {
    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            rng_factory: default_rng_factory,
        }
    }
}
