/// Scale applied to every damage roll.
pub const DAMAGE_SCALE: f64 = 40.0;
/// Divisor applied to the defending side of every damage roll.
pub const DAMAGE_DIVISOR: f64 = 50.0;
/// Accuracy multiplier change from an accuracy amp or decay.
pub const ACCURACY_MODIFIER_STEP: f64 = 0.25;
/// Attack or defense multiplier change from an amp or decay.
pub const STAT_MODIFIER_STEP: f64 = 0.5;
/// Attack multiplier for a move matching its user's type.
pub const SAME_TYPE_BONUS: f64 = 1.25;
/// One in this many hits is critical.
pub const CRITICAL_HIT_CHANCE: u64 = 24;
pub const CRITICAL_HIT_MULTIPLIER: f64 = 2.0;
/// Bounds of the damage variance roll, in hundredths.
pub const RANDOM_FACTOR_MIN: u64 = 85;
pub const RANDOM_FACTOR_MAX: u64 = 100;
/// Fraction of max HP restored by Restore.
pub const RESTORE_FRACTION: f32 = 0.5;
/// Fraction of max HP lost to burn every turn.
pub const BURN_FRACTION: f32 = -0.1;

/// Multiplier for a stat given its amp and decay flags.
///
/// The two flags are independent and stack additively.
pub fn modifier(step: f64, amp: bool, decay: bool) -> f64 {
    let mut modifier = 1.0;
    if amp {
        modifier += step;
    }
    if decay {
        modifier -= step;
    }
    modifier
}

/// Highest accuracy roll that still hits.
pub fn hit_threshold(accuracy: u8, amp: bool, decay: bool) -> f64 {
    modifier(ACCURACY_MODIFIER_STEP, amp, decay) * accuracy as f64
}

/// Does an accuracy roll in `[1, 100]` hit?
pub fn roll_hits(roll: u64, threshold: f64) -> bool {
    roll as f64 <= threshold
}

/// Inputs to a single damage calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageCalculation {
    pub power: u32,
    pub attack: u32,
    pub defense: u32,
    pub attack_amp: bool,
    pub attack_decay: bool,
    pub defense_amp: bool,
    pub defense_decay: bool,
    pub same_type: bool,
    pub effectiveness: f32,
    /// Damage variance in `[0.85, 1.00]`.
    pub random_factor: f64,
    pub critical: bool,
}

impl DamageCalculation {
    /// Final attack multiplier, including the same-type bonus.
    pub fn attack_modifier(&self) -> f64 {
        let mut attack_modifier =
            modifier(STAT_MODIFIER_STEP, self.attack_amp, self.attack_decay);
        if self.same_type {
            attack_modifier *= SAME_TYPE_BONUS;
        }
        attack_modifier
    }

    pub fn defense_modifier(&self) -> f64 {
        modifier(STAT_MODIFIER_STEP, self.defense_amp, self.defense_decay)
    }

    /// Calculates damage, truncated toward zero and never negative.
    pub fn damage(&self) -> u32 {
        let critical = if self.critical {
            CRITICAL_HIT_MULTIPLIER
        } else {
            1.0
        };
        let attack = self.attack as f64 * self.attack_modifier();
        let defense = self.defense as f64 * self.defense_modifier() * DAMAGE_DIVISOR;
        let damage = DAMAGE_SCALE
            * self.random_factor
            * critical
            * self.power as f64
            * self.effectiveness as f64
            * attack
            / defense;
        let damage = damage.trunc();
        log::trace!(
            "damage {damage} = {DAMAGE_SCALE} x {} x {critical} x {} x {} x {attack} / {defense}",
            self.random_factor,
            self.power,
            self.effectiveness,
        );
        // Float-to-int casts saturate, and NaN becomes zero.
        damage.max(0.0) as u32
    }
}
