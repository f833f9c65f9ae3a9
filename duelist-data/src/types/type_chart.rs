use hashbrown::HashMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::Type;

/// Type effectiveness of one type against another.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum TypeEffectiveness {
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The damage multiplier for this effectiveness.
    pub fn multiplier(&self) -> f32 {
        match self {
            Self::Weak => 0.5,
            Self::Normal => 1.0,
            Self::Strong => 2.0,
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Weak => serializer.serialize_f32(self.multiplier()),
            _ => serializer.serialize_u32(self.multiplier() as u32),
        }
    }
}

/// A type table, keyed by attacking type, then by defending type.
type TypeTable = HashMap<Type, HashMap<Type, TypeEffectiveness>>;

/// A partial type chart.
///
/// Only non-neutral matchups are stored. Any pair missing from the chart, including every pair
/// involving a non-elemental type, is [`TypeEffectiveness::Normal`]. The chart is directional:
/// an entry for `A -> B` says nothing about `B -> A`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    types: TypeTable,
}

/// Non-neutral matchups of the standard chart, as (attacker, defender, effectiveness).
///
/// Each elemental type is strong against exactly one type and weak against the type that is
/// strong against it.
const STANDARD_MATCHUPS: [(Type, Type, TypeEffectiveness); 22] = [
    (Type::Anima, Type::Mortis, TypeEffectiveness::Strong),
    (Type::Anima, Type::Virus, TypeEffectiveness::Weak),
    (Type::Aqua, Type::Ignis, TypeEffectiveness::Strong),
    (Type::Aqua, Type::Fulmen, TypeEffectiveness::Weak),
    (Type::Ferrum, Type::Virus, TypeEffectiveness::Strong),
    (Type::Ferrum, Type::Sonus, TypeEffectiveness::Weak),
    (Type::Frigid, Type::Terra, TypeEffectiveness::Strong),
    (Type::Frigid, Type::Ignis, TypeEffectiveness::Weak),
    (Type::Fulmen, Type::Aqua, TypeEffectiveness::Strong),
    (Type::Fulmen, Type::Terra, TypeEffectiveness::Weak),
    (Type::Ignis, Type::Frigid, TypeEffectiveness::Strong),
    (Type::Ignis, Type::Aqua, TypeEffectiveness::Weak),
    (Type::Mentis, Type::Sonus, TypeEffectiveness::Strong),
    (Type::Mentis, Type::Mortis, TypeEffectiveness::Weak),
    (Type::Mortis, Type::Mentis, TypeEffectiveness::Strong),
    (Type::Mortis, Type::Anima, TypeEffectiveness::Weak),
    (Type::Sonus, Type::Ferrum, TypeEffectiveness::Strong),
    (Type::Sonus, Type::Mentis, TypeEffectiveness::Weak),
    (Type::Terra, Type::Fulmen, TypeEffectiveness::Strong),
    (Type::Terra, Type::Frigid, TypeEffectiveness::Weak),
    (Type::Virus, Type::Anima, TypeEffectiveness::Strong),
    (Type::Virus, Type::Ferrum, TypeEffectiveness::Weak),
];

static STANDARD_CHART: Lazy<TypeChart> = Lazy::new(TypeChart::build_standard);

impl TypeChart {
    /// The chart used by every battle.
    pub fn standard() -> &'static TypeChart {
        &STANDARD_CHART
    }

    fn build_standard() -> Self {
        let mut types = TypeTable::new();
        for (attacker, defender, effectiveness) in STANDARD_MATCHUPS {
            types
                .entry(attacker)
                .or_default()
                .insert(defender, effectiveness);
        }
        Self { types }
    }

    /// Looks up the effectiveness of an attacking type against a defending type.
    pub fn lookup(&self, attacker: Type, defender: Type) -> TypeEffectiveness {
        self.types
            .get(&attacker)
            .and_then(|row| row.get(&defender))
            .copied()
            .unwrap_or_default()
    }

    /// The damage multiplier of an attacking type against a defending type.
    pub fn effectiveness(&self, attacker: Type, defender: Type) -> f32 {
        self.lookup(attacker, defender).multiplier()
    }
}

/// The damage multiplier of an attacking type against a defending type in the standard chart.
///
/// Total: unlisted pairs are neutral.
pub fn effectiveness(attacker: Type, defender: Type) -> f32 {
    TypeChart::standard().effectiveness(attacker, defender)
}
