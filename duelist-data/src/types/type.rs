use std::str::FromStr;

use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The type of a unit or move, which determines matchups in the type chart.
///
/// The first eleven variants are elemental. The rest are pseudo-types carried by status moves;
/// they never appear in the type chart, so every matchup involving them is neutral.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Anima"]
    Anima,
    #[string = "Aqua"]
    Aqua,
    #[string = "Ferrum"]
    Ferrum,
    #[string = "Frigid"]
    Frigid,
    #[string = "Fulmen"]
    Fulmen,
    #[string = "Ignis"]
    Ignis,
    #[string = "Mentis"]
    Mentis,
    #[string = "Mortis"]
    Mortis,
    #[string = "Sonus"]
    Sonus,
    #[string = "Terra"]
    Terra,
    #[string = "Virus"]
    Virus,
    #[string = "Buff"]
    Buff,
    #[string = "Debuff"]
    Debuff,
    #[string = "Burn"]
    Burn,
    #[string = "Heal"]
    Heal,
    #[string = "None"]
    #[alias = "NoType"]
    #[default]
    None,
}

impl Type {
    /// All elemental types, in declaration order.
    pub const ELEMENTAL: [Type; 11] = [
        Type::Anima,
        Type::Aqua,
        Type::Ferrum,
        Type::Frigid,
        Type::Fulmen,
        Type::Ignis,
        Type::Mentis,
        Type::Mortis,
        Type::Sonus,
        Type::Terra,
        Type::Virus,
    ];

    /// Is this one of the elemental types a unit can have?
    pub fn is_elemental(&self) -> bool {
        Self::ELEMENTAL.contains(self)
    }

    /// Parses a type label, mapping anything unrecognized to [`Type::None`].
    pub fn from_label_or_none(label: &str) -> Self {
        Self::from_str(label).unwrap_or_default()
    }
}
