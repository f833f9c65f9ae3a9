use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    /// Deals damage.
    #[string = "Attack"]
    Attack,
    /// Deals no damage; applies a [`MoveEffect`][`crate::MoveEffect`] instead.
    #[string = "Status"]
    Status,
}
