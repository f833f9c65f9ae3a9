use duelist::{
    MoveCategory,
    Type,
    Unit,
    UnitData,
};
use duelist_test_utils::{
    assert_error_message,
    assert_error_message_contains,
    unit_data,
};

#[test]
fn creates_unit_from_json() {
    let data = UnitData::from_json(
        r#"{
            "name": "Pebble",
            "type": "Terra",
            "hp": 120,
            "attack": 80,
            "defense": 95,
            "moves": [10, 13, 18, 19]
        }"#,
    )
    .unwrap();
    let unit = Unit::new(data).unwrap();
    assert_eq!(unit.name(), "Pebble");
    assert_eq!(unit.primary_type(), Type::Terra);
    assert_eq!(unit.hp(), 120);
    assert_eq!(unit.max_hp(), 120);
    assert_eq!(unit.moves()[0].name, "Earthquake");
    assert_eq!(unit.moves()[0].category, MoveCategory::Attack);
    assert_eq!(unit.moves()[3].name, "Restore");
}

#[test]
fn unknown_move_ids_fall_back() {
    let unit = Unit::new(unit_data("Pebble", Type::Terra, 120, 80, 95, [0, 200, 10, 19])).unwrap();
    assert_eq!(unit.moves()[0].id, 1);
    assert_eq!(unit.moves()[1].id, 1);
    assert_eq!(unit.moves()[2].id, 10);
}

#[test]
fn rejects_invalid_unit_data() {
    assert_error_message(
        Unit::new(unit_data("Dust", Type::Terra, 0, 80, 0, [10, 13, 18, 19])),
        "cannot create unit \"Dust\"",
    );
    assert_error_message_contains(
        Unit::new(unit_data("Dust", Type::Terra, 0, 80, 0, [10, 13, 18, 19])),
        "max HP must be positive; defense must be positive",
    );
    assert_error_message_contains(
        UnitData::from_json(r#"{ "type": "Terra" }"#),
        "invalid unit data",
    );
}
