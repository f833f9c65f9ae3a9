use anyhow::Error;
use duelist::{
    Battle,
    Type,
};
use duelist_test_utils::{
    TestBattleBuilder,
    assert_new_descriptions_eq,
    assert_new_logs_eq,
    get_controlled_rng_for_battle,
    setup_test_environment,
    unit_data,
};

fn make_battle(opponent_type: Type, opponent_hp: u32) -> Result<Battle, Error> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_player(unit_data("Cinder", Type::Ignis, 200, 150, 100, [6, 2, 13, 19]))
        .with_opponent(unit_data("Sprout", opponent_type, opponent_hp, 100, 100, [13, 14, 15, 19]))
        .build()
}

#[test]
fn same_type_attack_deals_expected_damage() {
    setup_test_environment();
    let mut battle = make_battle(Type::Anima, 200).unwrap();
    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_roll(1, 1, 1);
    rng.insert_fake_roll(2, 85, 85);
    rng.insert_fake_roll(3, 1, 2);

    battle.set_chosen_moves(0, 0);
    let outcome = battle.run_round().unwrap();
    assert!(!outcome.knockout);
    assert_new_logs_eq(
        &mut battle,
        &["damage|opponent|95|105/200", "buff|opponent|0|105/200"],
    );
}

#[test]
fn critical_hit_doubles_damage() {
    setup_test_environment();
    let mut battle = make_battle(Type::Anima, 200).unwrap();
    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_roll(1, 1, 1);
    rng.insert_fake_roll(2, 85, 85);
    rng.insert_fake_roll(3, 1, 1);

    battle.set_chosen_moves(0, 0);
    battle.run_round().unwrap();
    // Only the damage event carries the critical flag.
    let critical = battle
        .all_events()
        .iter()
        .map(|event| event.critical)
        .collect::<Vec<_>>();
    assert_eq!(critical, [true, false]);
    assert_new_logs_eq(
        &mut battle,
        &["damage|opponent|191|9/200|crit", "buff|opponent|0|9/200"],
    );
}

#[test]
fn type_effectiveness_scales_damage() {
    setup_test_environment();
    let mut battle = make_battle(Type::Aqua, 200).unwrap();
    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_roll(1, 1, 1);
    rng.insert_fake_roll(2, 85, 100);
    rng.insert_fake_roll(3, 1, 2);

    // Flamethrower into an Aqua unit: 40 x 75 x 0.5 x 187.5 / 5000.
    battle.set_chosen_moves(0, 0);
    battle.run_round().unwrap();
    assert_new_descriptions_eq(
        &mut battle,
        &[
            "Cinder's Flamethrower dealt 56 damage to Sprout. It's not very effective...",
            "Sprout's attack rose!",
        ],
    );
}

#[test]
fn super_effective_attack_is_reported() {
    setup_test_environment();
    let mut battle = make_battle(Type::Ignis, 200).unwrap();
    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_roll(1, 1, 1);
    rng.insert_fake_roll(2, 85, 100);
    rng.insert_fake_roll(3, 1, 2);

    // Water Jet without the same-type bonus: 40 x 75 x 2 x 150 / 5000.
    battle.set_chosen_moves(1, 0);
    battle.run_round().unwrap();
    assert_new_descriptions_eq(
        &mut battle,
        &[
            "Cinder's Water Jet dealt 180 damage to Sprout. It's super effective!",
            "Sprout's attack rose!",
        ],
    );
}

#[test]
fn damage_past_zero_reports_hp_actually_lost() {
    setup_test_environment();
    let mut battle = make_battle(Type::Anima, 50).unwrap();
    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_roll(1, 1, 1);
    rng.insert_fake_roll(2, 85, 85);
    rng.insert_fake_roll(3, 1, 2);

    battle.set_chosen_moves(0, 0);
    let outcome = battle.run_round().unwrap();
    assert!(outcome.knockout);
    assert_eq!(battle.opponent().hp(), 0);
    assert_new_logs_eq(&mut battle, &["damage|opponent|50|0/50"]);
}
