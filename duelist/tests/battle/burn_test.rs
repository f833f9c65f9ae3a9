use duelist::{
    Battle,
    BattleEngineOptions,
    BattleOptions,
    Condition,
    Participant,
    Type,
    Unit,
};
use duelist_test_utils::{
    ControlledRandomNumberGenerator,
    TestBattleBuilder,
    assert_new_logs_eq,
    get_controlled_rng_for_battle,
    setup_test_environment,
    unit_data,
};

fn make_battle() -> Battle {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_player(unit_data("Ash", Type::Ignis, 100, 100, 100, [12, 14, 13, 19]))
        .with_opponent(unit_data("Frost", Type::Frigid, 100, 100, 100, [13, 18, 14, 19]))
        .build()
        .unwrap()
}

#[test]
fn burn_ticks_after_each_burned_turn() {
    setup_test_environment();
    let mut battle = make_battle();
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_roll(1, 1, 1);

    battle.set_chosen_moves(0, 0);
    battle.run_round().unwrap();
    assert_eq!(battle.flag(Condition::Burn), (false, true));
    assert_new_logs_eq(
        &mut battle,
        &[
            "burn|opponent|0|100/100",
            "buff|opponent|0|100/100",
            "burn|opponent|10|90/100",
        ],
    );

    battle.set_chosen_moves(1, 0);
    battle.run_round().unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "buff|player|0|100/100",
            "buff|opponent|0|90/100",
            "burn|opponent|10|80/100",
        ],
    );
}

#[test]
fn burn_ticks_even_when_the_move_misses() {
    setup_test_environment();
    let mut battle = make_battle();
    battle.set_flag(Condition::Burn, (false, true));
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_roll(2, 1, 100);

    battle.set_chosen_moves(1, 1);
    battle.run_round().unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "buff|player|0|100/100",
            "miss|player|0|100/100",
            "burn|opponent|10|90/100",
        ],
    );
    let burn = &battle.all_events()[2];
    assert_eq!(burn.element, Type::Burn);
    assert_eq!(burn.description, "Frost was hurt by its burn!");
}

#[test]
fn burn_knockout_on_first_turn_skips_second_turn() {
    setup_test_environment();
    let player = Unit::new(unit_data("Ash", Type::Ignis, 100, 100, 100, [12, 14, 13, 19])).unwrap();
    let mut opponent =
        Unit::new(unit_data("Frost", Type::Frigid, 100, 100, 100, [13, 18, 14, 19])).unwrap();
    opponent.modify_hp(-95);
    let mut battle = Battle::new(
        player,
        opponent,
        BattleOptions {
            seed: Some(0),
            player_has_initiative: false,
        },
        BattleEngineOptions {
            rng_factory: |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed)),
        },
    )
    .unwrap();
    battle.set_flag(Condition::Burn, (true, false));

    battle.set_chosen_moves(0, 0);
    let outcome = battle.run_round().unwrap();
    assert!(outcome.knockout);
    assert!(outcome.second_turn_skipped);
    assert_eq!(battle.knocked_out(), vec![Participant::Opponent]);
    assert_new_logs_eq(
        &mut battle,
        &["buff|opponent|0|5/100", "burn|opponent|5|0/100"],
    );
}

#[test]
fn small_units_lose_nothing_to_burn() {
    setup_test_environment();
    let mut battle = TestBattleBuilder::new()
        .with_player(unit_data("Ash", Type::Ignis, 100, 100, 100, [14, 14, 14, 14]))
        .with_opponent(unit_data("Mote", Type::Frigid, 9, 100, 100, [13, 13, 13, 13]))
        .build()
        .unwrap();
    battle.set_flag(Condition::Burn, (false, true));

    // 10% of 9 truncates to zero.
    battle.set_chosen_moves(0, 0);
    battle.run_round().unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "buff|player|0|100/100",
            "buff|opponent|0|9/9",
            "burn|opponent|0|9/9",
        ],
    );
}
