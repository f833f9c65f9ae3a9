use anyhow::Error;
use duelist::{
    Battle,
    Condition,
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

fn make_battle() -> Result<Battle, Error> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_player(unit_data("Wisp", Type::Mentis, 100, 100, 100, [18, 12, 13, 14]))
        .with_opponent(unit_data("Shade", Type::Mortis, 100, 100, 100, [13, 14, 15, 19]))
        .build()
}

fn run_with_accuracy_roll(battle: &mut Battle, player_slot: usize, roll: u64) {
    get_controlled_rng_for_battle(battle)
        .unwrap()
        .insert_fake_roll(1, 1, roll);
    battle.set_chosen_moves(player_slot, 2);
}

#[test]
fn decayed_accuracy_hits_at_threshold() {
    setup_test_environment();
    let mut battle = make_battle().unwrap();
    battle.set_flag(Condition::AccuracyDecay, (true, false));

    // 75 x 0.75 = 56.25.
    run_with_accuracy_roll(&mut battle, 0, 56);
    battle.run_round().unwrap();
    assert_new_logs_eq(
        &mut battle,
        &["debuff|opponent|0|100/100", "buff|opponent|0|100/100"],
    );
    // The opponent's amp cleared the fresh decay instead of stacking with it.
    assert_eq!(battle.flag(Condition::AccuracyDecay), (true, false));
    assert_eq!(battle.flag(Condition::AccuracyAmp), (false, false));
    assert_eq!(
        battle.all_events()[1].description,
        "Shade's accuracy decay was cleared!"
    );
}

#[test]
fn decayed_accuracy_misses_above_threshold() {
    setup_test_environment();
    let mut battle = make_battle().unwrap();
    battle.set_flag(Condition::AccuracyDecay, (true, false));

    run_with_accuracy_roll(&mut battle, 0, 57);
    battle.run_round().unwrap();
    assert_new_descriptions_eq(
        &mut battle,
        &["Wisp's Decay Accuracy missed!", "Shade's accuracy rose!"],
    );
    assert_eq!(battle.flag(Condition::AccuracyDecay), (true, false));
}

#[test]
fn amped_accuracy_raises_threshold() {
    setup_test_environment();
    let mut battle = make_battle().unwrap();
    battle.set_flag(Condition::AccuracyAmp, (true, false));

    // 75 x 1.25 = 93.75.
    run_with_accuracy_roll(&mut battle, 1, 93);
    battle.run_round().unwrap();
    assert_new_descriptions_eq(
        &mut battle,
        &["Shade was burned!", "Shade's accuracy rose!", "Shade was hurt by its burn!"],
    );

    let mut battle = make_battle().unwrap();
    battle.set_flag(Condition::AccuracyAmp, (true, false));
    run_with_accuracy_roll(&mut battle, 1, 94);
    battle.run_round().unwrap();
    assert_new_descriptions_eq(
        &mut battle,
        &["Wisp's Burn missed!", "Shade's accuracy rose!"],
    );
}

#[test]
fn unmodified_accuracy_misses_above_base() {
    setup_test_environment();
    let mut battle = make_battle().unwrap();
    run_with_accuracy_roll(&mut battle, 1, 75);
    battle.run_round().unwrap();
    assert_eq!(battle.flag(Condition::Burn), (false, true));

    let mut battle = make_battle().unwrap();
    run_with_accuracy_roll(&mut battle, 1, 76);
    battle.run_round().unwrap();
    assert_eq!(battle.flag(Condition::Burn), (false, false));
}
