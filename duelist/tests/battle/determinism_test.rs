use duelist::{
    Battle,
    OutcomeEvent,
    Type,
};
use duelist_test_utils::{
    TestBattleBuilder,
    setup_test_environment,
    unit_data,
};

fn make_battle(seed: u64) -> Battle {
    TestBattleBuilder::new()
        .with_seed(seed)
        .with_player(unit_data("Volt", Type::Fulmen, 300, 120, 90, [5, 12, 15, 19]))
        .with_opponent(unit_data("Reef", Type::Aqua, 300, 110, 100, [2, 16, 18, 14]))
        .build()
        .unwrap()
}

fn play(seed: u64) -> (Vec<OutcomeEvent>, u32) {
    let mut battle = make_battle(seed);
    let mut slot = 0;
    while !battle.ended() && battle.round() < 50 {
        battle.set_chosen_moves(slot % 4, (slot + 1) % 4);
        battle.run_round().unwrap();
        slot += 1;
    }
    (battle.all_events().to_vec(), battle.round())
}

#[test]
fn same_seed_replays_identically() {
    setup_test_environment();
    assert_eq!(play(12345), play(12345));
}

#[test]
fn events_are_read_out_once() {
    setup_test_environment();
    let mut battle = make_battle(1);
    battle.set_chosen_moves(3, 3);
    battle.run_round().unwrap();
    assert!(battle.has_new_events());
    assert_eq!(battle.new_events().len(), 2);
    assert!(!battle.has_new_events());
    assert!(battle.new_events().is_empty());
    assert_eq!(battle.all_events().len(), 2);
}

#[test]
fn reports_initial_seed() {
    assert_eq!(make_battle(98765).initial_seed(), 98765);
}
