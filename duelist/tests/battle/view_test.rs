use duelist::{
    Condition,
    Participant,
    Type,
    TypeEffectiveness,
};
use duelist_test_utils::{
    TestBattleBuilder,
    get_controlled_rng_for_battle,
    setup_test_environment,
    unit_data,
};

#[test]
fn view_reflects_battle_state() {
    setup_test_environment();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_player_initiative(false)
        .with_player(unit_data("Leaf", Type::Anima, 100, 100, 100, [8, 1, 12, 19]))
        .with_opponent(unit_data("Gloom", Type::Mortis, 100, 100, 100, [13, 14, 15, 19]))
        .build()
        .unwrap();
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_roll(2, 1, 1);
    battle.set_chosen_moves(2, 0);
    battle.run_round().unwrap();

    let view = battle.view();
    assert_eq!(view.round(), 1);
    assert!(!view.ended());
    assert!(!view.player_has_initiative());
    assert_eq!(view.conditions(Participant::Opponent), vec![
        Condition::Burn,
        Condition::AttackAmp,
    ]);
    assert!(view.conditions(Participant::Player).is_empty());
    // Burn only ticks on the burned unit's own turn, which came first.
    assert_eq!(view.unit(Participant::Opponent).hp(), 100);
    assert_eq!(view.moves(Participant::Player)[0].name, "Grave Killer");
    assert_eq!(
        view.effectiveness_against(&view.moves(Participant::Player)[1], Participant::Opponent),
        TypeEffectiveness::Strong
    );
    assert_eq!(view.super_effective_slots(Participant::Player), vec![1]);
}
