use duelist::Battle;
use itertools::Itertools;

/// Asserts that new events in the battle are equal to the given log lines.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut Battle, want: &[&str]) {
    let got = battle
        .new_events()
        .iter()
        .map(|event| event.log_line())
        .collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, want)
}

/// Asserts that new event descriptions in the battle are equal to the given text.
#[track_caller]
pub fn assert_new_descriptions_eq(battle: &mut Battle, want: &[&str]) {
    let got = battle
        .new_events()
        .iter()
        .map(|event| event.description.as_str())
        .join("\n");
    pretty_assertions::assert_eq!(got, want.join("\n"))
}
