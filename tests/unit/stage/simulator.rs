use super::*;

use crate::animation::ease::Ease;

fn sim(len: usize, policy: CompletionPolicy, auto: bool) -> Simulator {
    Simulator::new(len, SliderConfig::new().unwrap(), policy, auto).unwrap()
}

#[test]
fn parses_scripts() {
    let steps = parse_script("next, wait:600 prev\nend").unwrap();
    assert_eq!(
        steps,
        vec![
            ScriptStep::Navigate(Direction::Next),
            ScriptStep::Wait(Millis(600)),
            ScriptStep::Navigate(Direction::Prev),
            ScriptStep::TransitionEnd,
        ]
    );
    assert!(parse_script("next, jump").is_err());
    assert!(parse_script("wait:soon").is_err());
    assert!(parse_script("").unwrap().is_empty());
}

#[test]
fn empty_carousel_is_rejected() {
    assert!(
        Simulator::new(
            0,
            SliderConfig::new().unwrap(),
            CompletionPolicy::TransitionEnd,
            true
        )
        .is_err()
    );
}

#[test]
fn auto_completion_lands_speed_after_slide() {
    let mut s = sim(3, CompletionPolicy::TransitionEnd, true);
    assert!(s.step(ScriptStep::Navigate(Direction::Next)));
    s.advance_to(Millis(599));
    assert!(s.controller().is_busy());
    s.advance_to(Millis(600));
    assert!(!s.controller().is_busy());
}

#[test]
fn without_auto_completion_stays_busy_until_end_step() {
    let mut s = sim(3, CompletionPolicy::TransitionEnd, false);
    s.run(&parse_script("next wait:5000 next").unwrap());
    assert_eq!(s.controller().state().current_index(), 1);
    assert!(s.step(ScriptStep::TransitionEnd));
    assert!(s.step(ScriptStep::Navigate(Direction::Next)));
    assert_eq!(s.controller().state().current_index(), 2);
}

#[test]
fn report_lists_steps_and_events() {
    let mut s = sim(2, CompletionPolicy::TransitionEnd, true);
    s.run(&parse_script("prev next wait:2000 next").unwrap());
    let report = s.report();

    let accepted: Vec<bool> = report.steps.iter().map(|o| o.accepted).collect();
    assert_eq!(accepted, vec![false, true, true, false]);
    assert_eq!(report.final_state.current_index(), 1);
    assert_eq!(
        report.nav,
        Some(NavControls {
            prev_disabled: false,
            next_disabled: true
        })
    );
    let kinds: Vec<&str> = report
        .events
        .iter()
        .map(|e| match e {
            StageEvent::Morph { .. } => "morph",
            StageEvent::SetShape { .. } => "set_shape",
            StageEvent::Slide { .. } => "slide",
        })
        .collect();
    assert_eq!(kinds, vec!["morph", "set_shape", "slide", "morph"]);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["events"][2]["event"], serde_json::json!("slide"));
    assert_eq!(json["steps"][2]["step"]["step"], serde_json::json!("wait"));
}

#[test]
fn incoming_item_settles_back_to_rect() {
    let mut s = sim(2, CompletionPolicy::TransitionEnd, true);
    s.step(ScriptStep::Navigate(Direction::Next));
    let rect = s.controller().config().paths.rect.to_bez_path();
    s.advance_to(Millis(300));
    assert_ne!(s.item_paths()[1], rect);
    s.advance_to(Millis(250 + 1500));
    assert_eq!(s.item_paths()[1], rect);
}

#[test]
fn quick_return_lets_outgoing_pinch_finish() {
    let mut s = sim(3, CompletionPolicy::Immediate, false);
    s.run(&parse_script("next wait:100 prev").unwrap());
    assert_eq!(s.controller().state().current_index(), 0);

    // Item 0 was pinching out (0..250) when it was set back to a curve at 100.
    let pinch = s.stage().active_morph(0).unwrap();
    assert_eq!(pinch.ease, Ease::EaseOut);
    assert_eq!(&pinch.target, &s.controller().config().paths.curve.left);

    s.advance_to(Millis(250));
    assert!(s.stage().active_morph(0).is_none());
}

#[test]
fn long_scripts_count_every_slide() {
    let mut s = sim(2, CompletionPolicy::TransitionEnd, true);
    let script = "next wait:700 prev wait:700 ".repeat(20);
    s.run(&parse_script(&script).unwrap());
    assert_eq!(s.stage().slide_count(), 40);
    assert!(!s.controller().is_busy());
    assert_eq!(s.controller().state().current_index(), 0);
}
