use dotpress::animation::AnimationGroup;
use dotpress::prelude::*;
use dotpress::stages::StageBuilder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn dots() -> StageSequencer {
    dots_with(DotsConfig::default())
}

fn dots_with(config: DotsConfig) -> StageSequencer {
    let _ = env_logger::builder().is_test(true).try_init();
    StageSequencer::new(config, &OffsetTable::default()).unwrap()
}

/// Advance frame by frame, recording every stage change
fn run(dots: &mut StageSequencer, from_ms: u64, to_ms: u64, seen: &mut Vec<Stage>) {
    let mut now = from_ms;
    while now <= to_ms {
        dots.advance(now);
        if seen.last() != Some(&dots.stage()) {
            seen.push(dots.stage());
        }
        now += 16;
    }
}

#[test]
fn held_press_plays_the_whole_sequence() {
    let mut dots = dots();
    let mut seen = vec![dots.stage()];

    dots.on_press_start(0);
    seen.push(dots.stage());
    run(&mut dots, 0, 448, &mut seen);
    assert!(dots.is_long_clicked());

    dots.on_press_end(448);
    run(&mut dots, 448, 1500, &mut seen);

    assert_eq!(
        seen,
        vec![
            Stage::Idle,
            Stage::PressExpand,
            Stage::LineTransition,
            Stage::Collapse,
            Stage::Idle,
        ]
    );
    // Collapse folds the dots away and leaves everything at rest
    assert!(!dots.elements().dots_visible());
    assert!(dots.elements().at_rest());
}

#[test]
fn instant_release_waits_for_min_diamond_duration() {
    let mut dots = dots();
    dots.on_press_start(0);
    dots.on_press_end(0);

    assert!(dots.has_pending_retract());
    assert_eq!(dots.next_deadline(), Some(100));

    dots.advance(99);
    assert_eq!(dots.stage(), Stage::PressExpand);

    dots.advance(100);
    assert_eq!(dots.stage(), Stage::Retract);
    assert!(!dots.has_pending_retract());
}

#[test]
fn release_measures_floor_from_press_start() {
    let mut dots = dots();
    dots.on_press_start(1000);
    dots.advance(1040);
    dots.on_press_end(1040);
    assert_eq!(dots.next_deadline(), Some(1100));

    // Past the floor the retraction is due immediately
    let mut dots = self::dots();
    dots.on_press_start(1000);
    dots.advance(1150);
    dots.on_press_end(1150);
    assert_eq!(dots.next_deadline(), Some(1150));
    dots.advance(1150);
    assert_eq!(dots.stage(), Stage::Retract);
}

#[test]
fn second_press_cancels_pending_retraction() {
    let mut dots = dots();
    dots.on_press_start(0);
    dots.on_press_end(20);
    assert!(dots.has_pending_retract());

    dots.on_press_start(50);
    assert_eq!(dots.stage(), Stage::PressExpand);
    assert!(!dots.has_pending_retract());
    // Only the new long-press check is left
    assert_eq!(dots.next_deadline(), Some(450));

    dots.advance(100);
    dots.advance(150);
    assert_eq!(dots.stage(), Stage::PressExpand);
}

#[test]
fn long_press_release_is_a_no_op() {
    let mut dots = dots();
    dots.on_press_start(0);
    dots.advance(200);
    dots.advance(400);
    assert!(dots.is_long_clicked());
    assert_eq!(dots.stage(), Stage::LineTransition);

    dots.on_press_end(400);
    assert_eq!(dots.stage(), Stage::LineTransition);
    assert!(!dots.has_pending_retract());
    assert_eq!(dots.next_deadline(), None);
}

#[test]
fn short_release_after_expansion_retracts_immediately() {
    let mut dots = dots();
    dots.on_press_start(0);
    dots.advance(200);
    dots.advance(300);
    assert_eq!(dots.stage(), Stage::LineTransition);

    dots.on_press_end(300);
    assert_eq!(dots.stage(), Stage::Retract);

    dots.advance(600);
    assert_eq!(dots.stage(), Stage::Idle);
    assert!(dots.elements().at_rest());
    assert!(!dots.elements().dots_visible());
}

#[test]
fn repeated_tap_cycles_return_to_baseline() {
    let mut dots = dots();
    let baseline = dots.elements().clone();

    for cycle in 0..3u64 {
        let t = cycle * 1000;
        dots.on_press_start(t);
        dots.advance(t + 10);
        dots.on_press_end(t + 10);
        let mut seen = Vec::new();
        run(&mut dots, t + 10, t + 600, &mut seen);
        assert_eq!(seen, vec![Stage::PressExpand, Stage::Retract, Stage::Idle]);
        assert_eq!(dots.elements(), &baseline, "cycle {cycle}");
    }
}

#[test]
fn press_during_retraction_lands_it_then_expands() {
    let mut dots = dots();
    dots.on_press_start(0);
    dots.on_press_end(10);
    dots.advance(50);
    dots.advance(100);
    dots.advance(200);
    assert_eq!(dots.stage(), Stage::Retract);
    assert!(!dots.elements().at_rest());

    dots.on_press_start(200);
    assert_eq!(dots.stage(), Stage::PressExpand);
    assert!(dots.elements().at_rest());

    // Expansion runs from rest: red sits on top in portrait and moves up
    dots.advance(400);
    assert_eq!(dots.element(ElementId::Red).transform.translate, (0.0, -3.0));
    assert_eq!(dots.element(ElementId::Red).transform.scale, (0.8, 0.8));
    assert_eq!(dots.element(ElementId::Home).transform.scale, (0.625, 0.625));
}

#[test]
fn press_during_collapse_is_ignored() {
    let mut dots = dots();
    dots.on_press_start(0);
    dots.advance(200);
    dots.advance(400);
    dots.on_press_end(400);
    dots.advance(475);
    assert_eq!(dots.stage(), Stage::Collapse);

    dots.on_press_start(480);
    assert_eq!(dots.stage(), Stage::Collapse);
    assert!(!dots.is_pressed());
}

#[test]
fn collapsed_dots_reappear_on_next_press() {
    let mut dots = dots();
    dots.on_press_start(0);
    dots.advance(400);
    dots.on_press_end(400);
    dots.advance(2000);
    assert!(!dots.elements().dots_visible());

    dots.on_press_start(3000);
    assert!(dots.elements().dots_visible());
}

#[test]
fn orientation_remaps_roles() {
    let mut dots = dots();
    dots.set_orientation(true);
    let roles = dots.roles();
    assert_eq!(roles.element(Role::Top), ElementId::Green);
    assert_eq!(roles.element(Role::Bottom), ElementId::Blue);
    assert_eq!(roles.element(Role::Right), ElementId::Yellow);
    assert_eq!(roles.element(Role::Left), ElementId::Red);

    dots.set_orientation(false);
    let roles = dots.roles();
    assert_eq!(roles.element(Role::Top), ElementId::Red);
    assert_eq!(roles.element(Role::Bottom), ElementId::Yellow);
    assert_eq!(roles.element(Role::Left), ElementId::Blue);
    assert_eq!(roles.element(Role::Right), ElementId::Green);
}

#[test]
fn orientation_change_mid_sequence_resets() {
    let mut dots = dots();
    dots.on_press_start(0);
    dots.on_press_end(10);
    dots.advance(50);

    dots.set_orientation(true);
    assert_eq!(dots.stage(), Stage::Idle);
    assert!(dots.elements().at_rest());
    assert!(!dots.has_pending_retract());

    // Landscape expansion: red is on the left now
    dots.on_press_start(100);
    dots.advance(300);
    assert_eq!(dots.element(ElementId::Red).transform.translate, (-3.0, 0.0));
}

#[test]
fn landscape_hold_cycle_returns_to_rest() {
    let mut dots = dots();
    dots.set_orientation(true);
    let mut seen = vec![dots.stage()];
    dots.on_press_start(0);
    run(&mut dots, 0, 2000, &mut seen);
    dots.on_press_end(2000);

    assert_eq!(seen.last(), Some(&Stage::Idle));
    assert!(seen.contains(&Stage::Collapse));
    assert!(dots.elements().at_rest());
}

#[test]
fn interrupted_expansion_does_not_chain() {
    let mut dots = dots();
    dots.on_press_start(0);
    dots.advance(100);

    dots.set_window_visible(false);
    assert_eq!(dots.stage(), Stage::Idle);

    dots.set_window_visible(true);
    dots.advance(500);
    assert_eq!(dots.stage(), Stage::Idle);
}

#[test]
fn ended_expansion_lands_without_chaining() {
    let config = DotsConfig::default();
    let offsets = dotpress::offsets::Offsets::resolve(&OffsetTable::default()).unwrap();
    let roles = RoleMap::default();
    let builder = StageBuilder {
        roles: &roles,
        orientation: Orientation::Portrait,
        offsets: &offsets,
        config: &config,
    };

    let mut elements = ElementSet::new();
    let mut group = AnimationGroup::start(builder.diamond(), &elements, 0);
    assert_eq!(group.advance(&mut elements, 50), None);
    group.end(&mut elements);

    assert_eq!(elements.get(ElementId::Red).transform.translate, (0.0, -3.0));
    assert_eq!(elements.get(ElementId::Green).transform.translate, (3.0, 0.0));
}

#[test]
fn home_only_keeps_other_buttons_dark() {
    let mut dots = dots_with(DotsConfig::new().home_only(true).is_home_button(false));
    assert!(!dots.elements().dots_visible());

    dots.on_press_start(0);
    assert_eq!(dots.stage(), Stage::PressExpand);
    assert!(!dots.elements().dots_visible());

    dots.set_home_only(false, false);
    assert!(dots.elements().dots_visible());
}

#[test]
fn home_only_follows_designated_button_changes() {
    let mut dots = dots_with(DotsConfig::new().home_only(true).is_home_button(false));
    dots.on_press_start(0);
    assert!(!dots.elements().dots_visible());

    dots.set_home_only(true, true);
    assert!(dots.policy().dots_shown());
    assert!(dots.elements().dots_visible());
}

#[test]
fn dots_rest_hidden_however_the_gesture_ends() {
    let mut dots = dots();
    assert!(!dots.elements().dots_visible());

    // Tap: shown while expanding, hidden once the retraction commits
    dots.on_press_start(0);
    assert!(dots.elements().dots_visible());
    dots.on_press_end(10);
    dots.advance(100);
    assert_eq!(dots.stage(), Stage::Retract);
    assert!(!dots.elements().dots_visible());
    dots.advance(1000);
    assert_eq!(dots.stage(), Stage::Idle);
    assert!(!dots.elements().dots_visible());

    // Hold: shown through the line and collapse, hidden at the end
    dots.on_press_start(2000);
    dots.advance(2300);
    assert_eq!(dots.stage(), Stage::LineTransition);
    assert!(dots.elements().dots_visible());
    dots.advance(2450);
    dots.on_press_end(2450);
    dots.advance(4000);
    assert_eq!(dots.stage(), Stage::Idle);
    assert!(!dots.elements().dots_visible());
}

#[test]
fn fixed_colors_tint_dots_on_press() {
    let palette = DotPalette::new(
        Color::from_hex(0xDB4437),
        Color::from_hex(0x4285F4),
        Color::from_hex(0x0F9D58),
        Color::from_hex(0xF4B400),
    );
    let mut dots = dots_with(DotsConfig::new().dot_colors(DotColors::Fixed(palette)));
    dots.on_press_start(0);
    assert_eq!(dots.element(ElementId::Green).tint, Some(palette.green));
    assert_eq!(dots.element(ElementId::Home).tint, None);

    dots.set_dot_colors(DotColors::Clear);
    assert_eq!(dots.element(ElementId::Green).tint, None);
}

#[test]
fn random_every_stage_recolors_as_stages_chain() {
    let config = DotsConfig::new()
        .dot_colors(DotColors::RandomEveryStage)
        .color_seed(11);
    let mut dots = dots_with(config);

    dots.on_press_start(0);
    let expand_tint = dots.element(ElementId::Red).tint;
    assert!(expand_tint.is_some());

    dots.advance(200);
    assert_eq!(dots.stage(), Stage::LineTransition);
    let line_tint = dots.element(ElementId::Red).tint;
    assert!(line_tint.is_some());
    assert_ne!(line_tint, expand_tint);
}

#[test]
fn random_colors_hold_across_presses() {
    let mut dots = dots_with(DotsConfig::new().dot_colors(DotColors::Random));
    dots.on_press_start(0);
    let first = dots.element(ElementId::Blue).tint;
    assert!(first.is_some());

    dots.on_press_end(0);
    dots.advance(1000);
    dots.on_press_start(2000);
    assert_eq!(dots.element(ElementId::Blue).tint, first);
}

#[test]
fn interleaved_gestures_always_settle() {
    let mut dots = dots();
    let mut rng = StdRng::seed_from_u64(0x2545_f491_4f6c_dd1d);
    let mut now = 0;

    for _ in 0..500 {
        now += rng.random_range(0..120u64);
        match rng.random_range(0..3u8) {
            0 => dots.on_press_start(now),
            1 => dots.on_press_end(now),
            _ => dots.advance(now),
        }

        let stage = dots.stage();
        assert_eq!(
            dots.group().map(|group| group.stage()).unwrap_or(Stage::Idle),
            stage
        );
        let scale_range = -1e-4..=1.0 + 1e-4;
        for (id, element) in dots.elements().iter() {
            let (sx, sy) = element.transform.scale;
            assert!(
                scale_range.contains(&sx) && scale_range.contains(&sy),
                "{id} scaled to ({sx}, {sy})"
            );
        }
    }

    dots.on_press_end(now);
    dots.advance(now + 5000);
    assert_eq!(dots.stage(), Stage::Idle);
    assert!(dots.elements().at_rest());
}
