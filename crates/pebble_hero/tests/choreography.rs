//! End-to-end verification of the hero choreography.
//!
//! Drives a full scene at a fixed 60Hz timestep, the way a host would,
//! and checks the observable contract: counter bounds, phase ordering,
//! morph rounding, one-shot completion, glyph stagger, toggle settling
//! and teardown safety.

use pebble_hero::{
    HeroConfig, HeroEvent, HeroScene, Phase, PointerEvent, Stage, TargetId,
};

/// A frame at 60fps.
const DT: f32 = 1.0 / 60.0;

fn tick(scene: &mut HeroScene, seconds: f32) {
    let steps = (seconds / DT).ceil();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    for _ in 0..steps as u32 {
        scene.update(DT);
    }
}

#[test]
fn counter_reaches_exactly_one_hundred_and_stops() {
    let mut scene = HeroScene::new(HeroConfig::default()).unwrap();

    let mut last = scene.counter_value();
    assert_eq!(last, 1);

    for _ in 0..600 {
        scene.update(DT);
        let value = scene.counter_value();
        assert!((1..=100).contains(&value));
        assert!(value >= last);
        last = value;
    }
    assert_eq!(scene.counter_value(), 100);
}

#[test]
fn timeline_phases_execute_in_fixed_order() {
    let mut scene = HeroScene::new(HeroConfig::default()).unwrap();
    let receiver = scene.events();

    tick(&mut scene, 7.0);

    let phases: Vec<Phase> = receiver
        .drain()
        .into_iter()
        .filter_map(|event| match event {
            HeroEvent::PhaseStarted(phase) => Some(phase),
            _ => None,
        })
        .collect();

    assert_eq!(
        phases,
        vec![
            Phase::LoaderFadeOut,
            Phase::TriangleReveal,
            Phase::Hold,
            Phase::SquareMorph,
            Phase::Complete,
        ]
    );
}

#[test]
fn completion_fires_once_and_only_after_the_morph() {
    let mut scene = HeroScene::new(HeroConfig::default()).unwrap();
    let receiver = scene.events();

    // Up to the start of the morph: no completion yet
    tick(&mut scene, 5.2);
    assert!(!scene.is_sequence_complete());
    assert!(!receiver
        .drain()
        .contains(&HeroEvent::SequenceComplete));

    tick(&mut scene, 2.0);
    assert!(scene.is_sequence_complete());
    let completions = receiver
        .drain()
        .into_iter()
        .filter(|e| *e == HeroEvent::SequenceComplete)
        .count();
    assert_eq!(completions, 1);

    // Flag latches for the scene's lifetime
    tick(&mut scene, 5.0);
    assert!(scene.is_sequence_complete());
    assert!(!receiver.drain().contains(&HeroEvent::SequenceComplete));
}

#[test]
fn glyphs_reveal_with_index_proportional_stagger() {
    let mut scene = HeroScene::new(HeroConfig::default()).unwrap();

    // Run to completion, then a hair into the reveal
    tick(&mut scene, 5.7);
    tick(&mut scene, 0.12);

    let stage = scene.stage();
    let opacities: Vec<f32> = (0..10)
        .map(|i| stage.get(TargetId::Glyph(i)).unwrap().opacity)
        .collect();

    // "Meet" + "Pebble" = 10 glyphs, earlier glyphs strictly ahead of
    // later ones while the stagger window is still open
    for pair in opacities.windows(2) {
        assert!(
            pair[0] >= pair[1],
            "glyph order violated: {opacities:?}"
        );
    }
    assert!(opacities[0] > opacities[9]);

    // Headline itself became visible at completion
    assert!(stage.get(TargetId::Headline).unwrap().visible);
}

#[test]
fn menu_enter_then_immediate_leave_ends_collapsed() {
    let mut scene = HeroScene::new(HeroConfig::default()).unwrap();
    tick(&mut scene, 7.0); // sequence done, panels revealed

    scene.handle_pointer(PointerEvent::MenuEnter);
    scene.update(DT); // one frame into the widen
    scene.handle_pointer(PointerEvent::MenuLeave);

    tick(&mut scene, 2.0);

    let stage = scene.stage();
    let menu = stage.get(TargetId::Menu).unwrap();
    assert!((menu.rect.width - 64.0).abs() < 0.01, "menu stuck mid-expand");
    assert!(
        (stage.get(TargetId::HamburgerLines).unwrap().opacity - 1.0).abs() < 0.01,
        "hamburger lines not restored"
    );
    assert!(stage.get(TargetId::NavList).unwrap().opacity < 0.01);
}

#[test]
fn video_expand_then_close_restores_original_geometry() {
    let mut scene = HeroScene::new(HeroConfig::default()).unwrap();
    tick(&mut scene, 7.0);

    let original = scene.stage().get(TargetId::Video).unwrap().rect;
    let original_z = scene.stage().get(TargetId::Video).unwrap().z_index;

    scene.handle_pointer(PointerEvent::VideoClick);
    tick(&mut scene, 1.5);

    let expanded = scene.stage().get(TargetId::Video).unwrap();
    assert!(expanded.rect.width > original.width);
    assert_eq!(expanded.z_index, 100);
    assert!(scene.stage().get(TargetId::VideoCloseButton).unwrap().visible);

    scene.handle_pointer(PointerEvent::CloseClick);
    tick(&mut scene, 1.5);

    let restored = scene.stage().get(TargetId::Video).unwrap();
    assert_eq!(restored.rect, original);
    assert_eq!(restored.z_index, original_z);
    assert!(scene.stage().get(TargetId::PlayIcon).unwrap().visible);
}

#[test]
fn unmount_mid_sequence_is_safe_and_silent() {
    let mut scene = HeroScene::new(HeroConfig::default()).unwrap();
    let receiver = scene.events();

    tick(&mut scene, 2.5); // mid loader fade
    scene.teardown();
    receiver.drain();

    // Nothing runs, nothing panics, nothing is emitted
    tick(&mut scene, 10.0);
    scene.handle_pointer(PointerEvent::MenuEnter);
    scene.handle_pointer(PointerEvent::VideoClick);
    scene.handle_pointer(PointerEvent::CloseClick);

    assert!(receiver.drain().is_empty());
    assert!(!scene.is_sequence_complete());
}

#[test]
fn host_without_video_target_still_gets_the_sequence() {
    let config = HeroConfig::default();
    let mut stage = Stage::hero(&config);
    stage.remove(TargetId::Video);
    stage.remove(TargetId::VideoCloseButton);
    stage.remove(TargetId::PlayIcon);

    let mut scene = HeroScene::with_stage(config, stage).unwrap();
    scene.handle_pointer(PointerEvent::VideoClick); // nowhere to go, ignored

    tick(&mut scene, 7.0);
    assert!(scene.is_sequence_complete());
}

#[test]
fn orbits_never_stop_while_mounted() {
    let mut scene = HeroScene::new(HeroConfig::default()).unwrap();

    let at = |scene: &HeroScene| scene.stage().get(TargetId::OrbitDotA).unwrap().rect;

    tick(&mut scene, 7.0); // well past sequence completion
    let a = at(&scene);
    tick(&mut scene, 0.5);
    let b = at(&scene);

    assert_ne!(a, b, "orbit dots stopped moving after the sequence");
}
