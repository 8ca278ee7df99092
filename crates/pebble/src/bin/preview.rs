//! # Headless Hero Preview
//!
//! Plays the full hero choreography at a fixed 60Hz timestep with no
//! renderer attached, reporting when each timeline phase lands and how
//! the scripted interactions settle:
//!
//! Mount → counter + orbits + timeline → completion fan-out →
//! menu hover in/out → video expand → close → report.
//!
//! Run with: `cargo run --package pebble --bin preview`

#![allow(missing_docs)]

use std::time::Instant;

use pebble_hero::{
    HeroConfig, HeroEvent, HeroScene, PointerEvent, TargetId,
};

/// Fixed timestep: one frame at 60fps.
const DT: f32 = 1.0 / 60.0;

/// Simulated clock for the report (seconds since mount).
struct Clock {
    frames: u64,
}

impl Clock {
    fn seconds(&self) -> f64 {
        f64::from(u32::try_from(self.frames).unwrap_or(u32::MAX)) * f64::from(DT)
    }
}

fn drain_and_report(scene: &HeroScene, clock: &Clock, receiver: &pebble_hero::EventReceiver) {
    for event in receiver.drain() {
        match event {
            HeroEvent::PhaseStarted(phase) => {
                println!("[{:6.2}s] phase entered: {phase:?}", clock.seconds());
            }
            HeroEvent::CounterFinished => {
                println!(
                    "[{:6.2}s] counter finished at {}",
                    clock.seconds(),
                    scene.counter_value()
                );
            }
            HeroEvent::SequenceComplete => {
                println!("[{:6.2}s] sequence complete", clock.seconds());
            }
            HeroEvent::MenuStateChanged(state) => {
                println!("[{:6.2}s] menu settled: {state:?}", clock.seconds());
            }
            HeroEvent::VideoStateChanged(state) => {
                println!("[{:6.2}s] video settled: {state:?}", clock.seconds());
            }
        }
    }
}

fn run_for(
    scene: &mut HeroScene,
    clock: &mut Clock,
    receiver: &pebble_hero::EventReceiver,
    seconds: f32,
) {
    let steps = (seconds / DT).ceil();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    for _ in 0..steps as u64 {
        scene.update(DT);
        clock.frames += 1;
        drain_and_report(scene, clock, receiver);
    }
}

fn main() {
    let config = HeroConfig::default();
    println!("=== PEBBLE HERO PREVIEW ===");
    println!(
        "viewport {}x{}, headline {:?}",
        config.viewport.width, config.viewport.height, config.reveal.words
    );

    let wall_start = Instant::now();
    let mut scene = match HeroScene::new(config) {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("failed to mount hero scene: {err}");
            std::process::exit(1);
        }
    };
    let receiver = scene.events();
    let mut clock = Clock { frames: 0 };

    scene.on_complete(Box::new(|| {
        println!("           host notified: page content may reveal");
    }));

    // The full sequence: 2.0 delay + 2.0 fade + 0.5 + 0.6 + 0.6 = 5.7s,
    // plus a second for the reveals to settle.
    run_for(&mut scene, &mut clock, &receiver, 7.0);

    // Scripted interactions
    println!("--- menu hover in/out ---");
    scene.handle_pointer(PointerEvent::MenuEnter);
    run_for(&mut scene, &mut clock, &receiver, 1.0);
    scene.handle_pointer(PointerEvent::MenuLeave);
    run_for(&mut scene, &mut clock, &receiver, 1.5);

    println!("--- video expand/close ---");
    scene.handle_pointer(PointerEvent::VideoClick);
    run_for(&mut scene, &mut clock, &receiver, 1.5);
    scene.handle_pointer(PointerEvent::CloseClick);
    run_for(&mut scene, &mut clock, &receiver, 1.5);

    let video = scene
        .stage()
        .get(TargetId::Video)
        .map(|v| (v.rect, v.z_index));
    println!("video resting state: {video:?}");

    scene.teardown();
    println!(
        "=== done: {} simulated frames in {:.1}ms wall time ===",
        clock.frames,
        wall_start.elapsed().as_secs_f64() * 1000.0
    );
}
