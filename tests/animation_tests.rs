// Host-side tests for the animation driver's per-tick update and the camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/starfield.rs"]
mod starfield;
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/scene.rs"]
mod scene;
#[path = "../src/camera.rs"]
mod camera;

use camera::Camera;
use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::{BodyMaterial, SceneState};

const TICK_SEC: f32 = 1.0 / 60.0;

fn make_scene() -> SceneState {
    SceneState::build(&mut StdRng::seed_from_u64(42))
}

#[test]
fn scene_build_matches_layer_configs_and_body_set() {
    let scene = make_scene();
    assert_eq!(scene.layers.len(), STAR_LAYERS.len());
    for (layer, cfg) in scene.layers.iter().zip(STAR_LAYERS.iter()) {
        assert_eq!(layer.len(), cfg.count);
    }
    // sun + halo + glow + moon + earth + atmosphere
    assert_eq!(scene.bodies.len(), 6);
    let rims = scene
        .bodies
        .iter()
        .filter(|b| matches!(b.material, BodyMaterial::Rim { .. }))
        .count();
    assert_eq!(rims, 3);
}

#[test]
fn n_ticks_accumulate_n_times_the_per_tick_rotation() {
    let mut scene = make_scene();
    let n = 1000;
    for i in 0..n {
        scene.tick(i as f32 * TICK_SEC);
    }
    for (layer, spin) in scene.layers.iter().zip(LAYER_SPIN_PER_TICK.iter()) {
        let expected = n as f32 * spin;
        assert!(
            (layer.rotation_y - expected).abs() < 1e-4,
            "layer rotation {} vs expected {expected}",
            layer.rotation_y
        );
    }
    for body in &scene.bodies {
        let expected = n as f32 * body.spin_per_tick;
        assert!((body.rotation_y - expected).abs() < 1e-3);
    }
}

#[test]
fn shader_time_is_elapsed_scaled_by_layer_rate() {
    let mut scene = make_scene();
    scene.tick(10.0);
    for (layer, rate) in scene.layers.iter().zip(LAYER_TIME_RATES.iter()) {
        assert!((layer.shader_time - 10.0 * rate).abs() < 1e-5);
    }
}

#[test]
fn ten_seconds_at_assumed_rate_reproduces_frame_coupled_drift() {
    // The rotation policy is frame-rate-coupled: 10 s of wall time at the
    // assumed 60 Hz is 600 ticks, not a function of elapsed time itself.
    let mut scene = make_scene();
    let ticks = (10.0 * ASSUMED_TICK_HZ) as usize;
    for i in 0..ticks {
        scene.tick(i as f32 * TICK_SEC);
    }
    let expected_near = ticks as f32 * LAYER_SPIN_PER_TICK[0];
    assert!((scene.layers[0].rotation_y - expected_near).abs() < 1e-4);
    assert!((expected_near - 0.18).abs() < 1e-6);
}

#[test]
fn delta_scaled_variant_matches_per_tick_updates_at_60hz() {
    let mut per_tick = make_scene();
    let mut scaled = make_scene();
    for i in 0..600 {
        let elapsed = i as f32 * TICK_SEC;
        per_tick.tick(elapsed);
        scaled.tick_delta_scaled(elapsed, TICK_SEC);
    }
    for (a, b) in per_tick.layers.iter().zip(scaled.layers.iter()) {
        assert!((a.rotation_y - b.rotation_y).abs() < 1e-4);
        assert_eq!(a.shader_time, b.shader_time);
    }
    for (a, b) in per_tick.bodies.iter().zip(scaled.bodies.iter()) {
        assert!((a.rotation_y - b.rotation_y).abs() < 1e-3);
    }
}

#[test]
fn tick_never_touches_generated_particle_attributes() {
    let mut scene = make_scene();
    let before = scene.layers[0].positions.clone();
    for i in 0..50 {
        scene.tick(i as f32 * TICK_SEC);
    }
    assert_eq!(scene.layers[0].positions, before);
}

#[test]
fn camera_aspect_follows_viewport_with_no_leaked_state() {
    let mut cam = Camera::hero(1.0);
    cam.set_viewport(800, 600);
    assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    // Degenerate sizes are ignored.
    cam.set_viewport(0, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn camera_matrices_are_finite_and_invertible() {
    let cam = Camera::hero(16.0 / 9.0);
    let vp = cam.view_projection();
    assert!(vp.is_finite());
    assert!(vp.determinant().abs() > 0.0);
    // The earth at the origin sits in front of the camera.
    let clip = vp * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
}
