// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/starfield.rs"]
mod starfield;
#[path = "../src/constants.rs"]
mod constants;

use constants::*;
use starfield::*;

#[test]
fn layer_configs_satisfy_the_documented_invariants() {
    for cfg in &STAR_LAYERS {
        assert!(cfg.count > 0);
        assert!(cfg.radius_min >= 0.0);
        assert!(cfg.radius_min < cfg.radius_max);
        assert!(cfg.size_min >= 0.0);
        assert!(cfg.size_min <= cfg.size_max);
    }
}

#[test]
fn depth_bands_are_ordered_and_disjoint() {
    // near < mid < far, with gaps between the shells
    assert!(STAR_LAYERS[0].radius_max < STAR_LAYERS[1].radius_min);
    assert!(STAR_LAYERS[1].radius_max < STAR_LAYERS[2].radius_min);
    // counts grow and sizes shrink with distance
    assert!(STAR_LAYERS[0].count < STAR_LAYERS[1].count);
    assert!(STAR_LAYERS[1].count < STAR_LAYERS[2].count);
    assert!(STAR_LAYERS[0].size_max > STAR_LAYERS[1].size_max);
    assert!(STAR_LAYERS[1].size_max > STAR_LAYERS[2].size_max);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_rates_decrease_with_distance() {
    assert_eq!(LAYER_TIME_RATES[0], 1.0);
    assert!(LAYER_TIME_RATES[0] > LAYER_TIME_RATES[1]);
    assert!(LAYER_TIME_RATES[1] > LAYER_TIME_RATES[2]);
    assert!(LAYER_TIME_RATES[2] > 0.0);

    assert!(LAYER_SPIN_PER_TICK[0] > LAYER_SPIN_PER_TICK[1]);
    assert!(LAYER_SPIN_PER_TICK[1] > LAYER_SPIN_PER_TICK[2]);
    assert!(LAYER_SPIN_PER_TICK[2] > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn body_spins_are_positive_and_earth_is_fastest() {
    assert!(EARTH_SPIN_PER_TICK > MOON_SPIN_PER_TICK);
    assert!(MOON_SPIN_PER_TICK > SUN_SPIN_PER_TICK);
    assert!(SUN_SPIN_PER_TICK > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_planes_cover_the_whole_scene() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
    // The far plane must clear the outermost star band.
    assert!(CAMERA_ZFAR >= STAR_LAYERS[2].radius_max);
    // The camera sits outside the earth and its atmosphere.
    assert!(CAMERA_Z > ATMOSPHERE_RADIUS);
}

#[test]
fn halo_shells_enclose_their_bodies() {
    assert!(SUN_HALO_RADIUS > SUN_RADIUS);
    assert!(SUN_GLOW_RADIUS > SUN_HALO_RADIUS);
    assert!(ATMOSPHERE_RADIUS > EARTH_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn color_bucket_thresholds_partition_the_unit_interval() {
    assert!(COLOR_T_COOL > 0.0);
    assert!(COLOR_T_COOL < COLOR_T_WHITE);
    assert!(COLOR_T_WHITE < COLOR_T_WARM);
    assert!(COLOR_T_WARM < 1.0);

    // Implied bucket weights: 0.15 / 0.60 / 0.17 / 0.08, summing to 1.
    let weights = [
        COLOR_T_COOL,
        COLOR_T_WHITE - COLOR_T_COOL,
        COLOR_T_WARM - COLOR_T_WHITE,
        1.0 - COLOR_T_WARM,
    ];
    assert!((weights[0] - 0.15).abs() < 1e-6);
    assert!((weights[1] - 0.60).abs() < 1e-6);
    assert!((weights[2] - 0.17).abs() < 1e-6);
    assert!((weights[3] - 0.08).abs() < 1e-6);
    assert!((weights.iter().sum::<f32>() - 1.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn misc_tuning_values_are_sane() {
    assert!(SIZE_BIAS_EXPONENT > 1.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(ASSUMED_TICK_HZ > 0.0);
}
