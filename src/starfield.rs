//! Particle starfield layer generation.
//!
//! A layer is one depth band of the background starfield. Generation is a
//! pure function of its configuration and RNG: it fills four parallel
//! per-particle attribute arrays (position, color, size, twinkle phase) that
//! are uploaded once and never mutated afterward. The only mutable layer
//! state is what the animation driver writes each frame: the shader time
//! uniform and the rotation angle.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Color-bucket thresholds for a single uniform draw in `[0, 1)`.
/// Bucket weights are therefore 0.15 / 0.60 / 0.17 / 0.08.
pub const COLOR_T_COOL: f32 = 0.15;
pub const COLOR_T_WHITE: f32 = 0.75;
pub const COLOR_T_WARM: f32 = 0.92;

pub const COLOR_COOL: Vec3 = Vec3::new(0.7, 0.85, 1.0);
pub const COLOR_WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
pub const COLOR_WARM: Vec3 = Vec3::new(1.0, 0.95, 0.75);
pub const COLOR_ORANGE: Vec3 = Vec3::new(1.0, 0.7, 0.5);

/// Exponent applied to the size draw; biases sizes toward the small end of
/// the band while still allowing rare large outliers.
pub const SIZE_BIAS_EXPONENT: f32 = 1.5;

/// Immutable configuration for one starfield layer.
///
/// Invariants (caller responsibility, not validated):
/// `0 <= radius_min < radius_max`, `0 <= size_min <= size_max`, `count > 0`.
#[derive(Clone, Copy, Debug)]
pub struct LayerConfig {
    pub count: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    pub size_min: f32,
    pub size_max: f32,
}

/// One generated depth band plus its per-frame uniform state.
#[derive(Clone, Debug)]
pub struct StarLayer {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    pub sizes: Vec<f32>,
    pub phases: Vec<f32>,
    /// Elapsed time scaled by this layer's rate multiplier, pushed into the
    /// twinkle shader every frame.
    pub shader_time: f32,
    /// Current Y rotation in radians, advanced by a fixed amount per tick.
    pub rotation_y: f32,
}

impl StarLayer {
    /// Generate a layer from `config`, drawing all randomness from `rng`.
    ///
    /// Positions are uniform over the unit sphere direction (`theta = 2πu`,
    /// `phi = acos(2v - 1)`) with the radius jittered uniformly in the band;
    /// this is intentionally not volume-uniform.
    pub fn build(config: &LayerConfig, rng: &mut impl Rng) -> Self {
        let mut positions = Vec::with_capacity(config.count);
        let mut colors = Vec::with_capacity(config.count);
        let mut sizes = Vec::with_capacity(config.count);
        let mut phases = Vec::with_capacity(config.count);

        for _ in 0..config.count {
            let u: f32 = rng.gen();
            let v: f32 = rng.gen();
            let theta = TAU * u;
            let phi = (2.0 * v - 1.0).acos();
            let r = config.radius_min + rng.gen::<f32>() * (config.radius_max - config.radius_min);
            positions.push(Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            ));

            colors.push(star_color(rng.gen()));

            let bias = rng.gen::<f32>().powf(SIZE_BIAS_EXPONENT);
            sizes.push(config.size_min + bias * (config.size_max - config.size_min));

            phases.push(rng.gen::<f32>() * TAU);
        }

        Self {
            positions,
            colors,
            sizes,
            phases,
            shader_time: 0.0,
            rotation_y: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Map a uniform draw in `[0, 1)` to one of the four fixed star colors.
pub fn star_color(t: f32) -> Vec3 {
    if t < COLOR_T_COOL {
        COLOR_COOL
    } else if t < COLOR_T_WHITE {
        COLOR_WHITE
    } else if t < COLOR_T_WARM {
        COLOR_WARM
    } else {
        COLOR_ORANGE
    }
}
