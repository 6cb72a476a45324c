//! Scene state and the per-tick animation update.
//!
//! All mutable animation state lives in one `SceneState` owned by the frame
//! context and passed by reference into `tick`; nothing here is global.

use crate::constants::*;
use crate::starfield::StarLayer;
use glam::{Vec3, Vec4};
use rand::Rng;

/// How a body's sphere mesh is shaded.
#[derive(Clone, Copy, Debug)]
pub enum BodyMaterial {
    /// Flat emissive-looking fill, opaque, depth-written.
    Solid { color: Vec3 },
    /// Back-face rim shell, additive: intensity = (bias - n.z)^power * tint.
    Rim { tint: Vec4, bias: f32, power: f32 },
}

/// One positioned, rotatable sphere in the scene.
#[derive(Clone, Debug)]
pub struct Body {
    pub position: Vec3,
    pub radius: f32,
    pub rotation_y: f32,
    pub spin_per_tick: f32,
    pub material: BodyMaterial,
}

impl Body {
    fn solid(position: [f32; 3], radius: f32, spin: f32, color: Vec3) -> Self {
        Self {
            position: Vec3::from_array(position),
            radius,
            rotation_y: 0.0,
            spin_per_tick: spin,
            material: BodyMaterial::Solid { color },
        }
    }

    fn rim(position: [f32; 3], radius: f32, tint: Vec4, bias: f32, power: f32) -> Self {
        Self {
            position: Vec3::from_array(position),
            radius,
            rotation_y: 0.0,
            spin_per_tick: 0.0,
            material: BodyMaterial::Rim { tint, bias, power },
        }
    }
}

/// The full animated scene: three starfield bands plus the celestial bodies.
pub struct SceneState {
    pub layers: Vec<StarLayer>,
    pub bodies: Vec<Body>,
}

impl SceneState {
    /// Build the scene once at startup. All particle randomness comes from
    /// `rng`; the body set is fixed.
    pub fn build(rng: &mut impl Rng) -> Self {
        let layers = STAR_LAYERS
            .iter()
            .map(|cfg| StarLayer::build(cfg, rng))
            .collect();

        let bodies = vec![
            Body::solid(SUN_POSITION, SUN_RADIUS, SUN_SPIN_PER_TICK, Vec3::ONE),
            Body::rim(
                SUN_POSITION,
                SUN_HALO_RADIUS,
                Vec4::new(1.0, 0.95, 0.7, 1.0),
                0.8,
                2.0,
            ),
            Body::rim(
                SUN_POSITION,
                SUN_GLOW_RADIUS,
                Vec4::new(0.4, 0.6, 1.0, 0.6),
                0.9,
                3.0,
            ),
            Body::solid(
                MOON_POSITION,
                MOON_RADIUS,
                MOON_SPIN_PER_TICK,
                Vec3::new(0.8, 0.8, 0.8),
            ),
            // Texture loading is skipped; this is the original fallback blue.
            Body::solid(
                EARTH_POSITION,
                EARTH_RADIUS,
                EARTH_SPIN_PER_TICK,
                Vec3::new(0.118, 0.533, 0.898),
            ),
            Body::rim(
                EARTH_POSITION,
                ATMOSPHERE_RADIUS,
                Vec4::new(0.3, 0.6, 1.0, 1.0),
                0.65,
                2.5,
            ),
        ];
        // The atmosphere shell spins with the earth.
        let mut scene = Self { layers, bodies };
        scene.bodies[5].spin_per_tick = EARTH_SPIN_PER_TICK;
        scene
    }

    /// Advance one animation tick.
    ///
    /// `elapsed_sec` is the shared monotonic clock value, read once per tick
    /// by the driver. Shader times are derived from it; rotations advance by
    /// a fixed amount per tick, i.e. they are coupled to the refresh rate.
    /// That coupling is preserved from the original behavior (tick rate is
    /// assumed ~constant); see `tick_delta_scaled` for the rate-independent
    /// variant.
    pub fn tick(&mut self, elapsed_sec: f32) {
        for (layer, (rate, spin)) in self
            .layers
            .iter_mut()
            .zip(LAYER_TIME_RATES.iter().zip(LAYER_SPIN_PER_TICK.iter()))
        {
            layer.shader_time = elapsed_sec * rate;
            layer.rotation_y += spin;
        }
        for body in &mut self.bodies {
            body.rotation_y += body.spin_per_tick;
        }
    }

    /// Delta-time-scaled alternative to `tick`.
    ///
    /// Rotations advance by `spin_per_tick * dt * ASSUMED_TICK_HZ`, so drift
    /// speed is independent of the display refresh rate while matching
    /// `tick` exactly at 60 Hz. Not used by the frame loop.
    pub fn tick_delta_scaled(&mut self, elapsed_sec: f32, dt_sec: f32) {
        let ticks = dt_sec * ASSUMED_TICK_HZ;
        for (layer, (rate, spin)) in self
            .layers
            .iter_mut()
            .zip(LAYER_TIME_RATES.iter().zip(LAYER_SPIN_PER_TICK.iter()))
        {
            layer.shader_time = elapsed_sec * rate;
            layer.rotation_y += spin * ticks;
        }
        for body in &mut self.bodies {
            body.rotation_y += body.spin_per_tick * ticks;
        }
    }
}
