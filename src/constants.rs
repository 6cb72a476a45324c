/// Scene layout and animation tuning constants.
///
/// These express intended behavior (layer depth bands, per-tick drift rates,
/// camera framing) and keep magic numbers out of the code.
use crate::starfield::LayerConfig;

// Starfield depth bands, near to far. Counts grow and sizes shrink with
// distance so the far band reads as dense background dust.
pub const STAR_LAYERS: [LayerConfig; 3] = [
    LayerConfig {
        count: 3000,
        radius_min: 250.0,
        radius_max: 500.0,
        size_min: 2.5,
        size_max: 6.0,
    },
    LayerConfig {
        count: 5000,
        radius_min: 550.0,
        radius_max: 1000.0,
        size_min: 1.8,
        size_max: 4.5,
    },
    LayerConfig {
        count: 8000,
        radius_min: 1100.0,
        radius_max: 2000.0,
        size_min: 1.0,
        size_max: 3.0,
    },
];

// Per-layer multipliers applied to the shared elapsed time before it is
// written into the twinkle shader. Desynchronizes the bands; cosmetic only.
pub const LAYER_TIME_RATES: [f32; 3] = [1.0, 0.9, 0.75];

// Per-layer Y rotation increments in radians per tick. Deliberately coupled
// to the display refresh rate rather than delta time; see SceneState::tick.
pub const LAYER_SPIN_PER_TICK: [f32; 3] = [0.0003, 0.0002, 0.0001];

// Celestial body spins, radians per tick.
pub const EARTH_SPIN_PER_TICK: f32 = 0.002;
pub const MOON_SPIN_PER_TICK: f32 = 0.001;
pub const SUN_SPIN_PER_TICK: f32 = 0.0005;

// Body placement and sizing (world units).
pub const SUN_POSITION: [f32; 3] = [-60.0, 15.0, -80.0];
pub const SUN_RADIUS: f32 = 15.0;
pub const SUN_HALO_RADIUS: f32 = 20.0;
pub const SUN_GLOW_RADIUS: f32 = 25.0;

pub const MOON_POSITION: [f32; 3] = [40.0, 8.0, -60.0];
pub const MOON_RADIUS: f32 = 5.0;

pub const EARTH_POSITION: [f32; 3] = [0.0, 0.0, 0.0];
pub const EARTH_RADIUS: f32 = 24.0;
pub const ATMOSPHERE_RADIUS: f32 = 26.5;

// Camera framing. The far plane must clear the outermost star band.
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_Z: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 3000.0;

// Backing-store resolution clamp; beyond 2x the extra pixels are invisible
// and the star pass gets expensive.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Rotation update used by the delta-time-scaled alternative; per-tick
// constants above assume roughly this refresh rate.
pub const ASSUMED_TICK_HZ: f32 = 60.0;

// Fixed display temperature used by the recommendation flow.
pub const DISPLAY_TEMP_C: i32 = 26;
