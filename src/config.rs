//! Compile-time defaults for the star demo.

use glam::Vec4;

/// Clear color, also used to paint the holes.
pub const BACKGROUND: Vec4 = Vec4::new(1.0, 1.0, 0.0, 1.0);
pub const DARK: Vec4 = Vec4::new(0.3, 0.3, 0.3, 1.0);
pub const LIGHT: Vec4 = Vec4::new(0.68, 0.68, 0.68, 1.0);

pub const MIN_ANGLE: f32 = -45.0;
pub const MAX_ANGLE: f32 = 45.0;

/// Phase change per frame.
pub const SPEED: f32 = 0.015;

pub const STAR_SCALE: f32 = 0.5;
pub const HOLE_SCALE: f32 = 0.1;

/// Number of points the hole tessellation is derived from.
pub const CIRCLE_RESOLUTION: usize = 72;

/// Every tunable of the demo in one place. `Default` yields the constants
/// above; tests build custom values to exercise other ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarConfig {
    pub background: Vec4,
    pub dark: Vec4,
    pub light: Vec4,
    pub min_angle: f32,
    pub max_angle: f32,
    pub speed: f32,
    pub star_scale: f32,
    pub hole_scale: f32,
    pub circle_resolution: usize,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            dark: DARK,
            light: LIGHT,
            min_angle: MIN_ANGLE,
            max_angle: MAX_ANGLE,
            speed: SPEED,
            star_scale: STAR_SCALE,
            hole_scale: HOLE_SCALE,
            circle_resolution: CIRCLE_RESOLUTION,
        }
    }
}
