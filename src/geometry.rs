//! Static vertex data for the star and its holes. Both shapes are drawn as
//! triangle fans.

use glam::Vec2;

use crate::error::{Error, Result};

/// Smallest resolution that still yields a polygon (three rim points).
pub const MIN_CIRCLE_RESOLUTION: usize = 5;

/// Number of vertices in [`star_outline`].
pub const STAR_VERTEX_COUNT: usize = 10;

/// Four-pointed star: the shared fan center, then alternating inner/outer
/// points, ending on the first rim vertex to close the fan.
pub fn star_outline() -> [Vec2; STAR_VERTEX_COUNT] {
    [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.5, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 0.5),
        Vec2::new(-1.0, 1.0),
        Vec2::new(-0.5, 0.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(0.0, -0.5),
        Vec2::new(1.0, -1.0),
        Vec2::new(0.5, 0.0),
    ]
}

/// Unit circle approximation with `resolution - 2` evenly spaced points,
/// starting at angle 0 and going counter-clockwise. Anything short of a
/// triangle is rejected.
///
/// All points sit on the rim, so a fan pivoting on the first one covers the
/// polygon without a closing vertex.
pub fn circle_outline(resolution: usize) -> Result<Vec<Vec2>> {
    if resolution < MIN_CIRCLE_RESOLUTION {
        return Err(Error::InvalidResolution(resolution));
    }
    let segments = resolution - 2;
    let step = std::f32::consts::TAU / segments as f32;
    Ok((0..segments)
        .map(|i| Vec2::from_angle(step * i as f32))
        .collect())
}

/// Interleaves vertices as `x, y` pairs for a tightly packed buffer.
pub fn flatten(vertices: &[Vec2]) -> Vec<f32> {
    vertices.iter().flat_map(|v| v.to_array()).collect()
}
