//! The fixed per-frame draw sequence: the star, then five holes punched at
//! its center and its four points.

use glam::{Mat4, Vec3, Vec4};

use crate::animation::Pose;
use crate::config::StarConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mesh {
    Star,
    Hole,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub mesh: Mesh,
    pub model: Mat4,
    pub color: Vec4,
}

pub const HOLE_COUNT: usize = 5;

/// Hole offsets in hole-local space, before the hole scale is applied.
fn hole_offsets(config: &StarConfig) -> [Vec3; HOLE_COUNT] {
    let d = 0.5 / config.hole_scale;
    [
        Vec3::ZERO,
        Vec3::new(d, 0.0, 0.0),
        Vec3::new(-d, 0.0, 0.0),
        Vec3::new(0.0, d, 0.0),
        Vec3::new(0.0, -d, 0.0),
    ]
}

pub fn star_model(angle: f32, config: &StarConfig) -> Mat4 {
    Mat4::from_rotation_z(angle.to_radians())
        * Mat4::from_scale(Vec3::new(config.star_scale, config.star_scale, 1.0))
}

pub fn draw_calls(pose: Pose, config: &StarConfig) -> [DrawCall; HOLE_COUNT + 1] {
    let star = star_model(pose.angle, config);
    let hole =
        star * Mat4::from_scale(Vec3::new(config.hole_scale, config.hole_scale, 1.0));
    let offsets = hole_offsets(config);

    let mut calls = [DrawCall { mesh: Mesh::Star, model: star, color: pose.color }; HOLE_COUNT + 1];
    for (call, offset) in calls[1..].iter_mut().zip(offsets) {
        *call = DrawCall {
            mesh: Mesh::Hole,
            model: hole * Mat4::from_translation(offset),
            color: config.background,
        };
    }
    calls
}

/// Side of the largest square canvas that fits a `width` x `height` window.
pub fn fit_square(width: f64, height: f64) -> u32 {
    width.min(height).max(0.0).floor() as u32
}
