use glam::Vec4;

use crate::config::StarConfig;
use crate::input::Command;

/// Linear interpolation. `p` is not restricted to `[0, 1]`.
pub fn lerp(a: f32, b: f32, p: f32) -> f32 {
    a + p * (b - a)
}

/// What the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Rotation around Z in degrees.
    pub angle: f32,
    pub color: Vec4,
}

/// Oscillator plus the two mode flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Nominally in `[0, 1]`; may overshoot by one step before turning around.
    pub phase: f32,
    /// Signed phase step per frame, zero while at rest.
    pub direction: f32,
    pub angle: f32,
    pub color: Vec4,
    pub swinging: bool,
    pub shading: bool,
}

impl AnimationState {
    pub fn rest(dark: Vec4) -> Self {
        Self {
            phase: 0.5,
            direction: 0.0,
            angle: 0.0,
            color: dark,
            swinging: false,
            shading: false,
        }
    }
}

/// Owns the animation state and drives it from commands and frame ticks.
#[derive(Debug, Clone)]
pub struct AnimationController {
    config: StarConfig,
    state: AnimationState,
}

impl AnimationController {
    pub fn new(config: StarConfig) -> Self {
        Self { state: AnimationState::rest(config.dark), config }
    }

    /// Starts from an arbitrary oscillator position instead of the rest pose.
    pub fn with_state(config: StarConfig, state: AnimationState) -> Self {
        Self { config, state }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn pose(&self) -> Pose {
        Pose { angle: self.state.angle, color: self.state.color }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Reset => self.state = AnimationState::rest(self.config.dark),
            Command::Swing => {
                self.state.swinging = true;
                self.state.shading = false;
                self.state.color = self.config.dark;
                self.start_motion();
            }
            Command::Shade => {
                self.state.swinging = true;
                self.state.shading = true;
                self.start_motion();
            }
        }
    }

    // Only kicks off motion from rest; a running oscillator keeps its phase.
    fn start_motion(&mut self) {
        if self.state.direction == 0.0 {
            self.state.direction = -self.config.speed;
        }
    }

    /// One frame tick. Angle and color are derived from the phase *before*
    /// it moves, then the phase steps and turns around past either end.
    pub fn advance(&mut self) -> Pose {
        let cfg = &self.config;
        let st = &mut self.state;

        if st.swinging {
            st.angle = lerp(cfg.min_angle, cfg.max_angle, st.phase);
        }
        if st.shading {
            let t = ((st.phase - 0.5) * 2.0).abs();
            st.color = cfg.dark.lerp(cfg.light, t);
        }

        st.phase += st.direction;
        if st.phase > 1.0 {
            st.direction = -cfg.speed;
        } else if st.phase < 0.0 {
            st.direction = cfg.speed;
        }

        self.pose()
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(StarConfig::default())
    }
}
