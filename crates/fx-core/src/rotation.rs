//! Hover-tilt rotation state machine for the book.
//!
//! `Autonomous`: the Y angle advances linearly from a virtual start time and
//! the X angle relaxes toward 0. `Tilting`: both angles chase a target
//! derived from the pointer position, relative to the Y angle captured when
//! the hover began. While tilting, the virtual start time is re-derived from
//! the current Y angle so leaving the hover never pops the book.

use crate::constants::{ROTATION_SPEED, TILT_SMOOTHING, TILT_X_GAIN, TILT_Y_GAIN};
use crate::error::{FxError, Result};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationMode {
    Autonomous,
    Tilting,
}

#[derive(Clone, Debug)]
pub struct TiltConfig {
    /// Autonomous spin, radians per second.
    pub angular_speed: f64,
    /// Radians of X tilt per NDC unit of pointer Y.
    pub tilt_x_gain: f64,
    /// Radians of Y tilt per NDC unit of pointer X.
    pub tilt_y_gain: f64,
    /// Fraction of the remaining distance covered each tick, in (0, 1].
    pub smoothing: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            angular_speed: ROTATION_SPEED,
            tilt_x_gain: TILT_X_GAIN,
            tilt_y_gain: TILT_Y_GAIN,
            smoothing: TILT_SMOOTHING,
        }
    }
}

impl TiltConfig {
    pub fn validate(&self) -> Result<()> {
        if self.angular_speed.is_nan() || self.angular_speed <= 0.0 {
            return Err(FxError::NonPositive {
                name: "angular speed",
                value: self.angular_speed,
            });
        }
        if self.smoothing.is_nan() || self.smoothing <= 0.0 || self.smoothing > 1.0 {
            return Err(FxError::OutOfUnitRange {
                name: "smoothing",
                value: self.smoothing,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverState {
    pub is_hovering: bool,
    pub was_hovering: bool,
    /// Y angle at the moment the current hover began.
    pub hover_base_angle: f64,
    /// Virtual clock origin (seconds) of the autonomous spin.
    pub rotation_start_time: f64,
}

#[derive(Clone, Debug)]
pub struct RotationController {
    config: TiltConfig,
    hover: HoverState,
    angle_x: f64,
    angle_y: f64,
}

impl RotationController {
    pub fn new(config: TiltConfig, now_s: f64) -> Self {
        Self {
            config,
            hover: HoverState {
                rotation_start_time: now_s,
                ..HoverState::default()
            },
            angle_x: 0.0,
            angle_y: 0.0,
        }
    }

    /// Record the latest hit-test result. Mode changes take effect on the
    /// next [`tick`](Self::tick).
    #[inline]
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hover.is_hovering = hovering;
    }

    pub fn mode(&self) -> RotationMode {
        if self.hover.is_hovering {
            RotationMode::Tilting
        } else {
            RotationMode::Autonomous
        }
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Current `(x, y)` angles in radians.
    pub fn angles(&self) -> (f64, f64) {
        (self.angle_x, self.angle_y)
    }

    /// Y angle the autonomous spin would have at `now_s`.
    #[inline]
    pub fn autonomous_angle_at(&self, now_s: f64) -> f64 {
        (now_s - self.hover.rotation_start_time) * self.config.angular_speed
    }

    /// Advance one frame. `pointer_ndc` is only read while tilting.
    ///
    /// The stored angles stay unwrapped; the returned y is folded into
    /// `[0, 2pi)` so the f32 keeps its precision after long uptimes.
    pub fn tick(&mut self, now_s: f64, pointer_ndc: Vec2) -> (f32, f32) {
        let hovering = self.hover.is_hovering;
        if hovering && !self.hover.was_hovering {
            self.hover.hover_base_angle = self.angle_y;
            log::debug!("[book] hover start base={:.3}", self.angle_y);
        } else if !hovering && self.hover.was_hovering {
            log::debug!("[book] hover end angle={:.3}", self.angle_y);
        }
        self.hover.was_hovering = hovering;

        let k = self.config.smoothing;
        if hovering {
            let target_x = pointer_ndc.y as f64 * self.config.tilt_x_gain;
            let target_y =
                self.hover.hover_base_angle + pointer_ndc.x as f64 * self.config.tilt_y_gain;
            self.angle_x += (target_x - self.angle_x) * k;
            self.angle_y += (target_y - self.angle_y) * k;
            if self.config.angular_speed != 0.0 {
                self.hover.rotation_start_time = now_s - self.angle_y / self.config.angular_speed;
            }
        } else {
            self.angle_y = self.autonomous_angle_at(now_s);
            self.angle_x += (0.0 - self.angle_x) * k;
        }
        (
            self.angle_x as f32,
            self.angle_y.rem_euclid(std::f64::consts::TAU) as f32,
        )
    }
}
