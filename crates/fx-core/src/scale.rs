//! Responsive display scale for the book.
//!
//! The book should occupy a target fraction of the visible frustum at its
//! depth. The fraction depends on the container width:
//!
//! - up to [`SMALL_MOBILE_MAX_WIDTH`]: a fixed, large share of the width
//! - between the small-mobile and mobile cutoffs: the book is sized by
//!   *height* instead, since at that aspect the long axis is vertical
//! - from [`MOBILE_MAX_WIDTH`] up: a desktop table of `(width, fraction)`
//!   control points, linearly interpolated and clamped at both ends

use crate::camera::Camera;
use crate::constants::*;
use crate::error::{FxError, Result};
use crate::viewport::Viewport;
use std::cmp::Ordering;

/// Piecewise-linear `(x, y)` table with strictly increasing `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct InterpolationTable {
    points: Vec<(f32, f32)>,
}

impl InterpolationTable {
    pub fn new(points: Vec<(f32, f32)>) -> Result<Self> {
        check_points(&points)?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    /// Interpolated value at `x`, clamped to the first/last point outside the
    /// table. Control points return their literal value.
    pub fn sample(&self, x: f32) -> f32 {
        let Some(&(first_x, first_y)) = self.points.first() else {
            return 0.0;
        };
        if x <= first_x {
            return first_y;
        }
        for pair in self.points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if x < x1 {
                let t = (x - x0) / (x1 - x0);
                return y0 + (y1 - y0) * t;
            }
        }
        self.points.last().map(|p| p.1).unwrap_or(first_y)
    }
}

fn check_points(points: &[(f32, f32)]) -> Result<()> {
    if points.is_empty() {
        return Err(FxError::EmptyTable);
    }
    for (i, pair) in points.windows(2).enumerate() {
        if pair[1].0.partial_cmp(&pair[0].0) != Some(Ordering::Greater) {
            return Err(FxError::UnorderedTable { index: i + 1 });
        }
    }
    Ok(())
}

impl Default for InterpolationTable {
    fn default() -> Self {
        Self {
            points: DESKTOP_WIDTH_FRACTIONS.to_vec(),
        }
    }
}

/// Which visible extent the fraction applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleAxis {
    Width,
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTarget {
    pub axis: ScaleAxis,
    pub fraction: f32,
}

#[derive(Clone, Debug)]
pub struct ScaleConfig {
    /// Distance from the eye to the plane the object sits in.
    pub camera_distance: f32,
    /// Unscaled object width and height in world units.
    pub object_width: f32,
    pub object_height: f32,
    pub small_mobile_max_width: f32,
    pub mobile_max_width: f32,
    pub small_mobile_fraction: f32,
    pub mobile_height_fraction: f32,
    pub desktop: InterpolationTable,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            camera_distance: BOOK_CAMERA_Z,
            object_width: BOOK_WIDTH,
            object_height: BOOK_HEIGHT,
            small_mobile_max_width: SMALL_MOBILE_MAX_WIDTH,
            mobile_max_width: MOBILE_MAX_WIDTH,
            small_mobile_fraction: SMALL_MOBILE_WIDTH_FRACTION,
            mobile_height_fraction: MOBILE_HEIGHT_FRACTION,
            desktop: InterpolationTable::default(),
        }
    }
}

impl ScaleConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("camera distance", self.camera_distance),
            ("object width", self.object_width),
            ("object height", self.object_height),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(FxError::NonPositive {
                    name,
                    value: value as f64,
                });
            }
        }
        check_points(&self.desktop.points)
    }

    /// Pick the axis and fraction for a container width.
    pub fn target_for_width(&self, width: f32) -> ScaleTarget {
        if width <= self.small_mobile_max_width {
            ScaleTarget {
                axis: ScaleAxis::Width,
                fraction: self.small_mobile_fraction,
            }
        } else if width < self.mobile_max_width {
            ScaleTarget {
                axis: ScaleAxis::Height,
                fraction: self.mobile_height_fraction,
            }
        } else {
            ScaleTarget {
                axis: ScaleAxis::Width,
                fraction: self.desktop.sample(width),
            }
        }
    }

    /// Uniform scale for the object, or `None` for a degenerate viewport.
    pub fn compute_scale(&self, viewport: Viewport, camera: &Camera) -> Option<f32> {
        let aspect = viewport.aspect()?;
        let target = self.target_for_width(viewport.width);
        let visible_height = camera.visible_height_at(self.camera_distance);
        let scale = match target.axis {
            ScaleAxis::Width => target.fraction * visible_height * aspect / self.object_width,
            ScaleAxis::Height => target.fraction * visible_height / self.object_height,
        };
        (scale > 0.0 && scale.is_finite()).then_some(scale)
    }
}

/// Holds the last good scale and remembers when a computation had to be
/// skipped so the caller can retry on the next refresh tick.
#[derive(Clone, Debug)]
pub struct ScaleController {
    config: ScaleConfig,
    scale: f32,
    retry_pending: bool,
}

impl ScaleController {
    pub fn new(config: ScaleConfig) -> Self {
        Self {
            config,
            scale: 1.0,
            retry_pending: false,
        }
    }

    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Recompute for a new viewport. A degenerate viewport keeps the stale
    /// scale and schedules a retry.
    pub fn on_resize(&mut self, viewport: Viewport, camera: &Camera) -> Option<f32> {
        match self.config.compute_scale(viewport, camera) {
            Some(scale) => {
                self.scale = scale;
                self.retry_pending = false;
                Some(scale)
            }
            None => {
                log::debug!(
                    "[book] skip scale for {}x{} viewport",
                    viewport.width,
                    viewport.height
                );
                self.retry_pending = true;
                None
            }
        }
    }

    /// True once per skipped computation.
    pub fn take_retry(&mut self) -> bool {
        std::mem::take(&mut self.retry_pending)
    }
}
