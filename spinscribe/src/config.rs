use glam::Vec2;

use crate::error::{Result, SpinnerError};

/// Scale of the drawing, in viewBox units per inch of spinner.
pub const DPI: f32 = 24.1;

/// Samples per lobe on each boundary circle.
pub const LOBE_POINTS: usize = 11;

/// The bearing circle is always drawn with this many points.
pub const BEARING_POINTS: usize = 32;

pub const DEFAULT_REPEATS: usize = 3;

/// Upper bound on lobes. Past this the lobes are narrower than the stroke.
pub const MAX_REPEATS: usize = 1024;

// radii and center position, in inches
const BEARING_RADIUS_IN: f32 = 0.25;
const INNER_RADIUS_IN: f32 = 0.6;
const OUTER_RADIUS_IN: f32 = 1.5;
const CENTER_IN: f32 = 4.0;

/// Everything needed to lay out one spinner, derived once from the number
/// of lobes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerConfig {
    repeats: usize,
}

impl SpinnerConfig {
    pub fn new(repeats: usize) -> Result<Self> {
        if repeats == 0 {
            return Err(SpinnerError::NoLobes);
        }
        if repeats > MAX_REPEATS {
            return Err(SpinnerError::TooManyLobes(repeats));
        }
        Ok(Self { repeats })
    }

    /// Number of lobes
    pub fn repeats(&self) -> usize {
        self.repeats
    }

    pub fn center(&self) -> Vec2 {
        Vec2::splat(CENTER_IN * DPI)
    }

    pub fn bearing_radius(&self) -> f32 {
        BEARING_RADIUS_IN * DPI
    }

    pub fn inner_radius(&self) -> f32 {
        INNER_RADIUS_IN * DPI
    }

    pub fn outer_radius(&self) -> f32 {
        OUTER_RADIUS_IN * DPI
    }

    pub fn bearing_points(&self) -> usize {
        BEARING_POINTS
    }

    /// Angular steps taken around a boundary circle after its first sample.
    pub fn num_points(&self) -> usize {
        self.repeats * LOBE_POINTS - 1
    }

    /// Samples taken on each boundary circle: one full slice per lobe.
    pub fn boundary_points(&self) -> usize {
        self.num_points() + 1
    }
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            repeats: DEFAULT_REPEATS,
        }
    }
}
