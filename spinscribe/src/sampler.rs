use std::f32::consts::TAU;

use glam::Vec2;

use crate::config::SpinnerConfig;

/// Inner and outer boundary samples of the spinner body.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundaries {
    pub inner: Vec<Vec2>,
    pub outer: Vec<Vec2>,
}

/// `count` points on a circle, starting at the top (angle 0) with a step of
/// `2π / (count + 1)`, so the last point stops short of the first.
pub fn circle_points(center: Vec2, radius: f32, count: usize) -> Vec<Vec2> {
    points_at_step(center, radius, count, TAU / (count + 1) as f32)
}

/// `count` points evenly dividing the whole circle, same orientation as
/// [`circle_points`].
pub fn ring_points(center: Vec2, radius: f32, count: usize) -> Vec<Vec2> {
    points_at_step(center, radius, count, TAU / count.max(1) as f32)
}

pub fn sample_bearing(config: SpinnerConfig) -> Vec<Vec2> {
    circle_points(
        config.center(),
        config.bearing_radius(),
        config.bearing_points(),
    )
}

pub fn sample_boundaries(config: SpinnerConfig) -> Boundaries {
    let count = config.boundary_points();
    Boundaries {
        inner: ring_points(config.center(), config.inner_radius(), count),
        outer: ring_points(config.center(), config.outer_radius(), count),
    }
}

fn points_at_step(center: Vec2, radius: f32, count: usize, step: f32) -> Vec<Vec2> {
    // sin for x and cos for y puts angle 0 at the top (y grows downward)
    (0..count)
        .map(|i| {
            let (sin, cos) = (step * i as f32).sin_cos();
            center + Vec2::new(sin, cos) * radius
        })
        .collect()
}
