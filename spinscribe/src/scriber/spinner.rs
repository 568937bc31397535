use glam::Vec2;
use svg::node::element::path::Data;

use crate::config::{SpinnerConfig, LOBE_POINTS};

// positions of each role within an 11 point slice
const CAP: usize = 2;
const CONTROL1: usize = 5;
const CONTROL2: usize = 7;
const END: usize = 10;

/// One flat cap and curved sweep of the spinner outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lobe {
    /// End of the straight cap, on the outer circle
    pub cap: Vec2,
    /// First bezier control, on the inner circle
    pub control1: Vec2,
    /// Second bezier control, on the inner circle
    pub control2: Vec2,
    /// Where the sweep returns to the outer circle
    pub end: Vec2,
}

impl Lobe {
    /// Pick the lobe's points out of one slice of each boundary. Both slices
    /// must hold at least `LOBE_POINTS` points.
    pub fn from_slices(inner: &[Vec2], outer: &[Vec2]) -> Self {
        Self {
            cap: outer[CAP],
            control1: inner[CONTROL1],
            control2: inner[CONTROL2],
            end: outer[END],
        }
    }

    pub fn scribe(&self, data: Data) -> Data {
        data.line_to((self.cap.x, self.cap.y)).cubic_curve_to(vec![
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y,
        ])
    }
}

pub fn lobes(inner: &[Vec2], outer: &[Vec2], config: SpinnerConfig) -> Vec<Lobe> {
    let needed = config.repeats() * LOBE_POINTS;
    assert!(
        inner.len() >= needed && outer.len() >= needed,
        "{} lobes need {} points per boundary, got {} inner and {} outer",
        config.repeats(),
        needed,
        inner.len(),
        outer.len()
    );
    inner
        .chunks_exact(LOBE_POINTS)
        .zip(outer.chunks_exact(LOBE_POINTS))
        .take(config.repeats())
        .map(|(i, o)| Lobe::from_slices(i, o))
        .collect()
}

/// Make a path that repeats a flat cap and a curve once per lobe, starting
/// from the last outer point so the final curve lands back on the start.
pub fn spinner(inner: &[Vec2], outer: &[Vec2], config: SpinnerConfig) -> Data {
    let lobes = lobes(inner, outer, config);
    // lobes() has already checked outer is non-empty
    let start = outer[outer.len() - 1];
    lobes
        .iter()
        .fold(Data::new().move_to((start.x, start.y)), |d, lobe| {
            lobe.scribe(d)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{ring_points, sample_boundaries};
    use crate::scriber::tests::end_point;
    use svg::node::element::path::Command;

    #[test]
    fn test_command_shape() {
        for repeats in 1..8 {
            let config = SpinnerConfig::new(repeats).unwrap();
            let b = sample_boundaries(config);
            let data = spinner(&b.inner, &b.outer, config);
            assert_eq!(data.len(), 2 * repeats + 1);
            assert!(matches!(data[0], Command::Move(..)));
            for pair in data[1..].chunks(2) {
                assert!(matches!(pair[0], Command::Line(..)));
                assert!(matches!(pair[1], Command::CubicCurve(..)));
            }
        }
    }

    #[test]
    fn test_single_lobe() {
        let config = SpinnerConfig::new(1).unwrap();
        let b = sample_boundaries(config);
        assert_eq!(b.inner.len(), 11);
        assert_eq!(b.outer.len(), 11);
        let data = spinner(&b.inner, &b.outer, config);
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn test_lobe_roles() {
        let config = SpinnerConfig::new(2).unwrap();
        let b = sample_boundaries(config);
        let lobes = lobes(&b.inner, &b.outer, config);
        assert_eq!(lobes.len(), 2);
        assert_eq!(lobes[1].cap, b.outer[13]);
        assert_eq!(lobes[1].control1, b.inner[16]);
        assert_eq!(lobes[1].control2, b.inner[18]);
        assert_eq!(lobes[1].end, b.outer[21]);

        let data = spinner(&b.inner, &b.outer, config);
        match &data[4] {
            Command::CubicCurve(_, params) => {
                let expected = [
                    b.inner[16].x,
                    b.inner[16].y,
                    b.inner[18].x,
                    b.inner[18].y,
                    b.outer[21].x,
                    b.outer[21].y,
                ];
                assert_eq!(&params[..], &expected[..]);
            }
            other => panic!("expected a curve, got {:?}", other),
        }
    }

    #[test]
    fn test_outline_closes() {
        let config = SpinnerConfig::default();
        let b = sample_boundaries(config);
        let data = spinner(&b.inner, &b.outer, config);
        let start = end_point(&data[0]);
        assert_eq!(start, (b.outer[32].x, b.outer[32].y));
        assert_eq!(end_point(&data[data.len() - 1]), start);
    }

    #[test]
    fn test_lobes_are_symmetric() {
        let config = SpinnerConfig::new(4).unwrap();
        let center = config.center();
        let b = sample_boundaries(config);
        let lobes = lobes(&b.inner, &b.outer, config);
        let turn = std::f32::consts::TAU / 4.0;
        for pair in lobes.windows(2) {
            let (a, z) = (pair[0].cap - center, pair[1].cap - center);
            let angle = a.angle_between(z).abs();
            assert!(is_close!(angle, turn, rel_tol = 1e-3));
        }
    }

    #[test]
    fn test_deterministic() {
        let config = SpinnerConfig::new(5).unwrap();
        let b = sample_boundaries(config);
        let first = spinner(&b.inner, &b.outer, config);
        let second = spinner(&b.inner, &b.outer, config);
        let first: svg::node::Value = first.into();
        let second: svg::node::Value = second.into();
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    #[should_panic(expected = "need 22 points per boundary")]
    fn test_short_boundaries_panic() {
        let config = SpinnerConfig::new(2).unwrap();
        // one point short, as an `11 * repeats - 1` sizing would give
        let short = ring_points(config.center(), config.inner_radius(), 21);
        spinner(&short, &short, config);
    }
}
