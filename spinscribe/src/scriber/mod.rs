use glam::Vec2;
use svg::node::element::path::Data;

pub mod spinner;

pub use spinner::{lobes, spinner, Lobe};

/// Make a closed polyline from a set of points: move to the first point,
/// line to every following one, then line back to the first.
///
/// A single point gives a lone move. Panics on an empty slice.
pub fn circularize(points: &[Vec2]) -> Data {
    let (first, rest) = points
        .split_first()
        .expect("circularize needs at least one point");
    let data = Data::new().move_to((first.x, first.y));
    if rest.is_empty() {
        return data;
    }
    rest.iter()
        .chain(std::iter::once(first))
        .fold(data, |d, p| d.line_to((p.x, p.y)))
}
