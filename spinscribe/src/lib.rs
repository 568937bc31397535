//! Geometry of a fidget spinner outline: a bearing circle plus a lobed body,
//! written out as an A4 svg.
//!
//! ```no_run
//! # use spinscribe::{config::SpinnerConfig, drawing::Drawing, make_spinner};
//! let spinner = make_spinner(SpinnerConfig::new(3)?);
//! Drawing::a4().save("spinner.svg", &spinner)?;
//! # Ok::<(), spinscribe::error::SpinnerError>(())
//! ```
pub mod config;
pub mod drawing;
pub mod error;
pub mod sampler;
pub mod scriber;

#[cfg(test)]
#[macro_use]
extern crate is_close;

use svg::node::element::path::Data;

use config::SpinnerConfig;

/// Both outlines of one spinner.
#[derive(Debug, Clone)]
pub struct Spinner {
    pub bearing: Data,
    pub outline: Data,
}

impl Spinner {
    /// Paths in drawing order
    pub fn paths(&self) -> [&Data; 2] {
        [&self.bearing, &self.outline]
    }
}

#[tracing::instrument]
pub fn make_spinner(config: SpinnerConfig) -> Spinner {
    tracing::debug!(
        num_points = config.num_points(),
        bearing_radius = config.bearing_radius(),
        inner_radius = config.inner_radius(),
        outer_radius = config.outer_radius(),
        "derived spinner layout"
    );
    let bearing = scriber::circularize(&sampler::sample_bearing(config));
    let boundaries = sampler::sample_boundaries(config);
    let outline = scriber::spinner(&boundaries.inner, &boundaries.outer, config);
    tracing::debug!(
        bearing_commands = bearing.len(),
        outline_commands = outline.len(),
        "built paths"
    );
    Spinner { bearing, outline }
}
