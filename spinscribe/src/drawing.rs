use std::io::Write;
use std::path::Path as FsPath;

use svg::node::element::path::Data;
use svg::node::element::{Path, Style};
use svg::Document;

use crate::error::Result;
use crate::Spinner;

// ISO A4, in millimeters. The viewBox uses the same numbers so one
// user unit is one millimeter.
pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

const OUTLINE_CLASS: &str = "outline";

/// Lays paths out on a fixed page with a shared outline style.
pub struct Drawing {
    width: &'static str,
    height: &'static str,
    view_box: (f32, f32, f32, f32),
    style: Style,
}

impl Drawing {
    pub fn a4() -> Self {
        Self {
            width: "210mm",
            height: "297mm",
            view_box: (0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT),
            style: Style::new(include_str!("../style.css")),
        }
    }

    /// Build the document: the stylesheet, then one outlined path per entry
    /// of `paths`, in order.
    pub fn document<'a>(&self, paths: impl IntoIterator<Item = &'a Data>) -> Document {
        let document = Document::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", self.view_box)
            .add(self.style.clone());
        paths.into_iter().fold(document, |doc, data| {
            doc.add(
                Path::new()
                    .set("class", OUTLINE_CLASS)
                    .set("d", data.clone()),
            )
        })
    }

    pub fn write<W: Write>(&self, writer: W, spinner: &Spinner) -> Result<()> {
        svg::write(writer, &self.document(spinner.paths()))?;
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save<P: AsRef<FsPath>>(&self, path: P, spinner: &Spinner) -> Result<()> {
        svg::save(path.as_ref(), &self.document(spinner.paths()))?;
        tracing::debug!("drawing saved");
        Ok(())
    }
}

impl Default for Drawing {
    fn default() -> Self {
        Self::a4()
    }
}
