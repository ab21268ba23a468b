//! Input boundary: pull `d`-attribute strings out of an SVG document.
//!
//! The core parser consumes exactly the path command string and nothing else;
//! this module owns the document handling around it. Per the degraded-input
//! policy, a malformed document logs and yields an empty point sequence
//! instead of failing the run.

use std::path::Path;

use anyhow::Context as _;
use epicycler::parse_path_points;

/// Collect every `<path>` element's `d` attribute, in document order.
pub fn path_data_strings(svg_xml: &str) -> Vec<String> {
    let doc = match roxmltree::Document::parse(svg_xml) {
        Ok(doc) => doc,
        Err(err) => {
            tracing::warn!(%err, "malformed SVG document, using empty point sequence");
            return Vec::new();
        }
    };

    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "path")
        .filter_map(|n| n.attribute("d"))
        .map(str::to_owned)
        .collect()
}

/// Parse a whole SVG document to one concatenated point sequence.
pub fn document_points(svg_xml: &str) -> Vec<epicycler::Point> {
    let mut points = Vec::new();
    for d in path_data_strings(svg_xml) {
        points.extend(parse_path_points(&d));
    }
    points
}

/// Read an SVG file and extract its point sequence.
pub fn load_points(path: &Path) -> anyhow::Result<Vec<epicycler::Point>> {
    let xml = std::fs::read_to_string(path)
        .with_context(|| format!("read svg '{}'", path.display()))?;
    let points = document_points(&xml);
    tracing::info!(samples = points.len(), path = %path.display(), "extracted path samples");
    Ok(points)
}
