use std::fmt::Write as _;

use crate::path::PathDescriptor;

/// Wraps `path` in a standalone SVG document sized `width × height`.
///
/// Used by preview tooling; the coordinator writes bare descriptors.
/// `fill` is any SVG paint value (`#3a7bd5`, `black`, ...).
pub fn svg_document(width: f64, height: f64, path: &PathDescriptor, fill: &str) -> String {
    let w = width.max(0.0).ceil();
    let h = height.max(0.0).ceil();
    let mut out = String::with_capacity(path.as_str().len() + 160);
    let _ = write!(out, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}""#);
    let _ = write!(out, r#" viewBox="0 0 {w} {h}">"#);
    let _ = write!(out, r#"<path d="{path}" fill="{fill}"/></svg>"#);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute;

    #[test]
    fn document_embeds_path_and_size() {
        let path = compute(120.0, 80.0, 16.0, 0.6);
        let doc = svg_document(120.0, 80.0, &path, "#3a7bd5");
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains(r#"width="120" height="80""#));
        assert!(doc.contains(&format!(r#"d="{path}""#)));
        assert!(doc.ends_with("</svg>"));
    }

    #[test]
    fn fractional_sizes_round_up() {
        let path = compute(10.4, 9.2, 2.0, 0.6);
        let doc = svg_document(10.4, 9.2, &path, "black");
        assert!(doc.contains(r#"viewBox="0 0 11 10""#));
    }
}
