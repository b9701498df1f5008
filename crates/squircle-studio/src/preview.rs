use std::path::Path;

use anyhow::{Context, Result};
use resvg::{tiny_skia, usvg};

use squircle_geometry::{compute_config, svg_document, PathDescriptor, SquircleConfig};

/// Writes `<out>.svg` and the rasterized `out` PNG for one box.
pub fn render(
    width: f64,
    height: f64,
    config: SquircleConfig,
    fill: &str,
    out: &Path,
) -> Result<PathDescriptor> {
    let path = compute_config(width, height, config);
    let doc = svg_document(width, height, &path, fill);

    let svg_out = out.with_extension("svg");
    std::fs::write(&svg_out, &doc)
        .with_context(|| format!("writing {}", svg_out.display()))?;

    let pixmap = rasterize(&doc)?;
    pixmap.save_png(out).with_context(|| format!("writing {}", out.display()))?;

    log::info!("wrote {} and {}", svg_out.display(), out.display());
    Ok(path)
}

fn rasterize(doc: &str) -> Result<tiny_skia::Pixmap> {
    let tree = usvg::Tree::from_str(doc, &usvg::Options::default())
        .context("parsing preview svg")?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .context("preview canvas is empty")?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Ok(pixmap)
}
