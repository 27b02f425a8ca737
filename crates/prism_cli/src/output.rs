//! Image file output.
//!
//! The PPM is written into a temporary file beside the destination and then
//! renamed over it, so the destination never holds a half-written image.

use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use prism_renderer::{write_ppm, ImageBuffer};
use tempfile::NamedTempFile;

/// Save `image` as a binary PPM at `path`.
pub fn save_ppm(image: &ImageBuffer, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create output file in {}", dir.display()))?;

    write_ppm(image, BufWriter::new(&mut file))
        .with_context(|| format!("Failed to write image data for {}", path.display()))?;

    file.persist(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;

    Ok(())
}
