//! Binary PPM (P6) encoding.

use std::io::{self, Write};

use crate::ImageBuffer;

/// P6 header for an image of the given size, including the trailing newline.
pub fn ppm_header(width: u32, height: u32) -> String {
    format!("P6\n{} {}\n255\n", width, height)
}

/// Write `image` as a binary PPM: header, then `width * height` RGB triples.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> io::Result<()> {
    writer.write_all(ppm_header(image.width, image.height).as_bytes())?;
    writer.write_all(image.as_bytes())?;
    writer.flush()
}
