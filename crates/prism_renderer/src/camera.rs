//! Camera for ray generation.
//!
//! The camera looks down -Z through a virtual viewscreen centred on the
//! optical axis at z = 0. The screen and the image share a fixed 5:4
//! aspect ratio.

use crate::{RenderError, RenderResult};
use prism_math::{Ray, Vec3};

/// World-space height of the viewscreen.
pub const VIEWSCREEN_HEIGHT: f64 = 0.4;

/// Camera that maps image pixels to rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    image_width: u32,
    image_height: u32,

    position: Vec3,

    // Viewscreen size in world units
    viewport_width: f64,
    viewport_height: f64,

    // World size of a single pixel
    pixel_width: f64,
    pixel_height: f64,
}

impl Camera {
    /// Create a camera at `position` for an image `image_width` pixels wide.
    ///
    /// The height is derived from the width (5:4) and is zero for a width of
    /// one. Fails only if the width is zero.
    pub fn new(position: Vec3, image_width: u32) -> RenderResult<Self> {
        if image_width == 0 {
            return Err(RenderError::InvalidWidth);
        }

        let image_height = Self::height_for_width(image_width);

        let viewport_height = VIEWSCREEN_HEIGHT;
        let viewport_width = viewport_height * 5.0 / 4.0;

        let camera = Self {
            image_width,
            image_height,
            position,
            viewport_width,
            viewport_height,
            pixel_width: viewport_width / image_width as f64,
            // Infinite for a zero-row image, which never samples a pixel
            pixel_height: viewport_height / image_height as f64,
        };

        log::debug!(
            "Camera at {:?}: {}x{} image, {:.4}x{:.4} viewscreen",
            position,
            image_width,
            image_height,
            viewport_width,
            viewport_height
        );

        Ok(camera)
    }

    /// Image height for a given width, `floor(width * 4 / 5)`.
    pub fn height_for_width(width: u32) -> u32 {
        // Widen first so large widths cannot overflow
        (u64::from(width) * 4 / 5) as u32
    }

    /// Image width in pixels.
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    /// Image height in pixels.
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Centre of pixel (row, col) on the viewscreen.
    pub fn screen_point(&self, row: u32, col: u32) -> Vec3 {
        let x = -(self.viewport_width / 2.0) + self.pixel_width * (col as f64 + 0.5);
        let y = (self.viewport_height / 2.0) - self.pixel_height * (row as f64 + 0.5);
        Vec3::new(x, y, 0.0)
    }

    /// Ray from the camera through the centre of pixel (row, col).
    pub fn get_ray(&self, row: u32, col: u32) -> Ray {
        Ray::towards(self.position, self.screen_point(row, col))
    }
}
