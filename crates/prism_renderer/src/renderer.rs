//! Scanline renderer.
//!
//! Each image row is an independent rayon task writing into its own slice of
//! a pre-sized pixel buffer. The parallel iterator returns only after every
//! row has finished, so the buffer is complete before anyone reads it.

use std::time::Instant;

use crate::{shade, trace, Camera, RenderResult};
use prism_core::{Color, Rgb8, Scene};
use rayon::prelude::*;

/// Default cap on mirror recursion.
pub const MAX_REFLECT_DEPTH: u32 = 7;

/// Default Phong exponent; higher values give tighter highlights.
pub const SPECULAR_EXPONENT: f64 = 5.0;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Deepest mirror bounce that is still shaded
    pub max_depth: u32,
    /// Phong specular exponent
    pub specular_exponent: f64,
    /// Ambient term added for every light that reaches a point
    pub ambient: Color,
    /// Color for rays that hit nothing
    pub background: Color,
    /// Worker threads; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_REFLECT_DEPTH,
            specular_exponent: SPECULAR_EXPONENT,
            ambient: Color::splat(0.15),
            background: Color::ZERO,
            threads: None,
        }
    }
}

/// Rendered image, row-major, top row first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb8>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb8::BLACK; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Rgb8) {
        let index = y as usize * self.width as usize + x as usize;
        self.pixels[index] = color;
    }

    /// Raw `R G B` bytes, three per pixel, no row padding.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Compute the color seen through pixel (row, col).
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    row: u32,
    col: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.get_ray(row, col);

    match trace(&ray, scene.objects()) {
        Some(hit) => shade(
            scene,
            hit.object,
            ray.at(hit.t),
            ray.direction(),
            0,
            config,
        ),
        None => config.background,
    }
}

/// Render the scene to an image `width` pixels wide (height is `width * 4 / 5`).
///
/// Rows are traced in parallel. A panic in any row propagates out of this
/// call, so a returned image is always complete.
pub fn render(scene: &Scene, width: u32, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    let camera = Camera::new(scene.camera(), width)?;

    if scene.objects().is_empty() {
        log::warn!("Scene has no objects; the image will be background only");
    }
    if scene.lights().is_empty() {
        log::warn!("Scene has no lights; surfaces will only show the background");
    }

    log::info!(
        "Rendering {}x{} ({} objects, {} lights, max depth {})",
        camera.image_width(),
        camera.image_height(),
        scene.objects().len(),
        scene.lights().len(),
        config.max_depth
    );

    let start = Instant::now();
    let image = match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            log::debug!("Using a dedicated pool of {} threads", pool.current_num_threads());
            pool.install(|| render_rows(scene, &camera, config))
        }
        None => render_rows(scene, &camera, config),
    };
    log::info!("Rendered in {:?}", start.elapsed());

    Ok(image)
}

fn render_rows(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width(), camera.image_height());
    let row_len = camera.image_width() as usize;

    image
        .pixels
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, line)| {
            for (col, pixel) in line.iter_mut().enumerate() {
                let color = render_pixel(scene, camera, row as u32, col as u32, config);
                *pixel = Rgb8::from(color);
            }
        });

    image
}
