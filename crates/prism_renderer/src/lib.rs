//! Prism Renderer - recursive Whitted-style ray tracing on the CPU.
//!
//! Every pixel becomes one camera ray. Hits are shaded with ambient,
//! Lambertian diffuse, Phong specular, shadow rays and a mirror bounce
//! capped at a configurable depth. Image rows render in parallel with rayon.

mod camera;
mod error;
mod ppm;
mod renderer;
mod shading;
mod trace;

pub use camera::{Camera, VIEWSCREEN_HEIGHT};
pub use error::{RenderError, RenderResult};
pub use ppm::{ppm_header, write_ppm};
pub use renderer::{
    render, render_pixel, ImageBuffer, RenderConfig, MAX_REFLECT_DEPTH, SPECULAR_EXPONENT,
};
pub use shading::{direct_light, light_contribution, shade};
pub use trace::{trace, Hit};

/// Re-export the scene model used by the renderer
pub use prism_core::{Color, Object, PointLight, Renderable, Rgb8, Scene};
pub use prism_math::{Ray, Vec3};
