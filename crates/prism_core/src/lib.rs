//! Prism Core - scene model for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Colors**: linear `Color` values and saturating `Rgb8` pixels
//! - **Lights**: `PointLight`
//! - **Objects**: the `Renderable` trait and its two shapes, `Plane` and `Sphere`
//! - **Scene**: camera position, lights and objects, read-only once built
//!
//! # Example
//!
//! ```ignore
//! use prism_core::Scene;
//!
//! let scene = Scene::showcase()?;
//! println!("{} lights, {} objects", scene.lights().len(), scene.objects().len());
//! ```

pub mod color;
pub mod error;
pub mod light;
pub mod material;
pub mod object;
pub mod scene;

// Re-export commonly used types
pub use color::{Color, Rgb8};
pub use error::{SceneError, SceneResult};
pub use light::PointLight;
pub use material::Material;
pub use object::{Object, Plane, Renderable, Sphere, SURFACE_BIAS};
pub use scene::Scene;

pub use prism_math::{Ray, Vec3};
