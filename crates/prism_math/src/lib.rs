//! Vector algebra for the prism ray tracer.
//!
//! All geometry is double precision. `Vec3` is glam's `DVec3`; the
//! [`VectorExt`] trait adds the handful of operations the tracer needs on
//! top of glam's operators.

pub use glam::DVec3 as Vec3;

mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::VectorExt;
