//! Surface material coefficients.

use crate::{Color, SceneError, SceneResult};
use prism_math::Interval;

/// Phong-style material shared by every shape.
///
/// Coefficients are fractions in [0, 1]:
/// - `diffuse`: Lambertian response to direct light
/// - `reflect`: share of the mirror reflection mixed into the surface color
/// - `specular`: strength of the Phong highlight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    color: Color,
    diffuse: f64,
    reflect: f64,
    specular: f64,
}

impl Material {
    /// Create a new material, rejecting coefficients outside [0, 1].
    pub fn new(color: Color, diffuse: f64, reflect: f64, specular: f64) -> SceneResult<Self> {
        Ok(Self {
            color,
            diffuse: unit_coefficient("diffuse", diffuse)?,
            reflect: unit_coefficient("reflect", reflect)?,
            specular: unit_coefficient("specular", specular)?,
        })
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn diffuse(&self) -> f64 {
        self.diffuse
    }

    #[inline]
    pub fn reflect(&self) -> f64 {
        self.reflect
    }

    #[inline]
    pub fn specular(&self) -> f64 {
        self.specular
    }
}

fn unit_coefficient(name: &'static str, value: f64) -> SceneResult<f64> {
    if Interval::UNIT.contains(value) {
        Ok(value)
    } else {
        Err(SceneError::CoefficientOutOfRange { name, value })
    }
}
