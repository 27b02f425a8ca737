use crate::Color;
use prism_math::Vec3;

/// A point light source with a color and a world-space position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    color: Color,
    position: Vec3,
}

impl PointLight {
    pub fn new(color: Color, position: Vec3) -> Self {
        Self { color, position }
    }

    /// A full-intensity white light.
    pub fn white(position: Vec3) -> Self {
        Self::new(Color::ONE, position)
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }
}
