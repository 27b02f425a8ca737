use crate::Vec3;

/// Operations the tracer uses beyond glam's built-in vector arithmetic.
pub trait VectorExt {
    /// Unit vector in the same direction.
    ///
    /// The vector must have non-zero length. Normalizing a degenerate vector
    /// is a caller error and is caught in debug builds.
    fn unit(self) -> Self;

    /// Mirror this vector about a unit surface normal: `v - 2(n·v)n`.
    fn reflect_about(self, normal: Self) -> Self;
}

impl VectorExt for Vec3 {
    #[inline]
    fn unit(self) -> Self {
        let length = self.length();
        debug_assert!(length > 0.0, "cannot normalize a zero-length vector");
        self * length.recip()
    }

    #[inline]
    fn reflect_about(self, normal: Self) -> Self {
        self - normal * (2.0 * normal.dot(self))
    }
}
