//! Nearest-hit search over the scene's objects.

use prism_core::{Object, Renderable};
use prism_math::Ray;

/// The closest object along a ray and the distance to it.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub object: &'a Object,
    pub t: f64,
}

impl Hit<'_> {
    /// Whether this hit landed on `object` itself (identity, not equality).
    pub fn is(&self, object: &Object) -> bool {
        std::ptr::eq(self.object, object)
    }
}

/// Find the nearest forward intersection along `ray`.
///
/// Linear scan over every object; scenes stay small enough that no
/// acceleration structure is needed. Returns `None` for an empty list or a
/// complete miss.
pub fn trace<'a>(ray: &Ray, objects: &'a [Object]) -> Option<Hit<'a>> {
    let mut nearest = None;
    let mut closest_so_far = f64::INFINITY;

    for object in objects {
        if let Some(t) = object.intersect(ray) {
            if t < closest_so_far {
                closest_so_far = t;
                nearest = Some(Hit { object, t });
            }
        }
    }

    nearest
}
