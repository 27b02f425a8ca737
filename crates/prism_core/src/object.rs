//! Renderable shapes and ray intersection.
//!
//! The shape set is closed: [`Object`] is either a [`Plane`] or a
//! [`Sphere`], and both implement [`Renderable`].

use crate::{Color, Material, SceneError, SceneResult};
use prism_math::{Interval, Ray, Vec3, VectorExt};

/// Distance subtracted from every hit so rays leaving a surface do not
/// immediately re-hit it through rounding error.
pub const SURFACE_BIAS: f64 = 1e-9;

/// Trait for objects that can be rendered.
pub trait Renderable: Send + Sync {
    /// Nearest ray parameter `t >= 0` where the ray meets the surface.
    ///
    /// Returns `None` when there is no forward hit, including every
    /// degenerate case (parallel ray, grazing miss, non-finite math).
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// Unit surface normal at a point on the surface.
    fn normal(&self, point: Vec3) -> Vec3;

    /// Reference point of the shape (plane anchor or sphere center).
    fn point(&self) -> Vec3;

    /// Surface material.
    fn material(&self) -> &Material;

    fn color(&self) -> Color {
        self.material().color()
    }

    fn diffuse(&self) -> f64 {
        self.material().diffuse()
    }

    fn reflect(&self) -> f64 {
        self.material().reflect()
    }

    fn specular(&self) -> f64 {
        self.material().specular()
    }
}

/// Apply the surface bias and keep only forward, finite hits.
#[inline]
fn forward_hit(t: f64) -> Option<f64> {
    let t = t - SURFACE_BIAS;
    (t.is_finite() && Interval::FORWARD.contains(t)).then_some(t)
}

/// An infinite plane through `point` with a fixed unit `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized and must be non-zero.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> SceneResult<Self> {
        let length = normal.length();
        if !(length.is_finite() && length > 0.0) {
            return Err(SceneError::DegenerateNormal);
        }

        Ok(Self {
            point,
            normal: normal / length,
            material,
        })
    }
}

impl Renderable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        // A parallel ray divides by zero; forward_hit drops the inf/NaN.
        let t = self.normal.dot(self.point - ray.origin()) / self.normal.dot(ray.direction());
        forward_hit(t)
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn point(&self) -> Vec3 {
        self.point
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f64, material: Material) -> SceneResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Renderable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        // |o + t*d - c|^2 = r^2 with |d| = 1, so the quadratic's a is 1
        let oc = ray.origin() - self.center;
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = (-b - sqrtd) / 2.0;
        let far = (-b + sqrtd) / 2.0;

        forward_hit(near).or_else(|| forward_hit(far))
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).unit()
    }

    fn point(&self) -> Vec3 {
        self.center
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

/// Any shape that can appear in a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Plane(Plane),
    Sphere(Sphere),
}

impl Object {
    fn shape(&self) -> &dyn Renderable {
        match self {
            Object::Plane(plane) => plane as &dyn Renderable,
            Object::Sphere(sphere) => sphere,
        }
    }
}

impl From<Plane> for Object {
    fn from(plane: Plane) -> Self {
        Object::Plane(plane)
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl Renderable for Object {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        self.shape().intersect(ray)
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        self.shape().normal(point)
    }

    fn point(&self) -> Vec3 {
        self.shape().point()
    }

    fn material(&self) -> &Material {
        self.shape().material()
    }
}
