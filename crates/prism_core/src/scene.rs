//! Scene description.
//!
//! A scene is built once, then shared read-only by every render thread.
//! Nothing in it changes while rays are being traced.

use crate::color::rgb8;
use crate::{Material, Object, Plane, PointLight, SceneResult, Sphere};
use prism_math::Vec3;

/// Camera position, lights and objects for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    camera: Vec3,
    lights: Vec<PointLight>,
    objects: Vec<Object>,
}

impl Scene {
    /// Create an empty scene viewed from `camera`.
    pub fn new(camera: Vec3) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Add a light.
    pub fn with_light(mut self, light: PointLight) -> Self {
        self.lights.push(light);
        self
    }

    /// Add an object.
    pub fn with_object(mut self, object: impl Into<Object>) -> Self {
        self.objects.push(object.into());
        self
    }

    #[inline]
    pub fn camera(&self) -> Vec3 {
        self.camera
    }

    #[inline]
    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    #[inline]
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// The built-in scene: a magenta ground plane, six colored spheres and
    /// two white lights.
    pub fn showcase() -> SceneResult<Self> {
        // (color, center, radius, reflect)
        let spheres = [
            (rgb8(255, 0, 0), Vec3::new(-0.3, 0.2, -0.6), 0.2, 0.5),
            (rgb8(255, 154, 0), Vec3::new(0.15, -0.2, -0.6), 0.15, 0.5),
            (rgb8(255, 255, 0), Vec3::new(0.1, 0.175, -0.15), 0.05, 0.5),
            (rgb8(0, 255, 0), Vec3::new(0.0, 0.13, -0.3), 0.025, 0.5),
            (rgb8(0, 0, 255), Vec3::new(0.3, -0.2, -0.2), 0.125, 0.5),
            (rgb8(75, 0, 130), Vec3::new(-0.2, 0.0, -0.4), 0.06, 0.0),
        ];

        let ground = Plane::new(
            Vec3::new(0.0, -0.2, 0.0),
            Vec3::Y,
            Material::new(rgb8(255, 0, 255), 0.7, 0.5, 0.3)?,
        )?;

        let mut scene = Scene::new(Vec3::new(0.0, 0.0, 0.5))
            .with_light(PointLight::white(Vec3::new(0.0, 10.0, 0.0)))
            .with_light(PointLight::white(Vec3::new(-5.0, 7.0, 3.0)))
            .with_object(ground);

        for (color, center, radius, reflect) in spheres {
            let material = Material::new(color, 0.7, reflect, 0.3)?;
            scene = scene.with_object(Sphere::new(center, radius, material)?);
        }

        log::debug!(
            "Built showcase scene: {} lights, {} objects",
            scene.lights.len(),
            scene.objects.len()
        );

        Ok(scene)
    }
}
