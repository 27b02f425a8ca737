//! Recursive Whitted shading.
//!
//! A surface point's color is the sum of:
//! - a mirror bounce, traced recursively and scaled by the surface's
//!   `reflect` coefficient
//! - for each light: an ambient term, plus Lambertian diffuse and a Phong
//!   highlight when nothing occludes the light
//!
//! Recursion stops once `depth` exceeds `RenderConfig::max_depth`.

use crate::{trace, RenderConfig};
use prism_core::{Color, Object, PointLight, Renderable, Scene};
use prism_math::{Ray, Vec3, VectorExt};

/// Local illumination of `point` by one light.
///
/// - `view`: unit direction of the ray that reached the point
/// - `light_dir`: unit direction from the light towards the point
///
/// Diffuse and specular terms never go negative; a light behind the surface
/// adds only the ambient term.
pub fn direct_light(
    object: &Object,
    point: Vec3,
    view: Vec3,
    light_dir: Vec3,
    light_color: Color,
    config: &RenderConfig,
) -> Color {
    let normal = object.normal(point);

    let lambert = (-light_dir.dot(normal)).max(0.0);
    let diffuse = light_color * object.color() * (lambert * object.diffuse());

    let reflected = light_dir.reflect_about(normal);
    let highlight = reflected.dot(-view).max(0.0).powf(config.specular_exponent);
    let specular = light_color * (highlight * object.specular());

    config.ambient + diffuse + specular
}

/// Light from `light` arriving at `point` on `object`.
///
/// A shadow ray is cast from the light towards the point. Diffuse and
/// specular count only when the first thing it hits is `object` itself; a
/// shadowed point keeps just the ambient term.
pub fn light_contribution(
    scene: &Scene,
    object: &Object,
    point: Vec3,
    view: Vec3,
    light: &PointLight,
    config: &RenderConfig,
) -> Color {
    let shadow = Ray::towards(light.position(), point);

    match trace(&shadow, scene.objects()) {
        Some(hit) if hit.is(object) => direct_light(
            object,
            point,
            view,
            shadow.direction(),
            light.color(),
            config,
        ),
        _ => config.ambient,
    }
}

/// Color of `point` on `object` seen along `view`.
///
/// `depth` counts mirror bounces so far; the camera ray's hit is depth 0.
pub fn shade(
    scene: &Scene,
    object: &Object,
    point: Vec3,
    view: Vec3,
    depth: u32,
    config: &RenderConfig,
) -> Color {
    if depth > config.max_depth {
        return config.background;
    }

    // A matte surface would scale the bounce to zero anyway
    let indirect = if object.reflect() > 0.0 {
        let mirror = Ray::new(point, view.reflect_about(object.normal(point)));
        let bounced = match trace(&mirror, scene.objects()) {
            Some(hit) => shade(
                scene,
                hit.object,
                mirror.at(hit.t),
                mirror.direction(),
                depth + 1,
                config,
            ),
            None => config.background,
        };
        bounced * object.reflect()
    } else {
        Color::ZERO
    };

    scene
        .lights()
        .iter()
        .map(|light| light_contribution(scene, object, point, view, light, config))
        .fold(indirect, |color, direct| color + direct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Material, Plane, Sphere};

    fn material(color: Color, diffuse: f64, reflect: f64, specular: f64) -> Material {
        Material::new(color, diffuse, reflect, specular).unwrap()
    }

    fn sphere(center: Vec3, radius: f64, material: Material) -> Object {
        Sphere::new(center, radius, material).unwrap().into()
    }

    fn approx_eq(a: Color, b: Color) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_direct_light_head_on() {
        let config = RenderConfig::default();
        let floor = Object::from(
            Plane::new(Vec3::ZERO, Vec3::Y, material(Color::new(1.0, 0.5, 0.0), 0.7, 0.0, 0.3))
                .unwrap(),
        );

        // Light straight above, viewer straight above
        let color = direct_light(&floor, Vec3::ZERO, Vec3::NEG_Y, Vec3::NEG_Y, Color::ONE, &config);

        // ambient + full diffuse + full highlight
        let expected = config.ambient + Color::new(0.7, 0.35, 0.0) + Color::splat(0.3);
        assert!(approx_eq(color, expected), "{color:?} != {expected:?}");
    }

    #[test]
    fn test_direct_light_behind_surface_adds_only_ambient() {
        let config = RenderConfig::default();
        let floor = Object::from(
            Plane::new(Vec3::ZERO, Vec3::Y, material(Color::ONE, 1.0, 0.0, 1.0)).unwrap(),
        );

        // Light below the floor shining up, viewer above looking down
        let color = direct_light(&floor, Vec3::ZERO, Vec3::NEG_Y, Vec3::Y, Color::ONE, &config);

        assert!(approx_eq(color, config.ambient), "{color:?}");
    }

    #[test]
    fn test_shadowed_point_gets_only_ambient() {
        let config = RenderConfig::default();
        let light = PointLight::white(Vec3::new(0.0, 10.0, 0.0));
        let matte = material(Color::ONE, 0.7, 0.0, 0.3);

        // A sits directly below B as seen from the light
        let scene = Scene::new(Vec3::new(0.0, 0.0, 5.0))
            .with_light(light)
            .with_object(Sphere::new(Vec3::ZERO, 0.2, matte).unwrap())
            .with_object(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 0.2, matte).unwrap());
        let a = &scene.objects()[0];
        let b = &scene.objects()[1];

        let top_of_a = Vec3::new(0.0, 0.2 + 1e-9, 0.0);
        let view = Vec3::NEG_Y;
        assert_eq!(
            light_contribution(&scene, a, top_of_a, view, &light, &config),
            config.ambient
        );

        // Blocker itself gets diffuse and specular on top of ambient
        let top_of_b = Vec3::new(0.0, 1.2 + 1e-9, 0.0);
        let lit_b = light_contribution(&scene, b, top_of_b, view, &light, &config);
        assert!(approx_eq(lit_b, config.ambient + Color::splat(0.7) + Color::splat(0.3)));

        // Without a reflective surface, A is ambient only and never black
        assert_eq!(shade(&scene, a, top_of_a, view, 0, &config), config.ambient);
    }

    #[test]
    fn test_unoccluded_point_is_lit() {
        let config = RenderConfig::default();
        let light = PointLight::white(Vec3::new(0.0, 10.0, 0.0));
        let scene = Scene::new(Vec3::new(0.0, 0.0, 5.0))
            .with_light(light)
            .with_object(Sphere::new(Vec3::ZERO, 0.2, material(Color::ONE, 0.7, 0.0, 0.3)).unwrap());
        let a = &scene.objects()[0];

        let top = Vec3::new(0.0, 0.2 + 1e-9, 0.0);
        let lit = light_contribution(&scene, a, top, Vec3::NEG_Y, &light, &config);
        assert!(lit.x > config.ambient.x);
    }

    #[test]
    fn test_depth_cap_returns_background() {
        let config = RenderConfig {
            max_depth: 2,
            background: Color::new(0.1, 0.2, 0.3),
            ..RenderConfig::default()
        };
        let scene = Scene::new(Vec3::ZERO)
            .with_light(PointLight::white(Vec3::new(0.0, 10.0, 0.0)))
            .with_object(sphere(Vec3::ZERO, 1.0, material(Color::ONE, 0.7, 0.5, 0.3)));
        let object = &scene.objects()[0];

        let color = shade(&scene, object, Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, 3, &config);
        assert_eq!(color, config.background);
    }

    #[test]
    fn test_facing_mirrors_terminate() {
        // Two parallel mirrors bounce forever without the depth cap
        let mirror = material(Color::ONE, 0.0, 1.0, 0.0);
        let scene = Scene::new(Vec3::ZERO)
            .with_light(PointLight::white(Vec3::new(0.0, 0.5, 0.0)))
            .with_object(Plane::new(Vec3::ZERO, Vec3::Y, mirror).unwrap())
            .with_object(Plane::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, mirror).unwrap());
        let floor = &scene.objects()[0];

        for max_depth in [0, 3, 7] {
            let config = RenderConfig {
                max_depth,
                ..RenderConfig::default()
            };
            let color = shade(&scene, floor, Vec3::new(0.0, 1e-9, 0.0), Vec3::NEG_Y, 0, &config);
            // Each level adds one ambient term from the light between the mirrors
            let expected = config.ambient * f64::from(max_depth + 1);
            assert!(approx_eq(color, expected), "depth {max_depth}: {color:?}");
        }
    }

    #[test]
    fn test_mirror_bounce_is_scaled_by_reflect() {
        let config = RenderConfig::default();
        let light = PointLight::white(Vec3::new(0.0, 5.0, 0.0));

        // The floor point below B is shadowed by B, so the floor's color is
        // ambient plus what it reflects of B's underside.
        let build = |reflect: f64| {
            Scene::new(Vec3::new(0.0, 3.0, 0.0))
                .with_light(light)
                .with_object(
                    Plane::new(Vec3::ZERO, Vec3::Y, material(Color::ONE, 0.7, reflect, 0.3))
                        .unwrap(),
                )
                .with_object(sphere(
                    Vec3::new(0.0, 1.0, 0.0),
                    0.2,
                    material(Color::new(0.0, 1.0, 0.0), 0.7, 0.0, 0.3),
                ))
        };
        let point = Vec3::new(0.0, 1e-9, 0.0);
        let view = Vec3::NEG_Y;

        let matte_scene = build(0.0);
        let matte = shade(&matte_scene, &matte_scene.objects()[0], point, view, 0, &config);
        assert_eq!(matte, config.ambient);

        let scene = build(0.5);
        let floor = &scene.objects()[0];
        let ball = &scene.objects()[1];

        let mirror = Ray::new(point, view.reflect_about(Vec3::Y));
        let hit = trace(&mirror, scene.objects()).unwrap();
        assert!(hit.is(ball));
        let seen = shade(&scene, ball, mirror.at(hit.t), mirror.direction(), 1, &config);
        assert!(seen.length() > 0.0);

        let color = shade(&scene, floor, point, view, 0, &config);
        let expected = seen * 0.5 + config.ambient;
        assert!(approx_eq(color, expected), "{color:?} != {expected:?}");
    }

    #[test]
    fn test_mirror_miss_keeps_direct_light() {
        let config = RenderConfig::default();
        let scene = Scene::new(Vec3::new(0.0, 3.0, 0.0))
            .with_light(PointLight::white(Vec3::new(0.0, 5.0, 0.0)))
            .with_object(Plane::new(Vec3::ZERO, Vec3::Y, material(Color::ONE, 0.7, 1.0, 0.3)).unwrap());
        let floor = &scene.objects()[0];

        // Mirror ray goes straight up into empty space
        let color = shade(&scene, floor, Vec3::new(0.0, 1e-9, 0.0), Vec3::NEG_Y, 0, &config);
        let expected = config.ambient + Color::splat(0.7) + Color::splat(0.3);
        assert!(approx_eq(color, expected), "{color:?}");
    }
}
