//! Procedural sphere field: a ground sphere, three hero spheres, and a
//! seeded scatter of small ones.

use glint_math::Vec3;
use glint_render::{Color, Lambertian, Metal, RenderResult, Sphere, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Ground level; hero spheres of unit radius rest on it.
const ALTITUDE: f32 = -2.0;
/// Radius of the scattered small spheres.
const SMALL_RADIUS: f32 = 0.2;
/// Keep-out distance around the metal hero spheres.
const CLEARANCE: f32 = 1.3;

/// Build the demo scene. The same seed always produces the same world.
pub fn build_scene(seed: u64) -> RenderResult<World> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = World::new();

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0 + ALTITUDE, 5.0),
        1000.0,
        Lambertian::new(Color::new(0.5, 0.5, 0.5)),
    )?));

    let fuzzy_metal_center = Vec3::new(-2.0, ALTITUDE + 1.0, 5.0);
    world.add(Box::new(Sphere::new(
        fuzzy_metal_center,
        1.0,
        Metal::new(Color::new(0.7, 0.7, 0.7), 0.3)?,
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, ALTITUDE + 1.0, 5.0),
        1.0,
        Lambertian::new(Color::new(0.4, 0.2, 0.1)),
    )?));
    let mirror_center = Vec3::new(2.0, ALTITUDE + 1.0, 5.0);
    world.add(Box::new(Sphere::new(
        mirror_center,
        1.0,
        Metal::new(Color::new(0.5, 0.5, 0.5), 0.0)?,
    )?));

    // Small spheres on a jittered grid, kept clear of the metal heroes
    // so their reflections stay unobstructed
    for a in -11..=11 {
        for b in -11..=11 {
            let center = Vec3::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                ALTITUDE + SMALL_RADIUS,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );
            if center.distance(fuzzy_metal_center) <= CLEARANCE
                || center.distance(mirror_center) <= CLEARANCE
            {
                continue;
            }

            let is_metal = rng.gen::<f32>() > 0.8;
            let albedo = Color::new(rng.gen(), rng.gen(), rng.gen());
            if is_metal {
                let fuzz = rng.gen::<f32>();
                world.add(Box::new(Sphere::new(
                    center,
                    SMALL_RADIUS,
                    Metal::new(albedo, fuzz)?,
                )?));
            } else {
                world.add(Box::new(Sphere::new(
                    center,
                    SMALL_RADIUS,
                    Lambertian::new(albedo),
                )?));
            }
        }
    }

    Ok(world)
}
