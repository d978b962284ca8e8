//! Iterative path tracing integrator.

use crate::hittable::{HitRecord, Hittable};
use crate::material::Color;
use crate::renderer::RenderConfig;
use glint_math::{Interval, Ray};
use rand::RngCore;

/// Minimum accepted ray parameter for shading rays. Keeps bounce rays
/// from immediately re-hitting the surface they start on.
pub const HIT_EPSILON: f32 = 1e-6;

/// Vertical gradient returned when a ray escapes the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sky {
    pub horizon: Color,
    pub zenith: Color,
}

impl Sky {
    pub fn new(horizon: Color, zenith: Color) -> Self {
        Self { horizon, zenith }
    }

    /// Background color for an escaping ray, blended on the height of
    /// its unit direction.
    pub fn color(&self, ray: &Ray) -> Color {
        let a = 0.5 * (ray.direction.y + 1.0);
        (1.0 - a) * self.horizon + a * self.zenith
    }
}

impl Default for Sky {
    fn default() -> Self {
        Self {
            horizon: Color::ONE,
            zenith: Color::new(0.25, 0.49, 1.0),
        }
    }
}

/// Trace one ray through the world, following scattered bounces until
/// the ray escapes to the sky, is absorbed, or runs out of bounces.
///
/// Throughput accumulates multiplicatively: a path that escapes after
/// k bounces contributes the sky color filtered by every albedo it
/// picked up along the way. Absorbed and exhausted paths are black.
pub fn ray_color(
    mut ray: Ray,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut attenuation = Color::ONE;

    for _ in 0..config.max_depth {
        let mut rec = HitRecord::default();
        if !world.hit(&ray, Interval::new(HIT_EPSILON, f32::INFINITY), &mut rec) {
            return attenuation * config.sky.color(&ray);
        }

        match rec.material.scatter(&ray, &rec, rng) {
            Some(scatter) => {
                attenuation *= scatter.attenuation;
                ray = scatter.scattered;
            }
            None => return Color::ZERO,
        }
    }

    // Bounce budget exhausted before the path resolved
    Color::ZERO
}
