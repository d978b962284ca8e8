//! Sphere primitive.

use crate::error::{RenderError, RenderResult};
use crate::hittable::{HitRecord, Hittable};
use crate::material::Material;
use glint_math::{Interval, Ray, Vec3};

/// A sphere with a center, radius, and material.
pub struct Sphere<M: Material> {
    center: Vec3,
    radius: f32,
    material: M,
}

impl<M: Material> Sphere<M> {
    /// Create a sphere, rejecting degenerate radii.
    pub fn new(center: Vec3, radius: f32, material: M) -> RenderResult<Self> {
        if radius <= 0.0 || radius.is_nan() {
            return Err(RenderError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }
}

impl<M: Material + 'static> Hittable for Sphere<M> {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let oc = self.center - ray.origin();
        // The direction is unit length, so the quadratic's leading
        // coefficient is 1 and drops out of the solution.
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - c;
        if discriminant < 0.0 {
            return false;
        }
        let sqrtd = discriminant.sqrt();

        // Prefer the nearest root in range, fall back to the far one
        let mut root = h - sqrtd;
        if !ray_t.surrounds(root) {
            root = h + sqrtd;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = ray.at(root);
        rec.normal = (rec.p - self.center) / self.radius;
        rec.material = &self.material;

        true
    }
}
