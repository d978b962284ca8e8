//! Hittable trait for ray-intersectable geometry.

use crate::material::{Material, ScatterResult};
use glint_math::{Interval, Ray, Vec3};
use rand::RngCore;

/// Absorbing placeholder so a `HitRecord` can exist before any object
/// has filled it in. Never reaches shading: a record that tests true
/// out of `hit` carries the material of the object that was struck.
#[derive(Debug)]
struct DummyMaterial;

impl Material for DummyMaterial {
    fn scatter(
        &self,
        _ray_in: &Ray,
        _rec: &HitRecord<'_>,
        _rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        None
    }
}

static DUMMY_MATERIAL: DummyMaterial = DummyMaterial;

/// Record of a ray-object intersection.
#[derive(Clone)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Geometric outward normal at `p`, unit length
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: &'a dyn Material,
    /// Ray parameter at the intersection
    pub t: f32,
}

impl<'a> Default for HitRecord<'a> {
    fn default() -> Self {
        Self {
            p: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: &DUMMY_MATERIAL,
            t: 0.0,
        }
    }
}

/// Trait for objects that can be intersected by rays.
///
/// On a hit with parameter inside `ray_t`, fill `rec` and return true.
/// On a miss, leave `rec` untouched and return false.
pub trait Hittable: Send + Sync {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool;
}

/// Flat list of objects searched by brute force.
pub struct World {
    objects: Vec<Box<dyn Hittable>>,
}

impl World {
    /// Create a new empty world.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the world.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the world is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Clear all objects from the world.
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for World {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        // Shrinking the upper bound as hits land keeps the nearest one.
        // The bound is exclusive, so an exact tie leaves the earlier
        // object's record in place.
        for object in &self.objects {
            if object.hit(ray, Interval::new(ray_t.min, closest_so_far), rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}
