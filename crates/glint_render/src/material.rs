//! Material trait for surface scattering.

use crate::error::{RenderError, RenderResult};
use crate::hittable::HitRecord;
use crate::sampling::random_unit_vector;
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Color type alias (linear RGB, components accumulate in [0, inf))
pub type Color = Vec3;

/// Bounce directions with a squared length below this cannot be
/// normalized reliably; the ray is treated as absorbed instead.
const MIN_SCATTER_LEN_SQ: f32 = 1e-7;

/// Result of a successful scatter: the bounce ray and how much of each
/// color channel survives it.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
///
/// Returns `Some(ScatterResult)` if the ray scatters, or `None` if the
/// ray is absorbed and the path contributes black. `ray_in.direction`
/// must be unit length; the returned bounce direction always is.
pub trait Material: Send + Sync {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        // Scatter in a random direction on the hemisphere around the normal
        let scatter_direction = rec.normal + random_unit_vector(rng);

        // A direction this short means the sample landed opposite the
        // normal; absorb rather than normalize a degenerate vector.
        if scatter_direction.length_squared() < MIN_SCATTER_LEN_SQ {
            return None;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction.normalize()),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material, rejecting non-finite fuzz.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough;
    ///   clamped to [0, 1]
    pub fn new(albedo: Color, fuzz: f32) -> RenderResult<Self> {
        if !fuzz.is_finite() {
            return Err(RenderError::InvalidFuzz(fuzz));
        }
        Ok(Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        })
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction(), rec.normal);
        let scatter_direction = reflected + self.fuzz * random_unit_vector(rng);

        // Only scatter if the fuzzed reflection stays outside the surface
        if scatter_direction.dot(rec.normal) <= 0.0 {
            return None;
        }
        if scatter_direction.length_squared() < MIN_SCATTER_LEN_SQ {
            return None;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction.normalize()),
        })
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hit_at(p: Vec3, normal: Vec3) -> HitRecord<'static> {
        HitRecord {
            p,
            normal,
            t: 1.0,
            ..HitRecord::default()
        }
    }

    #[test]
    fn test_lambertian_attenuates_by_albedo() {
        let albedo = Color::new(0.4, 0.2, 0.1);
        let material = Lambertian::new(albedo);
        let rec = hit_at(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.0, 1.0, -1.0), Vec3::new(0.0, -1.0, 1.0).normalize());
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let scatter = material
                .scatter(&ray, &rec, &mut rng)
                .expect("diffuse scatter should succeed away from the degenerate case");
            assert_eq!(scatter.attenuation, albedo);
            assert_eq!(scatter.scattered.origin, rec.p);
            // normal + unit vector can graze the surface but never enter it
            assert!(scatter.scattered.direction.dot(rec.normal) > 0.0);
            assert!((scatter.scattered.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_metal_mirror_reflection() {
        let material = Metal::new(Color::new(0.5, 0.5, 0.5), 0.0).unwrap();
        // Ray traveling +Z into a surface whose outward normal faces -Z.
        let rec = hit_at(Vec3::new(0.0, 0.0, 4.0), Vec3::new(0.0, 0.0, -1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let mut rng = StdRng::seed_from_u64(1);

        let scatter = material.scatter(&ray, &rec, &mut rng).expect("mirror reflects");
        assert_eq!(scatter.scattered.direction, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(scatter.attenuation, Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_metal_absorbs_when_facing_out() {
        let material = Metal::new(Color::ONE, 0.0).unwrap();
        // Normal points along the ray: the reflection dives into the
        // surface and the ray is absorbed.
        let rec = hit_at(Vec3::new(0.0, 0.0, 6.0), Vec3::new(0.0, 0.0, 1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let mut rng = StdRng::seed_from_u64(1);

        assert!(material.scatter(&ray, &rec, &mut rng).is_none());
    }

    #[test]
    fn test_non_finite_fuzz_is_rejected() {
        assert!(matches!(
            Metal::new(Color::ONE, f32::NAN),
            Err(RenderError::InvalidFuzz(_))
        ));
        assert!(matches!(
            Metal::new(Color::ONE, f32::INFINITY),
            Err(RenderError::InvalidFuzz(_))
        ));
        assert!(matches!(
            Metal::new(Color::ONE, f32::NEG_INFINITY),
            Err(RenderError::InvalidFuzz(_))
        ));
    }

    #[test]
    fn test_metal_fuzz_is_clamped() {
        let material = Metal::new(Color::ONE, 5.0).unwrap();
        let rec = hit_at(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.0, 1.0, -1.0), Vec3::new(0.0, -1.0, 1.0).normalize());
        let mut rng = StdRng::seed_from_u64(9);

        // With fuzz capped at 1 the perturbed reflection keeps unit length
        // after normalization and, when it scatters, leaves the surface.
        for _ in 0..100 {
            if let Some(scatter) = material.scatter(&ray, &rec, &mut rng) {
                assert!(scatter.scattered.direction.dot(rec.normal) > 0.0);
                assert!((scatter.scattered.direction.length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_attenuation_never_amplifies() {
        // Hadamard products of <=1 channels can only shrink a path's
        // throughput, whatever sequence of materials it visits.
        let mut rng = StdRng::seed_from_u64(1234);
        let rec = hit_at(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.0, 1.0, -1.0), Vec3::new(0.0, -1.0, 1.0).normalize());

        let mut throughput = Color::ONE;
        for i in 0..200 {
            let albedo = Color::new(
                crate::sampling::gen_f32(&mut rng),
                crate::sampling::gen_f32(&mut rng),
                crate::sampling::gen_f32(&mut rng),
            );
            let fuzz = crate::sampling::gen_f32(&mut rng);
            let result = if i % 2 == 0 {
                Lambertian::new(albedo).scatter(&ray, &rec, &mut rng)
            } else {
                Metal::new(albedo, fuzz).unwrap().scatter(&ray, &rec, &mut rng)
            };

            if let Some(scatter) = result {
                assert!(scatter.attenuation.max_element() <= 1.0);
                let next = throughput * scatter.attenuation;
                assert!(next.x <= throughput.x);
                assert!(next.y <= throughput.y);
                assert!(next.z <= throughput.z);
                throughput = next;
            }
        }
    }
}
