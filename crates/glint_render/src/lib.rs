//! CPU path tracer for sphere scenes.
//!
//! Rays leave a pinhole [`Camera`], bounce through a [`World`] of
//! spheres under the [`Material`] trait, and resolve against a [`Sky`]
//! gradient. The render drivers turn that into an [`ImageBuffer`] and
//! [`write_ppm`] encodes it. Rendering is deterministic for a given
//! [`RenderConfig`] seed, in serial and in parallel.

mod error;
mod sampling;
mod hittable;
mod material;
mod sphere;
mod camera;
mod integrator;
mod renderer;
mod ppm;

pub use error::{RenderError, RenderResult};
pub use sampling::{gen_f32, random_unit_vector, sample_square};
pub use hittable::{HitRecord, Hittable, World};
pub use material::{Material, Color, Lambertian, Metal, ScatterResult};
pub use sphere::Sphere;
pub use camera::Camera;
pub use integrator::{Sky, ray_color, HIT_EPSILON};
pub use renderer::{RenderConfig, ImageBuffer, render, render_parallel, render_pixel};
pub use ppm::{color_to_rgb, write_ppm};

/// Re-export common math types from glint_math
pub use glint_math::{Vec3, Ray, Interval};
