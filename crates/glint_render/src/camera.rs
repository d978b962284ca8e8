//! Pinhole camera generating sampled primary rays.

use crate::error::{RenderError, RenderResult};
use crate::sampling::sample_square;
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Height of the viewport in world units.
const VIEWPORT_HEIGHT: f32 = 2.0;
/// Distance from the camera origin to the viewport plane.
const FOCAL_LENGTH: f32 = 1.0;

/// Camera at the origin looking down +Z, with the viewport scaled to
/// the output image's aspect ratio.
pub struct Camera {
    width: u32,
    height: u32,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Camera {
    /// Create a camera for the given output resolution.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let aspect_ratio = width as f32 / height as f32;
        let viewport_width = VIEWPORT_HEIGHT * aspect_ratio;

        // Viewport edges: u runs left to right, v top to bottom so that
        // row 0 of the image is the top of the frame.
        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -VIEWPORT_HEIGHT, 0.0);

        let pixel_delta_u = viewport_u / width as f32;
        let pixel_delta_v = viewport_v / height as f32;

        let viewport_upper_left =
            Vec3::new(0.0, 0.0, FOCAL_LENGTH) - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        Ok(Self {
            width,
            height,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Generate a ray through pixel (x, y), jittered within the pixel
    /// footprint. The returned direction is unit length.
    pub fn get_ray(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);
        let pixel_sample = self.pixel00_loc
            + (x as f32 + offset.x) * self.pixel_delta_u
            + (y as f32 + offset.y) * self.pixel_delta_v;

        Ray::new(Vec3::ZERO, pixel_sample.normalize())
    }
}
