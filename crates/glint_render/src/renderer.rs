//! Scanline render drivers, serial and parallel.

use crate::camera::Camera;
use crate::error::{RenderError, RenderResult};
use crate::hittable::Hittable;
use crate::integrator::{ray_color, Sky};
use crate::material::Color;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Stride between per-row seeds (the golden ratio in 64-bit fixed
/// point), so the sample streams of nearby rows and nearby base seeds
/// never coincide.
const ROW_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Independent sample stream for one scanline. Both drivers draw row
/// randomness from here, which is what makes their outputs identical.
fn row_rng(seed: u64, y: u32) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add((y as u64 + 1).wrapping_mul(ROW_SEED_STRIDE)))
}

/// Settings shared by both render drivers.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Jittered camera rays averaged per pixel
    pub samples_per_pixel: u32,
    /// Bounce budget per path before it is cut off as black
    pub max_depth: u32,
    /// Background gradient for escaping rays
    pub sky: Sky,
    /// Base seed for the per-row sample streams
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            sky: Sky::default(),
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Reject sample and depth counts the drivers cannot work with.
    pub fn validate(&self) -> RenderResult<()> {
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSampleCount);
        }
        if self.max_depth == 0 {
            return Err(RenderError::InvalidMaxDepth);
        }
        Ok(())
    }
}

/// Image buffer for storing render output, row-major with the top row
/// first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut accum = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        accum += ray_color(ray, world, config, rng);
    }
    accum / config.samples_per_pixel as f32
}

/// Render the world one scanline at a time on the calling thread.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    config.validate()?;
    log::debug!(
        "rendering {}x{} at {} spp, depth {}",
        camera.width(),
        camera.height(),
        config.samples_per_pixel,
        config.max_depth
    );

    let mut image = ImageBuffer::new(camera.width(), camera.height());
    for y in 0..camera.height() {
        let mut rng = row_rng(config.seed, y);
        for x in 0..camera.width() {
            let color = render_pixel(camera, world, x, y, config, &mut rng);
            image.set(x, y, color);
        }
    }

    Ok(image)
}

/// Render with scanlines distributed across the rayon thread pool.
///
/// Each row draws from its own seeded stream, so the output is
/// identical to [`render`] for the same config, whatever the thread
/// count or scheduling order.
pub fn render_parallel(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    config.validate()?;
    log::debug!(
        "rendering {}x{} at {} spp, depth {} across the thread pool",
        camera.width(),
        camera.height(),
        config.samples_per_pixel,
        config.max_depth
    );

    let mut image = ImageBuffer::new(camera.width(), camera.height());
    let width = camera.width() as usize;
    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            let mut rng = row_rng(config.seed, y);
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, world, x as u32, y, config, &mut rng);
            }
        });

    Ok(image)
}
