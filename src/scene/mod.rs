//! The drifting-circle background. A rectangular grid of clusters, each
//! owning a ring of circles that orbit their anchor and pulse in size.
//! The whole grid is rebuilt from scratch on every viewport resize; no
//! motion state survives a rebuild.

use crate::graphics::{blend::hsl_to_argb, Argb, Pixel, PixelBuffer};
use crate::math::{cos_sin, rng::SinRng, Vec2, TAU};

pub const GRID_SPACING: f32 = 120.0;
pub const CIRCLES_PER_CLUSTER: usize = 12;

/// Radians per tick. Deliberately slow so the backdrop stays calm.
pub const PHASE_STEP: f32 = 0.004;

pub const ORBIT_RADIUS: f32 = 36.0;
pub const BOUNCE_RADIUS: f32 = 12.0;
pub const BASE_SIZE: f32 = 10.0;
pub const PULSE_AMPLITUDE: f32 = 8.0;

const ANCHOR_JITTER: f32 = 8.0;

const HUE: f32 = 208.0;
const SATURATION: f32 = 62.0;
const MIN_LIGHTNESS: f32 = 20.0;
const MAX_LIGHTNESS: f32 = 80.0;

pub const BACKGROUND: Argb = 0xFF_0A_14_1E;

pub struct Circle {
    anchor: Vec2<f32>,
    pos: Vec2<f32>,
    size: f32,
    phase: f32,
    orbit: f32,
    bounce: f32,
    offset: f32,
    speed: f32,
}

impl Circle {
    fn new(anchor: Vec2<f32>, offset: f32) -> Self {
        Self {
            anchor,
            pos: anchor,
            size: BASE_SIZE,
            phase: 0.0,
            orbit: ORBIT_RADIUS,
            bounce: BOUNCE_RADIUS,
            offset,
            speed: PHASE_STEP,
        }
    }

    fn step(&mut self) {
        self.phase += self.speed;

        let swell = self.orbit + self.bounce * (self.phase + self.offset).sin();
        self.pos = self.anchor + cos_sin(self.offset).scale(swell);
        self.size = BASE_SIZE + PULSE_AMPLITUDE * self.phase.cos();
    }

    pub fn pos(&self) -> Vec2<f32> {
        self.pos
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    fn lightness(&self) -> f32 {
        (self.size * 4.0).clamp(MIN_LIGHTNESS, MAX_LIGHTNESS)
    }
}

pub struct Cluster {
    anchor: Vec2<f32>,
    circles: Vec<Circle>,
}

impl Cluster {
    fn new(anchor: Vec2<f32>, rng: &mut SinRng) -> Self {
        let slice = TAU / CIRCLES_PER_CLUSTER as f32;

        let circles = (0..CIRCLES_PER_CLUSTER)
            .map(|i| {
                let mut anchor = anchor;

                // Only the lead circle gets a one-time vertical jitter;
                // spreading it over the whole ring changes the look.
                if i == 0 {
                    anchor.y += rng.float_signed(ANCHOR_JITTER);
                }

                Circle::new(anchor, i as f32 * slice)
            })
            .collect();

        Self { anchor, circles }
    }

    pub fn anchor(&self) -> Vec2<f32> {
        self.anchor
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }
}

/// Owns every cluster plus the viewport it was laid out for.
pub struct Scene {
    clusters: Vec<Cluster>,
    width: f32,
    height: f32,
}

impl Scene {
    pub fn new(width: f32, height: f32, rng: &mut SinRng) -> Self {
        let mut scene = Self {
            clusters: Vec::new(),
            width: 0.0,
            height: 0.0,
        };
        scene.rebuild(width, height, rng);
        scene
    }

    /// Lay the grid out again for a new viewport. Discards all phase
    /// state; motion restarts from zero.
    pub fn rebuild(&mut self, width: f32, height: f32, rng: &mut SinRng) {
        self.clusters.clear();
        self.width = width;
        self.height = height;

        // One spacing past each edge so the grid never shows a seam.
        let mut y = 0.0;
        while y < height + GRID_SPACING {
            let mut x = 0.0;
            while x < width + GRID_SPACING {
                self.clusters.push(Cluster::new(Vec2::<f32>::new(x, y), rng));
                x += GRID_SPACING;
            }
            y += GRID_SPACING;
        }
    }

    /// Advance every circle by one tick.
    pub fn step(&mut self) {
        for cluster in &mut self.clusters {
            for circle in &mut cluster.circles {
                circle.step();
            }
        }
    }

    pub fn render(&self, pix: &mut PixelBuffer) {
        pix.clear();

        for cluster in &self.clusters {
            for circle in &cluster.circles {
                let color = hsl_to_argb(HUE, SATURATION, circle.lightness());
                pix.draw_circle_filled_by(circle.pos.to_p2(), circle.size as i32, color, Argb::over);
            }
        }
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
