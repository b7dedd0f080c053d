//! Verlet disc particles: implicit velocity, gravity accumulation, bouncy walls.

use crate::float::Float;
use crate::vec::Vec2;

/// Radius given to particles spawned without an explicit size.
pub const DEFAULT_RADIUS: f64 = 10.0;

/// RGBA display color. Carried for rendering only; physics never reads it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Packed `0xRRGGBBAA`.
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Which walls a particle touched during one bounds pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundsHit {
    pub x: bool,
    pub y: bool,
}

impl BoundsHit {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// A Verlet disc — position-based dynamics with implicit velocity.
///
/// Velocity is never stored: it is `pos - prev_pos`, the displacement over the
/// last step. Anything that wants to change a particle's velocity rewrites
/// `prev_pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub radius: F,
    pub color: Color,
}

impl<F: Float> Particle<F> {
    /// A resting particle with the default radius and color.
    pub fn new(pos: Vec2<F>) -> Self {
        Self::with_radius(pos, F::from_f64(DEFAULT_RADIUS))
    }

    /// A resting particle of the given radius. `radius` must be non-negative.
    pub fn with_radius(pos: Vec2<F>, radius: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            radius,
            color: Color::default(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Accumulate an acceleration until the next [`integrate`](Self::integrate).
    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.acceleration += force;
    }

    /// Störmer–Verlet step: `pos += (pos - prev_pos) + a·dt²`.
    ///
    /// `prev_pos` takes the pre-step position and the accumulator is cleared.
    pub fn integrate(&mut self, dt: F) {
        let velocity = self.pos - self.prev_pos;
        let new_pos = self.pos + velocity + self.acceleration.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
        self.acceleration = Vec2::zero();
    }

    /// Keep the disc inside `[radius, width - radius] × [radius, height - radius]`.
    ///
    /// On each axis that is out of range the position is clamped to the wall
    /// and the implicit velocity on that axis is reversed and scaled by
    /// `bounce`. Both axes are handled every call, so a corner bounces twice.
    pub fn constrain_to_bounds(&mut self, width: F, height: F, bounce: F) -> BoundsHit {
        let velocity = self.pos - self.prev_pos;
        let r = self.radius;
        let x = bounce_axis(&mut self.pos.x, &mut self.prev_pos.x, velocity.x, r, width, bounce);
        let y = bounce_axis(&mut self.pos.y, &mut self.prev_pos.y, velocity.y, r, height, bounce);
        BoundsHit { x, y }
    }

    /// Displacement over the last step.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Replace the implicit velocity, keeping the current position.
    pub fn set_velocity_raw(&mut self, velocity: Vec2<F>) {
        self.prev_pos = self.pos - velocity;
    }

    /// Move to `pos` with zero implicit velocity.
    pub fn teleport(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    /// True when `point` is strictly closer than `reach` to the center.
    pub fn within(&self, point: Vec2<F>, reach: F) -> bool {
        self.pos.distance_sq(point) < reach * reach
    }
}

fn bounce_axis<F: Float>(
    pos: &mut F,
    prev: &mut F,
    velocity: F,
    radius: F,
    extent: F,
    bounce: F,
) -> bool {
    let wall = if *pos < radius {
        radius
    } else if *pos > extent - radius {
        extent - radius
    } else {
        return false;
    };
    *pos = wall;
    *prev = wall + velocity * bounce;
    true
}
