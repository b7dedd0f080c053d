//! Read-only drawing data handed to whatever renders the sandbox.

use crate::float::Float;
use crate::particle::{Color, Particle};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// What a renderer needs to draw one filled disc.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParticleView<F: Float> {
    pub position: Vec2<F>,
    pub radius: F,
    pub color: Color,
}

impl<F: Float> From<&Particle<F>> for ParticleView<F> {
    fn from(p: &Particle<F>) -> Self {
        ParticleView { position: p.pos, radius: p.radius, color: p.color }
    }
}

/// Throw preview arrow, drawn from `origin` to `origin + vector`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VelocityIndicator<F: Float> {
    pub origin: Vec2<F>,
    pub vector: Vec2<F>,
    pub color: Color,
}

impl<F: Float> VelocityIndicator<F> {
    pub fn tip(&self) -> Vec2<F> {
        self.origin + self.vector
    }
}

/// Receives drawing commands, one frame at a time.
pub trait RenderSink<F: Float> {
    fn draw_disc(&mut self, disc: &ParticleView<F>);

    /// Only called while a drag has enough samples to estimate a velocity.
    fn draw_indicator(&mut self, _indicator: &VelocityIndicator<F>) {}
}

/// Records everything it is asked to draw. Handy for tests and for
/// renderers that want to batch a whole frame.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder<F: Float> {
    pub discs: AllocVec<ParticleView<F>>,
    pub indicator: Option<VelocityIndicator<F>>,
}

impl<F: Float> FrameRecorder<F> {
    pub fn new() -> Self {
        FrameRecorder { discs: AllocVec::new(), indicator: None }
    }

    pub fn clear(&mut self) {
        self.discs.clear();
        self.indicator = None;
    }

    /// Disc data as flat `[x, y, radius, ...]` in `f32`.
    pub fn flat_discs(&self) -> AllocVec<f32> {
        let mut out = AllocVec::with_capacity(self.discs.len() * 3);
        for d in &self.discs {
            out.push(d.position.x.to_f32());
            out.push(d.position.y.to_f32());
            out.push(d.radius.to_f32());
        }
        out
    }
}

impl<F: Float> RenderSink<F> for FrameRecorder<F> {
    fn draw_disc(&mut self, disc: &ParticleView<F>) {
        self.discs.push(*disc);
    }

    fn draw_indicator(&mut self, indicator: &VelocityIndicator<F>) {
        self.indicator = Some(*indicator);
    }
}
