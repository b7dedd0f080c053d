//! Grab, drag and throw: turns pointer history into a release velocity.
//!
//! While a particle is held it is pinned to the pointer with zero implicit
//! velocity. Every frame the pointer position is recorded with the time since
//! the grab, and samples older than the trailing window are dropped. On
//! release the average velocity over the window, damped by the throw scale,
//! is written into the particle's `prev_pos` so the next Verlet step carries
//! it forward.

use crate::config::InteractionConfig;
use crate::float::Float;
use crate::particle::{Color, Particle};
use crate::render::VelocityIndicator;
use crate::solver::Solver;
use crate::vec::Vec2;
use alloc::collections::VecDeque;

/// One recorded pointer position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSample<F: Float> {
    pub pos: Vec2<F>,
    /// Time since the drag started.
    pub time: F,
}

/// Time-ordered pointer samples covering at most `window` time units.
#[derive(Clone, Debug)]
pub struct SampleWindow<F: Float> {
    samples: VecDeque<DragSample<F>>,
    window: F,
    elapsed: F,
}

impl<F: Float> SampleWindow<F> {
    pub fn new(window: F) -> Self {
        SampleWindow { samples: VecDeque::new(), window, elapsed: F::zero() }
    }

    /// Advance the drag clock by `dt`, record `pos`, and evict samples that
    /// fell out of the trailing window.
    pub fn push(&mut self, pos: Vec2<F>, dt: F) {
        self.elapsed = self.elapsed + dt;
        self.samples.push_back(DragSample { pos, time: self.elapsed });

        let cutoff = self.elapsed - self.window;
        while let Some(front) = self.samples.front() {
            if front.time < cutoff {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Forget all samples and restart the drag clock.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.elapsed = F::zero();
    }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn first(&self) -> Option<&DragSample<F>> { self.samples.front() }
    pub fn last(&self) -> Option<&DragSample<F>> { self.samples.back() }
    pub fn elapsed(&self) -> F { self.elapsed }
    pub fn iter(&self) -> impl Iterator<Item = &DragSample<F>> + '_ { self.samples.iter() }

    /// Time between the oldest and newest retained samples.
    pub fn span(&self) -> F {
        match (self.samples.front(), self.samples.back()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => F::zero(),
        }
    }

    /// Average pointer velocity across the window, unscaled.
    ///
    /// `None` with fewer than two samples. The span is floored to `min_dt`
    /// so coincident timestamps never divide by zero.
    pub fn average_velocity(&self, min_dt: F) -> Option<Vec2<F>> {
        if self.samples.len() < 2 {
            return None;
        }
        let first = self.samples.front()?;
        let last = self.samples.back()?;
        Some(average_velocity(first, last, min_dt))
    }
}

/// `(last.pos - first.pos) / max(last.time - first.time, min_dt)`.
pub fn average_velocity<F: Float>(
    first: &DragSample<F>,
    last: &DragSample<F>,
    min_dt: F,
) -> Vec2<F> {
    let span = (last.time - first.time).max(min_dt);
    (last.pos - first.pos).scale(F::one() / span)
}

/// Whether a particle is currently held.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(usize),
}

/// Pointer-driven drag state machine over a [`Solver`]'s particles.
///
/// Grabbing picks the **first** particle in spawn order whose center is
/// strictly closer than `grab_radius` to the pointer, not the nearest one.
pub struct InteractionController<F: Float> {
    config: InteractionConfig<F>,
    state: DragState,
    samples: SampleWindow<F>,
}

impl<F: Float> InteractionController<F> {
    pub fn new(config: &InteractionConfig<F>) -> Self {
        InteractionController {
            config: config.clone(),
            state: DragState::Idle,
            samples: SampleWindow::new(config.sample_window),
        }
    }

    pub fn state(&self) -> DragState { self.state }
    pub fn config(&self) -> &InteractionConfig<F> { &self.config }
    pub fn samples(&self) -> &SampleWindow<F> { &self.samples }

    pub fn dragged_index(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging(i) => Some(i),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged_index().is_some()
    }

    /// First particle, in spawn order, within grab range of `pos`.
    pub fn pick(&self, pos: Vec2<F>, particles: &[Particle<F>]) -> Option<usize> {
        particles.iter().position(|p| p.within(pos, self.config.grab_radius))
    }

    /// Try to grab a particle under the pointer.
    ///
    /// A press during an active drag drops the held particle without a throw
    /// before looking for a new one.
    pub fn pointer_down(&mut self, pos: Vec2<F>, solver: &Solver<F>) -> DragState {
        if let DragState::Dragging(i) = self.state {
            log::debug!("press while dragging {}, dropping it", i);
            self.reset();
        }
        if let Some(i) = self.pick(pos, solver.particles()) {
            log::debug!("grabbed particle {} at ({:?}, {:?})", i, pos.x, pos.y);
            self.samples.clear();
            self.state = DragState::Dragging(i);
        }
        self.state
    }

    /// Per-frame drag update: record the pointer and pin the held particle to it.
    ///
    /// Does nothing while idle. Run this before [`Solver::update`].
    pub fn drag_frame(&mut self, pointer: Vec2<F>, dt: F, solver: &mut Solver<F>) {
        let DragState::Dragging(i) = self.state else {
            return;
        };
        let Some(p) = solver.particle_mut(i) else {
            log::warn!("dragged particle {} no longer exists, cancelling drag", i);
            self.reset();
            return;
        };
        self.samples.push(pointer, dt);
        p.teleport(pointer);
        log::trace!(
            "drag {} -> ({:?}, {:?}), {} samples",
            i, pointer.x, pointer.y, self.samples.len()
        );
    }

    /// End the drag and throw the particle with the windowed velocity.
    ///
    /// Returns the velocity imparted per step, or `None` when idle or when the
    /// window held fewer than two samples (the particle is let go as is).
    pub fn pointer_up(&mut self, pos: Vec2<F>, solver: &mut Solver<F>) -> Option<Vec2<F>> {
        let DragState::Dragging(i) = self.state else {
            return None;
        };
        let throw = self.release_velocity().zip(self.samples.last().map(|s| s.pos));
        self.reset();

        let (velocity, last_pos) = throw?;
        match solver.particle_mut(i) {
            Some(p) => {
                p.pos = last_pos;
                p.prev_pos = last_pos - velocity;
                log::debug!(
                    "released particle {} at ({:?}, {:?}) with velocity ({:?}, {:?})",
                    i, pos.x, pos.y, velocity.x, velocity.y
                );
                Some(velocity)
            }
            None => {
                log::warn!("released particle {} no longer exists", i);
                None
            }
        }
    }

    /// Add a particle of `radius` at `pos`. Independent of drag state.
    pub fn spawn(&self, pos: Vec2<F>, radius: F, solver: &mut Solver<F>) -> usize {
        let idx = solver.add(Particle::with_radius(pos, radius));
        log::debug!("spawned particle {} at ({:?}, {:?})", idx, pos.x, pos.y);
        idx
    }

    /// Velocity a release right now would impart: windowed average × throw scale.
    pub fn release_velocity(&self) -> Option<Vec2<F>> {
        self.samples
            .average_velocity(self.config.min_sample_dt)
            .map(|v| v.scale(self.config.throw_scale))
    }

    /// Arrow from the newest sample along the pending throw velocity.
    pub fn velocity_preview(&self) -> Option<VelocityIndicator<F>> {
        if !self.is_dragging() {
            return None;
        }
        let origin = self.samples.last()?.pos;
        let velocity = self.release_velocity()?;
        Some(VelocityIndicator {
            origin,
            vector: velocity.scale(self.config.velocity_indicator_scale),
            color: Color::RED,
        })
    }

    fn reset(&mut self) {
        self.state = DragState::Idle;
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, y: f64, time: f64) -> DragSample<f64> {
        DragSample { pos: Vec2::new(x, y), time }
    }

    #[test]
    fn average_velocity_divides_by_span() {
        let v = average_velocity(&sample(0.0, 0.0, 0.0), &sample(100.0, 50.0, 0.5), 1e-4);
        assert_eq!(v, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn average_velocity_floors_zero_span() {
        let v = average_velocity(&sample(0.0, 0.0, 0.2), &sample(1.0, 0.0, 0.2), 1e-4);
        assert!(v.is_finite());
        assert!((v.x - 1e4).abs() < 1e-6);
    }

    #[test]
    fn single_sample_has_no_velocity() {
        let mut w: SampleWindow<f64> = SampleWindow::new(0.1);
        w.push(Vec2::new(1.0, 1.0), 0.016);
        assert_eq!(w.average_velocity(1e-4), None);
        assert_eq!(w.span(), 0.0);
    }

    #[test]
    fn clear_restarts_clock() {
        let mut w: SampleWindow<f64> = SampleWindow::new(0.1);
        w.push(Vec2::zero(), 0.05);
        w.push(Vec2::zero(), 0.05);
        w.clear();
        assert!(w.is_empty());
        assert_eq!(w.elapsed(), 0.0);
    }

    #[test]
    fn preview_requires_drag() {
        let c: InteractionController<f32> = InteractionController::new(&InteractionConfig::new());
        assert_eq!(c.velocity_preview(), None);
        assert_eq!(c.state(), DragState::Idle);
    }
}
