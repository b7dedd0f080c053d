//! Step observer trait for watching the solver work.

use crate::particle::BoundsHit;

/// Trait for observing solver steps.
///
/// Implement this to count wall hits, drive sound effects, or profile a
/// frame. All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after particle `index` has been integrated.
    fn on_integrate(&mut self, _index: usize) {}

    /// Called when particle `index` was pushed back inside the bounds.
    fn on_bounds_hit(&mut self, _index: usize, _hit: BoundsHit) {}

    /// Called once every particle has been stepped.
    fn on_step_complete(&mut self, _particle_count: usize) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
