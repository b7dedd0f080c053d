//! Owns every particle and steps them under gravity inside the bounds.

use crate::config::SolverConfig;
use crate::error::SandboxError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::render::ParticleView;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Particle arena plus the simulation-wide parameters.
///
/// Particles are only ever appended, so an index returned by
/// [`add_particle`](Self::add_particle) stays valid for the solver's lifetime.
/// Particles never read each other's state.
pub struct Solver<F: Float> {
    particles: AllocVec<Particle<F>>,
    width: F,
    height: F,
    gravity: Vec2<F>,
    bounce: F,
}

impl<F: Float> Solver<F> {
    /// Build an empty solver. The config is assumed valid; see
    /// [`SolverConfig::validate`].
    pub fn new(config: &SolverConfig<F>) -> Self {
        Solver {
            particles: AllocVec::new(),
            width: config.width,
            height: config.height,
            gravity: config.gravity,
            bounce: config.bounce,
        }
    }

    /// Add a resting particle at `pos` and return its index.
    pub fn add_particle(&mut self, pos: Vec2<F>) -> usize {
        self.add(Particle::new(pos))
    }

    /// Add a prepared particle and return its index.
    pub fn add(&mut self, particle: Particle<F>) -> usize {
        let idx = self.particles.len();
        log::debug!("adding particle {} at ({:?}, {:?})", idx, particle.pos.x, particle.pos.y);
        self.particles.push(particle);
        idx
    }

    /// Gravity, Verlet step and wall bounce for every particle, in spawn order.
    pub fn update(&mut self, dt: F) {
        self.update_observed(dt, &mut NoOpStepObserver);
    }

    pub fn update_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        log::trace!("stepping {} particles, dt = {:?}", self.particles.len(), dt);
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.apply_force(self.gravity);
            p.integrate(dt);
            observer.on_integrate(i);

            let hit = p.constrain_to_bounds(self.width, self.height, self.bounce);
            if hit.any() {
                observer.on_bounds_hit(i, hit);
            }
        }
        observer.on_step_complete(self.particles.len());
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn particles_mut(&mut self) -> &mut [Particle<F>] { &mut self.particles }
    pub fn particle(&self, index: usize) -> Option<&Particle<F>> { self.particles.get(index) }
    pub fn particle_mut(&mut self, index: usize) -> Option<&mut Particle<F>> {
        self.particles.get_mut(index)
    }

    /// Like [`particle`](Self::particle) but reports the count on failure.
    pub fn try_particle(&self, index: usize) -> Result<&Particle<F>, SandboxError> {
        self.particles.get(index).ok_or(SandboxError::ParticleOutOfBounds {
            index,
            count: self.particles.len(),
        })
    }

    pub fn try_particle_mut(&mut self, index: usize) -> Result<&mut Particle<F>, SandboxError> {
        let count = self.particles.len();
        self.particles
            .get_mut(index)
            .ok_or(SandboxError::ParticleOutOfBounds { index, count })
    }

    /// Drawing data for each particle, in spawn order.
    pub fn views(&self) -> impl Iterator<Item = ParticleView<F>> + '_ {
        self.particles.iter().map(ParticleView::from)
    }

    pub fn len(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }
    pub fn width(&self) -> F { self.width }
    pub fn height(&self) -> F { self.height }
    pub fn gravity(&self) -> Vec2<F> { self.gravity }
    pub fn bounce(&self) -> F { self.bounce }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_spawn_order() {
        let mut solver: Solver<f32> = Solver::new(&SolverConfig::new());
        assert!(solver.is_empty());
        assert_eq!(solver.add_particle(Vec2::new(100.0, 100.0)), 0);
        assert_eq!(solver.add_particle(Vec2::new(200.0, 100.0)), 1);
        assert_eq!(solver.len(), 2);
        assert_eq!(solver.particle(1).map(|p| p.pos.x), Some(200.0));
    }

    #[test]
    fn try_particle_reports_count() {
        let mut solver: Solver<f64> = Solver::new(&SolverConfig::new());
        solver.add_particle(Vec2::new(50.0, 50.0));
        assert!(solver.try_particle(0).is_ok());
        assert_eq!(
            solver.try_particle(3).err(),
            Some(SandboxError::ParticleOutOfBounds { index: 3, count: 1 })
        );
        assert!(solver.try_particle_mut(1).is_err());
    }

    #[test]
    fn zero_dt_leaves_resting_particles_in_place() {
        let mut solver: Solver<f64> = Solver::new(&SolverConfig::new());
        solver.add_particle(Vec2::new(300.0, 300.0));
        solver.update(0.0);
        let p = &solver.particles()[0];
        assert_eq!(p.pos, Vec2::new(300.0, 300.0));
        assert_eq!(p.acceleration, Vec2::zero());
    }
}
