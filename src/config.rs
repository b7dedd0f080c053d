//! Configuration types for the solver, the drag controller and the sandbox.

use crate::error::SandboxError;
use crate::float::Float;
use crate::vec::Vec2;

/// Default world width, matching a 1920×1080 window mapped 1:1.
pub const DEFAULT_WIDTH: f64 = 1920.0;
/// Default world height.
pub const DEFAULT_HEIGHT: f64 = 1080.0;
/// Default downward gravity, in length/time².
pub const DEFAULT_GRAVITY: [f64; 2] = [0.0, 1000.0];
/// Fraction of wall-normal velocity kept after a bounce.
pub const DEFAULT_BOUNCE: f64 = 0.8;
pub const DEFAULT_GRAB_RADIUS: f64 = 200.0;
pub const DEFAULT_THROW_SCALE: f64 = 0.1;
pub const DEFAULT_SAMPLE_WINDOW: f64 = 0.1;
pub const DEFAULT_VELOCITY_INDICATOR_SCALE: f64 = 1.0;
/// Floor for the time span of a drag window before dividing by it.
pub const MIN_SAMPLE_DT: f64 = 1e-4;

/// Simulation-wide parameters fixed when a [`Solver`](crate::Solver) is built.
///
/// # Builder Pattern
/// ```
/// use verlet_sandbox::config::SolverConfig;
/// use verlet_sandbox::vec::Vec2;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_bounds(800.0, 600.0)
///     .with_gravity(Vec2::new(0.0, 500.0))
///     .with_bounce(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<F: Float> {
    /// Width of the simulation rectangle. Default: 1920.
    pub width: F,
    /// Height of the simulation rectangle. Default: 1080.
    pub height: F,
    /// Constant acceleration applied to every particle. Default: (0, 1000).
    pub gravity: Vec2<F>,
    /// Velocity retained on a wall bounce, in (0, 1]. Default: 0.8.
    pub bounce: F,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            width: F::from_f64(DEFAULT_WIDTH),
            height: F::from_f64(DEFAULT_HEIGHT),
            gravity: Vec2::from_f64(DEFAULT_GRAVITY[0], DEFAULT_GRAVITY[1]),
            bounce: F::from_f64(DEFAULT_BOUNCE),
        }
    }

    /// Set the simulation rectangle.
    pub fn with_bounds(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the bounce factor.
    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    /// Check the preconditions the solver assumes but never enforces.
    pub fn validate(&self) -> Result<(), SandboxError> {
        let positive = |v: F| v.is_finite() && v > F::zero();
        if !positive(self.width) || !positive(self.height) {
            return Err(SandboxError::InvalidBounds);
        }
        if !positive(self.bounce) || self.bounce > F::one() {
            return Err(SandboxError::InvalidBounce);
        }
        if !self.gravity.is_finite() {
            return Err(SandboxError::InvalidGravity);
        }
        Ok(())
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tuning for grabbing, dragging and throwing particles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionConfig<F: Float> {
    /// How far from a particle center a press still grabs it. Default: 200.
    pub grab_radius: F,
    /// Damping applied to the estimated release velocity. Default: 0.1.
    pub throw_scale: F,
    /// Length of the trailing drag-sample window. Default: 0.1.
    pub sample_window: F,
    /// Extra cosmetic scale on the preview arrow. Default: 1.0.
    pub velocity_indicator_scale: F,
    /// Smallest window span used as a divisor. Default: 1e-4.
    pub min_sample_dt: F,
}

impl<F: Float> InteractionConfig<F> {
    pub fn new() -> Self {
        InteractionConfig {
            grab_radius: F::from_f64(DEFAULT_GRAB_RADIUS),
            throw_scale: F::from_f64(DEFAULT_THROW_SCALE),
            sample_window: F::from_f64(DEFAULT_SAMPLE_WINDOW),
            velocity_indicator_scale: F::from_f64(DEFAULT_VELOCITY_INDICATOR_SCALE),
            min_sample_dt: F::from_f64(MIN_SAMPLE_DT),
        }
    }

    pub fn with_grab_radius(mut self, grab_radius: F) -> Self {
        self.grab_radius = grab_radius;
        self
    }

    pub fn with_throw_scale(mut self, throw_scale: F) -> Self {
        self.throw_scale = throw_scale;
        self
    }

    pub fn with_sample_window(mut self, sample_window: F) -> Self {
        self.sample_window = sample_window;
        self
    }

    pub fn with_velocity_indicator_scale(mut self, scale: F) -> Self {
        self.velocity_indicator_scale = scale;
        self
    }

    pub fn validate(&self) -> Result<(), SandboxError> {
        if !self.grab_radius.is_finite() || self.grab_radius <= F::zero() {
            return Err(SandboxError::InvalidGrabRadius);
        }
        if !self.throw_scale.is_finite() || self.throw_scale < F::zero() {
            return Err(SandboxError::InvalidThrowScale);
        }
        if !self.sample_window.is_finite()
            || self.sample_window <= F::zero()
            || !self.min_sample_dt.is_finite()
            || self.min_sample_dt <= F::zero()
        {
            return Err(SandboxError::InvalidSampleWindow);
        }
        Ok(())
    }
}

impl<F: Float> Default for InteractionConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a [`Sandbox`](crate::Sandbox) needs: physics, input tuning and
/// the radius given to spawned particles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SandboxConfig<F: Float> {
    pub solver: SolverConfig<F>,
    pub interaction: InteractionConfig<F>,
    /// Radius of particles created by spawn requests. Default: 10.
    pub spawn_radius: F,
}

impl<F: Float> Default for SandboxConfig<F> {
    fn default() -> Self {
        SandboxConfig {
            solver: SolverConfig::new(),
            interaction: InteractionConfig::new(),
            spawn_radius: F::from_f64(crate::particle::DEFAULT_RADIUS),
        }
    }
}

impl<F: Float> SandboxConfig<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_solver(mut self, solver: SolverConfig<F>) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_interaction(mut self, interaction: InteractionConfig<F>) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn with_spawn_radius(mut self, radius: F) -> Self {
        self.spawn_radius = radius;
        self
    }

    pub fn validate(&self) -> Result<(), SandboxError> {
        self.solver.validate()?;
        self.interaction.validate()?;
        let r = self.spawn_radius;
        let fits = r + r <= self.solver.width && r + r <= self.solver.height;
        if !r.is_finite() || r < F::zero() || !fits {
            return Err(SandboxError::InvalidRadius);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let c: SandboxConfig<f32> = SandboxConfig::new();
        assert_eq!(c.solver.width, 1920.0);
        assert_eq!(c.solver.height, 1080.0);
        assert_eq!(c.solver.gravity, Vec2::new(0.0, 1000.0));
        assert_eq!(c.solver.bounce, 0.8);
        assert_eq!(c.interaction.grab_radius, 200.0);
        assert_eq!(c.interaction.throw_scale, 0.1);
        assert_eq!(c.interaction.sample_window, 0.1);
        assert_eq!(c.interaction.velocity_indicator_scale, 1.0);
        assert_eq!(c.spawn_radius, 10.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn f64_defaults_are_exact() {
        let s: SolverConfig<f64> = SolverConfig::new();
        assert_eq!(s.bounce, 0.8);
        let i: InteractionConfig<f64> = InteractionConfig::new();
        assert_eq!(i.throw_scale, 0.1);
        assert_eq!(i.sample_window, 0.1);
        assert_eq!(i.min_sample_dt, 1e-4);
    }

    #[test]
    fn rejects_bad_bounce() {
        let zero = SolverConfig::<f32>::new().with_bounce(0.0);
        assert_eq!(zero.validate(), Err(SandboxError::InvalidBounce));
        let over = SolverConfig::<f32>::new().with_bounce(1.5);
        assert_eq!(over.validate(), Err(SandboxError::InvalidBounce));
        assert!(SolverConfig::<f32>::new().with_bounce(1.0).validate().is_ok());
    }

    #[test]
    fn rejects_bad_bounds_and_gravity() {
        let c = SolverConfig::<f64>::new().with_bounds(-1.0, 100.0);
        assert_eq!(c.validate(), Err(SandboxError::InvalidBounds));
        let c = SolverConfig::<f64>::new().with_gravity(Vec2::new(f64::NAN, 0.0));
        assert_eq!(c.validate(), Err(SandboxError::InvalidGravity));
    }

    #[test]
    fn rejects_bad_interaction_tuning() {
        let c = InteractionConfig::<f32>::new().with_grab_radius(0.0);
        assert_eq!(c.validate(), Err(SandboxError::InvalidGrabRadius));
        let c = InteractionConfig::<f32>::new().with_throw_scale(-0.1);
        assert_eq!(c.validate(), Err(SandboxError::InvalidThrowScale));
        let c = InteractionConfig::<f32>::new().with_sample_window(0.0);
        assert_eq!(c.validate(), Err(SandboxError::InvalidSampleWindow));
    }

    #[test]
    fn spawn_radius_must_fit() {
        let c = SandboxConfig::<f32>::new()
            .with_solver(SolverConfig::new().with_bounds(10.0, 10.0))
            .with_spawn_radius(6.0);
        assert_eq!(c.validate(), Err(SandboxError::InvalidRadius));
    }
}
