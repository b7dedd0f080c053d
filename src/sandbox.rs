//! Frame loop glue: input events, drag update, physics step, draw.

use crate::config::SandboxConfig;
use crate::error::SandboxError;
use crate::float::Float;
use crate::input::{InputEvent, PointerTracker};
use crate::interaction::InteractionController;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::render::RenderSink;
use crate::solver::Solver;
use crate::vec::Vec2;

/// Where the default scene places its starting particles.
pub const DEFAULT_SCENE: [[f64; 2]; 3] = [[200.0, 200.0], [250.0, 250.0], [300.0, 200.0]];

/// A solver and a drag controller driven one frame at a time.
pub struct Sandbox<F: Float> {
    solver: Solver<F>,
    controller: InteractionController<F>,
    pointer: PointerTracker<F>,
    spawn_radius: F,
}

impl<F: Float> Sandbox<F> {
    /// Build an empty sandbox after validating `config`.
    pub fn new(config: SandboxConfig<F>) -> Result<Self, SandboxError> {
        config.validate()?;
        Ok(Sandbox {
            solver: Solver::new(&config.solver),
            controller: InteractionController::new(&config.interaction),
            pointer: PointerTracker::default(),
            spawn_radius: config.spawn_radius,
        })
    }

    /// Like [`new`](Self::new), seeded with three resting particles.
    pub fn with_default_scene(config: SandboxConfig<F>) -> Result<Self, SandboxError> {
        let mut sandbox = Self::new(config)?;
        for [x, y] in DEFAULT_SCENE {
            sandbox.solver.add_particle(Vec2::from_f64(x, y));
        }
        Ok(sandbox)
    }

    /// Apply one discrete input event.
    pub fn handle_event(&mut self, event: InputEvent<F>) {
        self.pointer.observe(&event);
        match event {
            InputEvent::PointerDown(pos) => {
                self.controller.pointer_down(pos, &self.solver);
            }
            InputEvent::PointerUp(pos) => {
                self.controller.pointer_up(pos, &mut self.solver);
            }
            InputEvent::SpawnRequested(pos) => {
                self.controller.spawn(pos, self.spawn_radius, &mut self.solver);
            }
            InputEvent::PointerMoved(_) => {}
        }
    }

    /// Run one frame: events in order, then the drag update at the latest
    /// pointer position, then the physics step.
    pub fn frame<I>(&mut self, dt: F, events: I)
    where
        I: IntoIterator<Item = InputEvent<F>>,
    {
        self.frame_observed(dt, events, &mut NoOpStepObserver);
    }

    /// A frame with no new input events.
    pub fn step(&mut self, dt: F) {
        self.frame(dt, core::iter::empty::<InputEvent<F>>());
    }

    pub fn frame_observed<I, O>(&mut self, dt: F, events: I, observer: &mut O)
    where
        I: IntoIterator<Item = InputEvent<F>>,
        O: StepObserver,
    {
        for event in events {
            self.handle_event(event);
        }
        self.controller.drag_frame(self.pointer.current(), dt, &mut self.solver);
        self.solver.update_observed(dt, observer);
    }

    /// Emit every particle, then the throw preview if one is pending.
    pub fn render<R: RenderSink<F>>(&self, sink: &mut R) {
        for view in self.solver.views() {
            sink.draw_disc(&view);
        }
        if let Some(indicator) = self.controller.velocity_preview() {
            sink.draw_indicator(&indicator);
        }
    }

    pub fn solver(&self) -> &Solver<F> { &self.solver }
    pub fn solver_mut(&mut self) -> &mut Solver<F> { &mut self.solver }
    pub fn controller(&self) -> &InteractionController<F> { &self.controller }
    pub fn pointer(&self) -> Vec2<F> { self.pointer.current() }

    /// Move the pointer without an event, for hosts that poll the mouse.
    pub fn set_pointer(&mut self, pos: Vec2<F>) {
        self.pointer.set(pos);
    }
}
