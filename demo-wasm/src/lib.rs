use verlet_sandbox::input::latest_position;
use verlet_sandbox::{FrameRecorder, InputEvent, Sandbox, SandboxConfig, SolverConfig, Vec2};
use wasm_bindgen::prelude::*;

// ---- Drag & Throw Demo ----

#[wasm_bindgen]
pub struct SandboxDemo {
    sandbox: Sandbox<f32>,
    pending: Vec<InputEvent<f32>>,
    frame: FrameRecorder<f32>,
}

#[wasm_bindgen]
impl SandboxDemo {
    /// Canvas size in CSS pixels; the page maps pointer events 1:1 into world space.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<SandboxDemo, JsError> {
        let solver = SolverConfig::new().with_bounds(width, height);
        let config = SandboxConfig::new().with_solver(solver);
        let sandbox =
            Sandbox::with_default_scene(config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(SandboxDemo {
            sandbox,
            pending: Vec::new(),
            frame: FrameRecorder::new(),
        })
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pending.push(InputEvent::PointerDown(Vec2::new(x, y)));
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.pending.push(InputEvent::PointerUp(Vec2::new(x, y)));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pending.push(InputEvent::PointerMoved(Vec2::new(x, y)));
    }

    /// Bound to the 'O' key: drop a new particle under the pointer.
    ///
    /// Moves queued this frame have not reached the sandbox yet, so the newest
    /// queued position wins over the sandbox's tracked pointer.
    pub fn spawn_at_pointer(&mut self) {
        let p = latest_position(&self.pending).unwrap_or_else(|| self.sandbox.pointer());
        self.pending.push(InputEvent::SpawnRequested(p));
    }

    /// `dt` in seconds, as measured by requestAnimationFrame.
    pub fn update(&mut self, dt: f32) {
        let events = core::mem::take(&mut self.pending);
        self.sandbox.frame(dt, events);
        self.frame.clear();
        self.sandbox.render(&mut self.frame);
    }

    /// Returns flat [x0, y0, r0, x1, y1, r1, ...] for the last frame.
    pub fn discs(&self) -> Vec<f32> {
        self.frame.flat_discs()
    }

    /// Returns packed 0xRRGGBBAA colors, one per disc.
    pub fn colors(&self) -> Vec<u32> {
        self.frame.discs.iter().map(|d| d.color.to_u32()).collect()
    }

    /// Returns [x0, y0, x1, y1] for the throw arrow, or an empty array.
    pub fn indicator(&self) -> Vec<f32> {
        match &self.frame.indicator {
            Some(i) => {
                let tip = i.tip();
                vec![i.origin.x, i.origin.y, tip.x, tip.y]
            }
            None => Vec::new(),
        }
    }

    pub fn particle_count(&self) -> usize {
        self.sandbox.solver().len()
    }
}
