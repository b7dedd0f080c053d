//! Interactive 2D Verlet particle sandbox core.
//!
//! `verlet_sandbox` integrates disc particles under gravity with position
//! Verlet, keeps them inside a rectangle with lossy bounces, and lets a
//! pointer grab, drag and throw them. Windowing and drawing stay outside:
//! feed in world-space pointer events and frame times, read back discs.
//!
//! # Features
//!
//! - **Verlet integration**: Implicit velocity as `pos - prev_pos`
//! - **Bouncy bounds**: Per-axis clamp with a configurable restitution
//! - **Drag and throw**: Release velocity averaged over a trailing time window
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use verlet_sandbox::{InputEvent, Sandbox, SandboxConfig, Vec2};
//!
//! let mut sandbox: Sandbox<f32> = Sandbox::with_default_scene(SandboxConfig::new()).unwrap();
//! sandbox.frame(1.0 / 60.0, [InputEvent::SpawnRequested(Vec2::new(400.0, 100.0))]);
//! assert_eq!(sandbox.solver().len(), 4);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod solver;
pub mod interaction;
pub mod input;
pub mod render;
pub mod sandbox;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::{BoundsHit, Color, Particle};
pub use solver::Solver;
pub use interaction::{DragSample, DragState, InteractionController, SampleWindow};
pub use input::{InputEvent, PointerTracker};
pub use render::{FrameRecorder, ParticleView, RenderSink, VelocityIndicator};
pub use sandbox::Sandbox;
pub use config::{InteractionConfig, SandboxConfig, SolverConfig};
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::SandboxError;
