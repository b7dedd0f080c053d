//! Pointer and spawn events, already mapped into world coordinates.

use crate::float::Float;
use crate::vec::Vec2;

/// A discrete input event. Positions are world-space; the windowing layer
/// does the pixel-to-world mapping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent<F: Float> {
    PointerDown(Vec2<F>),
    PointerUp(Vec2<F>),
    PointerMoved(Vec2<F>),
    SpawnRequested(Vec2<F>),
}

impl<F: Float> InputEvent<F> {
    pub fn position(&self) -> Vec2<F> {
        match *self {
            InputEvent::PointerDown(p)
            | InputEvent::PointerUp(p)
            | InputEvent::PointerMoved(p)
            | InputEvent::SpawnRequested(p) => p,
        }
    }
}

/// Position of the newest event in a queued batch, if any.
///
/// Hosts that buffer events until the next frame use this to resolve
/// "where is the pointer now" before the batch reaches the sandbox.
pub fn latest_position<F: Float>(events: &[InputEvent<F>]) -> Option<Vec2<F>> {
    events.last().map(InputEvent::position)
}

/// Remembers the latest world-space pointer position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerTracker<F: Float> {
    current: Vec2<F>,
}

impl<F: Float> PointerTracker<F> {
    pub fn new(start: Vec2<F>) -> Self {
        PointerTracker { current: start }
    }

    pub fn observe(&mut self, event: &InputEvent<F>) {
        self.current = event.position();
    }

    pub fn set(&mut self, pos: Vec2<F>) {
        self.current = pos;
    }

    pub fn current(&self) -> Vec2<F> {
        self.current
    }
}
