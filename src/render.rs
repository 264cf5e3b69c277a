//! Renderer and actor contracts.
//!
//! The interaction layer never draws anything itself; it only needs to reset
//! a renderer's camera and flip the representation of its actors.

use crate::types::Representation;
use std::rc::Rc;

/// A renderable scene object.
pub trait Actor {
    fn set_representation(&self, representation: Representation);
}

/// A viewport that owns a camera and a collection of actors.
pub trait Renderer {
    /// Reframe the camera so every visible actor fits the viewport.
    fn reset_camera(&self);

    /// Recompute near/far planes for the current camera.
    fn reset_camera_clipping_range(&self);

    fn actors(&self) -> Vec<Rc<dyn Actor>>;
}
