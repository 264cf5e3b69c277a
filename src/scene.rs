//! Minimal renderer and actor implementations.
//!
//! Enough scene state to observe what the interaction layer does: camera
//! resets are counted and each actor remembers its representation.

use crate::render::{Actor, Renderer};
use crate::types::Representation;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct SceneActor {
    name: String,
    representation: Cell<Representation>,
}

impl SceneActor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            representation: Cell::new(Representation::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn representation(&self) -> Representation {
        self.representation.get()
    }
}

impl Actor for SceneActor {
    fn set_representation(&self, representation: Representation) {
        self.representation.set(representation);
    }
}

#[derive(Debug, Default)]
pub struct SceneRenderer {
    actors: RefCell<Vec<Rc<SceneActor>>>,
    camera_resets: Cell<usize>,
    clipping_range_resets: Cell<usize>,
}

impl SceneRenderer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn add_actor(&self, name: impl Into<String>) -> Rc<SceneActor> {
        let actor = Rc::new(SceneActor::new(name));
        self.actors.borrow_mut().push(actor.clone());
        actor
    }

    pub fn scene_actors(&self) -> Vec<Rc<SceneActor>> {
        self.actors.borrow().clone()
    }

    pub fn camera_resets(&self) -> usize {
        self.camera_resets.get()
    }

    pub fn clipping_range_resets(&self) -> usize {
        self.clipping_range_resets.get()
    }
}

impl Renderer for SceneRenderer {
    fn reset_camera(&self) {
        self.camera_resets.set(self.camera_resets.get() + 1);
    }

    fn reset_camera_clipping_range(&self) {
        self.clipping_range_resets.set(self.clipping_range_resets.get() + 1);
    }

    fn actors(&self) -> Vec<Rc<dyn Actor>> {
        self.actors
            .borrow()
            .iter()
            .map(|actor| actor.clone() as Rc<dyn Actor>)
            .collect()
    }
}
