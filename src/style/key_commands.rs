//! Built-in single-key commands on the `Char` channel.
//!
//! | key | effect |
//! |-----|--------|
//! | r   | reset the camera of the renderer under the pointer |
//! | w   | wireframe every actor |
//! | s   | surface every actor |
//! | v   | points for every actor |
//!
//! Keys are case-insensitive. A composing layer replaces this behavior by
//! installing its own `Char` handler.

use super::InteractorStyle;
use crate::constants::{KEY_POINTS, KEY_RESET_CAMERA, KEY_SURFACE, KEY_WIREFRAME};
use crate::render::Renderer;
use crate::source::EventData;
use crate::types::Representation;
use std::rc::Rc;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    ResetCamera,
    SetRepresentation(Representation),
}

impl KeyCommand {
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            KEY_RESET_CAMERA => Some(Self::ResetCamera),
            KEY_WIREFRAME => Some(Self::SetRepresentation(Representation::Wireframe)),
            KEY_SURFACE => Some(Self::SetRepresentation(Representation::Surface)),
            KEY_POINTS => Some(Self::SetRepresentation(Representation::Points)),
            _ => None,
        }
    }
}

impl InteractorStyle {
    /// Default `Char` handler.
    ///
    /// Resolves the renderer under the pointer, applies the command and
    /// requests a redraw. With no renderer under the pointer the command is
    /// dropped and a warning is logged.
    pub fn handle_char(&self, data: &EventData) {
        if !self.settings.key_commands_enabled {
            return;
        }
        let Some(source) = self.source() else {
            return;
        };
        let Some(key) = source.key_code().or(data.key_code) else {
            return;
        };
        let Some(command) = KeyCommand::from_key(key) else {
            return;
        };

        let pos = source.event_position(source.pointer_index());
        let Some(renderer) = self.locate_renderer(pos.x, pos.y) else {
            warn!(key = %key, x = pos.x, y = pos.y, "no current renderer on the interactor style");
            return;
        };

        debug!(key = %key, command = ?command, "key command");
        self.apply_key_command(command, renderer.as_ref());
        source.render();
    }

    fn apply_key_command(&self, command: KeyCommand, renderer: &dyn Renderer) {
        match command {
            KeyCommand::ResetCamera => {
                renderer.reset_camera();
                if self.settings.auto_adjust_camera_clipping_range {
                    renderer.reset_camera_clipping_range();
                }
            }
            KeyCommand::SetRepresentation(representation) => {
                for actor in renderer.actors() {
                    actor.set_representation(representation);
                }
            }
        }
    }

    /// Resolve the renderer at `(x, y)` through the bound source and remember
    /// it as the current renderer. Always re-queried; viewports may tile.
    pub fn locate_renderer(&self, x: f64, y: f64) -> Option<Rc<dyn Renderer>> {
        let renderer = self.source().and_then(|source| source.find_poked_renderer(x, y));
        *self.current_renderer.borrow_mut() = renderer.clone();
        renderer
    }
}
