//! State transitions and the animation toggle.
//!
//! Start/end pairs are guarded: a session can only open from `None` and can
//! only be closed by ending that same session. `start_state`/`stop_state`
//! bypass the guards for composing layers that manage state themselves.
//!
//! Boundary notifications and the end-of-interaction redraw are suppressed
//! while animation is on; the animation driver owns redraw cadence then.

use super::InteractorStyle;
use super::observers::InteractionEvent;
use super::state::{AnimationState, InteractionState};
use tracing::{debug, warn};

macro_rules! state_transitions {
    ($($state:ident => $start:ident, $end:ident;)*) => {
        impl InteractorStyle {
            $(
                #[doc = concat!("Open a `", stringify!($state), "` session unless another session is active.")]
                pub fn $start(&self) {
                    self.start(InteractionState::$state);
                }

                #[doc = concat!("Close the `", stringify!($state), "` session if it is the active one.")]
                pub fn $end(&self) {
                    self.end(InteractionState::$state);
                }
            )*
        }
    };
}

state_transitions! {
    Rotate => start_rotate, end_rotate;
    Pan => start_pan, end_pan;
    Spin => start_spin, end_spin;
    Dolly => start_dolly, end_dolly;
    Zoom => start_zoom, end_zoom;
    Timer => start_timer, end_timer;
    TwoPointer => start_two_pointer, end_two_pointer;
    UniformScale => start_uniform_scale, end_uniform_scale;
    CameraPose => start_camera_pose, end_camera_pose;
}

impl InteractorStyle {
    /// Guarded start: ignored while any session is active, and for `None`.
    pub fn start(&self, state: InteractionState) {
        if state.is_none() || self.state.get().is_active() {
            return;
        }
        self.start_state(state);
    }

    /// Guarded end: ignored unless `state` is the active session.
    pub fn end(&self, state: InteractionState) {
        if state.is_none() || self.state.get() != state {
            return;
        }
        self.stop_state();
    }

    /// Enter `state` unconditionally and announce it unless animating.
    pub fn start_state(&self, state: InteractionState) {
        self.state.set(state);
        debug!(state = %state, animating = self.is_animating(), "interaction started");

        if self.animation.get() == AnimationState::Off {
            self.emit(InteractionEvent::Start { state });
        }
    }

    /// Return to `None` unconditionally. Unless animating, announce the end
    /// and request a redraw of the bound source.
    pub fn stop_state(&self) {
        let previous = self.state.replace(InteractionState::None);
        debug!(state = %previous, animating = self.is_animating(), "interaction ended");

        if self.animation.get() == AnimationState::Off {
            self.emit(InteractionEvent::End { state: previous });
            if let Some(source) = self.source() {
                source.render();
            }
        }
    }

    /// Ask the bound source to tick this machine every frame. Idempotent.
    pub fn set_animation_on(&self) {
        if self.animation.get() == AnimationState::On {
            return;
        }
        self.animation.set(AnimationState::On);

        match self.source() {
            Some(source) => source.request_animation(self.requester),
            None => warn!("animation turned on with no event source bound"),
        }
    }

    /// Cancel the per-frame ticking requested by [`InteractorStyle::set_animation_on`].
    pub fn set_animation_off(&self) {
        if self.animation.get() == AnimationState::Off {
            return;
        }
        self.animation.set(AnimationState::Off);

        match self.source() {
            Some(source) => source.cancel_animation(self.requester),
            None => warn!("animation turned off with no event source bound"),
        }
    }
}
