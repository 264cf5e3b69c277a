//! Interaction and animation state - the two independent axes of the machine.
//!
//! ## State Transitions
//!
//! ```text
//! None -> Rotate | Pan | Spin | Dolly | Zoom | Timer
//!       | TwoPointer | UniformScale | CameraPose      (start_*, only from None)
//!
//! S -> None                                          (end_S, only while in S)
//! ```
//!
//! Animation is a separate on/off flag; the machine can be rotating and
//! animating at the same time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The manipulation session currently open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionState {
    /// No active manipulation
    #[default]
    None,
    Rotate,
    Pan,
    Spin,
    Dolly,
    Zoom,
    /// Timer-driven manipulation
    Timer,
    /// Two-pointer (multi-touch) manipulation
    TwoPointer,
    UniformScale,
    CameraPose,
}

impl InteractionState {
    /// Every state except `None`, in declaration order.
    pub const ACTIVE: [InteractionState; 9] = [
        Self::Rotate,
        Self::Pan,
        Self::Spin,
        Self::Dolly,
        Self::Zoom,
        Self::Timer,
        Self::TwoPointer,
        Self::UniformScale,
        Self::CameraPose,
    ];

    /// Returns true if no session is open
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns true if a session is open
    pub fn is_active(self) -> bool {
        !self.is_none()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Rotate => "Rotate",
            Self::Pan => "Pan",
            Self::Spin => "Spin",
            Self::Dolly => "Dolly",
            Self::Zoom => "Zoom",
            Self::Timer => "Timer",
            Self::TwoPointer => "TwoPointer",
            Self::UniformScale => "UniformScale",
            Self::CameraPose => "CameraPose",
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a per-tick animation loop is running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationState {
    #[default]
    Off,
    On,
}

impl AnimationState {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}
