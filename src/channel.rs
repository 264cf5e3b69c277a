//! Input channel contract shared between the state machine and event sources.
//!
//! Every event source exposes exactly these channels, in this order. The
//! order only matters for deterministic subscription and teardown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named category of input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Per-tick frame delivered by the animation scheduler
    Animation,
    Enter,
    Leave,
    MouseMove,
    LeftButtonPress,
    LeftButtonRelease,
    MiddleButtonPress,
    MiddleButtonRelease,
    RightButtonPress,
    RightButtonRelease,
    MouseWheelForward,
    MouseWheelBackward,
    Expose,
    Configure,
    Timer,
    KeyPress,
    KeyUp,
    /// Character produced by a key press; the built-in key commands live here
    Char,
    Delete,
    Pinch,
    Pan,
    Rotate,
    Tap,
    LongTap,
    Swipe,
    Button3D,
    Move3D,
}

impl Channel {
    /// Every channel, in subscription order.
    pub const ALL: [Channel; 27] = [
        Channel::Animation,
        Channel::Enter,
        Channel::Leave,
        Channel::MouseMove,
        Channel::LeftButtonPress,
        Channel::LeftButtonRelease,
        Channel::MiddleButtonPress,
        Channel::MiddleButtonRelease,
        Channel::RightButtonPress,
        Channel::RightButtonRelease,
        Channel::MouseWheelForward,
        Channel::MouseWheelBackward,
        Channel::Expose,
        Channel::Configure,
        Channel::Timer,
        Channel::KeyPress,
        Channel::KeyUp,
        Channel::Char,
        Channel::Delete,
        Channel::Pinch,
        Channel::Pan,
        Channel::Rotate,
        Channel::Tap,
        Channel::LongTap,
        Channel::Swipe,
        Channel::Button3D,
        Channel::Move3D,
    ];

    /// Number of channels in the contract
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this channel in [`Channel::ALL`]
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Animation => "Animation",
            Self::Enter => "Enter",
            Self::Leave => "Leave",
            Self::MouseMove => "MouseMove",
            Self::LeftButtonPress => "LeftButtonPress",
            Self::LeftButtonRelease => "LeftButtonRelease",
            Self::MiddleButtonPress => "MiddleButtonPress",
            Self::MiddleButtonRelease => "MiddleButtonRelease",
            Self::RightButtonPress => "RightButtonPress",
            Self::RightButtonRelease => "RightButtonRelease",
            Self::MouseWheelForward => "MouseWheelForward",
            Self::MouseWheelBackward => "MouseWheelBackward",
            Self::Expose => "Expose",
            Self::Configure => "Configure",
            Self::Timer => "Timer",
            Self::KeyPress => "KeyPress",
            Self::KeyUp => "KeyUp",
            Self::Char => "Char",
            Self::Delete => "Delete",
            Self::Pinch => "Pinch",
            Self::Pan => "Pan",
            Self::Rotate => "Rotate",
            Self::Tap => "Tap",
            Self::LongTap => "LongTap",
            Self::Swipe => "Swipe",
            Self::Button3D => "Button3D",
            Self::Move3D => "Move3D",
        }
    }

    /// Name of the handler slot for this channel, e.g. `handleMouseMove`.
    /// Only used for diagnostics.
    pub fn handler_name(self) -> String {
        format!("handle{}", self.name())
    }

    /// Returns true for the pointer button press/release channels
    pub fn is_button(self) -> bool {
        matches!(
            self,
            Self::LeftButtonPress
                | Self::LeftButtonRelease
                | Self::MiddleButtonPress
                | Self::MiddleButtonRelease
                | Self::RightButtonPress
                | Self::RightButtonRelease
        )
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
