//! Pointer gesture bindings.
//!
//! Drag gestures carry two actions: `start` captures the anchor (window
//! position or size) when the drag begins, and `action` runs on every
//! pointer motion.  Clicks carry a single action.  All of them are tagged
//! [`Action`] values; the host fires them on matching pointer events.

use crate::action::Action;
use crate::keys::{Modifier, MOD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pointer buttons, with the wire names the host matches on.
///
/// `Ord` so button-to-action maps iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => write!(f, "Button1"),
            MouseButton::Middle => write!(f, "Button2"),
            MouseButton::Right => write!(f, "Button3"),
        }
    }
}

/// A pointer gesture bound to a modifier+button chord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MouseBinding {
    /// Press-and-drag.
    Drag {
        mods: Vec<Modifier>,
        button: MouseButton,
        /// Fired on every pointer motion while dragging.
        action: Action,
        /// Fired once when the drag begins, to capture the anchor.
        start: Action,
    },
    /// A plain click.
    Click {
        mods: Vec<Modifier>,
        button: MouseButton,
        action: Action,
    },
}

/// The standard gesture table for floating windows: drag-to-move,
/// drag-to-resize, click-to-raise.
pub fn mouse_bindings() -> Vec<MouseBinding> {
    vec![
        MouseBinding::Drag {
            mods: vec![MOD],
            button: MouseButton::Left,
            action: Action::SetPositionFloating,
            start: Action::GetPosition,
        },
        MouseBinding::Drag {
            mods: vec![MOD],
            button: MouseButton::Right,
            action: Action::SetSizeFloating,
            start: Action::GetSize,
        },
        MouseBinding::Click {
            mods: vec![MOD],
            button: MouseButton::Middle,
            action: Action::BringToFront,
        },
    ]
}
