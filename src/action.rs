//! Deferred actions the host evaluates.
//!
//! Every key press, pointer gesture, and widget callback in this
//! configuration resolves to an [`Action`] value.  Actions are plain data:
//! constructing one has no side effect, and the host window manager
//! interprets the value when the bound event fires.  Keeping the action set
//! a tagged enum (rather than opaque closures) makes every binding
//! enumerable, comparable, and testable without spawning a process.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Cardinal direction for focus, shuffle, and grow operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Parse a direction string (case-insensitive; accepts "left", "Up", etc.).
fn parse_direction(s: &str) -> Option<Direction> {
    match s.trim().to_lowercase().as_str() {
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_direction(&s).ok_or_else(|| DeError::custom(format!("invalid direction: {:?}", s)))
    }
}

/// Every deferred operation this configuration can ask the host to perform.
///
/// Actions are produced by the binding tables in [`keys`](crate::keys),
/// [`mouse`](crate::mouse), and [`bar`](crate::bar), and consumed by the
/// host's event loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Move focus to the neighbouring window in the given direction.
    FocusMove(Direction),

    /// Move focus to the next window in the current stack.
    FocusNext,

    /// Swap the focused window with its neighbour in the given direction.
    ///
    /// In a columns layout, shuffling out of range creates a new column.
    ShuffleWindow(Direction),

    /// Grow the focused window toward the given screen edge.
    ///
    /// If the window already touches that edge, the host shrinks it from
    /// the opposite side instead.
    GrowWindow(Direction),

    /// Reset all window sizes to the layout defaults.
    Normalize,

    /// Toggle between the split and unsplit sides of the stack.
    ToggleSplit,

    /// Advance to the next layout in the configured cycle.
    NextLayout,

    /// Close the focused window.
    CloseWindow,

    /// Rebuild this configuration and apply it without restarting.
    ReloadConfig,

    /// Shut down the window manager itself.
    Shutdown,

    /// Launch an external command.
    ///
    /// The string is split on whitespace by the host; no shell is involved.
    Spawn(String),

    /// Open the bar prompt and spawn whatever command the user types.
    SpawnPrompt,

    /// Bring the group with the given name to the current screen.
    SwitchToGroup(String),

    /// Move the focused window to the named group.
    ///
    /// With `follow` set, the view switches to that group as well.
    MoveWindowToGroup { group: String, follow: bool },

    /// Place a floating window at the pointer position (drag-move).
    SetPositionFloating,

    /// Resize a floating window from the pointer position (drag-resize).
    SetSizeFloating,

    /// Raise the focused window above its siblings.
    BringToFront,

    /// Capture the focused window's position as a drag-start anchor.
    GetPosition,

    /// Capture the focused window's size as a drag-start anchor.
    GetSize,
}

impl Action {
    /// The command string this action would spawn, if it spawns anything.
    pub fn spawn_command(&self) -> Option<&str> {
        match self {
            Action::Spawn(command) => Some(command),
            _ => None,
        }
    }

    /// The group name this action targets, if it targets one.
    pub fn group_target(&self) -> Option<&str> {
        match self {
            Action::SwitchToGroup(group) => Some(group),
            Action::MoveWindowToGroup { group, .. } => Some(group),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Right.to_string(), "right");
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
    }

    #[test]
    fn direction_parses_case_insensitively() {
        for s in ["left", "Left", "LEFT", "  left "] {
            let d: Direction = serde_json::from_str(&format!("{:?}", s)).unwrap();
            assert_eq!(d, Direction::Left);
        }
    }

    #[test]
    fn invalid_direction_is_rejected() {
        let result: Result<Direction, _> = serde_json::from_str("\"sideways\"");
        assert!(result.is_err());
    }

    #[test]
    fn action_equality() {
        assert_eq!(
            Action::FocusMove(Direction::Left),
            Action::FocusMove(Direction::Left)
        );
        assert_ne!(
            Action::ShuffleWindow(Direction::Up),
            Action::ShuffleWindow(Direction::Down)
        );
        assert_eq!(
            Action::Spawn("rofi -show drun".into()),
            Action::Spawn("rofi -show drun".into())
        );
    }

    #[test]
    fn spawn_command_extraction() {
        assert_eq!(
            Action::Spawn("htop".into()).spawn_command(),
            Some("htop")
        );
        assert_eq!(Action::CloseWindow.spawn_command(), None);
    }

    #[test]
    fn group_target_extraction() {
        assert_eq!(Action::SwitchToGroup("3".into()).group_target(), Some("3"));
        assert_eq!(
            Action::MoveWindowToGroup {
                group: "9".into(),
                follow: true,
            }
            .group_target(),
            Some("9")
        );
        assert_eq!(Action::NextLayout.group_target(), None);
    }

    #[test]
    fn action_json_shape() {
        let json = serde_json::to_string(&Action::Spawn("brave-browser".into())).unwrap();
        assert_eq!(json, r#"{"Spawn":"brave-browser"}"#);
        let json = serde_json::to_string(&Action::FocusNext).unwrap();
        assert_eq!(json, r#""FocusNext""#);
    }
}
