//! Key-binding table construction.
//!
//! The table has two parts: a literal list of static bindings, and a
//! generated pair of bindings per workspace group.  Generation is uniform —
//! one binding-pair constructor applied to every group, the labeled ninth
//! included — so the two code paths cannot drift.
//!
//! The host matches bindings by (modifier-set, key); list order is
//! irrelevant for matching, and duplicates are resolved first-match-wins on
//! the host side.  This configuration never produces duplicates, and
//! [`find_duplicate`] verifies that rather than assuming it.

use crate::action::{Action, Direction};
use crate::apps::{WebApps, BROWSER};
use crate::groups::Group;
use crate::host::HostEnv;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Modifier keys, with the wire names the host expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modifier {
    Super,
    Shift,
    Control,
    Alt,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Super => write!(f, "mod4"),
            Modifier::Shift => write!(f, "shift"),
            Modifier::Control => write!(f, "control"),
            Modifier::Alt => write!(f, "mod1"),
        }
    }
}

/// The primary modifier every binding in this configuration hangs off.
pub const MOD: Modifier = Modifier::Super;

/// One key binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Modifier set held together with the key.
    pub mods: Vec<Modifier>,
    /// Key symbol name ("h", "Return", "Tab", "3", ...).
    pub key: String,
    /// The deferred action fired on match.
    pub action: Action,
    /// Human-readable description, shown by cheat-sheet tooling.
    pub desc: String,
}

impl KeyBinding {
    /// Construct a binding.
    pub fn new(mods: &[Modifier], key: &str, action: Action, desc: &str) -> Self {
        Self {
            mods: mods.to_vec(),
            key: key.to_string(),
            action,
            desc: desc.to_string(),
        }
    }

    /// The (modifier-set, key) chord the host matches on.
    ///
    /// Modifiers are sorted so chords compare independent of listing order.
    pub fn chord(&self) -> (Vec<Modifier>, String) {
        let mut mods = self.mods.clone();
        mods.sort();
        (mods, self.key.clone())
    }
}

/// The literal (non-generated) binding table.
pub fn static_bindings(env: &HostEnv, apps: &WebApps) -> Vec<KeyBinding> {
    vec![
        // Focus movement.
        KeyBinding::new(
            &[MOD],
            "h",
            Action::FocusMove(Direction::Left),
            "Move focus to left",
        ),
        KeyBinding::new(
            &[MOD],
            "l",
            Action::FocusMove(Direction::Right),
            "Move focus to right",
        ),
        KeyBinding::new(&[MOD], "j", Action::FocusMove(Direction::Down), "Move focus down"),
        KeyBinding::new(&[MOD], "k", Action::FocusMove(Direction::Up), "Move focus up"),
        KeyBinding::new(
            &[MOD],
            "space",
            Action::FocusNext,
            "Move window focus to other window",
        ),
        // Shuffle windows within the stack.
        KeyBinding::new(
            &[MOD, Modifier::Shift],
            "h",
            Action::ShuffleWindow(Direction::Left),
            "Move window to the left",
        ),
        KeyBinding::new(
            &[MOD, Modifier::Shift],
            "l",
            Action::ShuffleWindow(Direction::Right),
            "Move window to the right",
        ),
        KeyBinding::new(
            &[MOD, Modifier::Shift],
            "j",
            Action::ShuffleWindow(Direction::Down),
            "Move window down",
        ),
        KeyBinding::new(
            &[MOD, Modifier::Shift],
            "k",
            Action::ShuffleWindow(Direction::Up),
            "Move window up",
        ),
        // Resize.  Growing toward a screen edge shrinks from the other side.
        KeyBinding::new(
            &[MOD, Modifier::Control],
            "h",
            Action::GrowWindow(Direction::Left),
            "Grow window to the left",
        ),
        KeyBinding::new(
            &[MOD, Modifier::Control],
            "l",
            Action::GrowWindow(Direction::Right),
            "Grow window to the right",
        ),
        KeyBinding::new(
            &[MOD, Modifier::Control],
            "j",
            Action::GrowWindow(Direction::Down),
            "Grow window down",
        ),
        KeyBinding::new(
            &[MOD, Modifier::Control],
            "k",
            Action::GrowWindow(Direction::Up),
            "Grow window up",
        ),
        KeyBinding::new(&[MOD], "n", Action::Normalize, "Reset all window sizes"),
        KeyBinding::new(
            &[MOD, Modifier::Shift],
            "Return",
            Action::ToggleSplit,
            "Toggle between split and unsplit sides of stack",
        ),
        // Launchers.
        KeyBinding::new(
            &[MOD],
            "Return",
            Action::Spawn(env.terminal.clone()),
            "Launch terminal",
        ),
        KeyBinding::new(&[MOD], "b", Action::Spawn(BROWSER.into()), "Launch browser"),
        KeyBinding::new(&[MOD], "m", apps.outlook.deferred(), "Launch mail"),
        KeyBinding::new(&[MOD], "g", apps.chatgpt.deferred(), "Launch ChatGPT"),
        KeyBinding::new(
            &[MOD, Modifier::Shift],
            "g",
            apps.github.deferred(),
            "Launch GitHub",
        ),
        // Window manager control.
        KeyBinding::new(&[MOD], "Tab", Action::NextLayout, "Toggle between layouts"),
        KeyBinding::new(&[MOD], "w", Action::CloseWindow, "Kill focused window"),
        KeyBinding::new(
            &[MOD, Modifier::Control],
            "r",
            Action::ReloadConfig,
            "Reload the config",
        ),
        KeyBinding::new(
            &[MOD, Modifier::Control],
            "q",
            Action::Shutdown,
            "Shut down the window manager",
        ),
        KeyBinding::new(
            &[MOD, Modifier::Shift],
            "r",
            Action::Spawn("systemctl poweroff".into()),
            "Shutdown computer",
        ),
        KeyBinding::new(
            &[MOD],
            "r",
            Action::SpawnPrompt,
            "Spawn a command using the bar prompt",
        ),
    ]
}

/// The two bindings every group gets: switch to it, and move the focused
/// window there and follow.
pub fn group_binding_pair(group: &Group) -> [KeyBinding; 2] {
    [
        KeyBinding::new(
            &[MOD],
            &group.name,
            Action::SwitchToGroup(group.name.clone()),
            &format!("Switch to group {}", group.name),
        ),
        KeyBinding::new(
            &[MOD, Modifier::Shift],
            &group.name,
            Action::MoveWindowToGroup {
                group: group.name.clone(),
                follow: true,
            },
            &format!("Switch to & move focused window to group {}", group.name),
        ),
    ]
}

/// Generate the switch/move binding pair for every group, in group order.
pub fn group_bindings(groups: &[Group]) -> Vec<KeyBinding> {
    groups.iter().flat_map(group_binding_pair).collect()
}

/// Find the first (modifier-set, key) chord bound more than once.
///
/// Returns `None` when the table is collision-free.
pub fn find_duplicate(bindings: &[KeyBinding]) -> Option<(Vec<Modifier>, String)> {
    let mut seen = HashSet::new();
    for binding in bindings {
        let chord = binding.chord();
        if !seen.insert(chord.clone()) {
            return Some(chord);
        }
    }
    None
}
