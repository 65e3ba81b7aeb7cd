//! Status bar widgets.
//!
//! Widgets are pure descriptors, listed in strict left-to-right render
//! order.  A widget may carry a map from pointer button to [`Action`];
//! buttons with no entry are no-ops.  Nothing here spawns a process —
//! side effects only happen when the host fires a mapped action in
//! response to a pointer event.  Polling the system readouts (CPU, memory,
//! volume, updates) is host-defined.

use crate::action::Action;
use crate::apps::WebApps;
use crate::host::HostEnv;
use crate::mouse::MouseButton;
use crate::palette::{ColorRole, Palette};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default font used across bar widgets.
pub const FONT: &str = "MesloLGM Nerd Font Mono";

/// Map from pointer button to the action fired on click.
pub type MouseCallbacks = BTreeMap<MouseButton, Action>;

/// Font and color defaults applied to every widget that does not override
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
    pub foreground: String,
}

impl WidgetDefaults {
    /// The standard defaults: the bar font at 12pt, 3px padding, theme
    /// foreground.
    pub fn standard(palette: &Palette) -> Self {
        Self {
            font: FONT.to_string(),
            fontsize: 12,
            padding: 3,
            foreground: palette.color(ColorRole::Foreground),
        }
    }
}

/// One bar widget.  Variants render left to right in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Widget {
    /// Fixed horizontal gap, in pixels.
    Spacer(u32),

    /// Static text or an icon glyph, optionally clickable.
    TextBox {
        text: String,
        foreground: Option<String>,
        fontsize: Option<u32>,
        #[serde(default)]
        mouse_callbacks: MouseCallbacks,
    },

    /// Name of the active layout.
    CurrentLayout { foreground: Option<String> },

    /// One box per group, highlighting the visible one.
    GroupBox {
        this_screen_border: String,
        this_current_screen_border: String,
        disable_drag: bool,
    },

    /// Interactive prompt driven by [`Action::SpawnPrompt`].
    Prompt { foreground: Option<String> },

    /// Title of the focused window.
    WindowName { foreground: Option<String> },

    /// CPU load readout, polled by the host.
    Cpu { foreground: Option<String> },

    /// Memory readout, polled by the host.
    Memory {
        foreground: Option<String>,
        #[serde(default)]
        mouse_callbacks: MouseCallbacks,
    },

    /// Volume readout.
    Volume {
        fmt: String,
        foreground: Option<String>,
    },

    /// Pending package update count.
    CheckUpdates {
        distro: String,
        display_format: String,
        no_update_string: String,
        colour_have_updates: String,
        colour_have_no_updates: String,
    },

    /// Wall clock.
    Clock { format: String },
}

impl Widget {
    /// Plain, non-clickable text.
    pub fn text(text: &str) -> Self {
        Self::TextBox {
            text: text.to_string(),
            foreground: None,
            fontsize: None,
            mouse_callbacks: MouseCallbacks::new(),
        }
    }

    /// An icon glyph with optional color and explicit size.
    pub fn icon(text: &str, foreground: Option<&str>, fontsize: u32) -> Self {
        Self::TextBox {
            text: text.to_string(),
            foreground: foreground.map(str::to_string),
            fontsize: Some(fontsize),
            mouse_callbacks: MouseCallbacks::new(),
        }
    }

    /// A clickable icon firing `action` on left click.
    pub fn icon_button(text: &str, foreground: Option<&str>, fontsize: u32, action: Action) -> Self {
        Self::TextBox {
            text: text.to_string(),
            foreground: foreground.map(str::to_string),
            fontsize: Some(fontsize),
            mouse_callbacks: MouseCallbacks::from([(MouseButton::Left, action)]),
        }
    }

    /// A thin `|` separator.
    pub fn separator() -> Self {
        Self::text("|")
    }

    /// The button-to-action map this widget handles, if it handles any.
    pub fn mouse_callbacks(&self) -> Option<&MouseCallbacks> {
        match self {
            Widget::TextBox { mouse_callbacks, .. } | Widget::Memory { mouse_callbacks, .. } => {
                Some(mouse_callbacks)
            }
            _ => None,
        }
    }
}

/// The standard widget sequence, left to right.
pub fn status_widgets(env: &HostEnv, palette: &Palette, apps: &WebApps) -> Vec<Widget> {
    let fg = |role| Some(palette.hex(role));

    vec![
        Widget::Spacer(5),
        // nf-dev-ubuntu; launcher.
        Widget::icon_button(
            "\u{e73a}",
            fg(ColorRole::Red),
            24,
            Action::Spawn("rofi -show drun -l 10".into()),
        ),
        Widget::Spacer(5),
        // nf-cod-extensions.
        Widget::icon("\u{ebeb}", fg(ColorRole::Blue), 18),
        Widget::CurrentLayout {
            foreground: Some(palette.color(ColorRole::Foreground)),
        },
        Widget::GroupBox {
            this_screen_border: palette.color(ColorRole::Blue),
            this_current_screen_border: palette.color(ColorRole::Blue),
            disable_drag: true,
        },
        // Window picker.
        Widget::icon_button("\u{eb23}", None, 18, Action::Spawn("rofi -show window".into())),
        // Bookmarked web apps.
        Widget::icon_button("\u{f0b7b}", None, 18, apps.chatgpt.deferred()),
        Widget::icon_button("\u{f09b}", None, 18, apps.github.deferred()),
        Widget::icon_button("\u{f42f}", None, 18, apps.outlook.deferred()),
        Widget::icon_button("\u{f02bb}", None, 18, apps.teams.deferred()),
        Widget::Spacer(5),
        // nf-fa-terminal; prompt marker.
        Widget::icon("\u{f120}", fg(ColorRole::Red), 18),
        Widget::Prompt {
            foreground: Some(palette.color(ColorRole::Red)),
        },
        Widget::Spacer(5),
        Widget::WindowName {
            foreground: Some(palette.color(ColorRole::Blue)),
        },
        Widget::icon("\u{f0ee0}", fg(ColorRole::Blue), 22),
        Widget::Cpu {
            foreground: Some(palette.color(ColorRole::Blue)),
        },
        Widget::separator(),
        Widget::icon("\u{f035b}", fg(ColorRole::Green), 22),
        Widget::Memory {
            foreground: Some(palette.color(ColorRole::Green)),
            mouse_callbacks: MouseCallbacks::from([(
                MouseButton::Left,
                Action::Spawn(format!("{} -e htop", env.terminal)),
            )]),
        },
        Widget::separator(),
        Widget::Volume {
            fmt: "Vol: {}".to_string(),
            foreground: Some(palette.color(ColorRole::Yellow)),
        },
        Widget::separator(),
        Widget::CheckUpdates {
            distro: "Ubuntu".to_string(),
            display_format: "\u{f06b0} {updates}".to_string(),
            no_update_string: "\u{f058}".to_string(),
            colour_have_updates: palette.color(ColorRole::Red),
            colour_have_no_updates: palette.color(ColorRole::Foreground),
        },
        Widget::separator(),
        Widget::Clock {
            format: "%a %b %d %I:%M %p".to_string(),
        },
        Widget::separator(),
        // nf-fa-power_off; runs the shutdown menu script.
        Widget::icon_button(
            "\u{f011}",
            fg(ColorRole::Red),
            22,
            Action::Spawn(format!("sh {}/.local/scripts/powermenu.sh", env.home)),
        ),
        Widget::Spacer(5),
    ]
}

/// The bar rendered along the top edge of a screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Widgets in left-to-right render order.
    pub widgets: Vec<Widget>,
    /// Bar height in pixels.
    pub height: u32,
    /// Background color.
    pub background: String,
}

/// Build the standard top bar: 24px tall on the theme background.
pub fn status_bar(env: &HostEnv, palette: &Palette, apps: &WebApps) -> Bar {
    Bar {
        widgets: status_widgets(env, palette, apps),
        height: 24,
        background: palette.color(ColorRole::Background),
    }
}
