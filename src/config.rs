//! Top-level configuration assembly.
//!
//! [`Config`] gathers every table the host reads by fixed name — key
//! bindings, mouse bindings, groups, layouts, widget defaults, screens, and
//! the scalar policy flags.  Everything is built fresh by
//! [`Config::build`]; nothing is mutated afterwards.  A reload replaces the
//! whole value.
//!
//! [`Config::validate`] checks the internal-consistency obligations the
//! host relies on: collision-free key chords, resolvable group references,
//! one binding pair per group, a usable bar, and no dropped host float
//! defaults.

use crate::action::Action;
use crate::apps::WebApps;
use crate::bar::{status_bar, Bar, WidgetDefaults};
use crate::groups::{workspace_groups, Group};
use crate::host::HostEnv;
use crate::keys::{find_duplicate, group_bindings, static_bindings, KeyBinding, Modifier};
use crate::layout::{floating_layout, layouts, FloatingLayout, Layout};
use crate::mouse::{mouse_bindings, MouseBinding};
use crate::palette::Palette;
use crate::rules::{default_float_rules, WindowMatch};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a wallpaper is fitted to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperMode {
    Fill,
    Stretch,
    Center,
}

/// One output: wallpaper plus the bar rendered along its top edge.
///
/// Exactly one screen is declared here; replicating it across additional
/// monitors is the host's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub wallpaper: String,
    pub wallpaper_mode: WallpaperMode,
    pub top: Bar,
}

/// Errors found while validating a built configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("key chord bound twice: {mods:?} + {key:?}")]
    DuplicateBinding { mods: Vec<Modifier>, key: String },

    #[error("binding {desc:?} targets unknown group {group:?}")]
    UnknownGroup { desc: String, group: String },

    #[error("group {0:?} is missing its switch/move binding pair")]
    MissingGroupBindings(String),

    #[error("bar has no widgets")]
    EmptyBar,

    #[error("bar height must be positive")]
    ZeroHeightBar,

    #[error("host default float rule dropped: {0:?}")]
    MissingDefaultFloatRule(WindowMatch),
}

/// The complete configuration, as consumed by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub keys: Vec<KeyBinding>,
    pub mouse: Vec<MouseBinding>,
    pub groups: Vec<Group>,
    pub layouts: Vec<Layout>,
    pub floating_layout: FloatingLayout,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,

    //  Scalar policy flags

    /// Dynamic-group key binder; unused, groups are static here.
    pub dgroups_key_binder: Option<String>,
    /// Dynamic-group application rules; empty, matches live on the groups.
    pub dgroups_app_rules: Vec<WindowMatch>,
    /// Focus follows the mouse pointer.
    pub follow_mouse_focus: bool,
    /// Clicking a window floats it to the front.
    pub bring_front_click: bool,
    /// Warp the pointer to newly focused windows.
    pub cursor_warp: bool,
    /// Honor application fullscreen requests.
    pub auto_fullscreen: bool,
    /// How window activation requests affect focus ("smart", "focus", "never").
    pub focus_on_window_activation: String,
    /// Rebuild screens when outputs change.
    pub reconfigure_screens: bool,
    /// Let applications minimize themselves on focus loss.
    pub auto_minimize: bool,
    /// Input-device rules placeholder (Wayland backends).
    pub wl_input_rules: Option<String>,
    /// Self-reported window manager name.  Some Java UI toolkits only start
    /// under window managers on their hardcoded whitelist, so a whitelisted
    /// name is reported.
    pub wmname: String,
}

impl Config {
    /// Build the whole configuration from scratch.
    ///
    /// Pure construction: the only input is `env`; nothing is spawned and
    /// nothing global is touched.
    pub fn build(env: &HostEnv) -> Self {
        let palette = Palette::default();
        let apps = WebApps::default();
        let groups = workspace_groups();

        let mut keys = static_bindings(env, &apps);
        keys.extend(group_bindings(&groups));

        let widget_defaults = WidgetDefaults::standard(&palette);

        let config = Self {
            mouse: mouse_bindings(),
            layouts: layouts(&palette),
            floating_layout: floating_layout(&palette),
            extension_defaults: widget_defaults.clone(),
            widget_defaults,
            screens: vec![Screen {
                wallpaper: "/usr/share/backgrounds/Mirror_by_Uday_Nakade.jpg".into(),
                wallpaper_mode: WallpaperMode::Fill,
                top: status_bar(env, &palette, &apps),
            }],
            keys,
            groups,
            dgroups_key_binder: None,
            dgroups_app_rules: Vec::new(),
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: "smart".into(),
            reconfigure_screens: true,
            auto_minimize: true,
            wl_input_rules: None,
            wmname: "LG3D".into(),
        };

        debug!(
            "built configuration: {} key bindings, {} groups, {} layouts, {} widgets",
            config.keys.len(),
            config.groups.len(),
            config.layouts.len(),
            config
                .screens
                .first()
                .map(|s| s.top.widgets.len())
                .unwrap_or(0),
        );

        config
    }

    /// Check the internal-consistency obligations the host relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((mods, key)) = find_duplicate(&self.keys) {
            return Err(ConfigError::DuplicateBinding { mods, key });
        }

        let group_names: HashSet<&str> = self.groups.iter().map(|g| g.name.as_str()).collect();
        for binding in &self.keys {
            if let Some(group) = binding.action.group_target() {
                if !group_names.contains(group) {
                    return Err(ConfigError::UnknownGroup {
                        desc: binding.desc.clone(),
                        group: group.to_string(),
                    });
                }
            }
        }

        for group in &self.groups {
            let switches = self
                .keys
                .iter()
                .filter(|b| {
                    b.key == group.name
                        && matches!(&b.action, Action::SwitchToGroup(g) if g == &group.name)
                })
                .count();
            let moves = self
                .keys
                .iter()
                .filter(|b| {
                    b.key == group.name
                        && matches!(
                            &b.action,
                            Action::MoveWindowToGroup { group: g, .. } if g == &group.name
                        )
                })
                .count();
            if switches != 1 || moves != 1 {
                return Err(ConfigError::MissingGroupBindings(group.name.clone()));
            }
        }

        for screen in &self.screens {
            if screen.top.widgets.is_empty() {
                return Err(ConfigError::EmptyBar);
            }
            if screen.top.height == 0 {
                return Err(ConfigError::ZeroHeightBar);
            }
        }

        for rule in default_float_rules() {
            if !self.floating_layout.float_rules.contains(&rule) {
                return Err(ConfigError::MissingDefaultFloatRule(rule));
            }
        }

        Ok(())
    }
}
