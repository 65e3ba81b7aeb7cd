//! Window-matching predicates and floating policy.
//!
//! Predicates are tagged values rather than closures so rule sets stay
//! enumerable, serializable, and comparable.  The floating rule list always
//! starts with the host's built-in defaults and only ever appends to them.

use serde::{Deserialize, Serialize};

/// A predicate over host windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowMatch {
    /// Match on the window class (the `WM_CLASS` shown by `xprop`).
    WmClass(String),
    /// Match on the window title.
    Title(String),
    /// Match on the EWMH window type (`"dialog"`, `"splash"`, ...).
    WmType(String),
    /// Windows that report a fixed size.
    FixedSize,
    /// Windows that report a fixed aspect ratio.
    FixedRatio,
}

impl WindowMatch {
    /// Match on window class.
    pub fn wm_class(class: &str) -> Self {
        Self::WmClass(class.to_string())
    }

    /// Match on window title.
    pub fn title(title: &str) -> Self {
        Self::Title(title.to_string())
    }

    /// Match on EWMH window type.
    pub fn wm_type(kind: &str) -> Self {
        Self::WmType(kind.to_string())
    }
}

/// The host's built-in floating defaults.
///
/// Mirrored here so [`float_rules`] can extend the set without dropping any
/// of them.  Transient window types, progress/confirm/error popups, and
/// windows with fixed geometry never tile sensibly.
pub fn default_float_rules() -> Vec<WindowMatch> {
    vec![
        WindowMatch::wm_type("utility"),
        WindowMatch::wm_type("notification"),
        WindowMatch::wm_type("toolbar"),
        WindowMatch::wm_type("splash"),
        WindowMatch::wm_type("dialog"),
        WindowMatch::wm_class("file_progress"),
        WindowMatch::wm_class("confirm"),
        WindowMatch::wm_class("dialog"),
        WindowMatch::wm_class("download"),
        WindowMatch::wm_class("error"),
        WindowMatch::wm_class("help"),
        WindowMatch::wm_class("splash"),
        WindowMatch::wm_class("notification"),
        WindowMatch::FixedSize,
        WindowMatch::FixedRatio,
    ]
}

/// Floating rules for this configuration: the host defaults plus the
/// transient helper dialogs that must never be tiled.
pub fn float_rules() -> Vec<WindowMatch> {
    let mut rules = default_float_rules();
    rules.extend([
        WindowMatch::wm_class("confirmreset"), // gitk
        WindowMatch::wm_class("makebranch"),   // gitk
        WindowMatch::wm_class("maketag"),      // gitk
        WindowMatch::wm_class("ssh-askpass"),
        WindowMatch::title("branchdialog"), // gitk
        WindowMatch::title("pinentry"),     // GPG passphrase entry
    ]);
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_rules_keep_every_default() {
        let rules = float_rules();
        for default in default_float_rules() {
            assert!(rules.contains(&default), "dropped default {:?}", default);
        }
    }

    #[test]
    fn defaults_come_first() {
        let rules = float_rules();
        let defaults = default_float_rules();
        assert_eq!(&rules[..defaults.len()], &defaults[..]);
        assert!(rules.len() > defaults.len());
    }

    #[test]
    fn additions_cover_the_helper_dialogs() {
        let rules = float_rules();
        assert!(rules.contains(&WindowMatch::wm_class("ssh-askpass")));
        assert!(rules.contains(&WindowMatch::title("pinentry")));
        assert!(rules.contains(&WindowMatch::wm_class("confirmreset")));
    }

    #[test]
    fn predicate_serde_roundtrip() {
        let rule = WindowMatch::wm_class("Code");
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"{"WmClass":"Code"}"#);
        let back: WindowMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }
}
