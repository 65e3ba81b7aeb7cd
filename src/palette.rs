//! Theme color table.
//!
//! A closed set of named color roles mapped to hex strings.  The mapping is
//! total: every role resolves to a color, so consumers copy values freely
//! and no lookup can fail.  Asking for a role that does not exist is a
//! compile error, not a runtime one.

use serde::{Deserialize, Serialize};

/// Symbolic color roles the rest of the configuration refers to.
///
/// Background and foreground plus the eight classic terminal accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorRole {
    Background,
    Foreground,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// An immutable color table.
///
/// Built once per (re)load; never mutated afterwards.  Colors are copied by
/// value wherever a theme color is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    background: String,
    foreground: String,
    black: String,
    red: String,
    green: String,
    yellow: String,
    blue: String,
    magenta: String,
    cyan: String,
    white: String,
}

impl Default for Palette {
    /// The stock palette (a One Dark variant).
    fn default() -> Self {
        Self {
            background: "#282c34".into(),
            foreground: "#bbc2cf".into(),
            black: "#282c34".into(),
            red: "#ff6c6b".into(),
            green: "#98be65".into(),
            yellow: "#ecbe7b".into(),
            blue: "#51afef".into(),
            magenta: "#c678dd".into(),
            cyan: "#46d9ff".into(),
            white: "#bbc2cf".into(),
        }
    }
}

impl Palette {
    /// Look up the hex string (`"#rrggbb"`) for `role`.
    ///
    /// Total over [`ColorRole`]: the match covers the closed enum, so there
    /// is no failure path.
    pub fn hex(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Background => &self.background,
            ColorRole::Foreground => &self.foreground,
            ColorRole::Black => &self.black,
            ColorRole::Red => &self.red,
            ColorRole::Green => &self.green,
            ColorRole::Yellow => &self.yellow,
            ColorRole::Blue => &self.blue,
            ColorRole::Magenta => &self.magenta,
            ColorRole::Cyan => &self.cyan,
            ColorRole::White => &self.white,
        }
    }

    /// Owned copy of the hex string for `role`.
    pub fn color(&self, role: ColorRole) -> String {
        self.hex(role).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [ColorRole; 10] = [
        ColorRole::Background,
        ColorRole::Foreground,
        ColorRole::Black,
        ColorRole::Red,
        ColorRole::Green,
        ColorRole::Yellow,
        ColorRole::Blue,
        ColorRole::Magenta,
        ColorRole::Cyan,
        ColorRole::White,
    ];

    #[test]
    fn every_role_resolves_to_a_hex_color() {
        let palette = Palette::default();
        for role in ALL_ROLES {
            let hex = palette.hex(role);
            assert!(hex.starts_with('#'), "{:?} -> {:?}", role, hex);
            assert_eq!(hex.len(), 7, "{:?} -> {:?}", role, hex);
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn stock_palette_values() {
        let palette = Palette::default();
        assert_eq!(palette.hex(ColorRole::Background), "#282c34");
        assert_eq!(palette.hex(ColorRole::Foreground), "#bbc2cf");
        assert_eq!(palette.hex(ColorRole::Blue), "#51afef");
        assert_eq!(palette.hex(ColorRole::Red), "#ff6c6b");
    }

    #[test]
    fn black_mirrors_background_and_white_mirrors_foreground() {
        let palette = Palette::default();
        assert_eq!(palette.hex(ColorRole::Black), palette.hex(ColorRole::Background));
        assert_eq!(palette.hex(ColorRole::White), palette.hex(ColorRole::Foreground));
    }

    #[test]
    fn color_returns_owned_copy() {
        let palette = Palette::default();
        let owned = palette.color(ColorRole::Green);
        assert_eq!(owned, palette.hex(ColorRole::Green));
    }
}
