//! Layout cycle and shared border theme.
//!
//! Each layout variant is parameterized by the same [`LayoutTheme`], so
//! every layout shares one border language.  The list order is the cycle
//! order the host follows on [`Action::NextLayout`](crate::action::Action).
//! The layout algorithms themselves are host-owned; these are descriptors
//! only.

use crate::palette::{ColorRole, Palette};
use crate::rules::{float_rules, WindowMatch};
use serde::{Deserialize, Serialize};

/// Border and gap parameters shared by every layout variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutTheme {
    /// Border color of the focused window.
    pub border_focus: String,
    /// Border color of unfocused windows.
    pub border_normal: String,
    /// Border width in pixels.
    pub border_width: u32,
    /// Gap around windows in pixels.
    pub margin: u32,
}

impl LayoutTheme {
    /// The standard theme: blue focus border on the background color,
    /// 1px borders, 2px gaps.
    pub fn standard(palette: &Palette) -> Self {
        Self {
            border_focus: palette.color(ColorRole::Blue),
            border_normal: palette.color(ColorRole::Background),
            border_width: 1,
            margin: 2,
        }
    }
}

/// A tiling strategy, parameterized by the shared theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// Dynamic columns; shuffling a window out of range creates a new one.
    Columns(LayoutTheme),
    /// One maximized window at a time.
    Max(LayoutTheme),
    /// One master pane on the left, a stack on the right.
    MonadTall(LayoutTheme),
    /// One master pane on top, a stack below.
    MonadWide(LayoutTheme),
    /// Free-floating windows.
    Floating(LayoutTheme),
}

impl Layout {
    /// The theme this variant was built with.
    pub fn theme(&self) -> &LayoutTheme {
        match self {
            Layout::Columns(t)
            | Layout::Max(t)
            | Layout::MonadTall(t)
            | Layout::MonadWide(t)
            | Layout::Floating(t) => t,
        }
    }
}

/// The standard layout cycle, every variant sharing one theme.
pub fn layouts(palette: &Palette) -> Vec<Layout> {
    let theme = LayoutTheme::standard(palette);
    vec![
        Layout::Columns(theme.clone()),
        Layout::Max(theme.clone()),
        Layout::MonadTall(theme.clone()),
        Layout::MonadWide(theme.clone()),
        Layout::Floating(theme),
    ]
}

/// The dedicated floating layout applied to windows matching
/// [`float_rules`], regardless of the active tiling layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingLayout {
    /// Windows matching any of these predicates always float.
    pub float_rules: Vec<WindowMatch>,
    /// Border color of the focused floating window.
    pub border_focus: String,
    /// Border color of unfocused floating windows.
    pub border_normal: String,
}

/// Build the floating layout with the standard rule set and border colors.
pub fn floating_layout(palette: &Palette) -> FloatingLayout {
    FloatingLayout {
        float_rules: float_rules(),
        border_focus: palette.color(ColorRole::Blue),
        border_normal: palette.color(ColorRole::Background),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::default_float_rules;

    #[test]
    fn cycle_order_is_fixed() {
        let list = layouts(&Palette::default());
        assert!(matches!(list[0], Layout::Columns(_)));
        assert!(matches!(list[1], Layout::Max(_)));
        assert!(matches!(list[2], Layout::MonadTall(_)));
        assert!(matches!(list[3], Layout::MonadWide(_)));
        assert!(matches!(list[4], Layout::Floating(_)));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn all_layouts_share_one_theme() {
        let palette = Palette::default();
        let list = layouts(&palette);
        let expected = LayoutTheme::standard(&palette);
        for layout in &list {
            assert_eq!(layout.theme(), &expected);
        }
    }

    #[test]
    fn standard_theme_uses_palette_colors() {
        let palette = Palette::default();
        let theme = LayoutTheme::standard(&palette);
        assert_eq!(theme.border_focus, palette.hex(ColorRole::Blue));
        assert_eq!(theme.border_normal, palette.hex(ColorRole::Background));
        assert_eq!(theme.border_width, 1);
        assert_eq!(theme.margin, 2);
    }

    #[test]
    fn floating_layout_carries_the_full_rule_set() {
        let floating = floating_layout(&Palette::default());
        for rule in default_float_rules() {
            assert!(floating.float_rules.contains(&rule));
        }
        assert!(floating
            .float_rules
            .contains(&WindowMatch::title("pinentry")));
    }
}
