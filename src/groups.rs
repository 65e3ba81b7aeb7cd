//! Workspace groups.
//!
//! Eight plain numeric groups plus a ninth labeled group that captures
//! code-editor windows.  The table is rebuilt from scratch on every
//! (re)load; key bindings for it are generated uniformly in
//! [`keys::group_bindings`](crate::keys::group_bindings).

use crate::rules::WindowMatch;
use serde::{Deserialize, Serialize};

/// A workspace group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Identifier; also the key symbol that reaches the group.
    pub name: String,
    /// Optional display label shown in the bar instead of the name.
    pub label: Option<String>,
    /// Windows matching any of these predicates are auto-assigned here.
    pub matches: Vec<WindowMatch>,
}

impl Group {
    /// A plain group with no label and no matches.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: None,
            matches: Vec::new(),
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Set the auto-assignment predicates.
    pub fn with_matches(mut self, matches: Vec<WindowMatch>) -> Self {
        self.matches = matches;
        self
    }
}

/// The standard group table.
///
/// Groups "1" through "8" are generic; group "9" carries a code glyph label
/// and auto-assigns editor windows (wm_class `"Code"`).
pub fn workspace_groups() -> Vec<Group> {
    let mut groups: Vec<Group> = ('1'..='8').map(|c| Group::new(&c.to_string())).collect();
    groups.push(
        Group::new("9")
            .with_label("\u{f0610}")
            .with_matches(vec![WindowMatch::wm_class("Code")]),
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_groups_in_order() {
        let groups = workspace_groups();
        assert_eq!(groups.len(), 9);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn numeric_groups_are_plain() {
        let groups = workspace_groups();
        for group in &groups[..8] {
            assert!(group.label.is_none(), "group {} has a label", group.name);
            assert!(group.matches.is_empty(), "group {} has matches", group.name);
        }
    }

    #[test]
    fn ninth_group_captures_code_windows() {
        let groups = workspace_groups();
        let ninth = groups.last().unwrap();
        assert_eq!(ninth.name, "9");
        assert!(ninth.label.is_some());
        assert_eq!(ninth.matches, vec![WindowMatch::wm_class("Code")]);
    }
}
