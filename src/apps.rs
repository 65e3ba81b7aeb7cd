//! Bookmarked web applications launched as dedicated browser windows.
//!
//! A [`UrlApp`] derives its launch command once, from a fixed template
//! (`<browser> --app=<url>`), and exposes the two launch paths the host
//! uses: a deferred [`Action`] for key bindings, and an immediate spawn for
//! pointer-click callbacks.  Both resolve to the identical command string.

use crate::action::Action;
use crate::host::Spawner;
use serde::{Deserialize, Serialize};

/// Browser used for app-mode windows and the plain "launch browser" binding.
pub const BROWSER: &str = "brave-browser";

/// A web application pinned to a dedicated browser window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlApp {
    /// Human-readable name, used in binding descriptions.
    pub name: String,
    /// The URL opened in app mode.
    pub url: String,
    /// Derived launch command.  Fixed at construction.
    pub command: String,
}

impl UrlApp {
    /// Create an app descriptor for `url`.
    ///
    /// The command string is derived here and never changes afterwards.
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            command: format!("{} --app={}", BROWSER, url),
        }
    }

    /// Deferred launch: an [`Action`] the host evaluates later.
    ///
    /// Nothing is spawned here; the value is only data.
    pub fn deferred(&self) -> Action {
        Action::Spawn(self.command.clone())
    }

    /// Launch immediately through `spawner` (the pointer-click path).
    ///
    /// Each call spawns one process; rapid double-clicks are not debounced
    /// here — that is a host concern.
    pub fn spawn_now<S: Spawner>(&self, spawner: &S) -> Result<(), S::Error> {
        spawner.spawn(&self.command)
    }
}

/// The four bookmarked apps the standard configuration binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebApps {
    pub chatgpt: UrlApp,
    pub github: UrlApp,
    pub outlook: UrlApp,
    pub teams: UrlApp,
}

impl Default for WebApps {
    fn default() -> Self {
        Self {
            chatgpt: UrlApp::new("ChatGPT", "https://chat.openai.com"),
            github: UrlApp::new("GitHub", "https://github.com"),
            outlook: UrlApp::new("Outlook", "https://outlook.office.com/mail/"),
            teams: UrlApp::new("Teams", "https://teams.microsoft.com/go"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// A test double that records every spawned command.
    #[derive(Debug, Default)]
    struct MockSpawner {
        log: RefCell<Vec<String>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    impl Spawner for MockSpawner {
        type Error = MockError;

        fn spawn(&self, command: &str) -> Result<(), MockError> {
            self.log.borrow_mut().push(command.to_string());
            Ok(())
        }
    }

    #[test]
    fn command_follows_the_template() {
        let app = UrlApp::new("GitHub", "https://github.com");
        assert_eq!(app.command, "brave-browser --app=https://github.com");
    }

    #[test]
    fn deferred_and_immediate_resolve_to_the_same_command() {
        let spawner = MockSpawner::default();
        for app in [
            UrlApp::new("ChatGPT", "https://chat.openai.com"),
            UrlApp::new("Outlook", "https://outlook.office.com/mail/"),
        ] {
            app.spawn_now(&spawner).unwrap();
            let spawned = spawner.log.borrow().last().cloned().unwrap();
            assert_eq!(app.deferred(), Action::Spawn(spawned));
        }
    }

    #[test]
    fn deferred_spawns_nothing() {
        let app = UrlApp::new("Teams", "https://teams.microsoft.com/go");
        // Constructing the action must not go anywhere near a spawner.
        let action = app.deferred();
        assert_eq!(action.spawn_command(), Some(app.command.as_str()));
    }

    #[test]
    fn each_click_spawns_once() {
        let spawner = MockSpawner::default();
        let app = UrlApp::new("GitHub", "https://github.com");
        app.spawn_now(&spawner).unwrap();
        app.spawn_now(&spawner).unwrap();
        assert_eq!(spawner.log.borrow().len(), 2);
    }

    #[test]
    fn standard_bookmarks() {
        let apps = WebApps::default();
        assert_eq!(apps.chatgpt.url, "https://chat.openai.com");
        assert_eq!(apps.github.url, "https://github.com");
        assert_eq!(apps.outlook.url, "https://outlook.office.com/mail/");
        assert_eq!(apps.teams.url, "https://teams.microsoft.com/go");
    }
}
