//! Seams between the configuration and its host runtime.
//!
//! The configuration itself never forks processes or reads input devices;
//! those concerns belong to the host window manager.  Two small seams are
//! defined here: [`Spawner`], the immediate process-spawn primitive used by
//! pointer-click callbacks, and [`HostEnv`], the environment facts
//! (home directory, terminal emulator) binding tables are built from.
//!
//! Both are injectable so tests never fork and never read the real
//! environment.

use std::path::Path;
use std::process;

/// Immediate process-spawn primitive.
///
/// An implementation might fork a detached child, forward the command over
/// IPC to the compositor, or record calls in a test double.  The command
/// line is split on whitespace; no shell is involved.
pub trait Spawner {
    /// The error type produced by this spawner.
    type Error: std::error::Error + Send + 'static;

    /// Execute `command`, detached from the caller.
    fn spawn(&self, command: &str) -> Result<(), Self::Error>;
}

/// [`Spawner`] that hands commands straight to the operating system.
pub struct ShellSpawner;

/// Errors from [`ShellSpawner`].
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("empty command")]
    EmptyCommand,
    #[error("spawn {command:?}: {source}")]
    Io {
        command: String,
        source: std::io::Error,
    },
}

impl Spawner for ShellSpawner {
    type Error = SpawnError;

    fn spawn(&self, command: &str) -> Result<(), SpawnError> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or(SpawnError::EmptyCommand)?;
        // The child is deliberately not waited on; reaping is the host's
        // (or init's) concern.
        process::Command::new(program)
            .args(parts)
            .spawn()
            .map_err(|e| SpawnError::Io {
                command: command.to_string(),
                source: e,
            })?;
        Ok(())
    }
}

/// Environment facts the binding tables depend on.
///
/// Detected once per (re)load and threaded through construction, so the
/// resulting tables are plain values with no hidden environment reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnv {
    /// The user's home directory (used to build script paths).
    pub home: String,
    /// Preferred terminal emulator command.
    pub terminal: String,
}

/// Terminal emulators probed, in order, when `$TERMINAL` is unset.
const KNOWN_TERMINALS: &[&str] = &[
    "alacritty",
    "kitty",
    "wezterm",
    "foot",
    "gnome-terminal",
    "konsole",
    "xterm",
];

impl HostEnv {
    /// Detect from the real process environment.
    ///
    /// `$TERMINAL` wins when set and non-empty; otherwise the first known
    /// emulator found on `$PATH` is used, falling back to `xterm`.
    pub fn detect() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        let terminal = std::env::var("TERMINAL")
            .ok()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(guess_terminal);
        Self { home, terminal }
    }

    /// A fixed environment, for tests and reproducible dumps.
    pub fn fixed(home: &str, terminal: &str) -> Self {
        Self {
            home: home.to_string(),
            terminal: terminal.to_string(),
        }
    }
}

/// Find the first known terminal emulator present on `$PATH`.
fn guess_terminal() -> String {
    let path = std::env::var("PATH").unwrap_or_default();
    for terminal in KNOWN_TERMINALS {
        let found = path
            .split(':')
            .filter(|dir| !dir.is_empty())
            .any(|dir| Path::new(dir).join(terminal).is_file());
        if found {
            return (*terminal).to_string();
        }
    }
    "xterm".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_env_is_plain_data() {
        let env = HostEnv::fixed("/home/user", "alacritty");
        assert_eq!(env.home, "/home/user");
        assert_eq!(env.terminal, "alacritty");
        assert_eq!(env, HostEnv::fixed("/home/user", "alacritty"));
    }

    #[test]
    fn shell_spawner_rejects_empty_command() {
        let err = ShellSpawner.spawn("   ").unwrap_err();
        assert!(matches!(err, SpawnError::EmptyCommand));
    }

    #[test]
    fn shell_spawner_reports_missing_program() {
        let err = ShellSpawner
            .spawn("tilecfg-definitely-not-a-real-program --flag")
            .unwrap_err();
        match err {
            SpawnError::Io { command, .. } => {
                assert!(command.starts_with("tilecfg-definitely-not-a-real-program"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
