//! **tilecfg** — declarative configuration for a tiling window manager.
//!
//! The host window manager owns the event loop, the windowing-protocol
//! connection, rendering, and input dispatch.  This crate contributes only
//! data: color palette, key and mouse binding tables, workspace groups,
//! the layout cycle, status-bar widgets, screen setup, floating-window
//! rules, and the scalar policy flags the host reads by fixed name.
//!
//! # Architecture
//!
//! Everything funnels into [`config::Config`]:
//!
//! * [`config::Config::build`] evaluates the whole configuration from
//!   scratch — at startup and again on every reload; nothing is mutated
//!   in between.
//! * Deferred behavior is expressed as tagged [`action::Action`] values
//!   rather than closures, so every binding is enumerable and testable
//!   without the host present.
//! * The host-facing seams live in [`host`]: a [`host::Spawner`] trait for
//!   immediate process launches and a [`host::HostEnv`] record for the
//!   environment facts (home directory, terminal emulator) the tables are
//!   built from.
//! * [`config::Config::validate`] verifies the contract the host relies
//!   on: collision-free key chords, resolvable group references, a usable
//!   bar, and no dropped floating defaults.

pub mod action;
pub mod apps;
pub mod bar;
pub mod config;
pub mod groups;
pub mod host;
pub mod keys;
pub mod layout;
pub mod mouse;
pub mod palette;
pub mod rules;
