//! Persistent INI configuration for the uc-online launcher.
//!
//! The launcher keeps a handful of settings (Steam app id, game executable,
//! launch arguments, `steam_api.dll` folder, logging toggle) in a small,
//! hand-editable INI file. This crate owns that file: it parses it into an
//! in-memory store, hands out typed accessors, and writes it back.
//!
//! ```ignore
//! let mut config = IniConfig::open("config.ini");
//! if config.app_id() == 0 {
//!     config.set_app_id(480);
//!     config.save()?;
//! }
//! ```
//!
//! On first run `config.ini` does not exist, so a commented default document
//! is written and loaded. After that, the file is read as-is.
//!
//! # File format
//!
//! ```text
//! [uc-online]
//! ; comment
//! AppID = 480
//! GameExecutable =
//!
//! [Logging]
//! EnableLogging = true
//! ```
//!
//! - Lines are trimmed. Blank lines and lines starting with `;` or `#` are
//!   comments.
//! - `[name]` opens a section. Opening the same section again (in any case)
//!   continues it.
//! - `key = value` splits at the first `=`; both sides are trimmed. The last
//!   occurrence of a key wins.
//! - Anything else, and any key-value line before the first section, is
//!   ignored without error. There is no quoting, escaping, nesting or
//!   multi-line value.
//!
//! Section and key names are case-insensitive. The casing a name was first
//! seen with is the one written back out.
//!
//! # Round-tripping
//!
//! [`IniConfig::save`] renders the whole store from scratch: sections and keys
//! in the order they were first seen, `key = value` with single spaces, one
//! blank line after each section. Comments are not part of the store, so a
//! loaded-then-saved file loses them. Only the default document carries
//! comments.
//!
//! # Errors and recovery
//!
//! Loading never fails. [`IniConfig::load`] reports a [`LoadOutcome`]:
//!
//! - missing file: the default document is written and loaded;
//! - unreadable or undecodable file: the error is logged and the default
//!   document is written over it;
//! - the default document cannot be written: the error is logged and the
//!   in-memory store still holds the defaults.
//!
//! [`IniConfig::save`] returns a [`UcConfigError`] and logs it; the in-memory
//! store is kept. Accessors never fail: a missing key yields the fallback.
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade. The
//! `ucconfig` binary wires it to `env_logger`.
//!
//! # Saving
//!
//! Setters only change memory. Call [`IniConfig::save`] to persist. The one
//! exception is [`IniConfig::set_steam_api_dll_path`], which saves at once.
//!
//! # File systems
//!
//! I/O goes through the [`FileSystem`] trait. [`IniConfig::open`] uses
//! [`StdFileSystem`]; [`IniConfig::with_fs`] takes any implementation.
//! Access is whole-document only, with no locking. Callers sharing a config
//! between threads or processes must serialize access themselves.
//!
//! # Clap adapter
//!
//! With the `clap` feature (on by default), [`ConfigArgs`] provides
//! `config gen|list|get|set|unset` subcommands that map to [`ConfigAction`]
//! and run through [`IniConfig::handle`].

pub mod error;
pub mod types;

pub mod codec;
mod config;
#[cfg(feature = "clap")]
mod cli;
pub mod fs;
mod location;
mod ops;
pub mod store;
pub mod template;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "clap")]
pub use cli::{ConfigArgs, ConfigSubcommand};
pub use config::IniConfig;
pub use error::UcConfigError;
pub use fs::{FileSystem, StdFileSystem};
pub use location::{resolve_config_path, resolve_dir};
pub use ops::{ConfigResult, split_key};
pub use store::{ConfigStore, Section};
pub use types::{ConfigAction, ConfigLocation, LoadOutcome};
