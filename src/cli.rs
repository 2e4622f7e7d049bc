//! Clap adapter for the config store.
//!
//! Compiled only with the `clap` feature. [`ConfigArgs`] can be embedded in a
//! launcher's own `#[derive(Subcommand)]` enum to get
//! `config gen|list|get|set|unset`. The only bridge to the core is
//! [`ConfigArgs::into_action()`]; everything else goes through
//! [`IniConfig::handle()`](crate::IniConfig::handle).

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::types::ConfigAction;

/// Clap-derived args for the `config` subcommand group.
///
/// ```ignore
/// #[derive(Subcommand)]
/// enum Commands {
///     Config(ConfigArgs),
/// }
/// ```
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigSubcommand>,
}

/// Available config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show every stored key-value pair.
    List {
        /// Print the store as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the commented default configuration.
    Gen {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the stored value for a key.
    Get {
        /// Dotted key path (e.g. "uc-online.AppID").
        key: String,
    },
    /// Store a value and save the config file.
    Set {
        /// Dotted key path (e.g. "uc-online.AppID").
        key: String,
        /// Value to set.
        value: String,
    },
    /// Remove a key and save the config file.
    Unset {
        /// Dotted key path (e.g. "uc-online.GameArguments").
        key: String,
    },
}

impl ConfigArgs {
    /// Convert clap-parsed args into a framework-agnostic `ConfigAction`.
    ///
    /// Bare `config` (no subcommand) maps to a plain-text listing.
    pub fn into_action(self) -> ConfigAction {
        match self.action {
            None => ConfigAction::List { json: false },
            Some(ConfigSubcommand::List { json }) => ConfigAction::List { json },
            Some(ConfigSubcommand::Gen { output }) => ConfigAction::Gen { output },
            Some(ConfigSubcommand::Get { key }) => ConfigAction::Get { key },
            Some(ConfigSubcommand::Set { key, value }) => ConfigAction::Set { key, value },
            Some(ConfigSubcommand::Unset { key }) => ConfigAction::Unset { key },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Wrapper so we can use `try_parse_from` on the subcommand.
    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    fn parse(args: &[&str]) -> ConfigArgs {
        TestCli::try_parse_from(args).unwrap().config
    }

    #[test]
    fn parse_gen_no_output() {
        let action = parse(&["test", "gen"]).into_action();
        assert_eq!(action, ConfigAction::Gen { output: None });
    }

    #[test]
    fn parse_gen_with_output() {
        let action = parse(&["test", "gen", "-o", "config.ini"]).into_action();
        assert_eq!(
            action,
            ConfigAction::Gen {
                output: Some(PathBuf::from("config.ini"))
            }
        );
    }

    #[test]
    fn parse_get() {
        let action = parse(&["test", "get", "uc-online.AppID"]).into_action();
        assert_eq!(
            action,
            ConfigAction::Get {
                key: "uc-online.AppID".into()
            }
        );
    }

    #[test]
    fn parse_set() {
        let action = parse(&["test", "set", "uc-online.AppID", "730"]).into_action();
        assert_eq!(
            action,
            ConfigAction::Set {
                key: "uc-online.AppID".into(),
                value: "730".into(),
            }
        );
    }

    #[test]
    fn parse_set_value_with_leading_dash() {
        let action = parse(&[
            "test",
            "set",
            "uc-online.GameArguments",
            "--",
            "-game hl1 -windowed",
        ])
        .into_action();
        assert_eq!(
            action,
            ConfigAction::Set {
                key: "uc-online.GameArguments".into(),
                value: "-game hl1 -windowed".into(),
            }
        );
    }

    #[test]
    fn parse_unset() {
        let action = parse(&["test", "unset", "Logging.LogFile"]).into_action();
        assert_eq!(
            action,
            ConfigAction::Unset {
                key: "Logging.LogFile".into()
            }
        );
    }

    #[test]
    fn parse_bare_config_is_list() {
        let action = parse(&["test"]).into_action();
        assert_eq!(action, ConfigAction::List { json: false });
    }

    #[test]
    fn parse_list_json() {
        let action = parse(&["test", "list", "--json"]).into_action();
        assert_eq!(action, ConfigAction::List { json: true });
    }

    #[test]
    fn invalid_subcommand_errors() {
        let result = TestCli::try_parse_from(["test", "nope"]);
        assert!(result.is_err());
    }
}
