//! Config operations: template generation, key lookup, listing, edits, and
//! the result types callers display.
//!
//! Provides the logic behind `config gen`, `config list`, `config get`,
//! `config set` and `config unset`. Keys are dotted `section.key` paths; the
//! split happens at the first `.`, so section names cannot contain one but
//! keys can.

use std::fmt;
use std::path::PathBuf;

use crate::config::IniConfig;
use crate::error::UcConfigError;
use crate::fs::{self, FileSystem};
use crate::template;
use crate::types::ConfigAction;

/// Result of a config operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// The default document.
    Template(String),
    /// Confirmation that the default document was written to a file.
    TemplateWritten { path: PathBuf },
    /// A key's stored value.
    KeyValue { key: String, value: String },
    /// Confirmation that a value was persisted.
    ValueSet { key: String, value: String },
    /// Confirmation that a value was removed.
    ValueUnset { key: String },
    /// All stored key-value pairs as dotted keys.
    Listing { entries: Vec<(String, String)> },
    /// The whole store as a JSON object.
    Json(String),
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::Template(t) => write!(f, "{t}"),
            ConfigResult::TemplateWritten { path } => {
                write!(f, "Config template written to {}", path.display())
            }
            ConfigResult::KeyValue { key, value } => write!(f, "{key} = {value}"),
            ConfigResult::ValueSet { key, value } => write!(f, "Set {key} = {value}"),
            ConfigResult::ValueUnset { key } => write!(f, "Unset {key}"),
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
            ConfigResult::Json(j) => write!(f, "{j}"),
        }
    }
}

/// Split a dotted `section.key` path at the first `.`.
pub fn split_key(dotted_key: &str) -> Result<(&str, &str), UcConfigError> {
    match dotted_key.split_once('.') {
        Some((section, key)) if !section.is_empty() && !key.trim().is_empty() => {
            Ok((section, key.trim()))
        }
        _ => Err(UcConfigError::InvalidKey(dotted_key.into())),
    }
}

impl<F: FileSystem> IniConfig<F> {
    /// Run a [`ConfigAction`] against this config.
    ///
    /// `Set` and `Unset` save the whole store after changing it.
    pub fn handle(&mut self, action: &ConfigAction) -> Result<ConfigResult, UcConfigError> {
        match action {
            ConfigAction::Gen { output: None } => {
                Ok(ConfigResult::Template(template::DEFAULT_DOCUMENT.to_string()))
            }
            ConfigAction::Gen {
                output: Some(path),
            } => {
                fs::write_text(self.file_system(), path, template::DEFAULT_DOCUMENT)?;
                Ok(ConfigResult::TemplateWritten { path: path.clone() })
            }
            ConfigAction::List { json: false } => Ok(self.listing()),
            ConfigAction::List { json: true } => {
                let json = serde_json::to_string_pretty(self.store())?;
                Ok(ConfigResult::Json(json))
            }
            ConfigAction::Get { key } => {
                let (section, name) = split_key(key)?;
                let value = self
                    .store()
                    .get(section, name)
                    .ok_or_else(|| UcConfigError::KeyNotFound(key.clone()))?;
                Ok(ConfigResult::KeyValue {
                    key: key.clone(),
                    value: value.to_string(),
                })
            }
            ConfigAction::Set { key, value } => {
                let (section, name) = split_key(key)?;
                if value.contains(['\r', '\n']) {
                    return Err(UcConfigError::InvalidValue {
                        key: key.clone(),
                        reason: "values cannot span lines".into(),
                    });
                }
                self.set_value(section, name, value.as_str());
                self.save()?;
                Ok(ConfigResult::ValueSet {
                    key: key.clone(),
                    value: value.clone(),
                })
            }
            ConfigAction::Unset { key } => {
                let (section, name) = split_key(key)?;
                self.store_mut()
                    .remove(section, name)
                    .ok_or_else(|| UcConfigError::KeyNotFound(key.clone()))?;
                self.save()?;
                Ok(ConfigResult::ValueUnset { key: key.clone() })
            }
        }
    }

    fn listing(&self) -> ConfigResult {
        let entries = self
            .store()
            .entries()
            .map(|(section, key, value)| (format!("{section}.{key}"), value.to_string()))
            .collect();
        ConfigResult::Listing { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::MemoryFs;

    const PATH: &str = "config.ini";

    #[test]
    fn split_key_at_first_dot() {
        assert_eq!(split_key("uc-online.AppID").unwrap(), ("uc-online", "AppID"));
        assert_eq!(split_key("s.a.b").unwrap(), ("s", "a.b"));
    }

    #[test]
    fn split_key_rejects_bad_paths() {
        for bad in ["AppID", ".AppID", "uc-online.", "uc-online. "] {
            assert!(
                matches!(split_key(bad), Err(UcConfigError::InvalidKey(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn gen_returns_default_document() {
        let fs = MemoryFs::new();
        let mut config = IniConfig::with_fs(PATH, &fs);
        let result = config.handle(&ConfigAction::Gen { output: None }).unwrap();
        assert_eq!(result, ConfigResult::Template(template::DEFAULT_DOCUMENT.into()));
    }

    #[test]
    fn gen_writes_to_output() {
        let fs = MemoryFs::new();
        let mut config = IniConfig::with_fs(PATH, &fs);
        let output = PathBuf::from("sample.ini");
        let result = config
            .handle(&ConfigAction::Gen {
                output: Some(output.clone()),
            })
            .unwrap();
        assert_eq!(result, ConfigResult::TemplateWritten { path: output });
        assert_eq!(
            fs.contents("sample.ini").as_deref(),
            Some(template::DEFAULT_DOCUMENT)
        );
    }

    #[test]
    fn get_existing_key() {
        let fs = MemoryFs::with_file(PATH, "[uc-online]\nAppID = 730\n");
        let mut config = IniConfig::with_fs(PATH, &fs);
        let result = config
            .handle(&ConfigAction::Get {
                key: "UC-ONLINE.appid".into(),
            })
            .unwrap();
        match result {
            ConfigResult::KeyValue { value, .. } => assert_eq!(value, "730"),
            other => panic!("Expected KeyValue, got {other:?}"),
        }
    }

    #[test]
    fn get_missing_key() {
        let fs = MemoryFs::with_file(PATH, "[uc-online]\nAppID = 730\n");
        let mut config = IniConfig::with_fs(PATH, &fs);
        let result = config.handle(&ConfigAction::Get {
            key: "uc-online.GameExecutable".into(),
        });
        assert!(matches!(result, Err(UcConfigError::KeyNotFound(_))));
    }

    #[test]
    fn set_persists() {
        let fs = MemoryFs::with_file(PATH, "[uc-online]\nAppID = 730\n");
        let mut config = IniConfig::with_fs(PATH, &fs);
        let result = config
            .handle(&ConfigAction::Set {
                key: "uc-online.GameArguments".into(),
                value: "-windowed".into(),
            })
            .unwrap();
        assert!(matches!(result, ConfigResult::ValueSet { .. }));
        assert_eq!(
            fs.contents(PATH).as_deref(),
            Some("[uc-online]\nAppID = 730\nGameArguments = -windowed\n\n")
        );
    }

    #[test]
    fn set_rejects_line_breaks() {
        let fs = MemoryFs::with_file(PATH, "[uc-online]\nGameArguments = -x\n");
        let mut config = IniConfig::with_fs(PATH, &fs);

        for value in ["-x\n[Logging]\nEnableLogging = false", "-x\r-y"] {
            let result = config.handle(&ConfigAction::Set {
                key: "uc-online.GameArguments".into(),
                value: value.into(),
            });
            assert!(matches!(result, Err(UcConfigError::InvalidValue { .. })));
        }
        assert_eq!(config.game_arguments(), "-x");
        assert_eq!(fs.writes.get(), 0);
        assert_eq!(config.store().get("Logging", "EnableLogging"), None);
    }

    #[test]
    fn set_surfaces_write_failure() {
        let fs = MemoryFs::with_file(PATH, "[uc-online]\nAppID = 730\n");
        let mut config = IniConfig::with_fs(PATH, &fs);
        fs.fail_writes.set(true);
        let result = config.handle(&ConfigAction::Set {
            key: "uc-online.AppID".into(),
            value: "440".into(),
        });
        assert!(matches!(result, Err(UcConfigError::Io { .. })));
        assert_eq!(config.app_id(), 440);
    }

    #[test]
    fn unset_removes_and_persists() {
        let fs = MemoryFs::with_file(PATH, "[uc-online]\nAppID = 730\nGameArguments = -x\n");
        let mut config = IniConfig::with_fs(PATH, &fs);
        let result = config
            .handle(&ConfigAction::Unset {
                key: "uc-online.GameArguments".into(),
            })
            .unwrap();
        assert_eq!(
            result,
            ConfigResult::ValueUnset {
                key: "uc-online.GameArguments".into()
            }
        );
        assert_eq!(
            fs.contents(PATH).as_deref(),
            Some("[uc-online]\nAppID = 730\n\n")
        );
    }

    #[test]
    fn unset_missing_key() {
        let fs = MemoryFs::with_file(PATH, "[uc-online]\n");
        let mut config = IniConfig::with_fs(PATH, &fs);
        let result = config.handle(&ConfigAction::Unset {
            key: "uc-online.AppID".into(),
        });
        assert!(matches!(result, Err(UcConfigError::KeyNotFound(_))));
    }

    #[test]
    fn list_uses_dotted_keys_in_order() {
        let fs = MemoryFs::new();
        let mut config = IniConfig::with_fs(PATH, &fs);
        match config.handle(&ConfigAction::List { json: false }).unwrap() {
            ConfigResult::Listing { entries } => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(
                    keys,
                    vec![
                        "uc-online.AppID",
                        "uc-online.GameExecutable",
                        "uc-online.GameArguments",
                        "uc-online.SteamAppIdFile",
                        "uc-online.SteamApiDLLPath",
                        "Logging.EnableLogging",
                        "Logging.LogFile",
                    ]
                );
                assert_eq!(entries[0].1, "480");
            }
            other => panic!("Expected Listing, got {other:?}"),
        }
    }

    #[test]
    fn list_json() {
        let fs = MemoryFs::with_file(PATH, "[uc-online]\nAppID = 730\n");
        let mut config = IniConfig::with_fs(PATH, &fs);
        match config.handle(&ConfigAction::List { json: true }).unwrap() {
            ConfigResult::Json(json) => {
                let value: serde_json::Value = serde_json::from_str(&json).unwrap();
                assert_eq!(value["uc-online"]["AppID"], "730");
            }
            other => panic!("Expected Json, got {other:?}"),
        }
    }

    #[test]
    fn listing_display_format() {
        let result = ConfigResult::Listing {
            entries: vec![
                ("uc-online.AppID".into(), "480".into()),
                ("Logging.LogFile".into(), "uc-online.log".into()),
            ],
        };
        assert_eq!(
            format!("{result}"),
            "uc-online.AppID = 480\nLogging.LogFile = uc-online.log"
        );
    }
}
