//! The persistent config store: an in-memory [`ConfigStore`] bound to a file.
//!
//! Loading never fails. A missing file is a first run and gets the default
//! document; an unreadable file is replaced by the default document. Saving
//! always re-renders the whole store. Setters only change memory, with one
//! exception: [`IniConfig::set_steam_api_dll_path`] saves immediately.

use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::UcConfigError;
use crate::fs::{self, FileSystem, StdFileSystem};
use crate::store::ConfigStore;
use crate::template::{self, LAUNCHER_SECTION, LOGGING_SECTION};
use crate::types::LoadOutcome;

/// A configuration file and its parsed contents.
#[derive(Debug)]
pub struct IniConfig<F: FileSystem = StdFileSystem> {
    path: PathBuf,
    fs: F,
    store: ConfigStore,
    last_load: LoadOutcome,
}

impl IniConfig {
    /// Open (and load) the config file at `path` on the real file system.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, StdFileSystem)
    }
}

impl Default for IniConfig {
    /// Opens `config.ini` in the working directory.
    fn default() -> Self {
        Self::open(template::DEFAULT_FILE_NAME)
    }
}

impl<F: FileSystem> IniConfig<F> {
    /// Open (and load) the config file at `path` through `fs`.
    pub fn with_fs(path: impl Into<PathBuf>, fs: F) -> Self {
        let mut config = Self {
            path: path.into(),
            fs,
            store: ConfigStore::new(),
            last_load: LoadOutcome::Loaded,
        };
        config.load();
        config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    pub(crate) fn file_system(&self) -> &F {
        &self.fs
    }

    /// Outcome of the most recent [`load`](Self::load).
    pub fn last_load(&self) -> &LoadOutcome {
        &self.last_load
    }

    /// Replace the in-memory store with the file's contents.
    pub fn load(&mut self) -> LoadOutcome {
        self.store.clear();

        let outcome = if !self.fs.exists(&self.path) {
            log::info!(
                "No config found at {}, writing defaults",
                self.path.display()
            );
            self.write_defaults(None)
        } else {
            match fs::read_text(&self.fs, &self.path) {
                Ok(text) => {
                    self.store = codec::parse(&text);
                    log::debug!(
                        "Loaded {} section(s) from {}",
                        self.store.len(),
                        self.path.display()
                    );
                    LoadOutcome::Loaded
                }
                Err(e) => {
                    log::error!("Error loading config: {e}");
                    self.write_defaults(Some(e.to_string()))
                }
            }
        };

        self.last_load = outcome.clone();
        outcome
    }

    /// Write the default document and load the store from it.
    fn write_defaults(&mut self, recovering_from: Option<String>) -> LoadOutcome {
        self.store = template::default_store();
        match fs::write_text(&self.fs, &self.path, template::DEFAULT_DOCUMENT) {
            Ok(()) => match recovering_from {
                Some(reason) => LoadOutcome::Recovered { reason },
                None => LoadOutcome::DefaultsWritten,
            },
            Err(e) => {
                log::error!("Error creating default config: {e}");
                LoadOutcome::DefaultsUnpersisted {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Render the whole store and overwrite the file.
    ///
    /// On failure the error is logged and returned; the in-memory store is
    /// left untouched and may now differ from the file.
    pub fn save(&self) -> Result<(), UcConfigError> {
        let text = codec::render(&self.store);
        fs::write_text(&self.fs, &self.path, &text)
            .inspect_err(|e| log::error!("Error saving config: {e}"))?;
        log::debug!("Saved config to {}", self.path.display());
        Ok(())
    }

    /// Case-insensitive lookup, `fallback` when the section or key is absent.
    pub fn get_value(&self, section: &str, key: &str, fallback: &str) -> String {
        self.store
            .get(section, key)
            .unwrap_or(fallback)
            .to_string()
    }

    /// Insert or overwrite a value in memory. Call [`save`](Self::save) to persist.
    pub fn set_value(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.store.set(section, key, value);
    }

    /// The Steam application id, or `0` when it is missing, not a number, or zero.
    pub fn app_id(&self) -> u32 {
        self.store
            .get(LAUNCHER_SECTION, template::APP_ID)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(0)
    }

    pub fn set_app_id(&mut self, app_id: u32) {
        self.set_value(LAUNCHER_SECTION, template::APP_ID, app_id.to_string());
    }

    pub fn game_executable(&self) -> String {
        self.get_value(LAUNCHER_SECTION, template::GAME_EXECUTABLE, "")
    }

    pub fn set_game_executable(&mut self, path: &str) {
        self.set_value(LAUNCHER_SECTION, template::GAME_EXECUTABLE, path);
    }

    pub fn game_arguments(&self) -> String {
        self.get_value(LAUNCHER_SECTION, template::GAME_ARGUMENTS, "")
    }

    pub fn set_game_arguments(&mut self, arguments: &str) {
        self.set_value(LAUNCHER_SECTION, template::GAME_ARGUMENTS, arguments);
    }

    /// Folder containing `steam_api.dll`, empty for "next to the launcher".
    pub fn steam_api_dll_path(&self) -> String {
        self.get_value(LAUNCHER_SECTION, template::STEAM_API_DLL_PATH, "")
    }

    /// Set the DLL folder and save the whole store straight away.
    pub fn set_steam_api_dll_path(&mut self, dll_path: &str) -> Result<(), UcConfigError> {
        self.set_value(LAUNCHER_SECTION, template::STEAM_API_DLL_PATH, dll_path);
        self.save()
    }

    pub fn steam_app_id_file(&self) -> String {
        self.get_value(
            LAUNCHER_SECTION,
            template::STEAM_APP_ID_FILE,
            template::DEFAULT_STEAM_APP_ID_FILE,
        )
    }

    pub fn set_steam_app_id_file(&mut self, path: &str) {
        self.set_value(LAUNCHER_SECTION, template::STEAM_APP_ID_FILE, path);
    }

    /// Accepts `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off` in any case.
    /// Anything else reads as the default.
    pub fn logging_enabled(&self) -> bool {
        let Some(raw) = self.store.get(LOGGING_SECTION, template::ENABLE_LOGGING) else {
            return template::DEFAULT_ENABLE_LOGGING;
        };
        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => true,
            "false" | "0" | "no" | "off" => false,
            _ => {
                log::warn!("Unrecognised {} value '{raw}'", template::ENABLE_LOGGING);
                template::DEFAULT_ENABLE_LOGGING
            }
        }
    }

    pub fn set_logging_enabled(&mut self, enabled: bool) {
        self.set_value(LOGGING_SECTION, template::ENABLE_LOGGING, enabled.to_string());
    }

    pub fn log_file(&self) -> String {
        self.get_value(LOGGING_SECTION, template::LOG_FILE, template::DEFAULT_LOG_FILE)
    }

    pub fn set_log_file(&mut self, path: &str) {
        self.set_value(LOGGING_SECTION, template::LOG_FILE, path);
    }
}
