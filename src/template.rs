//! The default document written on first run, and the names it defines.
//!
//! This is the only place default values live. Accessors that need a fallback
//! for a missing key use the constants below so they agree with the file.

use crate::codec;
use crate::store::ConfigStore;

/// File name used when no path is given.
pub const DEFAULT_FILE_NAME: &str = "config.ini";

/// Section holding the launcher settings.
pub const LAUNCHER_SECTION: &str = "uc-online";
/// Section read by the logging collaborator.
pub const LOGGING_SECTION: &str = "Logging";

pub const APP_ID: &str = "AppID";
pub const GAME_EXECUTABLE: &str = "GameExecutable";
pub const GAME_ARGUMENTS: &str = "GameArguments";
pub const STEAM_APP_ID_FILE: &str = "SteamAppIdFile";
pub const STEAM_API_DLL_PATH: &str = "SteamApiDLLPath";
pub const ENABLE_LOGGING: &str = "EnableLogging";
pub const LOG_FILE: &str = "LogFile";

pub const DEFAULT_APP_ID: u32 = 480;
pub const DEFAULT_STEAM_APP_ID_FILE: &str = "steam_appid.txt";
pub const DEFAULT_ENABLE_LOGGING: bool = true;
pub const DEFAULT_LOG_FILE: &str = "uc-online.log";

/// The commented document written verbatim when the config file is missing.
pub const DEFAULT_DOCUMENT: &str = concat!(
    "[uc-online]\n",
    "; Set the appID to be used here, e.g., 730 for Counter-Strike 2)\n",
    "; (Please note that you will want to set it to a game you can get for free that is multiplayer. Anything else, and it won't work.)\n",
    "; Default appID is set to 480 (Spacewar), however you can change it to any appID you want.\n",
    "AppID = 480\n",
    "\n",
    "; Executable needs to be set directly. Unlike the dll, there is no 'default' for the exe.\n",
    "; Using UE5 games as an example, the correct launcher path will look like this:\n",
    "; .\\game folder\\game folder\\Binaries\\Win64\\game folder-Win64-Shipping.exe\n",
    "GameExecutable = \n",
    "\n",
    "; Set launch arguments where necessary - e.g., for Source Engine games like Half-Life: Source, set it to '-game hl1 -windowed' to launch it correctly.\n",
    "GameArguments = \n",
    "\n",
    "; Set the path to the steam_appid.txt file to use. (If one does not exist, it will be generated with the appID set at the top.)\n",
    "SteamAppIdFile = steam_appid.txt\n",
    "\n",
    "; Path to steam_api.dll (leave empty to use default location - in the same folder next to the launcher.)\n",
    "; Only set the path as the folder containing the dll relative to the launcher.\n",
    "; Again, using UE5 games as an example:\n",
    "; .\\game folder\\Engine\\Binaries\\ThirdParty\\Steamworks\\Steamv153\\Win64\n",
    "SteamApiDLLPath = \n",
    "\n",
    "[Logging]\n",
    "; Turns on logging. Not much gets logged, so it's not exactly useful. It does help with figuring out if you don't have .NET Runtime installed though.\n",
    "EnableLogging = true\n",
    "LogFile = uc-online.log\n",
);

/// The store obtained by parsing [`DEFAULT_DOCUMENT`].
pub fn default_store() -> ConfigStore {
    codec::parse(DEFAULT_DOCUMENT)
}
