use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;

use ucconfig::template::DEFAULT_FILE_NAME;
use ucconfig::{
    ConfigArgs, ConfigLocation, IniConfig, LoadOutcome, UcConfigError, resolve_config_path,
};

const APP_NAME: &str = "uc-online";

/// Inspect and edit the uc-online launcher configuration.
#[derive(Parser, Debug)]
#[command(name = "ucconfig", version)]
struct Cli {
    /// Config file to use.
    #[arg(long, global = true, default_value = DEFAULT_FILE_NAME)]
    config: PathBuf,

    /// Use the platform config directory instead of `--config`.
    #[arg(long, global = true)]
    platform: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the launcher settings as the launcher reads them.
    Show,
    /// Manage the configuration file (gen, list, get, set, unset).
    Config(ConfigArgs),
}

fn init_logger(cli: &Cli) {
    let mut builder = Builder::new();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    builder
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn config_path(cli: &Cli) -> Result<PathBuf, UcConfigError> {
    if cli.platform {
        let file_name = cli
            .config
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_FILE_NAME);
        resolve_config_path(&ConfigLocation::Platform, file_name, APP_NAME)
    } else {
        Ok(cli.config.clone())
    }
}

fn show(config: &IniConfig) {
    let app_id = match config.app_id() {
        0 => "<not configured>".to_string(),
        id => id.to_string(),
    };
    let entries = [
        ("config", config.path().display().to_string()),
        ("app id", app_id),
        ("game executable", config.game_executable()),
        ("game arguments", config.game_arguments()),
        ("steam_appid file", config.steam_app_id_file()),
        ("steam_api.dll path", config.steam_api_dll_path()),
        ("logging", config.logging_enabled().to_string()),
        ("log file", config.log_file()),
    ];
    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in &entries {
        println!("{key:<width$}  {value}");
    }
}

fn run(cli: Cli) -> Result<(), UcConfigError> {
    let path = config_path(&cli)?;
    let mut config = IniConfig::open(path);
    if let LoadOutcome::Recovered { reason } = config.last_load() {
        eprintln!("Config was unreadable ({reason}); defaults restored.");
    }

    match cli.command {
        Commands::Show => show(&config),
        Commands::Config(args) => {
            let result = config.handle(&args.into_action())?;
            println!("{result}");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Config error:\n{e}");
        std::process::exit(1);
    }
}
