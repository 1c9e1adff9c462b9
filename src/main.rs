//! edbridge - Preferences-driven launcher for external text editors
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use edbridge_core::prelude::*;
use edbridge_core::DEFAULT_CODE_ASSETS;
use edbridge_launcher::{
    keys, EditorBridge, ExternalEditor, LauncherSettings, PrefsStore, ProjectSync, Registry,
    TomlPrefs,
};

/// edbridge - Open files in a user-configured external editor
#[derive(Parser, Debug)]
#[command(name = "edbridge")]
#[command(about = "Open files in a user-configured external editor", long_about = None)]
struct Args {
    /// Preferences file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Open a file in the configured external editor
    Open {
        /// File to open
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Line to jump to (omit for "no specific location")
        #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
        line: i32,

        /// Column to jump to
        #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
        column: i32,

        /// Project root substituted for %p (defaults to the working directory)
        #[arg(long, value_name = "DIR")]
        project_root: Option<PathBuf>,
    },

    /// Trigger project-file regeneration
    Sync,

    /// Inspect or edit preferences
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// List advertised editor installations
    Installations {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective settings
    Show,

    /// Set a preference (the value is trimmed, as in a preferences panel)
    Set { key: String, value: String },

    /// Remove a preference so its default applies again
    Reset { key: String },
}

/// Project-file generation for the CLI: there is no host generator to call,
/// so a requested sync is only reported.
struct ReportSync;

impl ProjectSync for ReportSync {
    fn sync_project_files(&self) {
        info!("Project-file regeneration requested");
        println!("Project-file regeneration requested.");
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    edbridge_core::logging::init()?;

    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(TomlPrefs::default_path);
    let prefs = TomlPrefs::load(&config_path);

    match args.command {
        CliCommand::Open {
            file,
            line,
            column,
            project_root,
        } => {
            let project_root = match project_root {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let bridge = EditorBridge::new(prefs, ReportSync, project_root);

            let path = file.display().to_string();
            if bridge.open_file(&path, line, column) {
                println!("Opened {} in the external editor.", path);
            } else {
                eprintln!(
                    "Did not open {}: not a configured code asset, or the editor \
                     command failed (see the log).",
                    path
                );
                std::process::exit(1);
            }
        }

        CliCommand::Sync => {
            let settings = LauncherSettings::load(&prefs);
            if !settings.generate_project_files {
                println!("generate_project_files is disabled; nothing to do.");
                return Ok(());
            }
            let bridge = EditorBridge::new(prefs, ReportSync, std::env::current_dir()?);
            bridge.sync_all();
        }

        CliCommand::Config { action } => {
            run_config(action, prefs)?;
        }

        CliCommand::Installations { json } => {
            let mut registry = Registry::new();
            registry.register(Box::new(EditorBridge::new(
                prefs,
                ReportSync,
                std::env::current_dir()?,
            )));

            if json {
                let entries: Vec<serde_json::Value> = registry
                    .installations()
                    .into_iter()
                    .map(|install| {
                        serde_json::json!({
                            "name": install.name,
                            "path": install.path.display().to_string(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for install in registry.installations() {
                    println!("{}\t{}", install.name, install.path.display());
                }
            }
        }
    }

    Ok(())
}

fn run_config(action: ConfigAction, mut prefs: TomlPrefs) -> color_eyre::Result<()> {
    match action {
        ConfigAction::Show => {
            for &key in keys::ALL {
                if key == keys::GENERATE_PROJECT_FILES {
                    println!("{} = {}", key, prefs.get_bool(key, true));
                } else {
                    println!("{} = {:?}", key, prefs.get_string(key, default_for(key)));
                }
            }
        }

        ConfigAction::Set { key, value } => {
            check_key(&key)?;
            if key == keys::GENERATE_PROJECT_FILES {
                let flag: bool = value
                    .trim()
                    .parse()
                    .map_err(|_| color_eyre::eyre::eyre!("expected true or false, got {:?}", value))?;
                prefs.set_bool(&key, flag);
            } else {
                prefs.set_string(&key, value.trim());
            }
            prefs.save()?;
            println!("Set {}.", key);
        }

        ConfigAction::Reset { key } => {
            check_key(&key)?;
            prefs.delete(&key);
            prefs.save()?;
            println!("Reset {} to its default.", key);
        }
    }

    Ok(())
}

fn default_for(key: &str) -> &'static str {
    if key == keys::CODE_ASSETS {
        DEFAULT_CODE_ASSETS
    } else {
        ""
    }
}

fn check_key(key: &str) -> color_eyre::Result<()> {
    if keys::ALL.contains(&key) {
        Ok(())
    } else {
        Err(color_eyre::eyre::eyre!(
            "unknown setting {:?}; known settings: {}",
            key,
            keys::ALL.join(", ")
        ))
    }
}
