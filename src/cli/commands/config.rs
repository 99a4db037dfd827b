use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::env;
use std::path::Path;
use std::process::Command;

/// `$EDITOR`, then `$VISUAL`, then the platform default.
fn default_editor() -> String {
    env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} does not exist, run `bitacora init` first",
                    path.display()
                )));
            }

            let fallback = default_editor();
            let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

            if open_in(&chosen, &path) {
                success(format!("Configuration edited with '{chosen}'"));
            } else if chosen != fallback {
                warning(format!("Editor '{chosen}' failed, trying '{fallback}'"));
                if !open_in(&fallback, &path) {
                    return Err(AppError::Config(format!(
                        "could not edit {} with '{fallback}'",
                        path.display()
                    )));
                }
                success(format!("Configuration edited with '{fallback}'"));
            } else {
                return Err(AppError::Config(format!(
                    "could not edit {} with '{chosen}'",
                    path.display()
                )));
            }
        }
    }

    Ok(())
}
