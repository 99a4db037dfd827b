use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data file with the standard header, when missing
///  - the operation log database
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing bitacora…");

    cfg.init_all(cli.test)?;

    let db_path = cfg.log_db_path();
    let pool = DbPool::new(&db_path)?;

    if let Err(e) = ttlog(
        &pool,
        "init",
        &cfg.data_path().to_string_lossy(),
        &format!("Operation log initialized at {}", db_path.display()),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 bitacora initialization completed!");
    Ok(())
}
