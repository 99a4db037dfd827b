use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(pool: &DbPool, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // local time, RFC 3339
    let now = Local::now().to_rfc3339();

    let mut stmt = pool.conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Record an operation that already happened; a failing log only warns.
pub fn record(cfg: &Config, operation: &str, target: &str, message: &str) {
    let result = DbPool::new(&cfg.log_db_path())
        .and_then(|pool| ttlog(&pool, operation, target, message));

    if let Err(e) = result {
        warning(format!("Operation log not updated: {e}"));
    }
}
