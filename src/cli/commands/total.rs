use crate::cli::parser::Commands;
use crate::core::calculator::downtime::compute_total;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Total { wait, solve } = cmd {
        let total = compute_total(wait, solve);
        if total.is_empty() {
            return Err(AppError::InvalidNumber("Wait or solution time".to_string()));
        }
        println!("{total}");
    }
    Ok(())
}
