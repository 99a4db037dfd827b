use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{iso_week_of, normalize};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Week { date } = cmd {
        let iso = iso_week_of(&normalize(date)).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        println!("{} ({})", iso.week, iso.year);
    }
    Ok(())
}
