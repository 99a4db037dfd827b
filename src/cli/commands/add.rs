use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::log::record;
use crate::errors::{AppError, AppResult};
use crate::models::new_entry::NewEntry;
use crate::source::open_source;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        shift,
        area,
        class,
        description,
        operator,
        originator,
        wait,
        solve,
        it_downtime,
    } = cmd
    {
        let path = cfg.data_path();
        if !open_source(&path).is_writable() {
            return Err(AppError::ReadOnlySource(path.display().to_string()));
        }

        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        let input = NewEntry {
            date: field(date),
            shift: field(shift),
            area: field(area),
            class: field(class),
            description: field(description),
            operator: field(operator),
            originator: field(originator),
            wait_time: field(wait),
            solution_time: field(solve),
            dead_time_it: field(it_downtime),
        };

        let entry = AddLogic::apply(&path, &input)?;

        success(format!(
            "Entry #{} added: {} | {} | {} | {} min",
            entry.index, entry.date, entry.area, entry.class, entry.dead_time
        ));

        record(
            cfg,
            "add",
            &entry.index.to_string(),
            &format!("{} {} {} ({} min)", entry.date, entry.area, entry.class, entry.dead_time),
        );
    }

    Ok(())
}
