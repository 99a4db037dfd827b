use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::log::record;
use crate::errors::{AppError, AppResult};
use crate::source::open_source;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { indices, yes } = cmd {
        let path = cfg.data_path();
        let source = open_source(&path);
        if !source.is_writable() {
            return Err(AppError::ReadOnlySource(path.display().to_string()));
        }

        let store = source.load_store()?;
        let unknown = store.unknown_indices(indices);
        if !unknown.is_empty() {
            return Err(AppError::InvalidIndices(unknown));
        }

        let list: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
        let list = list.join(", ");

        if !*yes {
            warning(format!("Entries {list} will be removed from the data file."));
            if !confirm("Delete them? This cannot be undone.") {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let deleted = DeleteLogic::apply(&path, indices)?;
        success(format!("{deleted} entr{} deleted.", if deleted == 1 { "y" } else { "ies" }));

        record(cfg, "del", &list, &format!("{deleted} entries deleted"));
    }

    Ok(())
}
