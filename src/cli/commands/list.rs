use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::ViewAssembler;
use crate::errors::AppResult;
use crate::source::open_source;
use crate::ui::table_sink::TableSink;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter } = cmd {
        let criteria = filter.criteria()?;
        let store = open_source(&cfg.data_path()).load_store()?;

        let limit = filter.window(cfg.bitacora_limit);
        let view = ViewAssembler::with_store(store, limit);

        let mut sink = TableSink::new(&cfg.separator_char);
        view.refresh(&criteria, &mut sink)?;
    }
    Ok(())
}
