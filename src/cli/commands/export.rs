use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::ViewAssembler;
use crate::db::log::record;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportSink, build_export_title};
use crate::source::open_source;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let path = Path::new(file);
        let format = match format {
            Some(f) => *f,
            None => ExportFormat::from_path(path)?,
        };

        let criteria = filter.criteria()?;
        let store = open_source(&cfg.data_path()).load_store()?;
        let view = ViewAssembler::with_store(store, filter.window(cfg.bitacora_limit));

        let mut sink = ExportSink::new(format, path, *force, build_export_title(&criteria));
        view.refresh(&criteria, &mut sink)?;

        if sink.written() > 0 {
            record(
                cfg,
                "export",
                file,
                &format!("{} entries exported as {}", sink.written(), format.as_str()),
            );
        }
    }
    Ok(())
}
