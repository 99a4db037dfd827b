use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportLogic, ReportSelection};
use crate::db::log::record;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::source::open_source;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        file,
        weeks,
        years,
        months,
        force,
    } = cmd
    {
        let path = Path::new(file);
        ensure_writable(path, *force)?;

        let selection = ReportSelection {
            weeks: weeks.iter().copied().collect(),
            years: years.iter().copied().collect(),
            months: months
                .iter()
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect(),
        };

        let store = open_source(&cfg.data_path()).load_store()?;
        info(format!("Generating report: {}", path.display()));

        let report =
            ReportLogic::generate(&store, &selection, path, cfg.top_n, cfg.downtime_target)?;

        success(format!(
            "Report for {} written to {}",
            report.period_label,
            path.display()
        ));

        record(cfg, "report", file, &report.period_label);
    }
    Ok(())
}
