use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::AggregateLogic;
use crate::errors::AppResult;
use crate::source::open_source;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{format_minutes, pad_right};
use std::collections::BTreeSet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Top { by, weeks, n, agg } = cmd {
        let store = open_source(&cfg.data_path()).load_store()?;
        let weeks: BTreeSet<u32> = weeks.iter().copied().collect();
        let n = n.unwrap_or(cfg.top_n);

        let ranking = AggregateLogic::top_by(&store, *by, &weeks, n, *agg);

        header(format!("Top {n} by {}", by.label()));

        if ranking.is_empty() {
            info("No downtime data for the selection.");
            return Ok(());
        }

        let width = ranking
            .iter()
            .map(|r| unicode_width::UnicodeWidthStr::width(r.label.as_str()))
            .max()
            .unwrap_or(0)
            .min(60);

        for (i, r) in ranking.iter().enumerate() {
            println!(
                "{:>2}. {} {}",
                i + 1,
                pad_right(&r.label, width),
                format_minutes(r.value)
            );
        }
    }
    Ok(())
}
