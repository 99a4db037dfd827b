use crate::cli::parser::{Commands, TrendKind};
use crate::config::Config;
use crate::core::aggregate::{AggregateLogic, DowntimeColumn};
use crate::core::calculator::downtime::format_decimal;
use crate::errors::AppResult;
use crate::source::open_source;
use crate::ui::messages::{header, info};
use crate::utils::date::month_label;
use std::collections::BTreeSet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trend {
        kind,
        weeks,
        months,
    } = cmd
    {
        let store = open_source(&cfg.data_path()).load_store()?;
        let weeks: BTreeSet<u32> = weeks.iter().copied().collect();
        let months: BTreeSet<String> = months.iter().map(|m| m.trim().to_string()).collect();

        let points: Vec<(String, f64)> = match kind {
            TrendKind::DowntimeWeek => {
                header(format!(
                    "Downtime per week (target {} min)",
                    format_decimal(cfg.downtime_target)
                ));
                AggregateLogic::downtime_per_week(&store, &weeks)
                    .into_iter()
                    .map(|w| (format!("W{}", w.week), w.value))
                    .collect()
            }
            TrendKind::DowntimeMonth => {
                header("IT downtime per month");
                AggregateLogic::downtime_per_month(&store, &months, DowntimeColumn::It)
                    .into_iter()
                    .map(|m| (month_label(&m.month), m.value))
                    .collect()
            }
            TrendKind::FrequencyMonth => {
                header("Incidents per month");
                AggregateLogic::frequency_per_month(&store, &months)
                    .into_iter()
                    .map(|m| (month_label(&m.month), m.value))
                    .collect()
            }
        };

        if points.is_empty() {
            info("No data for the selection.");
            return Ok(());
        }

        let over_target = |v: f64| *kind == TrendKind::DowntimeWeek && v > cfg.downtime_target;
        for (label, value) in points {
            let mark = if over_target(value) { "  ▲ over target" } else { "" };
            println!("{:<10} {:>10}{}", label, format_decimal(value), mark);
        }
    }
    Ok(())
}
