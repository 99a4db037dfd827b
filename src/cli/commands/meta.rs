use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::meta::MetaLogic;
use crate::errors::AppResult;
use crate::source::open_source;
use crate::ui::messages::header;
use crate::utils::date::month_label;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Meta { json } = cmd {
        let store = open_source(&cfg.data_path()).load_store()?;
        let meta = MetaLogic::from_store(&store);

        if *json {
            println!("{}", serde_json::to_string_pretty(&meta)?);
            return Ok(());
        }

        let weeks: Vec<String> = meta.weeks.iter().map(|w| w.to_string()).collect();
        let months: Vec<String> = meta
            .months
            .iter()
            .map(|m| format!("{m} ({})", month_label(m)))
            .collect();
        let years: Vec<String> = meta.years.iter().map(|y| y.to_string()).collect();

        for (title, values) in [
            ("Weeks", weeks),
            ("Months", months),
            ("Years", years),
            ("Areas", meta.areas.clone()),
            ("Classes", meta.classes.clone()),
        ] {
            header(title);
            if values.is_empty() {
                println!("  (none)");
            } else {
                println!("  {}", values.join(", "));
            }
            println!();
        }
    }
    Ok(())
}
