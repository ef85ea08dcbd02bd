use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::get_entries;
use crate::errors::AppResult;
use crate::models::filter::EntryFilter;
use crate::ui::report::entries_table;
use crate::utils::date;

/// List matching entries as an aligned table.
pub fn handle(cmd: &Commands, cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    if let Commands::Log {
        regex,
        columns,
        start,
        end,
    } = cmd
    {
        let filter = EntryFilter {
            description_pattern: regex.clone(),
            start_date: *start,
            end_date: *end,
        };
        let entries = get_entries(pool, &filter)?;

        let columns = if columns.is_empty() {
            &cfg.default_columns
        } else {
            columns
        };

        let table = entries_table(&entries, columns, date::now());
        if !table.is_empty() {
            println!("{}", table.render());
        }
    }

    Ok(())
}
