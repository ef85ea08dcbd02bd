use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::get_current;
use crate::errors::AppResult;
use crate::ui::report::status_line;
use crate::utils::date;

pub const NO_CLOCK: &str = "No clock started";

pub fn handle(cmd: &Commands, cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    if let Commands::Status { columns } = cmd {
        let columns = if columns.is_empty() {
            &cfg.default_columns
        } else {
            columns
        };

        match get_current(pool)? {
            Some(entry) => println!("{}", status_line(&entry, columns, date::now())),
            None => println!("{}", NO_CLOCK),
        }
    }

    Ok(())
}
