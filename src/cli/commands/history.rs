use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, _cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    if matches!(cmd, Commands::History) {
        HistoryLogic::print_log(pool)?;
    }

    Ok(())
}
