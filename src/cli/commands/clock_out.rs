use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, _cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    if matches!(cmd, Commands::Out) {
        ClockLogic::clock_out(pool, date::now())?;
    }

    Ok(())
}
