use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;

/// Start the clock, optionally staying in the foreground until Ctrl-C.
pub fn handle(cmd: &Commands, _cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    if let Commands::In { description, wait } = cmd {
        ClockLogic::clock_in(pool, date::now(), description)?;

        if *wait {
            info("Clock running, press Ctrl-C to stop.");
            ClockLogic::wait_for_interrupt()?;
            ClockLogic::clock_out(pool, date::now())?;
        }
    }

    Ok(())
}
