use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::chart::plot_lines;
use crate::ui::report::daily_table;
use crate::utils::date;

/// Per-day totals, as a table or as a bar chart.
pub fn handle(cmd: &Commands, cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    if let Commands::Stats {
        plot,
        width,
        start,
        end,
    } = cmd
    {
        let buckets = StatsLogic::daily_totals(pool, *start, *end, date::now())?;

        if *plot {
            let width = width.unwrap_or(cfg.chart_width);
            if width == 0 {
                return Err(AppError::InvalidWidth(0));
            }
            for line in plot_lines(&buckets, width, &cfg.tick) {
                println!("{}", line);
            }
            return Ok(());
        }

        let table = daily_table(&buckets);
        if !table.is_empty() {
            println!("{}", table.render());
        }
    }

    Ok(())
}
