use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 40;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "in" => Colour::Green,
        "out" => Colour::Red,
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

/// Render one internal log row as `id: date | op (target) => message`.
pub fn format_log_line(
    id: i64,
    date: &str,
    operation: &str,
    target: &str,
    message: &str,
    id_w: usize,
    date_w: usize,
) -> String {
    let mut colored = color_for_operation(operation).paint(operation).to_string();
    if !target.is_empty() {
        colored.push_str(&format!(" ({})", target));
    }

    let visible = strip_ansi(&colored).chars().count();
    let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(visible));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        id,
        date,
        colored,
        padding,
        message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct HistoryLogic;

impl HistoryLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(pool)?;

        if rows.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let id_w = rows
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows.iter().map(|(_, date, ..)| date.len()).max().unwrap_or(0);

        for (id, date, operation, target, message) in &rows {
            println!(
                "{}",
                format_log_line(*id, date, operation, target, message, id_w, date_w)
            );
        }

        Ok(())
    }
}
