//! clocklog main entrypoint.

use clocklog::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(if e.is_validation() { 2 } else { 1 });
    }
}
