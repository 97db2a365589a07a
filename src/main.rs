//! Clocky main entrypoint.

use clocky::run;
use clocky::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
