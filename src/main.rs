use colored::*;

use linkstat::commands::{self, build_cli};

fn main() {
    linkstat::init_logging();

    let matches = build_cli().get_matches();

    if let Err(e) = commands::monitor::execute(&matches) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
