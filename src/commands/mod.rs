// Command handlers module
pub mod monitor;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::core::config::{DEFAULT_INTERVAL_SECS, DEFAULT_TARGET};

/// Build the command line interface
pub fn build_cli() -> Command {
    Command::new("linkstat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Full-screen reachability monitor for a single host")
        .after_help("Keys: q / Esc / Ctrl+C quit")
        .arg(
            Arg::new("ipv6")
                .short('6')
                .help("Force IPv6 resolution")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interval")
                .short('n')
                .value_name("SECONDS")
                .help(format!(
                    "Seconds to wait between probes, at least 1 [default: {}]",
                    DEFAULT_INTERVAL_SECS
                ))
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("target")
                .value_name("TARGET")
                .help("Host name or address to monitor")
                .default_value(DEFAULT_TARGET)
                .index(1),
        )
}
