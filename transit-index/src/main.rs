use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use tracing::debug;

use transit_index::index::{IndexConfig, compute_index_with};
use transit_index::input::{InputError, read_network};
use transit_index::logging::init_tracing;
use transit_index::network::Network;
use transit_index::report::Report;

const USAGE: &str = "usage: transit-index [--report] [PATH]";

/// Exit status for unreadable or malformed input.
const INPUT_ERROR: u8 = 2;

struct Args {
    report: bool,
    path: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        report: false,
        path: None,
    };
    for arg in std::env::args().skip(1) {
        if arg == "--report" {
            args.report = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(format!("unknown option {arg}\n{USAGE}"));
        } else if args.path.is_some() {
            return Err(USAGE.to_string());
        } else {
            args.path = Some(arg);
        }
    }
    Ok(args)
}

fn load(path: Option<&str>) -> Result<Network, InputError> {
    match path {
        None | Some("-") => read_network(io::stdin().lock()),
        Some(path) => read_network(BufReader::new(File::open(path)?)),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(INPUT_ERROR);
        }
    };

    let network = match load(args.path.as_deref()) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Failed to read network: {e}");
            return ExitCode::from(INPUT_ERROR);
        }
    };

    let outcome = compute_index_with(&network, &IndexConfig::default());
    debug!(index = %outcome.index, shortcut = ?outcome.shortcut, "Computed index");

    if args.report {
        match Report::new(&network, &outcome).to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", outcome.index);
    }

    ExitCode::SUCCESS
}
