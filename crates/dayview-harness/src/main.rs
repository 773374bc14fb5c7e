#![forbid(unsafe_code)]

//! Day-view layout harness.
//!
//! # Running
//!
//! ```sh
//! DAYVIEW_RENDERER=text DAYVIEW_INPUT=day.json cargo run -p dayview-harness
//! ```
//!
//! Exits with status 2 when any event was rejected.

use std::fs::File;
use std::io::{self, BufReader};

use dayview_harness::{HarnessConfig, describe_rejection, run};
use tracing_subscriber::EnvFilter;

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> io::Result<()> {
    let config = HarnessConfig::from_env();
    init_logging(config.log_json);

    let stdout = io::stdout().lock();
    let summary = match &config.input {
        Some(path) => run(&config, BufReader::new(File::open(path)?), stdout)?,
        None => run(&config, io::stdin().lock(), stdout)?,
    };

    for rejection in &summary.rejected {
        eprintln!("{}", describe_rejection(rejection.index, &rejection.error));
    }
    if !summary.rejected.is_empty() {
        std::process::exit(2);
    }
    Ok(())
}
