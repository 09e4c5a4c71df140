use std::process;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use serde::Serialize;

use storage_fixture::{diagnostics, Storage, VISIBLE_EVERYWHERE};

/// What one driver invocation produced, for plain or JSON output.
#[derive(Debug, Serialize)]
struct FixtureReport {
    runs: u32,
    buffer: Vec<i32>,
    counter: i32,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = Command::new("storage-fixture")
        .about("Runs the storage fixture's entry routine against a scratch buffer")
        .arg(
            Arg::new("buffer-size")
                .long("buffer-size")
                .takes_value(true)
                .default_value("10")
                .help("Declared capacity of the scratch buffer"),
        )
        .arg(
            Arg::new("runs")
                .long("runs")
                .takes_value(true)
                .default_value("1")
                .help("How many entry calls to make against the same buffer; counter state carries over"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the report as JSON"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .takes_value(true)
                .default_value("warn")
                .possible_values(["off", "error", "warn", "info", "debug", "trace"])
                .help("Log verbosity"),
        )
        .get_matches();

    let log_level = log::LevelFilter::from_str(matches.value_of("log-level").unwrap())
        .context("unrecognized log level")?;
    diagnostics::init(log_level);

    let buffer_size: u32 = matches
        .value_of("buffer-size")
        .unwrap()
        .parse()
        .context("buffer-size must be an unsigned integer")?;
    let runs: u32 = matches
        .value_of("runs")
        .unwrap()
        .parse()
        .context("runs must be an unsigned integer")?;

    let mut storage = Storage::new();
    let mut buffer = vec![0; buffer_size as usize];
    for _ in 0..runs {
        storage.entry(buffer_size, &mut buffer)?;
    }

    let report = FixtureReport {
        runs,
        buffer,
        counter: storage.counter(),
    };
    if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("visible_everywhere: {}", VISIBLE_EVERYWHERE);
        println!("buffer: {:?}", report.buffer);
        println!("counter: {}", report.counter);
    }
    Ok(())
}
