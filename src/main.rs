use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use clap::{command, Arg};
use config::Config;
use std::path::PathBuf;

mod config;
mod discovery;
mod repair;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .about("Rewrites article headers whose title was left as the raw batch date")
        .args(&[
            Arg::new("search_root")
                .help("Directories searched for articles of the batch")
                .value_parser(clap::value_parser!(PathBuf))
                .num_args(1..)
                .default_values(["content/posts/AINews", "."]),
            Arg::new("batch_date")
                .long("batch-date")
                .help("Date prefix (YYYY-MM-DD) of the corrupted batch")
                .default_value("2025-11-18"),
            Arg::new("corrected_year")
                .long("corrected-year")
                .help("Year written into the corrected date line")
                .value_parser(clap::value_parser!(i32))
                .default_value("2024"),
        ])
        .get_matches();

    let search_roots: Vec<PathBuf> = matches
        .get_many::<PathBuf>("search_root")
        .unwrap()
        .cloned()
        .collect();
    let batch_date = NaiveDate::parse_from_str(
        matches.get_one::<String>("batch_date").unwrap(),
        "%Y-%m-%d",
    )
    .context("Invalid date format")?;
    let corrected_year: i32 = *matches.get_one("corrected_year").unwrap();
    let corrected_date = batch_date
        .with_year(corrected_year)
        .with_context(|| format!("{batch_date} has no counterpart in year {corrected_year}"))?;

    let config = Config {
        search_roots,
        batch_date,
        corrected_date,
    };

    // per-file failures are reported and swallowed inside run()
    repair::run(&config)?;

    Ok(())
}
