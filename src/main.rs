use polars::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tscv::config::CrossValidationConfig;
use tscv::cv::{describe_splits, TimeSeriesSplitter};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: tscv <config.toml> <data.csv>");
        return ExitCode::FAILURE;
    }

    match run(&args[1], &args[2]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: &str, data_path: &str) -> tscv::Result<()> {
    let config = CrossValidationConfig::load_from_file(config_path)?;

    let df = CsvReadOptions::default()
        .try_into_reader_with_file_path(Some(PathBuf::from(data_path)))?
        .finish()?;

    let splitter = TimeSeriesSplitter::new(&df);
    let indices = splitter.split_indices(&config)?;
    let report = describe_splits(&df, config.method, &indices)?;

    println!("{}", report.to_json()?);
    Ok(())
}
