mod cli;
mod error;
mod pipeline;
mod report;

use crate::cli::Cli;
use crate::error::{ErrorKind, Result, raise_with};
use crate::pipeline::{Pipeline, read_input};
use clap::Parser;
use folio_config::Config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match cli::arity_usage(&err) {
            Some(usage) => {
                eprint!("{usage}");
                return ExitCode::from(2);
            },
            None => err.exit(),
        },
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_level().into()))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", report::failure(&err, cli.verbose > 1));
            ExitCode::from(err.exit_code())
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    // A missing input outranks a broken configuration file.
    let markup = read_input(&cli.input)?;
    let mut config = Config::load(cli.config.as_deref()).map_err(|e| raise_with(e, ErrorKind::Config))?;
    if let Some(output_dir) = &cli.output_dir {
        config.output_dir = output_dir.clone();
    }
    let pipeline = Pipeline::new(&config)?;
    print!("{}", report::start(&cli.input));

    print!("{}", report::step(1, "Extracting filenames"));
    let extraction = pipeline.extract(&markup)?;
    print!("{}", report::extracted(&extraction));

    print!("{}", report::step(2, "Grouping by date"));
    let grouping = pipeline.group(&extraction)?;
    print!("{}", report::grouped(&grouping));

    print!("{}", report::step(3, "Building manifest"));
    let manifest = pipeline.build(grouping)?;

    print!("{}", report::step(4, "Saving manifest"));
    let written = pipeline.write(&manifest)?;
    print!("{}", report::written(&written, &manifest));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_input_outranks_broken_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = temp_dir.path().join("folio.toml");
        fs::write(&config, "user_id = [").unwrap();
        let input = temp_dir.path().join("outerhtml.txt");

        let cli = Cli::try_parse_from(["folio", "--config", config.to_str().unwrap(), input.to_str().unwrap()]).unwrap();
        let err = run(&cli).unwrap_err();
        assert_eq!(*err, ErrorKind::InputNotFound(input));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn broken_config_is_reported_once_input_exists() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = temp_dir.path().join("folio.toml");
        fs::write(&config, "user_id = [").unwrap();
        let input = temp_dir.path().join("outerhtml.txt");
        fs::write(&input, "20251003 131748.jpg").unwrap();

        let cli = Cli::try_parse_from(["folio", "--config", config.to_str().unwrap(), input.to_str().unwrap()]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Config(_)));
        assert_eq!(err.exit_code(), 8);
    }
}
