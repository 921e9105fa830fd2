use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rd_config::Config;
use rd_runner::{Driver, DriverBuilder, RunSummary};
use tracing::{error, info};

#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a command batch against a bounded deque
    Run {
        /// read commands from this file instead of stdin
        #[clap(short, long)]
        input: Option<PathBuf>,
        /// write results to this file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
        #[clap(short, long)]
        config: Option<PathBuf>,
        /// fail on unknown commands and truncated input
        #[clap(long)]
        strict: bool,
        #[clap(long)]
        error_token: Option<String>,
    },
    /// Validate a config file and print the effective values
    CheckConfig {
        #[clap(short, long)]
        config: PathBuf,
    },
}

impl Commands {
    fn config_path(&self) -> Option<&Path> {
        match self {
            Commands::Run { config, .. } => config.as_deref(),
            Commands::CheckConfig { config } => Some(config.as_path()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = cli
        .command
        .config_path()
        .map(rd_config::load_config_from_file)
        .transpose();
    let level = config
        .as_ref()
        .ok()
        .and_then(|c| c.as_ref())
        .and_then(|c| c.log_level.clone());
    if let Err(e) = rd_util::init_tracing(level.as_deref()) {
        eprintln!("setting default subscriber failed: {}", e);
    }
    info!(msg = "current cli", cli = ?cli);

    let res = config
        .context("config not valid")
        .and_then(|config| execute(cli.command, config.unwrap_or_default()));
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(msg = "ringdeque failed", reason = ?e);
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands, config: Config) -> anyhow::Result<()> {
    info!(msg = "current config", config = ?config);
    match command {
        Commands::Run {
            input,
            output,
            strict,
            error_token,
            ..
        } => {
            let mut builder = DriverBuilder::new(Some(config.driver));
            if strict {
                builder = builder.strict(true);
            }
            if let Some(token) = error_token {
                builder = builder.error_token(token);
            }
            let driver = builder.build().context("driver options not valid")?;
            let summary = run(&driver, input.as_deref(), output.as_deref())?;
            info!(msg = "run done", summary = ?summary, driver = ?driver.config());
        }
        Commands::CheckConfig { .. } => {
            println!("{:#?}", config);
        }
    }
    Ok(())
}

fn run(driver: &Driver, input: Option<&Path>, output: Option<&Path>) -> anyhow::Result<RunSummary> {
    let reader: Box<dyn Read> = match input {
        Some(p) => Box::new(
            File::open(p).with_context(|| format!("open input {} failed", p.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn Write> = match output {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("create output {} failed", p.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    driver.run(reader, writer).context("run failed")
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    #[test]
    fn test_parse_run_args() {
        let cli = Cli::try_parse_from([
            "ringdeque",
            "run",
            "-i",
            "in.txt",
            "--strict",
            "--error-token",
            "ERR",
        ])
        .unwrap();
        match cli.command {
            Commands::Run {
                input,
                output,
                config,
                strict,
                error_token,
            } => {
                assert_eq!(input, Some(PathBuf::from("in.txt")));
                assert_eq!(output, None);
                assert_eq!(config, None);
                assert!(strict);
                assert_eq!(error_token.as_deref(), Some("ERR"));
            }
            c => panic!("unexpected command {:?}", c),
        }
    }

    #[test]
    fn test_check_config_needs_file() {
        assert!(Cli::try_parse_from(["ringdeque", "check-config"]).is_err());
        let cli = Cli::try_parse_from(["ringdeque", "check-config", "-c", "a.toml"]).unwrap();
        assert_eq!(cli.command.config_path(), Some(Path::new("a.toml")));
    }

    #[test]
    fn test_run_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        fs::write(&input, "5 2\npush_back 1\npush_back 2\npush_front 3\npop_front\npop_back\n")
            .unwrap();

        let driver = DriverBuilder::new(None).build().unwrap();
        let summary = run(&driver, Some(&input), Some(&output)).unwrap();
        assert_eq!(summary.errors, 1);
        assert_eq!(fs::read_to_string(&output).unwrap(), "error\n1\n2\n");
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let driver = DriverBuilder::new(None).build().unwrap();
        let res = run(&driver, Some(&dir.path().join("missing.txt")), None);
        assert!(res.is_err());
    }

    #[test]
    fn test_execute_with_example_config() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        fs::write(&input, "2 1 pop_back oops").unwrap();

        let config = rd_config::load_config_from_file("../../config/full-example.toml").unwrap();
        let command = Commands::Run {
            input: Some(input.clone()),
            output: Some(output.clone()),
            config: None,
            strict: false,
            error_token: Some("none".to_string()),
        };
        execute(command, config.clone()).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "none\n");

        let command = Commands::Run {
            input: Some(input),
            output: Some(output),
            config: None,
            strict: true,
            error_token: None,
        };
        assert!(execute(command, config).is_err());
    }
}
