//! pm - Project board in the terminal
//!
//! # Examples
//!
//! ```bash
//! # Enter projects interactively
//! pm
//!
//! # Submit one project and print the lists as JSON
//! pm add --title "Build API" --description "Short" --people 3 --json --pretty
//!
//! # Check a value against the validator
//! pm validate abcd --required --min 5
//! ```

use pm_cli::handlers::{self, OutputFormat};
use pm_cli::{Cli, CliResult, Commands, logger, run_session};

use pm_board::MemoryFields;
use pm_config::Config;

use std::cell::RefCell;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    // Load and validate configuration
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = config.log_file_path(&config_dir);
    if let Some(ref path) = log_file_path
        && let Some(log_dir) = path.parent()
    {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    let colored = config.logging.colored && std::io::stderr().is_terminal();
    logger::initialize(config.logging.level, log_file_path, colored)?;
    config.log_summary();

    let rules = config.form.clone();

    let succeeded = match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let out = Rc::new(RefCell::new(std::io::stdout()));
            run_session(std::io::stdin().lock(), out, rules)?;
            true
        }
        Commands::Add {
            title,
            description,
            people,
            json,
            pretty,
        } => handlers::add_project(
            &mut std::io::stdout(),
            &mut std::io::stderr(),
            rules,
            MemoryFields::with_values(&title, &description, &people),
            OutputFormat { json, pretty },
        )?,
        Commands::Validate {
            value,
            required,
            min,
            max,
            numeric,
        } => handlers::validate_value(&mut std::io::stdout(), &value, required, min, max, numeric)?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
