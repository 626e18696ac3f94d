//! Interactive session over stdin.
//!
//! Keeps one index alive across commands so `get` answers from whatever the
//! last `update` loaded. Every command prints one JSON response per line.
//!
//! ```text
//! get [LOCATION] [PAGE]   page of platforms (a lone integer is a page)
//! update                  reload the listing
//! clear                   empty the index
//! help                    list commands
//! quit | exit             end the session
//! ```

use std::io::{self, BufRead, Write};

use clap::Args;
use serde::Serialize;
use tracing::{debug, info};

use adplatforms::query::PlatformFilter;
use adplatforms::service::{PlatformService, ResponseStatus, ServiceResponse};

use super::common::{GlobalOptions, StorageArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

const HELP: &str = "commands: get [LOCATION] [PAGE], update, clear, help, quit";

/// Arguments for the shell command.
#[derive(Debug, Args)]
pub struct ShellArgs {
    #[command(flatten)]
    pub storage: StorageArgs,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Get {
        location: Option<String>,
        page: i64,
    },
    Update,
    Clear,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("get", []) => ShellCommand::Get {
                location: None,
                page: 1,
            },
            ("get", [single]) => match single.parse::<i64>() {
                Ok(page) => ShellCommand::Get {
                    location: None,
                    page,
                },
                Err(_) => ShellCommand::Get {
                    location: Some(single.to_string()),
                    page: 1,
                },
            },
            ("get", [location, page]) => ShellCommand::Get {
                location: Some(location.to_string()),
                page: page
                    .parse()
                    .map_err(|_| format!("Invalid page number: {}", page))?,
            },
            ("get", _) => return Err("Usage: get [LOCATION] [PAGE]".to_string()),
            ("update", []) => ShellCommand::Update,
            ("clear", []) => ShellCommand::Clear,
            ("help", _) => ShellCommand::Help,
            ("quit" | "exit", _) => ShellCommand::Quit,
            ("update" | "clear", _) => return Err(format!("'{}' takes no arguments", verb)),
            _ => return Err(format!("Unknown command: {}", verb)),
        };
        Ok(Some(command))
    }
}

/// Run the shell command.
pub fn run(options: &GlobalOptions, args: ShellArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(options)?;
    runner.log_startup("shell");

    let service = runner.create_service(args.storage.file);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&service, stdin.lock(), stdout.lock())
}

/// Drive a session: load the listing once, then answer `input` line by line.
pub fn run_session<R: BufRead, W: Write>(
    service: &PlatformService,
    input: R,
    mut output: W,
) -> Result<(), CliError> {
    write_response(&mut output, &service.update_platforms())?;

    for line in input.lines() {
        let line = line?;
        debug!(line = %line, "Shell input");

        match ShellCommand::parse(&line) {
            Ok(None) => continue,
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => execute(service, command, &mut output)?,
            Err(message) => write_response(
                &mut output,
                &ServiceResponse::<()>::failure(ResponseStatus::BadRequest, message),
            )?,
        }
    }

    info!("Shell session ended");
    Ok(())
}

fn execute<W: Write>(
    service: &PlatformService,
    command: ShellCommand,
    output: &mut W,
) -> Result<(), CliError> {
    match command {
        ShellCommand::Get { location, page } => {
            let filter = PlatformFilter { location };
            write_response(output, &service.get_platforms(page, &filter))
        }
        ShellCommand::Update => write_response(output, &service.update_platforms()),
        ShellCommand::Clear => {
            service.clear();
            write_response(output, &status_only("Platforms cleared"))
        }
        ShellCommand::Help => write_response(output, &status_only(HELP)),
        ShellCommand::Quit => Ok(()),
    }
}

fn status_only(description: &str) -> ServiceResponse<()> {
    ServiceResponse {
        status: ResponseStatus::Ok,
        description: description.to_string(),
        value: None,
    }
}

fn write_response<W: Write, T: Serialize>(
    output: &mut W,
    response: &ServiceResponse<T>,
) -> Result<(), CliError> {
    serde_json::to_writer(&mut *output, response)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
