//! Load the listing and report the result.
//!
//! Mirrors `PUT /api/AdvertisingPlatform/UpdatePlatforms`.

use clap::Args;

use super::common::{print_json, GlobalOptions, StorageArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the update command.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the update command.
pub fn run(options: &GlobalOptions, args: UpdateArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(options)?;
    runner.log_startup("update");

    let service = runner.create_service(args.storage.file);
    let response = service.update_platforms();
    if !response.is_ok() {
        return Err(CliError::from_response(response));
    }

    if args.json {
        return print_json(&response);
    }

    println!("{}", response.description);
    if let Some(summary) = response.value {
        println!("  Source:    {}", service.source_description());
        println!("  Locations: {}", summary.locations);
        println!("  Platforms: {}", summary.platforms);
    }
    Ok(())
}
