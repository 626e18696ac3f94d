//! One-shot platform lookup.
//!
//! Loads the listing into a fresh index and prints one page, mirroring
//! `GET /api/AdvertisingPlatform/GetPlatforms`.

use clap::Args;
use tracing::info;

use adplatforms::query::{PlatformFilter, PlatformPage};

use super::common::{print_json, GlobalOptions, StorageArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the platforms command.
#[derive(Debug, Args)]
pub struct PlatformsArgs {
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Location path, e.g. /ru/svrd/revda (default: every platform)
    #[arg(long, short)]
    pub location: Option<String>,

    /// Page number, 1-based
    #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the platforms command.
pub fn run(options: &GlobalOptions, args: PlatformsArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(options)?;
    runner.log_startup("platforms");

    let service = runner.create_service(args.storage.file);
    let update = service.update_platforms();
    if !update.is_ok() {
        return Err(CliError::from_response(update));
    }

    let filter = PlatformFilter {
        location: args.location,
    };
    let response = service.get_platforms(args.page, &filter);
    if !response.is_ok() {
        return Err(CliError::from_response(response));
    }
    let description = response.description;
    let Some(page) = response.value else {
        return Err(CliError::Output("service returned no page".to_string()));
    };
    info!(
        items = page.items.len(),
        total = page.total_items,
        "Platforms listed"
    );

    if args.json {
        print_json(&page)
    } else {
        print!("{}", render_page(&page, &description));
        Ok(())
    }
}

/// Plain-text rendering of a page.
pub fn render_page(page: &PlatformPage, description: &str) -> String {
    let mut out = String::new();
    match page.filter.effective_location() {
        Some(location) => out.push_str(&format!("Platforms for {}\n", location)),
        None => out.push_str("All platforms\n"),
    }
    out.push_str(&format!("{} ({} total)\n", description, page.total_items));
    if page.items.is_empty() {
        out.push_str("  (none)\n");
    }
    for record in &page.items {
        out.push_str(&format!("  {}\n", record.name));
    }
    out
}
