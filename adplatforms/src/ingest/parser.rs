//! Line parser for platform listings.

use tracing::warn;

use crate::location::{validate, PlatformMapping};

/// Result of parsing a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Location → platform names, each list in first-seen order.
    pub mapping: PlatformMapping,
    /// Lines that contributed at least one location.
    pub accepted_lines: usize,
    /// Non-blank lines ignored as malformed.
    pub skipped_lines: usize,
    /// Individual locations dropped because they are not valid paths.
    pub skipped_locations: usize,
}

impl ParseOutcome {
    /// Whether nothing usable was found.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

/// Parse `Name: loc1, loc2, ...` lines into a location → platforms mapping.
///
/// Each line is split on its first `:`. Blank lines are ignored silently.
/// Lines without a `:`, with an empty name, or with no non-empty location
/// are counted in `skipped_lines`. Locations that fail path validation are
/// dropped with a warning. A platform listed twice for one location is
/// kept once.
pub fn parse_platform_lines(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (number, line) in text.lines().enumerate() {
        let line_number = number + 1;
        if line.trim().is_empty() {
            continue;
        }

        let Some((name, locations)) = line.split_once(':') else {
            outcome.skipped_lines += 1;
            warn!(line = line_number, "Skipping line without ':' separator");
            continue;
        };

        let name = name.trim();
        if name.is_empty() {
            outcome.skipped_lines += 1;
            warn!(line = line_number, "Skipping line with empty platform name");
            continue;
        }

        let mut accepted = 0;
        let mut seen_any = false;
        for location in locations.split(',').map(str::trim) {
            if location.is_empty() {
                continue;
            }
            seen_any = true;

            if let Err(e) = validate(location) {
                outcome.skipped_locations += 1;
                warn!(
                    line = line_number,
                    platform = name,
                    location,
                    error = %e,
                    "Skipping invalid location"
                );
                continue;
            }

            let platforms = outcome.mapping.entry(location.to_string()).or_default();
            if !platforms.iter().any(|existing| existing == name) {
                platforms.push(name.to_string());
            }
            accepted += 1;
        }

        if accepted > 0 {
            outcome.accepted_lines += 1;
        } else if !seen_any {
            outcome.skipped_lines += 1;
            warn!(line = line_number, platform = name, "Skipping line with no locations");
        }
    }

    outcome
}
