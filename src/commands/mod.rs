//! Command implementations for the dental binary.
//!
//! One module per command group, plus the interactive menu. All of them
//! consume the clinic service through plain arguments and print through
//! the presentation renderers.

pub mod appointments;
pub mod dentists;
pub mod menu;
pub mod patients;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use dental::presentation::output::TIME_FORMAT;

/// Parse a user-supplied timestamp in the clinic's display format.
pub(crate) fn parse_time(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, TIME_FORMAT)
        .with_context(|| format!("invalid time {input:?}, expected YYYY-MM-DD HH:MM"))
}
