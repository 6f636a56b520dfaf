//! posnav Plugin - Position Reporter/Navigator
//!
//! Lets a user query their position within a text field or list as a
//! percentage, word count or line count, and jump the caret to an
//! arbitrary percentage or line number, via host keyboard commands.
//!
//! Features:
//! - Percentage/word report via speech or a position-pitched tone
//! - Jump to percentage through an entry dialog
//! - Jump to line number through an entry dialog
//! - Fast list-position report from host group metadata, with a
//!   sibling-counting fallback

use std::rc::Rc;

use posnav_host::Host;

pub mod commands;
pub mod config;
mod jump;
mod line;
mod list;
mod prepare;
mod text;

pub use commands::{Command, CommandDescriptor, CATEGORY_SYSTEM_CARET};
pub use config::ReporterConfig;

/// Tone length for position beeps
pub(crate) const TONE_MS: u32 = 100;

/// The plugin component. Cheap to clone; clones share the host handle.
#[derive(Clone)]
pub struct PositionReporter {
    host: Rc<dyn Host>,
    config: ReporterConfig,
}

impl PositionReporter {
    pub fn new(host: Rc<dyn Host>) -> Self {
        Self::with_config(host, ReporterConfig::default())
    }

    pub fn with_config(host: Rc<dyn Host>, config: ReporterConfig) -> Self {
        Self { host, config }
    }
}

/// Parse a dialog entry: all ASCII digits and within `min..=max`.
/// Signs, spaces and anything non-numeric are rejected.
pub(crate) fn parse_bounded(value: &str, min: u64, max: u64) -> Option<u64> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let number: u64 = value.parse().ok()?;
    (min..=max).contains(&number).then_some(number)
}
