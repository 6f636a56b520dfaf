//! Plugin Configuration

/// Settings for the position reporter
#[derive(Debug, Clone, Copy)]
pub struct ReporterConfig {
    /// Use host group metadata for list positions when available. It is
    /// much faster than counting siblings; disable only for hosts that
    /// report it wrongly.
    pub prefer_group_position: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            prefer_group_position: true,
        }
    }
}
