//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show each file as it is copied.
    Verbose,
    /// Show status messages.
    #[default]
    Normal,
    /// Show only the final result and errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-file detail.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
