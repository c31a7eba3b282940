#![forbid(unsafe_code)]

//! Semantic roles for rendered regions.
//!
//! Roles describe user-facing *intent* rather than pixels: a fault
//! fallback announces itself as an alert, an activation control as a
//! button. Widgets annotate the regions they render so harnesses and
//! assistive layers can query meaning instead of scraping cell text.

/// Semantic annotation attached to a rendered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// No particular semantics.
    #[default]
    Generic,
    /// An urgent announcement; fault fallbacks carry this role so the
    /// substituted view is exposed to assistive consumers.
    Alert,
    /// A passive status region.
    Status,
    /// An activatable control.
    Button,
}

impl Role {
    /// Stable textual name, used in diagnostics and serialized reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Alert => "alert",
            Self::Status => "status",
            Self::Button => "button",
        }
    }
}
