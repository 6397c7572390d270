//! Case repository scanning and loading
//!
//! Case files live in a fixed directory layout under a configured root, one
//! subtree per source format:
//!
//! ```text
//! CIM/SN/2013/01/15/20130115_0620_SN2_FR0.zip
//!    /FO/...
//! UCT/SN/...
//!    /FO/...
//! ```
//!
//! The repository resolves a requested instant, case type and country to the
//! case files describing it by generating candidate filename stems and probing
//! them through each format's importer, in format preference order. The first
//! format yielding any match supplies the whole result; formats are never
//! mixed within one request.

pub mod availability;
pub mod candidates;
pub mod config;
pub mod format;
pub mod scan;

#[cfg(test)]
mod tests;

pub use config::RepositoryConfig;
pub use format::{CandidateRef, CaseFormat, CaseImporter, ImportContext};

use tracing::info;

use crate::constants::tokens;

/// The kind of case a request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// Measured state at the instant itself
    Snapshot,
    /// Forecast state published ahead of the instant
    Forecast,
}

impl CaseType {
    /// Name of the per-case-type directory level in the repository layout
    pub fn dir_name(&self) -> &'static str {
        match self {
            CaseType::Snapshot => "SN",
            CaseType::Forecast => "FO",
        }
    }

    /// File-type tokens probed for this case type, in probe order
    pub fn file_type_tokens(&self) -> &'static [&'static str] {
        match self {
            CaseType::Snapshot => &tokens::SNAPSHOT_TOKENS,
            CaseType::Forecast => &tokens::FORECAST_TOKENS,
        }
    }
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// A case repository rooted at a configured directory
///
/// Holds the source formats in preference order; every public operation scans
/// the tree afresh and keeps no cross-call state. The configuration is the
/// only mutable part; mutating it (e.g. adding a forbidden-format entry)
/// requires `&mut self`, so concurrent mutation is ruled out by the borrow
/// checker rather than by internal locking.
pub struct CaseRepository<N> {
    config: RepositoryConfig,
    formats: Vec<CaseFormat<N>>,
}

impl<N> CaseRepository<N> {
    /// Create a repository over `config.root_dir()` trying `formats` in order
    pub fn new(config: RepositoryConfig, formats: Vec<CaseFormat<N>>) -> Self {
        info!(
            "case repository at {}, formats [{}]",
            config.root_dir().display(),
            formats
                .iter()
                .map(|f| f.format_id())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Self { config, formats }
    }

    /// The repository configuration
    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Mutable access to the configuration, e.g. to forbid a format for a
    /// geographic code between calls
    pub fn config_mut(&mut self) -> &mut RepositoryConfig {
        &mut self.config
    }

    /// The source formats, in preference order
    pub fn formats(&self) -> &[CaseFormat<N>] {
        &self.formats
    }
}
