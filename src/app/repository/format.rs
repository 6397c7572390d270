//! The source-format seam
//!
//! The engine never reads case files itself. Each supported source format
//! supplies an importer that can test whether a candidate stem exists (with
//! whatever format-specific suffix it uses) and parse a confirmed one into the
//! integrator's network type.

use std::path::PathBuf;

/// A yet-unverified filename stem inside a day directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRef {
    /// Day directory the stem would live in
    pub directory: PathBuf,
    /// Filename stem without the format-specific suffix
    pub base_name: String,
}

impl CandidateRef {
    pub fn new(directory: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            base_name: base_name.into(),
        }
    }
}

/// Format-specific import capability supplied by the integrator
///
/// `Network` is the integrator's network model; the engine treats it as
/// opaque and never inspects it.
pub trait CaseImporter {
    type Network;

    /// Identifier of the format, as listed in the forbidden-formats table
    fn format_id(&self) -> &str;

    /// Whether the candidate exists with this format's suffix
    fn exists(&self, candidate: &CandidateRef) -> bool;

    /// Parse an existing candidate into a network
    fn import(&self, candidate: &CandidateRef) -> anyhow::Result<Self::Network>;
}

/// A source format: an importer paired with its directory under the
/// repository root
pub struct CaseFormat<N> {
    importer: Box<dyn CaseImporter<Network = N>>,
    dir_name: String,
}

impl<N> CaseFormat<N> {
    pub fn new(importer: Box<dyn CaseImporter<Network = N>>, dir_name: impl Into<String>) -> Self {
        Self {
            importer,
            dir_name: dir_name.into(),
        }
    }

    /// Identifier of the format, as listed in the forbidden-formats table
    pub fn format_id(&self) -> &str {
        self.importer.format_id()
    }

    /// Directory of this format's subtree under the repository root
    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    /// The importer supplied for this format
    pub fn importer(&self) -> &dyn CaseImporter<Network = N> {
        self.importer.as_ref()
    }
}

impl<N> std::fmt::Debug for CaseFormat<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseFormat")
            .field("format_id", &self.format_id())
            .field("dir_name", &self.dir_name)
            .finish()
    }
}

/// A candidate confirmed to exist, ready to be imported
#[derive(Debug)]
pub struct ImportContext<'a, N> {
    /// The format that claimed the candidate
    pub format: &'a CaseFormat<N>,
    /// The confirmed candidate
    pub candidate: CandidateRef,
}
