//! Core resolution logic for the case repository
//!
//! This module contains the main library components: the case filename grammar,
//! the geographic code table, and the repository scanner that resolves a
//! requested instant to the case files describing it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use entsoe_cases::app::{
//!     CandidateRef, CaseFormat, CaseImporter, CaseRepository, CaseType, Country,
//!     RepositoryConfig,
//! };
//!
//! struct UcteImporter;
//!
//! impl CaseImporter for UcteImporter {
//!     type Network = Vec<u8>;
//!
//!     fn format_id(&self) -> &str {
//!         "UCTE"
//!     }
//!
//!     fn exists(&self, candidate: &CandidateRef) -> bool {
//!         candidate.directory.join(format!("{}.uct", candidate.base_name)).is_file()
//!     }
//!
//!     fn import(&self, candidate: &CandidateRef) -> anyhow::Result<Vec<u8>> {
//!         Ok(std::fs::read(
//!             candidate.directory.join(format!("{}.uct", candidate.base_name)),
//!         )?)
//!     }
//! }
//!
//! # fn example() -> entsoe_cases::Result<()> {
//! let config = RepositoryConfig::load()?;
//! let repository: CaseRepository<Vec<u8>> = CaseRepository::new(
//!     config,
//!     vec![CaseFormat::new(Box::new(UcteImporter), "UCT")],
//! );
//!
//! let date = chrono::DateTime::parse_from_rfc3339("2016-09-30T00:30:00+01:00").unwrap();
//! let networks = repository.load(&date, CaseType::Forecast, None, Some(Country::FR))?;
//! println!("loaded {} network(s)", networks.len());
//! # Ok(())
//! # }
//! ```

pub mod filename;
pub mod geography;
pub mod repository;

// Re-export main public API
pub use filename::CaseFileName;
pub use geography::{Country, GeographicCode};
pub use repository::{
    CandidateRef, CaseFormat, CaseImporter, CaseRepository, CaseType, ImportContext,
    RepositoryConfig,
};
