//! Availability indexing over the whole repository tree
//!
//! Unlike resolution, which generates and probes candidate names, the
//! availability walk makes no naming assumption: it visits every non-empty
//! file under each format's case-type directory and classifies whatever
//! parses. Formats are merged here on purpose; the question answered is "what
//! instants have data", not "which file would a load pick".

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

use crate::app::filename::CaseFileName;
use crate::app::geography::{codes_for_country, Country, GeographicCode, AGGREGATE_SCOPES};
use crate::app::repository::{CaseRepository, CaseType};
use crate::constants::time::CASE_TIME_ZONE;
use crate::errors::RepositoryResult;

impl<N> CaseRepository<N> {
    /// The instants inside `interval` (half-open) for which every requested
    /// geographic code has a case of the requested type
    ///
    /// With `CaseType::Forecast` only day-ahead cases count; an intraday or
    /// two-days-ahead file does not make its instant available. Countries map
    /// to their geographic codes; `None` means the aggregate scopes.
    pub fn data_available<Z: TimeZone>(
        &self,
        case_type: CaseType,
        countries: Option<&[Country]>,
        interval: &Range<DateTime<Z>>,
    ) -> RepositoryResult<BTreeSet<DateTime<Tz>>> {
        let requested: BTreeSet<GeographicCode> = match countries {
            Some(countries) => countries
                .iter()
                .flat_map(|&country| codes_for_country(country))
                .collect(),
            None => AGGREGATE_SCOPES.into_iter().collect(),
        };
        let interval = interval.start.with_timezone(&CASE_TIME_ZONE)
            ..interval.end.with_timezone(&CASE_TIME_ZONE);

        let mut observed: BTreeMap<DateTime<Tz>, BTreeSet<GeographicCode>> = BTreeMap::new();
        for format in self.formats() {
            let type_dir = self
                .config()
                .root_dir()
                .join(format.dir_name())
                .join(case_type.dir_name());
            if !type_dir.is_dir() {
                continue;
            }
            for file in walk_files(&type_dir)? {
                let Some(name) = file.file_name().and_then(|name| name.to_str()) else {
                    continue;
                };
                let Some(parsed) = CaseFileName::parse(name) else {
                    continue;
                };
                let code = parsed.geographic_code();
                if self.config().is_forbidden(code, format.format_id())
                    || !interval.contains(parsed.date())
                {
                    continue;
                }
                let available = match case_type {
                    CaseType::Snapshot => parsed.is_snapshot(),
                    CaseType::Forecast => parsed.is_day_ahead(),
                };
                if available {
                    observed.entry(*parsed.date()).or_default().insert(code);
                }
            }
        }

        Ok(observed
            .into_iter()
            .filter(|(_, codes)| requested.is_subset(codes))
            .map(|(date, _)| date)
            .collect())
    }
}

/// Every non-empty file under `dir`, depth first with children in sorted name
/// order
///
/// Iterative on an explicit stack, so tree depth does not bound the walk.
/// The ordering is cosmetic only; callers aggregate into sets.
fn walk_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        let mut entries: Vec<PathBuf> = std::fs::read_dir(&current)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        entries.sort();
        let mut subdirs = Vec::new();
        for entry in entries {
            if entry.is_dir() {
                subdirs.push(entry);
            } else if entry.metadata()?.len() > 0 {
                files.push(entry);
            }
        }
        // Reversed so the stack visits sibling directories in sorted order
        stack.extend(subdirs.into_iter().rev());
    }
    Ok(files)
}
