//! Resolution of a requested instant to matching case files
//!
//! Formats are tried in preference order and the first one yielding any match
//! supplies the whole result; a request never mixes files from two formats.
//! Missing directory levels and unpublished instants are expected conditions
//! that degrade to an empty result, with a diagnostic naming what was probed.

use chrono::{DateTime, TimeZone};
use tracing::{debug, info, warn};

use crate::app::filename::CaseFileName;
use crate::app::geography::{codes_for_country, Country, GeographicCode, AGGREGATE_SCOPES};
use crate::app::repository::{candidates, CandidateRef, CaseRepository, CaseType, ImportContext};
use crate::constants::time::CASE_TIME_ZONE;
use crate::errors::{RepositoryError, RepositoryResult};

impl<N> CaseRepository<N> {
    /// Resolve the case files describing `date`
    ///
    /// With `CaseType::Forecast` and no explicit `forecast_distance` the
    /// request means "the day-ahead forecast"; with an explicit distance only
    /// files whose parsed distance equals it match. A snapshot request must
    /// not carry a non-zero distance.
    ///
    /// An empty result means no data is published for the request; it is not
    /// an error.
    pub fn resolve<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
        case_type: CaseType,
        forecast_distance: Option<u32>,
        country: Option<Country>,
    ) -> RepositoryResult<Vec<ImportContext<'_, N>>> {
        self.scan(date, case_type, forecast_distance, country, false)
    }

    /// Whether any case file matches the request
    ///
    /// Same resolution as [`CaseRepository::resolve`], stopping at the first
    /// existing and matching candidate.
    pub fn is_data_available<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
        case_type: CaseType,
        forecast_distance: Option<u32>,
        country: Option<Country>,
    ) -> RepositoryResult<bool> {
        Ok(!self
            .scan(date, case_type, forecast_distance, country, true)?
            .is_empty())
    }

    /// Resolve the request and import every matching file
    ///
    /// An existing file that fails import is a hard error; an empty
    /// resolution yields an empty list.
    pub fn load<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
        case_type: CaseType,
        forecast_distance: Option<u32>,
        country: Option<Country>,
    ) -> RepositoryResult<Vec<N>> {
        let contexts = self.resolve(date, case_type, forecast_distance, country)?;
        let mut networks = Vec::with_capacity(contexts.len());
        for context in contexts {
            info!(
                "loading {} in {} format",
                context.candidate.base_name,
                context.format.format_id()
            );
            let network = context.format.importer().import(&context.candidate).map_err(
                |source| RepositoryError::Import {
                    format: context.format.format_id().to_string(),
                    base_name: context.candidate.base_name.clone(),
                    source: source.into(),
                },
            )?;
            networks.push(network);
        }
        Ok(networks)
    }

    fn scan<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
        case_type: CaseType,
        forecast_distance: Option<u32>,
        country: Option<Country>,
        stop_at_first_match: bool,
    ) -> RepositoryResult<Vec<ImportContext<'_, N>>> {
        if case_type == CaseType::Snapshot && forecast_distance.is_some_and(|d| d > 0) {
            return Err(RepositoryError::ForecastDistanceOnSnapshot);
        }

        let date = date.with_timezone(&CASE_TIME_ZONE);
        let codes: Vec<GeographicCode> = match country {
            Some(country) => codes_for_country(country),
            None => AGGREGATE_SCOPES.to_vec(),
        };

        for format in self.formats() {
            let format_dir = self.config().root_dir().join(format.dir_name());
            if !format_dir.exists() {
                warn!("no format directory {}", format_dir.display());
                continue;
            }
            let type_dir = format_dir.join(case_type.dir_name());
            if !type_dir.exists() {
                warn!("no case-type directory {}", type_dir.display());
                continue;
            }
            let day_dir = candidates::day_directory(&type_dir, &date);
            if !day_dir.exists() {
                debug!("no day directory {}", day_dir.display());
                continue;
            }

            let mut matches = Vec::new();
            for &code in &codes {
                if self.config().is_forbidden(code, format.format_id()) {
                    continue;
                }
                for stem in candidates::candidate_stems(&date, case_type, code) {
                    let candidate = CandidateRef::new(&day_dir, stem);
                    if !format.importer().exists(&candidate) {
                        continue;
                    }
                    let Some(parsed) = CaseFileName::parse(&candidate.base_name) else {
                        continue;
                    };
                    let keep = match case_type {
                        CaseType::Snapshot => parsed.is_snapshot(),
                        // The day-ahead forecast is the default forecast request
                        CaseType::Forecast => match forecast_distance {
                            None => parsed.is_day_ahead(),
                            Some(distance) => parsed.forecast_distance() == distance as i32,
                        },
                    };
                    if keep {
                        matches.push(ImportContext { format, candidate });
                        if stop_at_first_match {
                            return Ok(matches);
                        }
                    }
                }
                if matches.is_empty() {
                    warn!(
                        "could not find any file {}[0-9] in directory {}, with forecast distance {:?}",
                        candidates::expected_pattern(&date, case_type, code),
                        day_dir.display(),
                        forecast_distance
                    );
                }
            }
            if !matches.is_empty() {
                return Ok(matches);
            }
        }
        Ok(Vec::new())
    }
}
