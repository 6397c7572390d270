//! Integration tests over a real repository tree
//!
//! The fixture reproduces the layout produced by the exchange platforms:
//! per-format subtrees, day directories, and the filename conventions
//! described in the filename grammar, including the daylight-saving marker.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use tempfile::TempDir;

use crate::app::geography::{Country, GeographicCode};
use crate::app::repository::{
    CandidateRef, CaseFormat, CaseImporter, CaseRepository, CaseType, RepositoryConfig,
};
use crate::constants::time::CASE_TIME_ZONE;
use crate::errors::RepositoryError;

/// Importer stub that recognizes stems by a fixed suffix and "imports" them
/// as a fixed label
struct SuffixImporter {
    format_id: &'static str,
    suffix: &'static str,
    network: &'static str,
}

impl CaseImporter for SuffixImporter {
    type Network = String;

    fn format_id(&self) -> &str {
        self.format_id
    }

    fn exists(&self, candidate: &CandidateRef) -> bool {
        candidate
            .directory
            .join(format!("{}.{}", candidate.base_name, self.suffix))
            .is_file()
    }

    fn import(&self, _candidate: &CandidateRef) -> anyhow::Result<String> {
        Ok(self.network.to_string())
    }
}

fn repository(root: &Path) -> CaseRepository<String> {
    CaseRepository::new(
        RepositoryConfig::new(root),
        vec![
            CaseFormat::new(
                Box::new(SuffixImporter {
                    format_id: "CIM1",
                    suffix: "zip",
                    network: "cim",
                }),
                "CIM",
            ),
            CaseFormat::new(
                Box::new(SuffixImporter {
                    format_id: "UCTE",
                    suffix: "uct",
                    network: "uct",
                }),
                "UCT",
            ),
        ],
    )
}

fn create_files(root: &Path, dir: &str, names: &[&str]) {
    let dir = root.join(dir);
    std::fs::create_dir_all(&dir).unwrap();
    for name in names {
        std::fs::write(dir.join(name), "test").unwrap();
    }
}

fn fixture() -> TempDir {
    let root = tempfile::tempdir().unwrap();

    create_files(
        root.path(),
        "CIM/SN/2013/01/13",
        &["20130113_0015_SN7_FR0.zip", "20130113_0045_SN7_FR0.zip"],
    );
    // 2013-01-14 exists in both formats
    create_files(root.path(), "CIM/SN/2013/01/14", &["20130114_0015_SN1_FR0.zip"]);
    create_files(
        root.path(),
        "UCT/SN/2013/01/14",
        &["20130114_0015_SN1_FR0.uct", "20130114_0030_SN1_FR0.uct"],
    );
    // German per-TSO snapshots
    create_files(
        root.path(),
        "UCT/SN/2013/01/15",
        &[
            "20130115_0015_SN2_D20.uct",
            "20130115_0015_SN2_D40.uct",
            "20130115_0015_SN2_D70.uct",
            "20130115_0015_SN2_D80.uct",
        ],
    );
    // Fall-back transition: the same local reading published twice
    create_files(
        root.path(),
        "UCT/FO/2016/10/30",
        &["20161030_0230_FO7_FR0.uct", "20161030_B230_FO7_FR0.uct"],
    );
    // Day-ahead, two-days-ahead and intraday forecasts for one morning
    create_files(
        root.path(),
        "UCT/FO/2016/09/30",
        &[
            "20160930_0130_FO5_FR0.uct",
            "20160930_0130_2D5_FR0.uct",
            "20160930_0130_015_FR0.uct",
            "20160930_0230_025_FR0.uct",
            "20160930_0430_045_FR0.uct",
        ],
    );
    std::fs::create_dir_all(root.path().join("CIM/FO")).unwrap();

    root
}

fn instant(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn paris_set(instants: &[&str]) -> BTreeSet<DateTime<Tz>> {
    instants
        .iter()
        .map(|s| instant(s).with_timezone(&CASE_TIME_ZONE))
        .collect()
}

#[test]
fn test_load_snapshot_at_exact_minute() {
    let root = fixture();
    let repository = repository(root.path());

    let networks = repository
        .load(
            &instant("2013-01-13T00:15:00+01:00"),
            CaseType::Snapshot,
            None,
            Some(Country::FR),
        )
        .unwrap();
    assert_eq!(networks, vec!["cim".to_string()]);

    // No file at that minute
    assert!(repository
        .load(
            &instant("2013-01-13T00:30:00+01:00"),
            CaseType::Snapshot,
            None,
            Some(Country::FR),
        )
        .unwrap()
        .is_empty());

    // No forecast published for that day
    assert!(repository
        .load(
            &instant("2013-01-13T00:15:00+01:00"),
            CaseType::Forecast,
            None,
            Some(Country::FR),
        )
        .unwrap()
        .is_empty());

    // Data exists, but not for that country
    assert!(repository
        .load(
            &instant("2013-01-13T00:15:00+01:00"),
            CaseType::Snapshot,
            None,
            Some(Country::BE),
        )
        .unwrap()
        .is_empty());
}

#[test]
fn test_preferred_format_wins_until_forbidden() {
    let root = fixture();
    let mut repository = repository(root.path());
    let date = instant("2013-01-14T00:15:00+01:00");

    let networks = repository
        .load(&date, CaseType::Snapshot, None, Some(Country::FR))
        .unwrap();
    assert_eq!(networks, vec!["cim".to_string()]);

    // Forbidding the preferred format for France switches the result to the
    // legacy one
    repository.config_mut().forbid(GeographicCode::FR, "CIM1");
    let networks = repository
        .load(&date, CaseType::Snapshot, None, Some(Country::FR))
        .unwrap();
    assert_eq!(networks, vec!["uct".to_string()]);
}

#[test]
fn test_load_collects_every_published_code_of_a_country() {
    let root = fixture();
    let repository = repository(root.path());

    let networks = repository
        .load(
            &instant("2013-01-15T00:15:00+01:00"),
            CaseType::Snapshot,
            None,
            Some(Country::DE),
        )
        .unwrap();
    assert_eq!(networks.len(), 4);
}

#[test]
fn test_snapshot_request_rejects_forecast_distance() {
    let root = fixture();
    let repository = repository(root.path());
    let date = instant("2013-01-13T00:15:00+01:00");

    assert!(matches!(
        repository.load(&date, CaseType::Snapshot, Some(240), Some(Country::FR)),
        Err(RepositoryError::ForecastDistanceOnSnapshot)
    ));
    assert!(matches!(
        repository.resolve(&date, CaseType::Snapshot, Some(240), Some(Country::FR)),
        Err(RepositoryError::ForecastDistanceOnSnapshot)
    ));
    assert!(matches!(
        repository.is_data_available(&date, CaseType::Snapshot, Some(240), Some(Country::FR)),
        Err(RepositoryError::ForecastDistanceOnSnapshot)
    ));

    // An explicit zero is the same as no distance
    let networks = repository
        .load(&date, CaseType::Snapshot, Some(0), Some(Country::FR))
        .unwrap();
    assert_eq!(networks.len(), 1);
}

#[test]
fn test_is_data_available_snapshot() {
    let root = fixture();
    let repository = repository(root.path());

    assert!(repository
        .is_data_available(
            &instant("2013-01-13T00:15:00+01:00"),
            CaseType::Snapshot,
            None,
            Some(Country::FR),
        )
        .unwrap());
    assert!(!repository
        .is_data_available(
            &instant("2013-01-13T00:30:00+01:00"),
            CaseType::Snapshot,
            None,
            Some(Country::FR),
        )
        .unwrap());
}

#[test]
fn test_fall_back_instants_resolve_to_distinct_files() {
    let root = fixture();
    let repository = repository(root.path());

    // Both instants render the same local clock reading
    let contexts = repository
        .resolve(
            &instant("2016-10-30T02:30:00+02:00"),
            CaseType::Forecast,
            None,
            Some(Country::FR),
        )
        .unwrap();
    assert_eq!(contexts.len(), 1);
    assert_eq!(contexts[0].candidate.base_name, "20161030_0230_FO7_FR0");

    let contexts = repository
        .resolve(
            &instant("2016-10-30T02:30:00+01:00"),
            CaseType::Forecast,
            None,
            Some(Country::FR),
        )
        .unwrap();
    assert_eq!(contexts.len(), 1);
    assert_eq!(contexts[0].candidate.base_name, "20161030_B230_FO7_FR0");
}

#[test]
fn test_day_ahead_is_the_default_forecast_request() {
    let root = fixture();
    let repository = repository(root.path());

    let contexts = repository
        .resolve(
            &instant("2016-09-30T00:30:00+01:00"),
            CaseType::Forecast,
            None,
            Some(Country::FR),
        )
        .unwrap();
    // The two-days-ahead and intraday files at the same instant do not match
    assert_eq!(contexts.len(), 1);
    assert_eq!(contexts[0].candidate.base_name, "20160930_0130_FO5_FR0");
}

#[test]
fn test_intraday_forecast_by_explicit_distance() {
    let root = fixture();
    let repository = repository(root.path());

    let networks = repository
        .load(
            &instant("2016-09-30T03:30:00+01:00"),
            CaseType::Forecast,
            Some(240),
            Some(Country::FR),
        )
        .unwrap();
    assert_eq!(networks.len(), 1);
}

#[test]
fn test_two_days_ahead_forecast_by_explicit_distance() {
    let root = fixture();
    let repository = repository(root.path());
    let date = instant("2016-09-30T00:30:00+01:00");

    assert!(repository
        .is_data_available(&date, CaseType::Forecast, Some(1830), Some(Country::FR))
        .unwrap());
    let networks = repository
        .load(&date, CaseType::Forecast, Some(1830), Some(Country::FR))
        .unwrap();
    assert_eq!(networks.len(), 1);
}

#[test]
fn test_data_available_snapshot_windows() {
    let root = fixture();
    let repository = repository(root.path());

    let available = repository
        .data_available(
            CaseType::Snapshot,
            Some(&[Country::FR]),
            &(instant("2013-01-13T00:00:00+01:00")..instant("2013-01-13T00:30:00+01:00")),
        )
        .unwrap();
    assert_eq!(available, paris_set(&["2013-01-13T00:15:00+01:00"]));

    let available = repository
        .data_available(
            CaseType::Snapshot,
            Some(&[Country::FR]),
            &(instant("2013-01-13T00:00:00+01:00")..instant("2013-01-13T01:00:00+01:00")),
        )
        .unwrap();
    assert_eq!(
        available,
        paris_set(&["2013-01-13T00:15:00+01:00", "2013-01-13T00:45:00+01:00"])
    );
}

#[test]
fn test_data_available_merges_formats() {
    let root = fixture();
    let repository = repository(root.path());

    let available = repository
        .data_available(
            CaseType::Snapshot,
            Some(&[Country::FR]),
            &(instant("2013-01-14T00:00:00+01:00")..instant("2013-01-14T01:00:00+01:00")),
        )
        .unwrap();
    assert_eq!(
        available,
        paris_set(&["2013-01-14T00:15:00+01:00", "2013-01-14T00:30:00+01:00"])
    );
}

#[test]
fn test_data_available_requires_every_requested_code() {
    let root = fixture();
    let repository = repository(root.path());

    // France published on that day, Belgium and Germany did not
    let available = repository
        .data_available(
            CaseType::Snapshot,
            Some(&[Country::BE, Country::DE]),
            &(instant("2013-01-13T00:00:00+01:00")..instant("2013-01-13T01:00:00+01:00")),
        )
        .unwrap();
    assert!(available.is_empty());

    // Four of Germany's five published codes are present; that is not enough
    let available = repository
        .data_available(
            CaseType::Snapshot,
            Some(&[Country::DE]),
            &(instant("2013-01-15T00:00:00+01:00")..instant("2013-01-15T01:00:00+01:00")),
        )
        .unwrap();
    assert!(available.is_empty());
}

#[test]
fn test_data_available_distinguishes_fall_back_instants() {
    let root = fixture();
    let repository = repository(root.path());

    let available = repository
        .data_available(
            CaseType::Forecast,
            Some(&[Country::FR]),
            &(instant("2016-10-30T00:00:00+02:00")..instant("2016-10-30T03:30:00+01:00")),
        )
        .unwrap();
    assert_eq!(
        available,
        paris_set(&["2016-10-30T02:30:00+02:00", "2016-10-30T02:30:00+01:00"])
    );

    // Narrowing the window keeps only the second pass over the repeated hour
    let available = repository
        .data_available(
            CaseType::Forecast,
            Some(&[Country::FR]),
            &(instant("2016-10-30T02:30:00+01:00")..instant("2016-10-30T03:30:00+01:00")),
        )
        .unwrap();
    assert_eq!(available, paris_set(&["2016-10-30T02:30:00+01:00"]));
}

#[test]
fn test_data_available_counts_day_ahead_forecasts_only() {
    let root = fixture();
    let repository = repository(root.path());

    // The window holds a day-ahead file at 01:30 and an intraday-only instant
    // at 02:30; only the former is available
    let available = repository
        .data_available(
            CaseType::Forecast,
            Some(&[Country::FR]),
            &(instant("2016-09-30T01:30:00+02:00")..instant("2016-09-30T03:30:00+02:00")),
        )
        .unwrap();
    assert_eq!(available, paris_set(&["2016-09-30T01:30:00+02:00"]));
}

#[test]
fn test_load_propagates_import_failure() {
    struct FailingImporter;

    impl CaseImporter for FailingImporter {
        type Network = String;

        fn format_id(&self) -> &str {
            "CIM1"
        }

        fn exists(&self, candidate: &CandidateRef) -> bool {
            candidate
                .directory
                .join(format!("{}.zip", candidate.base_name))
                .is_file()
        }

        fn import(&self, _candidate: &CandidateRef) -> anyhow::Result<String> {
            anyhow::bail!("truncated archive")
        }
    }

    let root = fixture();
    let repository = CaseRepository::new(
        RepositoryConfig::new(root.path()),
        vec![CaseFormat::new(Box::new(FailingImporter), "CIM")],
    );

    let result = repository.load(
        &instant("2013-01-13T00:15:00+01:00"),
        CaseType::Snapshot,
        None,
        Some(Country::FR),
    );
    assert!(matches!(
        result,
        Err(RepositoryError::Import { format, base_name, .. })
            if format == "CIM1" && base_name == "20130113_0015_SN7_FR0"
    ));
}
