//! Candidate filename generation
//!
//! For a given instant, case type and geographic code the set of filenames
//! that could hold the matching case is small and fully determined: the date
//! and time fields come from the instant, the weekday digit from its day of
//! week, and the cross product of version digits (highest first, so the
//! latest published version wins) and file-type tokens spans the rest.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Duration, Timelike};
use chrono_tz::Tz;

use crate::app::geography::GeographicCode;
use crate::app::repository::CaseType;
use crate::constants::layout::MAX_VERSION_DIGIT;

/// Day directory for `date` under a format's case-type directory:
/// `<type_dir>/<YYYY>/<MM>/<DD>`
pub fn day_directory(type_dir: &Path, date: &DateTime<Tz>) -> PathBuf {
    type_dir
        .join(format!("{:04}", date.year()))
        .join(format!("{:02}", date.month()))
        .join(format!("{:02}", date.day()))
}

/// Ordered candidate stems for `date`, `case_type` and `code`
///
/// Version digit is the outer loop (9 down to 0), file-type token the inner
/// one; the scanner accepts the first existing stem per token/weekday
/// combination without comparing contents.
pub fn candidate_stems(
    date: &DateTime<Tz>,
    case_type: CaseType,
    code: GeographicCode,
) -> Vec<String> {
    let prefix = stem_prefix(date);
    let weekday = weekday_digit(date);
    let tokens = case_type.file_type_tokens();

    let mut stems = Vec::with_capacity((MAX_VERSION_DIGIT as usize + 1) * tokens.len());
    for version in (0..=MAX_VERSION_DIGIT).rev() {
        for token in tokens {
            stems.push(format!("{prefix}_{token}{weekday}_{code}{version}"));
        }
    }
    stems
}

/// Human-readable pattern of the stems probed for `date`, `case_type` and
/// `code`, used in the no-candidate-matched diagnostic
pub fn expected_pattern(date: &DateTime<Tz>, case_type: CaseType, code: GeographicCode) -> String {
    format!(
        "{}_[{}]{}_{}",
        stem_prefix(date),
        case_type.file_type_tokens().join("|"),
        weekday_digit(date),
        code
    )
}

/// `YYYYMMDD_HHMM` prefix of the stem, with the hour field `B`-encoded when
/// the instant falls in the repeated hour of a fall-back transition
fn stem_prefix(date: &DateTime<Tz>) -> String {
    let mut hour_minute = format!("{:02}{:02}", date.hour(), date.minute());
    if is_repeated_local_hour(date) {
        hour_minute.replace_range(0..1, "B");
    }
    format!(
        "{:04}{:02}{:02}_{}",
        date.year(),
        date.month(),
        date.day(),
        hour_minute
    )
}

/// Whether the instant one hour earlier renders the same local hour, i.e.
/// `date` lies in the second pass over a repeated fall-back hour
fn is_repeated_local_hour(date: &DateTime<Tz>) -> bool {
    (date.clone() - Duration::hours(1)).hour() == date.hour()
}

/// ISO weekday digit (Monday = 1) carried in the stem
fn weekday_digit(date: &DateTime<Tz>) -> u32 {
    date.weekday().number_from_monday()
}
