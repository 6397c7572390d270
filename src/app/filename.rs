//! Case filename grammar
//!
//! Case files are named `YYYYMMDD_HHMM_TTd_GGv` (plus a format-specific
//! suffix), where `TT` is a file-type token, `d` the ISO weekday digit, `GG`
//! the geographic code and `v` a version digit. During the fall-back
//! daylight-saving transition the same local clock reading occurs twice; the
//! second occurrence is written `BHMM`, with the letter `B` replacing the
//! leading hour digit.
//!
//! Parsing yields the local timestamp, the forecast distance in minutes and
//! the geographic scope of the file, from which the classification predicates
//! (snapshot / intraday / day-ahead / two-days-ahead) are derived.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::app::geography::{Country, GeographicCode};
use crate::constants::time::{
    CASE_TIME_ZONE, DAY_AHEAD_GENERATION_OFFSET_MINUTES, TWO_DAYS_AHEAD_GENERATION_OFFSET_MINUTES,
};
use crate::constants::tokens;

/// A parsed case filename
///
/// Produced by [`CaseFileName::parse`]; a name that does not match the grammar
/// yields `None` and is never classified as any case type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFileName {
    date: DateTime<Tz>,
    forecast_distance: i32,
    geographic_code: GeographicCode,
    weekday_digit: u8,
    version: u8,
}

impl CaseFileName {
    /// Parse a filename (stem or full name; trailing characters after the stem
    /// are ignored) into its timestamp, forecast distance and geographic scope
    ///
    /// Returns `None` for names that do not match the grammar: wrong field
    /// layout, a non-numeric unknown file-type token, an unknown geographic
    /// token, or a local time that does not exist in the case time zone.
    pub fn parse(name: &str) -> Option<Self> {
        // Stem layout: 0..8 date, 9..13 [B]HMM, 14..16 type, 16 weekday,
        // 18..20 geographic code, 20 version, with '_' separators between.
        if name.len() < 21 || !name.is_ascii() {
            return None;
        }
        let bytes = name.as_bytes();
        if bytes[8] != b'_' || bytes[13] != b'_' || bytes[17] != b'_' {
            return None;
        }

        let year = parse_digits(&name[0..4])? as i32;
        let month = parse_digits(&name[4..6])?;
        let day = parse_digits(&name[6..8])?;

        let hour_field = &name[9..11];
        let later_of_repeated_hour = hour_field.starts_with('B');
        let hour = if later_of_repeated_hour {
            parse_digits(&name[10..11])?
        } else {
            parse_digits(hour_field)?
        };
        let minute = parse_digits(&name[11..13])?;

        let naive = NaiveDate::from_ymd_opt(year, month, day)?
            .and_time(NaiveTime::from_hms_opt(hour, minute, 0)?);
        let mut date = match CASE_TIME_ZONE.from_local_datetime(&naive) {
            LocalResult::Single(date) => date,
            // A plain hour names the first of the two repeated readings
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => return None,
        };
        if later_of_repeated_hour {
            date = date + Duration::hours(1);
        }

        let type_token = &name[14..16];
        let forecast_distance = match type_token {
            tokens::SNAPSHOT => 0,
            tokens::DAY_AHEAD => {
                to_i32(minutes_since_local_midnight(&date) + DAY_AHEAD_GENERATION_OFFSET_MINUTES)?
            }
            tokens::TWO_DAYS_AHEAD => to_i32(
                minutes_since_local_midnight(&date) + TWO_DAYS_AHEAD_GENERATION_OFFSET_MINUTES,
            )?,
            tokens::REFERENCE | tokens::LONG_TERM_REFERENCE => {
                tokens::UNMODELED_FORECAST_DISTANCE
            }
            // Intraday forecast: the two digits are the distance in hours
            intraday => (parse_digits(intraday)? * 60) as i32,
        };

        let weekday_digit = parse_digits(&name[16..17])? as u8;
        let geographic_code = GeographicCode::from_token(&name[18..20])?;
        let version = parse_digits(&name[20..21])? as u8;

        Some(Self {
            date,
            forecast_distance,
            geographic_code,
            weekday_digit,
            version,
        })
    }

    /// The instant this case describes, in the case time zone
    pub fn date(&self) -> &DateTime<Tz> {
        &self.date
    }

    /// How many minutes before the described instant this case was generated
    ///
    /// Zero for snapshots; [`tokens::UNMODELED_FORECAST_DISTANCE`] for
    /// reference and long-term-reference cases.
    pub fn forecast_distance(&self) -> i32 {
        self.forecast_distance
    }

    /// The geographic scope of the file
    pub fn geographic_code(&self) -> GeographicCode {
        self.geographic_code
    }

    /// The publishing country, if the geographic scope denotes one
    pub fn country(&self) -> Option<Country> {
        self.geographic_code.country()
    }

    /// The weekday digit carried in the stem (informational, not reinterpreted)
    pub fn weekday_digit(&self) -> u8 {
        self.weekday_digit
    }

    /// The version digit carried in the stem
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Whether this case is a snapshot of the measured state
    pub fn is_snapshot(&self) -> bool {
        is_snapshot(self.forecast_distance)
    }

    /// Whether this case is an intraday forecast
    pub fn is_intraday(&self) -> bool {
        is_intraday(&self.date, self.forecast_distance)
    }

    /// Whether this case is a day-ahead forecast
    pub fn is_day_ahead(&self) -> bool {
        is_day_ahead(&self.date, self.forecast_distance)
    }

    /// Whether this case is a two-days-ahead forecast
    pub fn is_two_days_ahead(&self) -> bool {
        is_two_days_ahead(&self.date, self.forecast_distance)
    }
}

/// A forecast distance of zero marks a snapshot
pub fn is_snapshot(forecast_distance: i32) -> bool {
    forecast_distance == 0
}

/// An intraday forecast was generated after local midnight of the instant it
/// describes
pub fn is_intraday(date: &DateTime<Tz>, forecast_distance: i32) -> bool {
    let minutes = minutes_since_local_midnight(date);
    forecast_distance > 0 && (forecast_distance as i64) < minutes
}

/// A day-ahead forecast was generated before local midnight but less than 29
/// hours before it
pub fn is_day_ahead(date: &DateTime<Tz>, forecast_distance: i32) -> bool {
    let minutes = minutes_since_local_midnight(date);
    forecast_distance as i64 >= minutes
        && (forecast_distance as i64 - minutes) < TWO_DAYS_AHEAD_GENERATION_OFFSET_MINUTES
}

/// A two-days-ahead forecast was generated 29 hours or more before local
/// midnight of the instant it describes
pub fn is_two_days_ahead(date: &DateTime<Tz>, forecast_distance: i32) -> bool {
    let minutes = minutes_since_local_midnight(date);
    forecast_distance > 0
        && (forecast_distance as i64 - minutes) >= TWO_DAYS_AHEAD_GENERATION_OFFSET_MINUTES
}

/// Minutes of physical duration elapsed since the local midnight preceding
/// `date`
///
/// This is an instant difference, not wall-clock arithmetic: on the day of a
/// daylight-saving transition the two differ by an hour.
pub fn minutes_since_local_midnight(date: &DateTime<Tz>) -> i64 {
    let midnight = date.date_naive().and_time(NaiveTime::MIN);
    match date.timezone().from_local_datetime(&midnight).earliest() {
        Some(start_of_day) => (date.clone() - start_of_day).num_minutes(),
        // Midnight never falls inside a transition gap in the case time zone;
        // fall back to wall-clock minutes if it ever does
        None => (date.hour() * 60 + date.minute()) as i64,
    }
}

/// Parse a run of ASCII digits, rejecting signs and whitespace
fn parse_digits(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn to_i32(minutes: i64) -> Option<i32> {
    i32::try_from(minutes).ok()
}
