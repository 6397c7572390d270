//! Library constants for the case repository engine
//!
//! This module centralizes the constants used throughout the library,
//! organized by functional domain for maintainability and clarity.

/// Time-related constants
pub mod time {
    use chrono_tz::Tz;

    /// Civil time zone in which all case filename timestamps are interpreted
    pub const CASE_TIME_ZONE: Tz = chrono_tz::Europe::Paris;

    /// Day-ahead forecasts are generated at 18:00 one day ahead, so their
    /// forecast distance is the minutes since local midnight plus six hours
    pub const DAY_AHEAD_GENERATION_OFFSET_MINUTES: i64 = 6 * 60;

    /// Two-days-ahead forecasts are generated at 19:00 two days ahead
    /// (29 hours before local midnight of the described day)
    pub const TWO_DAYS_AHEAD_GENERATION_OFFSET_MINUTES: i64 = 29 * 60;
}

/// File-type tokens appearing in the third field of a case filename stem
pub mod tokens {
    /// Snapshot of the measured network state
    pub const SNAPSHOT: &str = "SN";

    /// Day-ahead congestion forecast
    pub const DAY_AHEAD: &str = "FO";

    /// Two-days-ahead congestion forecast
    pub const TWO_DAYS_AHEAD: &str = "2D";

    /// Reference case; its forecast distance is not modeled
    pub const REFERENCE: &str = "RE";

    /// Long-term reference case; its forecast distance is not modeled
    pub const LONG_TERM_REFERENCE: &str = "LR";

    /// Sentinel forecast distance for reference and long-term-reference cases.
    /// No real distance equals it, so these cases never match an explicit
    /// forecast-distance request.
    pub const UNMODELED_FORECAST_DISTANCE: i32 = -1;

    /// Tokens probed for a snapshot request
    pub const SNAPSHOT_TOKENS: [&str; 1] = [SNAPSHOT];

    /// Tokens probed for a forecast request, in probe order. The two-digit
    /// tokens are intraday forecasts; the digits are the forecast distance in
    /// hours.
    pub const FORECAST_TOKENS: [&str; 27] = [
        DAY_AHEAD,
        TWO_DAYS_AHEAD,
        LONG_TERM_REFERENCE,
        REFERENCE,
        "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
        "13", "14", "15", "16", "17", "18", "19", "20", "21", "22", "23",
    ];
}

/// Repository layout constants
pub mod layout {
    /// Highest version digit in a filename stem. Candidates are probed from
    /// this digit down to zero so that the latest published version wins.
    pub const MAX_VERSION_DIGIT: u8 = 9;

    /// Default configuration file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Default configuration directory name under the platform config root
    pub const CONFIG_DIR_NAME: &str = "entsoe-cases";
}
