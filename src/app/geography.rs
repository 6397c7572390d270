//! Geographic scope markers used in case filenames
//!
//! Every case file carries a two-character geographic code naming the publishing
//! country or an aggregate regional scope. Germany publishes per-TSO variants in
//! addition to its country-wide code, so a country can map to several codes.

use serde::{Deserialize, Serialize};

/// Countries appearing in the geographic code table
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    AL,
    AT,
    BA,
    BE,
    BG,
    BY,
    CH,
    CZ,
    DE,
    DK,
    ES,
    FR,
    GB,
    GR,
    HR,
    HU,
    IT,
    LU,
    MA,
    MD,
    ME,
    MK,
    NL,
    NO,
    PL,
    PT,
    RO,
    RS,
    RU,
    SE,
    SI,
    SK,
    TR,
    UA,
}

/// Geographic scope marker carried in the fourth field of a case filename stem
///
/// Most codes denote a publishing country. `D1`, `D2`, `D4` and `D7`/`D8` are
/// the per-TSO German variants. `UC` and `UX` are aggregate scopes covering the
/// continental synchronous area and the whole interconnection respectively; they
/// map to no single country.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GeographicCode {
    AL,
    AT,
    BA,
    BE,
    BG,
    BY,
    CH,
    CZ,
    D1,
    D2,
    D4,
    D7,
    D8,
    DE,
    DK,
    ES,
    FR,
    GB,
    GR,
    HR,
    HU,
    IT,
    LU,
    MA,
    MD,
    ME,
    MK,
    NL,
    NO,
    PL,
    PT,
    RO,
    RS,
    RU,
    SE,
    SI,
    SK,
    TR,
    UA,
    UC,
    UX,
}

/// All geographic codes, in token order
pub const ALL_CODES: [GeographicCode; 41] = [
    GeographicCode::AL,
    GeographicCode::AT,
    GeographicCode::BA,
    GeographicCode::BE,
    GeographicCode::BG,
    GeographicCode::BY,
    GeographicCode::CH,
    GeographicCode::CZ,
    GeographicCode::D1,
    GeographicCode::D2,
    GeographicCode::D4,
    GeographicCode::D7,
    GeographicCode::D8,
    GeographicCode::DE,
    GeographicCode::DK,
    GeographicCode::ES,
    GeographicCode::FR,
    GeographicCode::GB,
    GeographicCode::GR,
    GeographicCode::HR,
    GeographicCode::HU,
    GeographicCode::IT,
    GeographicCode::LU,
    GeographicCode::MA,
    GeographicCode::MD,
    GeographicCode::ME,
    GeographicCode::MK,
    GeographicCode::NL,
    GeographicCode::NO,
    GeographicCode::PL,
    GeographicCode::PT,
    GeographicCode::RO,
    GeographicCode::RS,
    GeographicCode::RU,
    GeographicCode::SE,
    GeographicCode::SI,
    GeographicCode::SK,
    GeographicCode::TR,
    GeographicCode::UA,
    GeographicCode::UC,
    GeographicCode::UX,
];

/// Aggregate scopes probed when a request names no country
pub const AGGREGATE_SCOPES: [GeographicCode; 2] = [GeographicCode::UX, GeographicCode::UC];

/// Codes excluded from every country mapping: no snapshot data is published for
/// them and no forecast replacement is implemented. Removing an entry here is
/// all it takes to re-enable a code.
pub const UNPUBLISHED_CODES: [GeographicCode; 1] = [GeographicCode::D1];

impl GeographicCode {
    /// Parse a two-character filename token into a geographic code
    pub fn from_token(token: &str) -> Option<Self> {
        let code = match token {
            "AL" => Self::AL,
            "AT" => Self::AT,
            "BA" => Self::BA,
            "BE" => Self::BE,
            "BG" => Self::BG,
            "BY" => Self::BY,
            "CH" => Self::CH,
            "CZ" => Self::CZ,
            "D1" => Self::D1,
            "D2" => Self::D2,
            "D4" => Self::D4,
            "D7" => Self::D7,
            "D8" => Self::D8,
            "DE" => Self::DE,
            "DK" => Self::DK,
            "ES" => Self::ES,
            "FR" => Self::FR,
            "GB" => Self::GB,
            "GR" => Self::GR,
            "HR" => Self::HR,
            "HU" => Self::HU,
            "IT" => Self::IT,
            "LU" => Self::LU,
            "MA" => Self::MA,
            "MD" => Self::MD,
            "ME" => Self::ME,
            "MK" => Self::MK,
            "NL" => Self::NL,
            "NO" => Self::NO,
            "PL" => Self::PL,
            "PT" => Self::PT,
            "RO" => Self::RO,
            "RS" => Self::RS,
            "RU" => Self::RU,
            "SE" => Self::SE,
            "SI" => Self::SI,
            "SK" => Self::SK,
            "TR" => Self::TR,
            "UA" => Self::UA,
            "UC" => Self::UC,
            "UX" => Self::UX,
            _ => return None,
        };
        Some(code)
    }

    /// Get the two-character filename token for this code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AL => "AL",
            Self::AT => "AT",
            Self::BA => "BA",
            Self::BE => "BE",
            Self::BG => "BG",
            Self::BY => "BY",
            Self::CH => "CH",
            Self::CZ => "CZ",
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D4 => "D4",
            Self::D7 => "D7",
            Self::D8 => "D8",
            Self::DE => "DE",
            Self::DK => "DK",
            Self::ES => "ES",
            Self::FR => "FR",
            Self::GB => "GB",
            Self::GR => "GR",
            Self::HR => "HR",
            Self::HU => "HU",
            Self::IT => "IT",
            Self::LU => "LU",
            Self::MA => "MA",
            Self::MD => "MD",
            Self::ME => "ME",
            Self::MK => "MK",
            Self::NL => "NL",
            Self::NO => "NO",
            Self::PL => "PL",
            Self::PT => "PT",
            Self::RO => "RO",
            Self::RS => "RS",
            Self::RU => "RU",
            Self::SE => "SE",
            Self::SI => "SI",
            Self::SK => "SK",
            Self::TR => "TR",
            Self::UA => "UA",
            Self::UC => "UC",
            Self::UX => "UX",
        }
    }

    /// The publishing country, if this code denotes one
    pub fn country(&self) -> Option<Country> {
        let country = match self {
            Self::AL => Country::AL,
            Self::AT => Country::AT,
            Self::BA => Country::BA,
            Self::BE => Country::BE,
            Self::BG => Country::BG,
            Self::BY => Country::BY,
            Self::CH => Country::CH,
            Self::CZ => Country::CZ,
            Self::D1 | Self::D2 | Self::D4 | Self::D7 | Self::D8 | Self::DE => Country::DE,
            Self::DK => Country::DK,
            Self::ES => Country::ES,
            Self::FR => Country::FR,
            Self::GB => Country::GB,
            Self::GR => Country::GR,
            Self::HR => Country::HR,
            Self::HU => Country::HU,
            Self::IT => Country::IT,
            Self::LU => Country::LU,
            Self::MA => Country::MA,
            Self::MD => Country::MD,
            Self::ME => Country::ME,
            Self::MK => Country::MK,
            Self::NL => Country::NL,
            Self::NO => Country::NO,
            Self::PL => Country::PL,
            Self::PT => Country::PT,
            Self::RO => Country::RO,
            Self::RS => Country::RS,
            Self::RU => Country::RU,
            Self::SE => Country::SE,
            Self::SI => Country::SI,
            Self::SK => Country::SK,
            Self::TR => Country::TR,
            Self::UA => Country::UA,
            Self::UC | Self::UX => return None,
        };
        Some(country)
    }
}

impl std::fmt::Display for GeographicCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The geographic codes a country publishes under, minus the codes listed in
/// [`UNPUBLISHED_CODES`]
pub fn codes_for_country(country: Country) -> Vec<GeographicCode> {
    ALL_CODES
        .iter()
        .copied()
        .filter(|code| code.country() == Some(country))
        .filter(|code| !UNPUBLISHED_CODES.contains(code))
        .collect()
}
