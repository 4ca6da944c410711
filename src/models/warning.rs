//! Government weather-warning records and their display form
//!
//! Raw titles come in like `"서울특별시 /내륙/ 폭염주의보(*) "` and issuance
//! times as `yyyyMMddHHmm` strings; the display form keeps only the warning
//! name and a dotted timestamp.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Issuance timestamp pattern used by the warning feed
const ISSUED_AT_FORMAT: &str = "%Y%m%d%H%M";
/// Dotted display pattern for issuance timestamps
const DISPLAY_FORMAT: &str = "%Y.%m.%d %H:%M";

/// One warning entry as parsed from the feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningRecord {
    /// Title as it appears in the feed
    pub raw_title: String,
    /// Issuance time in `yyyyMMddHHmm` form
    pub issued_at: String,
}

/// Display-ready form of a warning record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayWarning {
    pub cleaned_title: String,
    pub formatted_issued_at: String,
}

impl WarningRecord {
    /// Convert to the display form
    #[must_use]
    pub fn to_display(&self) -> DisplayWarning {
        DisplayWarning {
            cleaned_title: clean_title(&self.raw_title),
            formatted_issued_at: format_issued_at(&self.issued_at),
        }
    }
}

/// Reduce a raw feed title to the warning name
///
/// Takes the last `/`-separated segment, strips the literal `(*)` marker
/// and trims surrounding whitespace.
#[must_use]
pub fn clean_title(raw: &str) -> String {
    let last_segment = raw.rsplit('/').next().unwrap_or(raw);
    last_segment.replace("(*)", "").trim().to_string()
}

/// Reformat a `yyyyMMddHHmm` issuance time as `yyyy.MM.dd HH:mm`
///
/// An unparseable value is passed through unchanged rather than failing the
/// whole pipeline for one bad record.
#[must_use]
pub fn format_issued_at(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw.trim(), ISSUED_AT_FORMAT) {
        Ok(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
