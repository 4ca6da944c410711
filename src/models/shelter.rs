//! Heat-relief shelter records and the tabular record parser
//!
//! Shelter data arrives as a fixed-schema tabular export: title, address,
//! latitude, longitude, facility type code, capacity, three Y/N amenity
//! flags, and free-form notes.

use crate::{Result, ShelterError};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One heat-relief shelter record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shelter {
    pub title: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Facility category code, see [`facility_type_label`]
    pub shelter_type: String,
    pub capacity: u32,
    pub night_open: bool,
    pub holiday_open: bool,
    pub lodging_available: bool,
    pub notes: String,
    /// User-toggled favorite flag, the only mutable field
    #[serde(default)]
    pub is_favorite: bool,
}

/// Number of fields in one shelter record row
const RECORD_FIELDS: usize = 10;

impl Shelter {
    /// Coordinates of this shelter
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Display label for this shelter's facility type code
    #[must_use]
    pub fn type_label(&self) -> &'static str {
        facility_type_label(&self.shelter_type).unwrap_or("기타")
    }

    /// Parse one row of the tabular shelter export
    ///
    /// Expected fields, in order: title, address, latitude, longitude,
    /// type code, capacity, night-open Y/N, holiday-open Y/N,
    /// lodging-available Y/N, notes.
    pub fn from_record(fields: &[&str]) -> Result<Self> {
        if fields.len() != RECORD_FIELDS {
            return Err(ShelterError::parse(format!(
                "expected {RECORD_FIELDS} fields, got {}",
                fields.len()
            )));
        }

        let latitude = parse_coordinate(fields[2], "latitude")?;
        let longitude = parse_coordinate(fields[3], "longitude")?;

        let capacity = fields[5]
            .trim()
            .parse::<u32>()
            .map_err(|_| ShelterError::parse(format!("invalid capacity: {}", fields[5])))?;

        Ok(Shelter {
            title: fields[0].trim().to_string(),
            address: fields[1].trim().to_string(),
            latitude,
            longitude,
            shelter_type: fields[4].trim().to_string(),
            capacity,
            night_open: parse_flag(fields[6])?,
            holiday_open: parse_flag(fields[7])?,
            lodging_available: parse_flag(fields[8])?,
            notes: fields[9].trim().to_string(),
            is_favorite: false,
        })
    }
}

fn parse_coordinate(raw: &str, which: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ShelterError::parse(format!("invalid {which}: {raw}")))
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim() {
        "Y" | "y" => Ok(true),
        "N" | "n" | "" => Ok(false),
        other => Err(ShelterError::parse(format!("invalid Y/N flag: {other}"))),
    }
}

/// Parse a whole comma-separated shelter table
///
/// Malformed rows are skipped with a warning so one bad row never poisons
/// the rest of the export. Blank lines are ignored.
#[must_use]
pub fn parse_shelter_table(text: &str) -> Vec<Shelter> {
    let mut shelters = Vec::new();
    let mut parse_errors = 0;

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        match Shelter::from_record(&fields) {
            Ok(shelter) => shelters.push(shelter),
            Err(e) => {
                warn!("Skipping shelter record on line {}: {}", line_no + 1, e);
                parse_errors += 1;
            }
        }
    }

    info!(
        "Loaded {} shelters from table ({} skipped)",
        shelters.len(),
        parse_errors
    );

    shelters
}

/// Display label for a facility type code
///
/// Static lookup table for the category codes used by the shelter export.
/// Unknown codes return `None`; callers typically fall back to "기타".
#[must_use]
pub fn facility_type_label(code: &str) -> Option<&'static str> {
    let label = match code {
        "1" => "경로당",
        "2" => "마을회관",
        "3" => "주민센터",
        "4" => "복지관",
        "5" => "보건소",
        "6" => "도서관",
        "7" => "종교시설",
        "8" => "금융기관",
        "9" => "체육시설",
        "10" => "공공청사",
        "11" => "민간시설",
        "12" => "정자·파고라",
        "13" => "공원",
        "14" => "지하철역",
        "15" => "학교",
        "99" => "기타",
        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_ROW: &str = "중구쉼터,서울특별시 중구 세종대로 110,37.5665,126.9780,1,30,Y,N,N,1층 경로당";

    #[test]
    fn test_from_record() {
        let fields: Vec<&str> = GOOD_ROW.split(',').collect();
        let shelter = Shelter::from_record(&fields).unwrap();

        assert_eq!(shelter.title, "중구쉼터");
        assert_eq!(shelter.latitude, 37.5665);
        assert_eq!(shelter.longitude, 126.978);
        assert_eq!(shelter.shelter_type, "1");
        assert_eq!(shelter.capacity, 30);
        assert!(shelter.night_open);
        assert!(!shelter.holiday_open);
        assert!(!shelter.is_favorite);
        assert_eq!(shelter.type_label(), "경로당");
    }

    #[test]
    fn test_from_record_rejects_bad_latitude() {
        let row = GOOD_ROW.replace("37.5665", "not-a-number");
        let fields: Vec<&str> = row.split(',').collect();
        let err = Shelter::from_record(&fields).unwrap_err();
        assert!(matches!(err, ShelterError::Parse { .. }));
    }

    #[test]
    fn test_from_record_rejects_wrong_arity() {
        let fields = vec!["only", "four", "fields", "here"];
        assert!(Shelter::from_record(&fields).is_err());
    }

    #[test]
    fn test_parse_table_skips_bad_rows() {
        let table = format!("{GOOD_ROW}\n\nbroken,row\n{GOOD_ROW}");
        let shelters = parse_shelter_table(&table);
        assert_eq!(shelters.len(), 2);
    }

    #[test]
    fn test_facility_type_labels() {
        assert_eq!(facility_type_label("1"), Some("경로당"));
        assert_eq!(facility_type_label("99"), Some("기타"));
        assert_eq!(facility_type_label("42"), None);
    }
}
