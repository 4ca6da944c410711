//! Weather-warning feed parsing and bulletin formatting
//!
//! The government alert feed is a tag-delimited stream of `item` elements,
//! each carrying a `title` and a `tmFc` issuance time. Parsing walks the
//! stream event by event, accumulating character data into whichever field
//! is currently open and emitting one record per closed `item`.

use crate::models::{DisplayWarning, WarningRecord};
use crate::{Result, ShelterError};
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, warn};

/// Fixed message shown when no warnings are in effect
pub const NO_WARNINGS_MESSAGE: &str = "현재 발효 중인 기상특보가 없습니다.";

/// Parse a warning feed document into records
///
/// Items missing a title or issuance time are skipped with a warning.
/// A document that cannot be read as coherent XML yields a parse error;
/// callers treat that as "no warnings available" rather than a crash.
pub fn parse_warnings(xml: &str) -> Result<Vec<WarningRecord>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut skipped = 0;

    // Accumulators for the item currently being read
    let mut current_element = Vec::new();
    let mut title = String::new();
    let mut issued_at = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                current_element = e.local_name().as_ref().to_vec();
                if current_element == b"item" {
                    title.clear();
                    issued_at.clear();
                }
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| ShelterError::parse(format!("bad character data: {err}")))?;
                append_field(&current_element, &text, &mut title, &mut issued_at);
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                append_field(&current_element, &text, &mut title, &mut issued_at);
            }
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"item" {
                    if title.is_empty() || issued_at.is_empty() {
                        warn!("Skipping warning item with missing title or tmFc");
                        skipped += 1;
                    } else {
                        records.push(WarningRecord {
                            raw_title: std::mem::take(&mut title),
                            issued_at: std::mem::take(&mut issued_at),
                        });
                    }
                }
                current_element.clear();
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ShelterError::parse(format!(
                    "malformed warning feed at position {}: {e}",
                    reader.buffer_position()
                )));
            }
        }
    }

    debug!(
        "Parsed {} warning records ({} skipped)",
        records.len(),
        skipped
    );

    Ok(records)
}

fn append_field(element: &[u8], text: &str, title: &mut String, issued_at: &mut String) {
    match element {
        b"title" => title.push_str(text),
        b"tmFc" => issued_at.push_str(text),
        _ => {}
    }
}

/// Render display warnings as a newline-joined alert bulletin
///
/// Zero warnings produce the fixed [`NO_WARNINGS_MESSAGE`] sentinel, never
/// an empty string. Feed order is preserved.
#[must_use]
pub fn format_bulletin(warnings: &[DisplayWarning]) -> String {
    if warnings.is_empty() {
        return NO_WARNINGS_MESSAGE.to_string();
    }

    warnings
        .iter()
        .map(|w| format!("[특보] {} ({})", w.cleaned_title, w.formatted_issued_at))
        .collect::<Vec<_>>()
        .join("\n")
}
