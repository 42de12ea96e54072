use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// zh-TW numeric date: `2024/03/05`.
const DISPLAY_FORMAT: &str = "%Y/%m/%d";

/// Taiwan time, used to pick the calendar day of full timestamps.
const TAIPEI_OFFSET_SECS: i32 = 8 * 3600;

/// Render an ISO date the way the site shows it (`YYYY/MM/DD`).
/// Anything that does not parse comes back unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        let taipei = FixedOffset::east_opt(TAIPEI_OFFSET_SECS)?;
        return Some(dt.with_timezone(&taipei).date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ndt| ndt.date())
}

/// Escape the five HTML-significant characters.
/// Not idempotent: escaping twice double-escapes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Percent-encode a slug for use inside a fragment link.
pub fn encode_slug(slug: &str) -> String {
    utf8_percent_encode(slug, URI_COMPONENT).to_string()
}

/// Percent-decode a slug read from the fragment. `None` if the bytes are not UTF-8.
pub fn decode_slug(raw: &str) -> Option<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}
