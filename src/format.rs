//! Text Formatting Helpers
//!
//! Coordinates, truncation and dates for list entries and form fields.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::models::Coords;

pub const NO_ADDRESS: &str = "Адрес не указан";

/// "54.001000, 37.001000"
pub fn format_coords(coords: Coords) -> String {
    format!("{:.6}, {:.6}", coords.lat, coords.lon)
}

/// Parse the coordinate display text back into a pair
pub fn parse_coords(text: &str) -> Option<Coords> {
    let mut parts = text.split(',');
    let lat = parts.next()?.trim().parse::<f64>().ok()?;
    let lon = parts.next()?.trim().parse::<f64>().ok()?;
    if parts.next().is_some() || !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    Some(Coords::new(lat, lon))
}

/// First `max_chars` characters (not bytes)
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Preview shown in list entries and balloons; always ends with "..."
pub fn preview(text: &str, max_chars: usize) -> String {
    format!("{}...", truncate_chars(text, max_chars))
}

pub fn address_or_default(address: Option<&str>) -> &str {
    match address {
        Some(a) if !a.trim().is_empty() => a,
        _ => NO_ADDRESS,
    }
}

/// `dd.mm.yyyy` from an RFC 3339 or naive ISO timestamp.
///
/// Timestamps with an offset are shown in local time; naive ones as written.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local).date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(d) => d.format("%d.%m.%Y").to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_display_and_parse() {
        let text = format_coords(Coords::new(54.001, 37.001));
        assert_eq!(text, "54.001000, 37.001000");
        assert_eq!(parse_coords(&text), Some(Coords::new(54.001, 37.001)));
    }

    #[test]
    fn test_parse_coords_rejects_garbage() {
        assert_eq!(parse_coords(""), None);
        assert_eq!(parse_coords("Кликните на карте"), None);
        assert_eq!(parse_coords("54.0"), None);
        assert_eq!(parse_coords("54.0, abc"), None);
        assert_eq!(parse_coords("1, 2, 3"), None);
        assert_eq!(parse_coords("NaN, 2"), None);
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_chars("Привет мир", 6), "Привет");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(preview("Построить", 4), "Пост...");
    }

    #[test]
    fn test_address_fallback() {
        assert_eq!(address_or_default(None), "Адрес не указан");
        assert_eq!(address_or_default(Some("  ")), "Адрес не указан");
        assert_eq!(address_or_default(Some("ул. Мира, 1")), "ул. Мира, 1");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date(Some("2024-05-01T12:00:00+00:00")), "01.05.2024");
        assert_eq!(format_date(Some("2024-05-01T10:00:00.123456")), "01.05.2024");
        assert_eq!(format_date(Some("2024-12-31")), "31.12.2024");
        assert_eq!(format_date(Some("yesterday")), "");
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn test_format_date_uses_local_day() {
        let raw = "2024-05-01T23:30:00+00:00";
        let local = DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Local);
        assert_eq!(format_date(Some(raw)), local.format("%d.%m.%Y").to_string());
    }
}
