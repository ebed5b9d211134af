use std::collections::BTreeMap;

use time::{
    OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};

pub const NO_ATTRIBUTES: &str = "No attributes";
pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";

/// One `key: value` line per attribute, in key order.
pub fn attribute_lines(attributes: &BTreeMap<String, String>) -> Vec<String> {
    attributes
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect()
}

/// Creation timestamp in the local zone, or `N/A` when absent.
///
/// The offset is the one in force at the timestamp itself, so records from
/// the other side of a daylight-saving change keep their own offset.
pub fn created_at(raw: Option<&str>) -> String {
    format_created_at(raw, |ts| UtcOffset::local_offset_at(ts).unwrap_or(UtcOffset::UTC))
}

/// `M/D/YYYY, h:mm:ss AM` in the given offset.
pub fn created_at_in(raw: Option<&str>, offset: UtcOffset) -> String {
    format_created_at(raw, |_| offset)
}

fn format_created_at(
    raw: Option<&str>,
    offset_at: impl Fn(OffsetDateTime) -> UtcOffset,
) -> String {
    let Some(raw) = raw else {
        return NOT_AVAILABLE.to_string();
    };
    let format = format_description!(
        "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period]"
    );
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|ts| ts.to_offset(offset_at(ts)).format(&format).ok())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_a_us_locale_string() {
        let s = created_at_in(Some("2024-01-01T00:00:00Z"), UtcOffset::UTC);
        assert_eq!(s, "1/1/2024, 12:00:00 AM");
        let s = created_at_in(Some("2024-11-23T15:04:05Z"), UtcOffset::UTC);
        assert_eq!(s, "11/23/2024, 3:04:05 PM");
    }

    #[test]
    fn absent_and_garbage_timestamps() {
        assert_eq!(created_at_in(None, UtcOffset::UTC), "N/A");
        assert_eq!(created_at_in(Some("yesterday"), UtcOffset::UTC), "Invalid Date");
    }

    #[test]
    fn lines_follow_key_order() {
        let mut attrs = BTreeMap::new();
        assert!(attribute_lines(&attrs).is_empty());
        attrs.insert("owner".to_string(), "lab".to_string());
        attrs.insert("env".to_string(), "prod".to_string());
        assert_eq!(attribute_lines(&attrs), vec!["env: prod", "owner: lab"]);
    }
}
