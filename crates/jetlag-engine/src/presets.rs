//! Fixed-offset timezone presets for input forms.
//!
//! Offsets are literal; a preset such as "Paris (CET)" does not follow
//! daylight saving time.

use serde::Serialize;

use crate::offset::extract_offset_hours;

/// A labelled fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimezonePreset {
    pub label: &'static str,
    /// `±HH:MM`, suitable for appending to a datetime string.
    pub offset: &'static str,
    pub city: &'static str,
}

impl TimezonePreset {
    pub fn offset_hours(&self) -> f64 {
        extract_offset_hours(self.offset)
    }
}

const fn preset(label: &'static str, offset: &'static str, city: &'static str) -> TimezonePreset {
    TimezonePreset {
        label,
        offset,
        city,
    }
}

/// Position of the UTC (London) preset in [`TIMEZONE_PRESETS`].
const UTC_PRESET_INDEX: usize = 22;

/// Presets ordered from UTC−12:00 to UTC+14:00.
pub static TIMEZONE_PRESETS: [TimezonePreset; 74] = [
    // UTC-12 to UTC-8
    preset("UTC-12:00 - Baker Island", "-12:00", "Baker Island"),
    preset("UTC-11:00 - American Samoa", "-11:00", "Pago Pago"),
    preset("UTC-10:00 - Hawaii (HST)", "-10:00", "Honolulu"),
    preset("UTC-09:30 - Marquesas Islands", "-09:30", "Marquesas"),
    preset("UTC-09:00 - Alaska (AKST)", "-09:00", "Anchorage"),
    preset("UTC-08:00 - Pacific (PST)", "-08:00", "Los Angeles"),
    preset("UTC-08:00 - Vancouver", "-08:00", "Vancouver"),
    // UTC-7 to UTC-4
    preset("UTC-07:00 - Mountain (MST)", "-07:00", "Denver"),
    preset("UTC-07:00 - Phoenix", "-07:00", "Phoenix"),
    preset("UTC-06:00 - Central (CST)", "-06:00", "Chicago"),
    preset("UTC-06:00 - Mexico City", "-06:00", "Mexico City"),
    preset("UTC-05:00 - Eastern (EST)", "-05:00", "New York"),
    preset("UTC-05:00 - Toronto", "-05:00", "Toronto"),
    preset("UTC-05:00 - Lima", "-05:00", "Lima"),
    preset("UTC-04:00 - Atlantic", "-04:00", "Halifax"),
    preset("UTC-04:00 - Santiago", "-04:00", "Santiago"),
    // UTC-3 to UTC-1
    preset("UTC-03:30 - Newfoundland", "-03:30", "St. John's"),
    preset("UTC-03:00 - Brazil (BRT)", "-03:00", "São Paulo"),
    preset("UTC-03:00 - Argentina", "-03:00", "Buenos Aires"),
    preset("UTC-02:00 - South Georgia", "-02:00", "South Georgia"),
    preset("UTC-01:00 - Azores", "-01:00", "Azores"),
    preset("UTC-01:00 - Cape Verde", "-01:00", "Praia"),
    // UTC+0 to UTC+3
    preset("UTC+00:00 - London (GMT)", "+00:00", "London"),
    preset("UTC+00:00 - Dublin", "+00:00", "Dublin"),
    preset("UTC+00:00 - Reykjavik", "+00:00", "Reykjavik"),
    preset("UTC+01:00 - Paris (CET)", "+01:00", "Paris"),
    preset("UTC+01:00 - Berlin", "+01:00", "Berlin"),
    preset("UTC+01:00 - Rome", "+01:00", "Rome"),
    preset("UTC+01:00 - Madrid", "+01:00", "Madrid"),
    preset("UTC+01:00 - Lagos", "+01:00", "Lagos"),
    preset("UTC+02:00 - Cairo (EET)", "+02:00", "Cairo"),
    preset("UTC+02:00 - Athens", "+02:00", "Athens"),
    preset("UTC+02:00 - Helsinki", "+02:00", "Helsinki"),
    preset("UTC+02:00 - Johannesburg", "+02:00", "Johannesburg"),
    preset("UTC+03:00 - Moscow (MSK)", "+03:00", "Moscow"),
    preset("UTC+03:00 - Istanbul", "+03:00", "Istanbul"),
    preset("UTC+03:00 - Nairobi", "+03:00", "Nairobi"),
    // UTC+3:30 to UTC+6
    preset("UTC+03:30 - Tehran", "+03:30", "Tehran"),
    preset("UTC+04:00 - Dubai (GST)", "+04:00", "Dubai"),
    preset("UTC+04:00 - Baku", "+04:00", "Baku"),
    preset("UTC+04:30 - Kabul", "+04:30", "Kabul"),
    preset("UTC+05:00 - Karachi (PKT)", "+05:00", "Karachi"),
    preset("UTC+05:00 - Tashkent", "+05:00", "Tashkent"),
    preset("UTC+05:30 - Mumbai (IST)", "+05:30", "Mumbai"),
    preset("UTC+05:30 - Delhi", "+05:30", "Delhi"),
    preset("UTC+05:30 - Colombo", "+05:30", "Colombo"),
    preset("UTC+05:45 - Kathmandu", "+05:45", "Kathmandu"),
    preset("UTC+06:00 - Dhaka (BST)", "+06:00", "Dhaka"),
    preset("UTC+06:00 - Almaty", "+06:00", "Almaty"),
    // UTC+6:30 to UTC+9
    preset("UTC+06:30 - Yangon", "+06:30", "Yangon"),
    preset("UTC+07:00 - Bangkok (ICT)", "+07:00", "Bangkok"),
    preset("UTC+07:00 - Jakarta", "+07:00", "Jakarta"),
    preset("UTC+07:00 - Ho Chi Minh City", "+07:00", "Ho Chi Minh"),
    preset("UTC+08:00 - Beijing (CST)", "+08:00", "Beijing"),
    preset("UTC+08:00 - Singapore", "+08:00", "Singapore"),
    preset("UTC+08:00 - Hong Kong", "+08:00", "Hong Kong"),
    preset("UTC+08:00 - Manila", "+08:00", "Manila"),
    preset("UTC+08:00 - Perth", "+08:00", "Perth"),
    preset("UTC+08:45 - Eucla", "+08:45", "Eucla"),
    preset("UTC+09:00 - Tokyo (JST)", "+09:00", "Tokyo"),
    preset("UTC+09:00 - Seoul", "+09:00", "Seoul"),
    // UTC+9:30 to UTC+12
    preset("UTC+09:30 - Adelaide", "+09:30", "Adelaide"),
    preset("UTC+09:30 - Darwin", "+09:30", "Darwin"),
    preset("UTC+10:00 - Sydney (AEST)", "+10:00", "Sydney"),
    preset("UTC+10:00 - Melbourne", "+10:00", "Melbourne"),
    preset("UTC+10:00 - Brisbane", "+10:00", "Brisbane"),
    preset("UTC+10:30 - Lord Howe Island", "+10:30", "Lord Howe"),
    preset("UTC+11:00 - Solomon Islands", "+11:00", "Honiara"),
    preset("UTC+11:00 - Nouméa", "+11:00", "Nouméa"),
    preset("UTC+12:00 - Auckland (NZST)", "+12:00", "Auckland"),
    preset("UTC+12:00 - Fiji", "+12:00", "Suva"),
    preset("UTC+12:45 - Chatham Islands", "+12:45", "Chatham"),
    preset("UTC+13:00 - Samoa", "+13:00", "Apia"),
    preset("UTC+14:00 - Line Islands", "+14:00", "Kiritimati"),
];

/// The first preset with `offset`, or the UTC (London) preset.
///
/// ```
/// use jetlag_engine::presets::find_preset;
///
/// assert_eq!(find_preset("+09:00").city, "Tokyo");
/// assert_eq!(find_preset("+99:00").city, "London");
/// ```
pub fn find_preset(offset: &str) -> &'static TimezonePreset {
    let offset = offset.trim();
    TIMEZONE_PRESETS
        .iter()
        .find(|p| p.offset == offset)
        .unwrap_or(&TIMEZONE_PRESETS[UTC_PRESET_INDEX])
}

/// Join form fields into the datetime string the planner expects.
///
/// ```
/// use jetlag_engine::presets::compose_datetime;
///
/// assert_eq!(
///     compose_datetime("2025-08-10", "14:00", "+09:00"),
///     "2025-08-10T14:00:00+09:00"
/// );
/// ```
pub fn compose_datetime(date: &str, time: &str, offset: &str) -> String {
    format!("{}T{}:00{}", date.trim(), time.trim(), offset.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_fallback_is_london() {
        let utc = &TIMEZONE_PRESETS[UTC_PRESET_INDEX];
        assert_eq!(utc.offset, "+00:00");
        assert_eq!(utc.city, "London");
    }

    #[test]
    fn test_presets_sorted_by_offset() {
        let hours: Vec<f64> = TIMEZONE_PRESETS.iter().map(|p| p.offset_hours()).collect();
        assert!(hours.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(hours.first(), Some(&-12.0));
        assert_eq!(hours.last(), Some(&14.0));
    }

    #[test]
    fn test_labels_match_offsets() {
        for p in TIMEZONE_PRESETS.iter() {
            assert!(
                p.label.starts_with(&format!("UTC{}", p.offset)),
                "label {:?} does not match offset {}",
                p.label,
                p.offset
            );
        }
    }

    #[test]
    fn test_find_first_match() {
        assert_eq!(find_preset("-05:00").city, "New York");
        assert_eq!(find_preset(" +05:45 ").city, "Kathmandu");
    }

    #[test]
    fn test_quarter_hour_offsets() {
        assert_eq!(find_preset("+12:45").offset_hours(), 12.75);
        assert_eq!(find_preset("-09:30").offset_hours(), -9.5);
    }
}
