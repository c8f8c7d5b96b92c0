//! Keyword and pattern rules applied to a physician note.
//!
//! Keyword rules take the case-folded note; pattern rules take the raw
//! note and match case-insensitively themselves. Keyword tables are
//! scanned in order and the first hit wins, so table order is precedence.

use regex::Regex;
use std::sync::OnceLock;

use crate::record::{AddOn, DeviceType, MaskType, UsageContext};

const UNKNOWN_PROVIDER: &str = "Unknown";

const DEVICE_KEYWORDS: &[(&str, DeviceType)] = &[
    ("cpap", DeviceType::Cpap),
    ("oxygen", DeviceType::OxygenTank),
    ("wheelchair", DeviceType::Wheelchair),
];

// "nasal pillow" must precede "nasal".
const MASK_KEYWORDS: &[(&str, MaskType)] = &[
    ("full face", MaskType::FullFace),
    ("nasal pillow", MaskType::NasalPillow),
    ("nasal", MaskType::Nasal),
];

const HUMIDIFIER_KEYWORD: &str = "humidifier";

/// Only this exact threshold is recognised; other AHI values yield no
/// qualifier.
const AHI_LITERAL: &str = "ahi > 20";
const AHI_LITERAL_VALUE: f64 = 20.0;

const SLEEP_KEYWORD: &str = "sleep";
const EXERTION_KEYWORD: &str = "exertion";

const ORDERED_BY_PREFIX: &str = "ordered by ";

/// Digits, optional fraction, optional single space, then "L".
static TANK_CAPACITY: OnceLock<Regex> = OnceLock::new();
static PROVIDER_MARKER: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn tank_capacity_pattern() -> &'static Regex {
    TANK_CAPACITY.get_or_init(|| {
        Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?) ?l")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn provider_marker_pattern() -> &'static Regex {
    PROVIDER_MARKER.get_or_init(|| {
        Regex::new(r"(?i)dr\.").expect("Static regex pattern is guaranteed to be valid")
    })
}

fn first_keyword<T: Copy>(lower: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, value)| value)
}

pub(super) fn classify_device(lower: &str) -> DeviceType {
    first_keyword(lower, DEVICE_KEYWORDS).unwrap_or_default()
}

pub(super) fn mask_type(lower: &str) -> MaskType {
    first_keyword(lower, MASK_KEYWORDS).unwrap_or_default()
}

pub(super) fn add_on(lower: &str) -> AddOn {
    if lower.contains(HUMIDIFIER_KEYWORD) {
        AddOn::Humidifier
    } else {
        AddOn::None
    }
}

pub(super) fn apnea_hypopnea_index(lower: &str) -> Option<f64> {
    lower.contains(AHI_LITERAL).then_some(AHI_LITERAL_VALUE)
}

pub(super) fn tank_capacity_liters(text: &str) -> Option<f64> {
    tank_capacity_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

pub(super) fn usage_context(lower: &str) -> UsageContext {
    match (
        lower.contains(SLEEP_KEYWORD),
        lower.contains(EXERTION_KEYWORD),
    ) {
        (true, true) => UsageContext::SleepAndExertion,
        (true, false) => UsageContext::Sleep,
        (false, true) => UsageContext::Exertion,
        (false, false) => UsageContext::None,
    }
}

/// Everything from the first "Dr." to the end of the note, minus trailing
/// periods and surrounding whitespace.
///
/// Notes naming more than one physician, or with sentences after the
/// name, are captured verbatim from the first marker onwards.
pub(super) fn ordering_provider(text: &str) -> String {
    let Some(marker) = provider_marker_pattern().find(text) else {
        return UNKNOWN_PROVIDER.to_string();
    };

    let rest = &text[marker.start()..];
    let rest = strip_prefix_ignore_ascii_case(rest, ORDERED_BY_PREFIX).unwrap_or(rest);
    rest.trim().trim_end_matches('.').trim().to_string()
}

fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}
